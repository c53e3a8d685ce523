//! Stellar table loader.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use worldgen_core::{Star, StarKind, StellarDetail, StellarOracle, parse_stars};

use crate::loaders::{LoadResult, read_file};

const BUILTIN_STELLAR: &str = include_str!("../../data/stellar.ron");

/// Habitable zone and minimum orbit per star type, for RON files.
///
/// Keys are star listing text. A star with no exact entry falls back to its
/// class at decimal 0 or 5 ("G2 V" reads "G0 V", "K7 III" reads "K5 III"),
/// and any white dwarf to plain "D".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StellarTable {
    pub stars: HashMap<String, StellarDetail>,
}

impl StellarTable {
    /// The table bundled with this crate.
    pub fn builtin() -> LoadResult<Self> {
        StellarLoader::parse(BUILTIN_STELLAR)
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    fn banded(star: &Star) -> String {
        match star.kind {
            StarKind::Normal {
                class,
                decimal,
                luminosity,
            } => {
                let band = if decimal < 5 { 0 } else { 5 };
                format!("{class}{band} {luminosity}")
            }
            StarKind::WhiteDwarf { .. } => "D".to_owned(),
            StarKind::BrownDwarf => "BD".to_owned(),
        }
    }
}

impl StellarOracle for StellarTable {
    fn stellar_detail(&self, star: &str) -> Option<StellarDetail> {
        let text = star.trim();
        if let Some(detail) = self.stars.get(text) {
            return Some(*detail);
        }
        let parsed = parse_stars(text);
        let [star] = parsed.as_slice() else {
            return None;
        };
        self.stars.get(&Self::banded(star)).copied()
    }
}

/// Loader for stellar tables from RON files.
pub struct StellarLoader;

impl StellarLoader {
    pub fn load(path: &Path) -> LoadResult<StellarTable> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<StellarTable> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse stellar table RON: {}", e))
    }
}
