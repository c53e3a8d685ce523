//! Sector catalogue loader.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use worldgen_core::{SectorOracle, Subsector, SubsectorIndex};

use crate::loaders::{LoadResult, read_file};

const BUILTIN_SECTORS: &str = include_str!("../../data/sectors.ron");

/// One sector of a catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorEntry {
    pub name: String,
    pub abbreviation: String,
    #[serde(default)]
    pub subsectors: BTreeMap<SubsectorIndex, Subsector>,
}

/// Sector catalogue structure for RON files.
///
/// Sector names match case-insensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectorCatalog {
    pub sectors: Vec<SectorEntry>,
}

impl SectorCatalog {
    /// The catalogue bundled with this crate.
    pub fn builtin() -> LoadResult<Self> {
        SectorLoader::parse(BUILTIN_SECTORS)
    }

    pub fn get(&self, sector: &str) -> Option<&SectorEntry> {
        self.sectors
            .iter()
            .find(|entry| entry.name.eq_ignore_ascii_case(sector.trim()))
    }

    pub fn len(&self) -> usize {
        self.sectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sectors.is_empty()
    }
}

impl SectorOracle for SectorCatalog {
    fn subsector(&self, sector: &str, index: SubsectorIndex) -> Option<Subsector> {
        self.get(sector)?.subsectors.get(&index).cloned()
    }

    fn abbreviation(&self, sector: &str) -> Option<String> {
        self.get(sector).map(|entry| entry.abbreviation.clone())
    }
}

/// Loader for sector catalogues from RON files.
pub struct SectorLoader;

impl SectorLoader {
    pub fn load(path: &Path) -> LoadResult<SectorCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<SectorCatalog> {
        ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse sector catalog RON: {}", e))
    }
}
