//! Generator configuration loader.

use std::path::Path;

use worldgen_core::GeneratorConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for generator configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load a [`GeneratorConfig`] from a TOML file.
    ///
    /// Missing keys take their defaults, so an empty file is a valid
    /// configuration.
    pub fn load(path: &Path) -> LoadResult<GeneratorConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> LoadResult<GeneratorConfig> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))
    }
}
