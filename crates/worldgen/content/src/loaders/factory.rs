//! Content factory for building oracles from a data directory.

use std::path::{Path, PathBuf};

use worldgen_core::GeneratorConfig;

use crate::loaders::{
    ConfigLoader, LoadResult, SectorCatalog, SectorLoader, StellarLoader, StellarTable,
};

/// Loads reference data from a data directory, falling back to the bundled
/// data for any file the directory does not have.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// ├── sectors.ron
/// └── stellar.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load generator configuration from `config.toml`, or the default
    /// configuration when there is none.
    pub fn load_config(&self) -> LoadResult<GeneratorConfig> {
        let path = self.data_dir.join("config.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file; using defaults");
            return Ok(GeneratorConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load the sector catalogue from `sectors.ron`.
    pub fn load_sectors(&self) -> LoadResult<SectorCatalog> {
        let path = self.data_dir.join("sectors.ron");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no sector catalog; using bundled");
            return SectorCatalog::builtin();
        }
        SectorLoader::load(&path)
    }

    /// Load the stellar table from `stellar.ron`.
    pub fn load_stellar(&self) -> LoadResult<StellarTable> {
        let path = self.data_dir.join("stellar.ron");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no stellar table; using bundled");
            return StellarTable::builtin();
        }
        StellarLoader::load(&path)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use worldgen_core::{SectorOracle, StarDensity};

    #[test]
    fn empty_directory_uses_bundled_data() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.data_dir(), dir.path());
        assert_eq!(factory.load_config().unwrap(), GeneratorConfig::default());
        assert_eq!(factory.load_sectors().unwrap(), SectorCatalog::builtin().unwrap());
        assert_eq!(factory.load_stellar().unwrap(), StellarTable::builtin().unwrap());
    }

    #[test]
    fn directory_files_replace_bundled_data() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "density = \"rift\"\n").unwrap();
        std::fs::write(
            dir.path().join("sectors.ron"),
            r#"(sectors: [(name: "Foreven", abbreviation: "Fore")])"#,
        )
        .unwrap();

        let factory = ContentFactory::new(dir.path());
        assert_eq!(factory.load_config().unwrap().density, StarDensity::Rift);
        let sectors = factory.load_sectors().unwrap();
        assert_eq!(sectors.abbreviation("Foreven").as_deref(), Some("Fore"));
        assert_eq!(sectors.abbreviation("Spinward Marches"), None);
    }

    #[test]
    fn broken_files_are_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("stellar.ron"), "(stars: [").unwrap();
        assert!(ContentFactory::new(dir.path()).load_stellar().is_err());
    }
}
