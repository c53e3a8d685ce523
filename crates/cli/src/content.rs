//! Reference data and settings shared by every command.
use std::io::Write;

use anyhow::{Context, Result};
use clap::ValueEnum;
use worldgen_content::{ConfigLoader, ContentFactory, SectorCatalog, StellarTable};
use worldgen_core::dice::entropy_seed;
use worldgen_core::{Env, GeneratorConfig, PcgDice, World, WorldGenerator, header};

use crate::config::CliConfig;

/// How worlds are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Tab-separated listing with a header line
    #[default]
    Tab,
    /// Human readable description
    Summary,
    /// JSON documents
    Json,
}

pub struct Content {
    pub config: GeneratorConfig,
    pub sectors: SectorCatalog,
    pub stellar: StellarTable,
}

impl Content {
    /// Loads configuration and oracles. An explicit configuration file wins
    /// over `config.toml` in the data directory, and `WORLDGEN_SEED` over
    /// either.
    pub fn load(cli: &CliConfig) -> Result<Self> {
        let factory = ContentFactory::new(&cli.data_dir);
        let mut config = match &cli.config_file {
            Some(path) => ConfigLoader::load(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?,
            None => factory.load_config()?,
        };
        if cli.seed.is_some() {
            config.seed = cli.seed;
        }

        let sectors = factory.load_sectors()?;
        let stellar = factory.load_stellar()?;
        tracing::debug!(
            data_dir = %factory.data_dir().display(),
            sectors = sectors.len(),
            stars = stellar.len(),
            "content loaded"
        );

        Ok(Self {
            config,
            sectors,
            stellar,
        })
    }

    pub fn generator(&self) -> WorldGenerator<'_> {
        WorldGenerator::new(Env::with_all(&self.sectors, &self.stellar).into_world_env())
    }

    /// The seed for this run: the command line, then configuration, then the
    /// clock. Logged so any run can be repeated.
    pub fn seed(&self, requested: Option<u64>) -> u64 {
        let seed = requested
            .or(self.config.seed)
            .unwrap_or_else(entropy_seed);
        tracing::info!(seed, "rolling dice");
        seed
    }

    pub fn dice(&self, requested: Option<u64>) -> PcgDice {
        PcgDice::new(self.seed(requested))
    }

    /// Writes `worlds` in `format`. Tab output starts with the header of the
    /// first world's variant.
    pub fn write_worlds<'w>(
        &self,
        worlds: impl IntoIterator<Item = &'w World>,
        format: Format,
        out: &mut impl Write,
    ) -> Result<()> {
        let worlds: Vec<&World> = worlds.into_iter().collect();
        match format {
            Format::Tab => {
                let Some(first) = worlds.first() else {
                    return Ok(());
                };
                writeln!(out, "{}", header(first.variant))?;
                for world in &worlds {
                    writeln!(out, "{}", world.to_tab_line_as(first.variant))?;
                }
            }
            Format::Summary => {
                for (i, world) in worlds.iter().enumerate() {
                    if i > 0 {
                        writeln!(out)?;
                    }
                    write!(out, "{}", world.summary().with_stellar(&self.stellar))?;
                }
            }
            Format::Json => {
                let json = match worlds.as_slice() {
                    [world] => serde_json::to_string_pretty(world)?,
                    _ => serde_json::to_string_pretty(&worlds)?,
                };
                writeln!(out, "{json}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn builtin() -> Content {
        Content {
            config: GeneratorConfig::default().with_seed(1105),
            sectors: SectorCatalog::builtin().unwrap(),
            stellar: StellarTable::builtin().unwrap(),
        }
    }

    #[test]
    fn requested_seed_wins() {
        let content = builtin();
        assert_eq!(content.seed(Some(7)), 7);
        assert_eq!(content.seed(None), 1105);
    }

    #[test]
    fn loads_from_data_dir_with_env_seed() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.toml"), "variant = \"basic\"\nseed = 3\n").unwrap();
        let cli = CliConfig {
            data_dir: dir.path().to_path_buf(),
            seed: Some(9),
            ..CliConfig::default()
        };
        let content = Content::load(&cli).unwrap();
        assert_eq!(content.config.variant, worldgen_core::Variant::Basic);
        assert_eq!(content.config.seed, Some(9));
        assert!(!content.sectors.is_empty());
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let cli = CliConfig {
            data_dir: dir.path().to_path_buf(),
            config_file: Some(dir.path().join("absent.toml")),
            ..CliConfig::default()
        };
        assert!(Content::load(&cli).is_err());
    }
}
