//! Command line configuration from environment variables.
use std::env;
use std::path::PathBuf;

const APPLICATION: &str = "worldgen";

/// Settings read from the environment (and `.env`).
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    /// Directory holding `config.toml`, `sectors.ron` and `stellar.ron`.
    pub data_dir: PathBuf,
    pub seed: Option<u64>,
    /// When set, logs are also written to `worldgen.log` in this directory.
    pub log_dir: Option<PathBuf>,
    /// Generator configuration file, overriding `data_dir/config.toml`.
    pub config_file: Option<PathBuf>,
}

impl CliConfig {
    /// Construct configuration from environment variables.
    ///
    /// Environment variables:
    /// - `WORLDGEN_DATA_DIR` - Data directory (default: platform data dir)
    /// - `WORLDGEN_SEED` - Fixed seed for reproducible output
    /// - `WORLDGEN_LOG_DIR` - Directory for a log file (default: none)
    /// - `WORLDGEN_CONFIG` - Generator configuration TOML file
    pub fn from_env() -> Self {
        Self {
            data_dir: read_env("WORLDGEN_DATA_DIR").unwrap_or_else(default_data_dir),
            seed: read_env("WORLDGEN_SEED"),
            log_dir: read_env("WORLDGEN_LOG_DIR"),
            config_file: read_env("WORLDGEN_CONFIG"),
        }
    }
}

/// Platform data directory, e.g. `~/.local/share/worldgen` on Linux.
pub fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APPLICATION)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./data"))
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    let value = env::var(key).ok()?;
    match value.parse() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            tracing::warn!(key, value, "ignoring unreadable environment variable");
            None
        }
    }
}
