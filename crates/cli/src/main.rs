//! `worldgen` command line entry point.
//!
//! Generates single mainworlds, whole sectors, or extends existing listing
//! lines. Worlds go to stdout; logs go to stderr and, when
//! `WORLDGEN_LOG_DIR` is set, to a log file.
mod commands;
mod config;
mod content;
mod logging;

use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{ExtendCommand, SectorCommand, WorldCommand};
use config::CliConfig;
use content::Content;

/// Traveller mainworld and sector generator
#[derive(Parser)]
#[command(name = "worldgen")]
#[command(version, long_about = None)]
struct Cli {
    /// Data directory with config.toml, sectors.ron and stellar.ron
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Generator configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one mainworld
    World(WorldCommand),

    /// Roll up every hex of a sector
    Sector(SectorCommand),

    /// Extend listing lines to Second Survey
    Extend(ExtendCommand),
}

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = CliConfig::from_env();
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if cli.config.is_some() {
        config.config_file = cli.config;
    }

    let _guard = logging::setup_logging(config.log_dir.as_deref())?;
    let content = Content::load(&config)?;

    let mut out = std::io::stdout().lock();
    match cli.command {
        Command::World(cmd) => cmd.execute(&content, &mut out)?,
        Command::Sector(cmd) => cmd.execute(&content, &mut out)?,
        Command::Extend(cmd) => cmd.execute(&content, &mut out)?,
    }
    out.flush()?;
    Ok(())
}
