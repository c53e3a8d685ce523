//! Populate a whole sector.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use worldgen_core::{SectorGenerator, StarDensity, Traffic, Variant};

use crate::content::{Content, Format};

/// Roll up every hex of a sector
#[derive(Parser, Debug)]
pub struct SectorCommand {
    /// Sector name
    pub name: String,

    /// Rule set: basic, extended or second-survey
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Star density: rift, sparse, scattered, standard or dense
    #[arg(long)]
    pub density: Option<StarDensity>,

    /// Traffic level: backwater, standard, mature or cluster
    #[arg(long)]
    pub traffic: Option<Traffic>,

    /// Allegiance name or code given to every world
    #[arg(long)]
    pub allegiance: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tab)]
    pub format: Format,
}

impl SectorCommand {
    pub fn execute(self, content: &Content, out: &mut impl Write) -> Result<()> {
        let mut config = content.config.clone();
        if let Some(variant) = self.variant {
            config.variant = variant;
        }
        if let Some(density) = self.density {
            config.density = density;
        }
        if let Some(traffic) = self.traffic {
            config.traffic = traffic;
        }
        if let Some(allegiance) = self.allegiance {
            config.allegiance = allegiance;
        }
        config.seed = Some(content.seed(self.seed));

        let variant = config.variant;
        let sector = SectorGenerator::new(content.generator(), config)
            .populate(&self.name)
            .with_context(|| format!("Failed to populate {}", self.name))?;

        if self.format == Format::Tab {
            write!(out, "{}", sector.to_tab(variant))?;
            return Ok(());
        }
        content.write_worlds(sector.worlds(), self.format, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::builtin;

    fn run(args: &[&str]) -> String {
        let command =
            SectorCommand::try_parse_from(std::iter::once("sector").chain(args.iter().copied()))
                .unwrap();
        let mut out = Vec::new();
        command.execute(&builtin(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn tab_listing_of_a_known_sector() {
        let text = run(&["Spinward Marches", "--variant", "basic", "--density", "sparse"]);
        let mut lines = text.lines();
        assert_eq!(lines.next().map(|l| l.split('\t').count()), Some(8));
        let worlds: Vec<&str> = lines.collect();
        assert!(!worlds.is_empty());
        assert!(worlds.iter().all(|line| line.starts_with("Spin\t")));
    }

    #[test]
    fn seeded_runs_repeat() {
        let args = ["Reft", "--density", "rift", "--seed", "77"];
        assert_eq!(run(&args), run(&args));
    }

    #[test]
    fn json_is_an_array_of_worlds() {
        let json = run(&["Reft", "--density", "scattered", "--format", "json"]);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let worlds = value.as_array().unwrap();
        assert!(worlds.len() > 1);
        assert!(worlds.iter().all(|w| w["sector_abbrev"] == "Reft"));
    }
}
