//! Generate a single mainworld.

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use worldgen_core::{Traffic, Variant, WorldRequest};

use crate::content::{Content, Format};

/// Generate one mainworld
#[derive(Parser, Debug)]
pub struct WorldCommand {
    /// World name
    pub name: String,

    /// Sector hex, e.g. 1910
    pub hex: String,

    /// Sector name, e.g. "Spinward Marches"
    pub sector: String,

    /// Rule set: basic, extended or second-survey
    #[arg(long)]
    pub variant: Option<Variant>,

    /// Allegiance name or code
    #[arg(long)]
    pub allegiance: Option<String>,

    /// Traffic level: backwater, standard, mature or cluster
    #[arg(long)]
    pub traffic: Option<Traffic>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tab)]
    pub format: Format,
}

impl WorldCommand {
    pub fn execute(self, content: &Content, out: &mut impl Write) -> Result<()> {
        let config = &content.config;
        let request = WorldRequest::new(
            self.variant.unwrap_or(config.variant),
            self.name,
            self.hex,
            self.sector,
        )
        .with_allegiance(self.allegiance.unwrap_or_else(|| config.allegiance.clone()))
        .with_traffic(self.traffic.unwrap_or(config.traffic));

        let mut dice = content.dice(self.seed);
        let world = content
            .generator()
            .generate(&mut dice, &request)
            .with_context(|| format!("Failed to generate {} at {}", request.name, request.hex))?;

        content.write_worlds([&world], self.format, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::tests::builtin;

    fn run(args: &[&str]) -> Result<String> {
        let command =
            WorldCommand::try_parse_from(std::iter::once("world").chain(args.iter().copied()))?;
        let mut out = Vec::new();
        command.execute(&builtin(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    #[test]
    fn tab_output_uses_catalog_names() {
        let text = run(&["Regina", "1910", "Spinward Marches", "--variant", "extended"]).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].split('\t').count(), 10);
        assert!(lines[1].starts_with("Spin\tC\t1910\tRegina\t"));
    }

    #[test]
    fn same_seed_same_world() {
        let args = ["Regina", "1910", "Spinward Marches", "--seed", "42"];
        assert_eq!(run(&args).unwrap(), run(&args).unwrap());
    }

    #[test]
    fn summary_and_json_formats() {
        let summary = run(&["Regina", "1910", "Spinward Marches", "--format", "summary"]).unwrap();
        assert!(summary.starts_with("Name: Regina\n"));
        assert!(summary.contains("Subsector: 0310 Regina (C)"));
        assert!(summary.contains(" HZ: "));

        let json = run(&["Regina", "1910", "Spinward Marches", "--format", "json"]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "Regina");
        assert_eq!(value["sector_abbrev"], "Spin");
    }

    #[test]
    fn bad_hex_is_an_error() {
        let error = run(&["Nowhere", "3341", "Spinward Marches"]).unwrap_err();
        assert!(error.to_string().contains("Failed to generate Nowhere at 3341"));
    }
}
