//! Extend existing listing lines to Second Survey.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use worldgen_core::World;

use crate::content::{Content, Format};

/// Extend Basic or Extended listing lines to Second Survey
///
/// Reads tab-separated lines from the argument, or from stdin when none is
/// given. Header lines are skipped.
#[derive(Parser, Debug)]
pub struct ExtendCommand {
    /// One listing line
    pub line: Option<String>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Tab)]
    pub format: Format,
}

impl ExtendCommand {
    pub fn execute(self, content: &Content, out: &mut impl Write) -> Result<()> {
        match &self.line {
            Some(line) => self.extend_lines([Ok(line.clone())], content, out),
            None => self.extend_lines(std::io::stdin().lock().lines(), content, out),
        }
    }

    fn extend_lines(
        &self,
        lines: impl IntoIterator<Item = std::io::Result<String>>,
        content: &Content,
        out: &mut impl Write,
    ) -> Result<()> {
        let generator = content.generator();
        let mut dice = content.dice(self.seed);
        let mut worlds = Vec::new();

        for (number, line) in lines.into_iter().enumerate() {
            let line = line.context("Failed to read input")?;
            if line.trim().is_empty() || line.starts_with("Sector\t") {
                continue;
            }
            let mut world = World::from_tab_line(&line)
                .with_context(|| format!("Line {}: not a listing line", number + 1))?;
            generator.extend(&mut dice, &mut world);
            worlds.push(world);
        }

        tracing::info!(worlds = worlds.len(), "extended to Second Survey");
        content.write_worlds(&worlds, self.format, out)
    }
}
