//! Sectors: a 32x40 grid of hexes split into 16 subsectors, and random
//! population of a whole sector.

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::config::GeneratorConfig;
use crate::dice::{Dice, PcgDice, compute_seed};
use crate::hex::{HexLoc, SECTOR_HEIGHT, SECTOR_WIDTH, Scale, SubsectorIndex};
use crate::oracle::Subsector;
use crate::world::{GenerationError, Variant, World, WorldGenerator, WorldRequest, header};

/// The worlds of one sector, keyed by hex.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Sector {
    name: String,
    abbreviation: String,
    subsectors: [Option<Subsector>; SubsectorIndex::COUNT],
    worlds: HashMap<HexLoc, World>,
}

impl Sector {
    pub fn new(name: impl Into<String>, abbreviation: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            abbreviation: abbreviation.into(),
            ..Self::default()
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Places `world` at its hex, returning the world it replaced.
    ///
    /// A world without a subsector name takes the name recorded for its
    /// subsector, if any.
    pub fn insert(&mut self, mut world: World) -> Option<World> {
        if world.subsector.is_empty() {
            if let Some(subsector) = self.subsector(world.subsector_index) {
                world.subsector = subsector.name.clone();
            }
        }
        self.worlds.insert(world.hex, world)
    }

    pub fn get(&self, hex: &HexLoc) -> Option<&World> {
        self.worlds.get(hex)
    }

    pub fn remove(&mut self, hex: &HexLoc) -> Option<World> {
        self.worlds.remove(hex)
    }

    pub fn len(&self) -> usize {
        self.worlds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.worlds.is_empty()
    }

    /// All worlds in listing order (see [`HexLoc::compare`]).
    pub fn worlds(&self) -> Vec<&World> {
        let mut worlds: Vec<&World> = self.worlds.values().collect();
        worlds.sort_by(|a, b| a.hex.partial_cmp(&b.hex).unwrap_or(core::cmp::Ordering::Equal));
        worlds
    }

    /// Worlds in subsector `index`, in listing order.
    pub fn subsector_worlds(&self, index: SubsectorIndex) -> Vec<&World> {
        self.worlds()
            .into_iter()
            .filter(|world| world.hex.index() == Some(index))
            .collect()
    }

    pub fn subsector(&self, index: SubsectorIndex) -> Option<&Subsector> {
        self.subsectors[index.as_index()].as_ref()
    }

    /// Records subsector metadata. Worlds already placed there without a
    /// subsector name take the new name.
    pub fn set_subsector(&mut self, index: SubsectorIndex, subsector: Subsector) {
        for world in self.worlds.values_mut() {
            if world.subsector_index == index && world.subsector.is_empty() {
                world.subsector = subsector.name.clone();
            }
        }
        self.subsectors[index.as_index()] = Some(subsector);
    }

    /// Header plus one `variant` listing line per world, newline terminated.
    pub fn to_tab(&self, variant: Variant) -> String {
        let mut out = header(variant);
        out.push('\n');
        for world in self.worlds() {
            out.push_str(&world.to_tab_line_as(variant));
            out.push('\n');
        }
        out
    }
}

/// Rolls up a whole sector, one independently seeded hex at a time.
pub struct SectorGenerator<'a> {
    generator: WorldGenerator<'a>,
    config: GeneratorConfig,
}

impl<'a> SectorGenerator<'a> {
    /// Name given to generated worlds.
    pub const PLACEHOLDER_NAME: &'static str = "????";

    pub fn new(generator: WorldGenerator<'a>, config: GeneratorConfig) -> Self {
        Self { generator, config }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generates every hex of sector `name`.
    ///
    /// Each hex gets dice seeded from the run seed and its coordinates, so a
    /// seeded run always produces the same sector. A hex holds a world when
    /// 1d100 falls at or under the density percentage.
    ///
    /// # Errors
    ///
    /// Only propagates generation errors, which a valid sector hex never
    /// produces.
    pub fn populate(&self, name: &str) -> Result<Sector, GenerationError> {
        let seed = self.seed();
        let threshold = self.config.density.percentage() as i32;

        let abbreviation = self
            .generator
            .env()
            .abbreviation(name)
            .unwrap_or_else(|_| crate::oracle::fallback_abbreviation(name));
        let mut sector = Sector::new(name, abbreviation);
        for index in SubsectorIndex::iter() {
            if let Ok(subsector) = self.generator.env().subsector(name, index) {
                sector.set_subsector(index, subsector);
            }
        }

        for x in 1..=SECTOR_WIDTH {
            for y in 1..=SECTOR_HEIGHT {
                let mut dice = PcgDice::new(compute_seed(seed, u32::from(x), u32::from(y), 0));
                if dice.die(100) > threshold {
                    continue;
                }
                let hex = HexLoc::new(x, y, Scale::Sector)?;
                let request = WorldRequest {
                    variant: self.config.variant,
                    name: Self::PLACEHOLDER_NAME.to_owned(),
                    hex: hex.to_string(),
                    sector: name.to_owned(),
                    allegiance: self.config.allegiance.clone(),
                    traffic: Some(self.config.traffic),
                };
                let world = self.generator.generate(&mut dice, &request)?;
                sector.insert(world);
            }
        }

        tracing::info!(
            sector = name,
            seed,
            density = %self.config.density,
            worlds = sector.len(),
            "populated sector"
        );
        Ok(sector)
    }

    fn seed(&self) -> u64 {
        match self.config.seed {
            Some(seed) => seed,
            #[cfg(feature = "std")]
            None => crate::dice::entropy_seed(),
            #[cfg(not(feature = "std"))]
            None => 0,
        }
    }
}
