//! Multi-line, human readable description of a world.

use core::fmt;

use super::World;
use super::variant::Variant;
use crate::oracle::StellarOracle;
use crate::stellar::Star;

/// Display adapter returned by [`World::summary`].
pub struct Summary<'a> {
    world: &'a World,
    stellar: Option<&'a dyn StellarOracle>,
}

impl World {
    pub fn summary(&self) -> Summary<'_> {
        Summary {
            world: self,
            stellar: None,
        }
    }
}

impl<'a> Summary<'a> {
    /// Adds each star's habitable zone orbit to the star details.
    pub fn with_stellar(mut self, stellar: &'a dyn StellarOracle) -> Self {
        self.stellar = Some(stellar);
        self
    }

    fn location(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.world;
        writeln!(f, "Name: {}", w.name)?;
        writeln!(f, "Sector: {} {}", w.hex, w.sector)?;
        match w.hex.to_subsector() {
            Ok(local) => writeln!(f, "Subsector: {local} {} ({})", w.subsector, w.subsector_index)?,
            Err(_) => writeln!(f, "Subsector: {} ({})", w.subsector, w.subsector_index)?,
        }
        writeln!(f)?;
        writeln!(f, "UWP: {} ({} starport)", w.uwp, w.uwp.starport.description())?;
        writeln!(f, "Bases: {}", w.bases)?;
        writeln!(f, "Zone: {}", w.zone.desc())?;
        writeln!(f, "Allegiance: {}", w.allegiance)?;
        writeln!(f)
    }

    fn system(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.world;
        if w.variant == Variant::Basic {
            let present = if w.pbg.gas_giants == 0 { "not present" } else { "present" };
            writeln!(f, "Gas Giant(s): {present}")?;
        } else {
            writeln!(f, "Population Mult: {}", w.pbg.population_multiplier)?;
            writeln!(f, "Planetoid Belts: {}", w.pbg.belts)?;
            writeln!(f, "Gas Giants: {}", w.pbg.gas_giants)?;
        }
        writeln!(f)?;
        writeln!(f, "Trade Classifications:")?;
        for code in w.trade_codes.iter() {
            writeln!(f, "  {code} ({})", code.description())?;
        }
        Ok(())
    }

    fn stars(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.world;
        let Some(primary) = w.stars.primary() else {
            return writeln!(f, "No stars detailed.");
        };
        writeln!(f, "Homestar: {primary} ({})", primary.description())?;
        match w.orbit {
            Some(orbit) => writeln!(f, "Mainworld Orbit: {orbit}")?,
            None => writeln!(f, "Mainworld Orbit: unknown")?,
        }
        writeln!(f, "Mainworld Type: {}", w.mainworld_type)?;
        if let Some(satellite) = w.satellite {
            let host = if satellite.around_gas_giant { "Gas Giant" } else { "Big Planet" };
            writeln!(
                f,
                "  Orbits {host} in: {} ({} diameters)",
                satellite.orbit,
                satellite.orbit.multiplier()
            )?;
        }

        writeln!(f, "Star Details:")?;
        for (i, star) in w.stars.iter().enumerate() {
            write!(f, "{}. {star}.", i + 1)?;
            match star.orbit {
                Some(orbit) if i > 0 => write!(f, " Orb: {orbit}.")?,
                _ => write!(f, " (Prim.)")?,
            }
            if let Some(hz) = self.habitable_zone(star) {
                write!(f, " HZ: {hz}.")?;
            }
            if let Some(companion) = &star.companion {
                write!(f, "\n   Comp.: {companion}")?;
            }
            writeln!(f)?;
        }
        writeln!(f)
    }

    fn habitable_zone(&self, star: &Star) -> Option<i32> {
        self.stellar?
            .stellar_detail(&star.to_string())
            .map(|detail| detail.habitable_zone)
    }

    fn extensions(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let w = self.world;
        let ex = &w.extensions.economic;
        let cx = &w.extensions.cultural;
        writeln!(f, "Importance: {}", w.extensions.importance)?;
        writeln!(f, "Economics: {ex}")?;
        writeln!(f, "  Resources: {}", ex.resource)?;
        writeln!(f, "  Labour: {}", ex.labour)?;
        writeln!(f, "  Infrastructure: {}", ex.infrastructure)?;
        writeln!(f, "  Efficiency: {:+}", ex.efficiency)?;
        writeln!(f, "Cultural: {cx}")?;
        writeln!(f, "  Homogeneity: {}", cx.homogeneity)?;
        writeln!(f, "  Acceptance: {}", cx.acceptance)?;
        writeln!(f, "  Strangeness: {}", cx.strangeness)?;
        writeln!(f, "  Symbols: {}", cx.symbols)?;
        if !w.nobility.is_empty() {
            writeln!(f, "Nobility: {}", w.nobility)?;
        }
        writeln!(f, "Worlds: {}", w.worlds)?;
        writeln!(f, "Resource Units: {}", w.resource_units)
    }
}

impl fmt::Display for Summary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.location(f)?;
        self.system(f)?;
        if self.world.is_second_survey() {
            writeln!(f)?;
            self.stars(f)?;
            self.extensions(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::PcgDice;
    use crate::oracle::StellarDetail;
    use crate::world::{WorldGenerator, WorldRequest};

    struct Orbit3;

    impl StellarOracle for Orbit3 {
        fn stellar_detail(&self, _star: &str) -> Option<StellarDetail> {
            Some(StellarDetail::new(3, 0))
        }
    }

    fn world(variant: Variant) -> World {
        let request = WorldRequest::new(variant, "Regina", "1910", "Spinward Marches");
        WorldGenerator::default()
            .generate(&mut PcgDice::new(21), &request)
            .unwrap()
    }

    #[test]
    fn basic_summary_mentions_gas_giants_only() {
        let text = world(Variant::Basic).summary().to_string();
        assert!(text.starts_with("Name: Regina\nSector: 1910 Spinward Marches\nSubsector: 0310  (C)\n"));
        assert!(text.contains("Gas Giant(s): "));
        assert!(!text.contains("Population Mult"));
        assert!(!text.contains("Importance"));
    }

    #[test]
    fn survey_summary_lists_stars_and_extensions() {
        let world = world(Variant::SecondSurvey);
        let text = world.summary().with_stellar(&Orbit3).to_string();
        assert!(text.contains("Population Mult: "));
        assert!(text.contains(&format!("Homestar: {}", world.stars.primary().unwrap())));
        assert!(text.contains("1. "));
        assert!(text.contains(" HZ: 3."));
        assert!(text.contains(&format!("Importance: {}", world.extensions.importance)));
        assert!(text.contains(&format!("Resource Units: {}", world.resource_units)));
    }
}
