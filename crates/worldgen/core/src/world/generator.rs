//! The world generation pipeline.
//!
//! [`WorldGenerator`] walks a request through the stages shared by every
//! variant and asks the variant's [`Ruleset`](super::Ruleset) wherever the
//! rules differ. Reference data (sector names, orbit tables) comes from the
//! oracles in its [`WorldEnv`]; a missing entry is logged and leaves the
//! corresponding field blank.

use super::classification::{ClassifyInput, classify};
use super::extensions::{
    Extensions, determine_cultural, determine_economic, determine_importance, nobility,
};
use super::rules::{determine_starport, ruleset};
use super::uwp::Pbg;
use super::variant::Variant;
use super::{GenerationError, Satellite, World, WorldRequest};
use crate::dice::Dice;
use crate::hex::{HexLoc, Scale};
use crate::oracle::{WorldEnv, fallback_abbreviation};
use crate::stellar::{
    MainworldType, Star, determine_habitable_zone_variance, determine_mainworld_type,
    determine_satellite_orbit, determine_star, generate_system_stars,
};

/// Generates mainworlds against a set of oracles.
#[derive(Clone, Copy)]
pub struct WorldGenerator<'a> {
    env: WorldEnv<'a>,
}

impl<'a> WorldGenerator<'a> {
    pub fn new(env: WorldEnv<'a>) -> Self {
        Self { env }
    }

    /// A generator with no reference data. Subsector names stay blank and
    /// orbits unknown.
    pub fn without_oracles() -> Self {
        Self::new(WorldEnv::empty())
    }

    pub fn env(&self) -> WorldEnv<'a> {
        self.env
    }

    /// Generates one mainworld.
    ///
    /// # Errors
    ///
    /// Returns [`GenerationError::InvalidHex`] if `request.hex` is not a
    /// sector location. Nothing is rolled in that case.
    pub fn generate<D: Dice>(
        &self,
        dice: &mut D,
        request: &WorldRequest,
    ) -> Result<World, GenerationError> {
        self.run(dice, request)
    }

    fn run(&self, dice: &mut dyn Dice, request: &WorldRequest) -> Result<World, GenerationError> {
        let hex = HexLoc::parse(&request.hex, Scale::Sector)?;
        let rules = ruleset(request.variant);

        let mut world = World::new(request.variant, request.name.clone(), hex)?;
        world.sector = request.sector.clone();
        world.allegiance = request.allegiance_code();
        self.locate(&mut world);

        let starport = determine_starport(dice, request.traffic.unwrap_or_default());

        let mut survey_pbg = None;
        if request.variant == Variant::SecondSurvey {
            let spectral_flux = dice.flux(0);
            let size_flux = dice.flux(0);
            let primary = determine_star(dice, 0, spectral_flux, size_flux, true);
            self.place_mainworld(dice, &mut world, &primary);

            let orbits_gas_giant = world.satellite.is_some_and(|sat| sat.around_gas_giant);
            survey_pbg = Some(rules.roll_pbg(dice, orbits_gas_giant));
            world.stars = generate_system_stars(dice, primary, spectral_flux, size_flux);
        }

        world.uwp = rules.roll_profile(dice, starport);
        // Adjustments roll nothing, so the Basic and Extended PBG can be rolled first.
        world.pbg = match survey_pbg {
            Some(pbg) => pbg,
            None => rules.roll_pbg(dice, false),
        };
        rules.adjust_profile(&mut world.uwp, &mut world.pbg, &world.allegiance);
        tracing::debug!(uwp = %world.uwp, pbg = %world.pbg, "rolled profile");

        world.bases = rules.roll_bases(dice, world.uwp.starport, &world.allegiance);
        world.trade_codes = Self::classify(&world);

        if request.variant == Variant::SecondSurvey {
            Self::survey_extensions(dice, &mut world);
        }

        world.zone = rules.determine_zone(dice, &world.uwp, &world.allegiance);
        tracing::debug!(
            name = %world.name,
            hex = %world.hex,
            variant = %world.variant,
            zone = ?world.zone,
            "generated world"
        );
        Ok(world)
    }

    /// Converts a Basic or Extended world to Second Survey.
    ///
    /// Stars are only rolled when the world has none. The habitable zone
    /// placement, mainworld type, trade codes, world count and extensions are
    /// recomputed; identity, profile, PBG, bases and zone are kept.
    pub fn extend<D: Dice>(&self, dice: &mut D, world: &mut World) {
        self.extend_dyn(dice, world);
    }

    fn extend_dyn(&self, dice: &mut dyn Dice, world: &mut World) {
        world.variant = Variant::SecondSurvey;

        if world.stars.is_empty() {
            let spectral_flux = dice.flux(0);
            let size_flux = dice.flux(0);
            let primary = determine_star(dice, 0, spectral_flux, size_flux, true);
            world.stars = generate_system_stars(dice, primary, spectral_flux, size_flux);
        }

        if let Some(primary) = world.stars.primary().cloned() {
            self.place_mainworld(dice, world, &primary);
        }
        world.trade_codes = Self::classify(world);
        Self::survey_extensions(dice, world);
        tracing::debug!(name = %world.name, hex = %world.hex, "extended world");
    }

    fn locate(&self, world: &mut World) {
        match self.env.abbreviation(&world.sector) {
            Ok(abbrev) => world.sector_abbrev = abbrev,
            Err(error) => {
                tracing::warn!(sector = %world.sector, %error, "no sector abbreviation; using its name");
                world.sector_abbrev = fallback_abbreviation(&world.sector);
            }
        }
        match self.env.subsector(&world.sector, world.subsector_index) {
            Ok(subsector) => world.subsector = subsector.name,
            Err(error) => {
                tracing::warn!(sector = %world.sector, index = %world.subsector_index, %error, "subsector name unknown");
                world.subsector.clear();
            }
        }
    }

    /// Habitable zone variance, orbit, mainworld type and satellite orbit.
    fn place_mainworld(&self, dice: &mut dyn Dice, world: &mut World, primary: &Star) {
        let variance = determine_habitable_zone_variance(dice, primary);
        let star = primary.to_string();
        match self.env.stellar_detail(&star) {
            Ok(detail) => {
                let (orbit, variance) = detail.place(variance);
                world.orbit = Some(orbit);
                world.hz_variance = variance;
            }
            Err(error) => {
                tracing::warn!(%star, %error, "no stellar data; mainworld orbit unknown");
                world.orbit = None;
                world.hz_variance = variance;
            }
        }

        world.mainworld_type = determine_mainworld_type(dice);
        world.satellite = if world.mainworld_type.is_satellite() {
            let around_gas_giant = dice.flux(0) <= 0;
            let close = world.mainworld_type == MainworldType::CloseSatellite;
            Some(Satellite {
                orbit: determine_satellite_orbit(dice, around_gas_giant, close),
                around_gas_giant,
            })
        } else {
            None
        };
        tracing::debug!(
            primary = %star,
            orbit = ?world.orbit,
            hz_variance = world.hz_variance,
            mainworld = %world.mainworld_type,
            "placed mainworld"
        );
    }

    fn classify(world: &World) -> super::TradeCodes {
        classify(
            world.variant,
            &ClassifyInput {
                uwp: &world.uwp,
                allegiance: &world.allegiance,
                hz_variance: world.hz_variance,
                mainworld_type: world.mainworld_type,
            },
        )
    }

    /// Importance, economics, culture, nobility and world count.
    fn survey_extensions(dice: &mut dyn Dice, world: &mut World) {
        let importance = determine_importance(&world.uwp, &world.trade_codes, world.bases);
        let economic = determine_economic(dice, &world.uwp, &world.pbg, &world.trade_codes, importance);
        let cultural = determine_cultural(dice, &world.uwp, importance);
        world.extensions = Extensions {
            importance,
            economic,
            cultural,
        };
        world.nobility = nobility(&world.allegiance, &world.trade_codes, importance);
        world.worlds = count_worlds(dice, &world.pbg);
        world.resource_units = economic.resource_units();
    }
}

impl Default for WorldGenerator<'_> {
    fn default() -> Self {
        Self::without_oracles()
    }
}

fn count_worlds(dice: &mut dyn Dice, pbg: &Pbg) -> u32 {
    let roll = dice.two_d6() as u32;
    1 + u32::from(pbg.gas_giants) + u32::from(pbg.belts) + roll
}
