//! Per-variant generation rules.
//!
//! The world generator drives the pipeline; each [`Ruleset`] answers the
//! questions whose answers differ between rule sets. Rules receive dice as
//! `&mut dyn Dice` so a ruleset can be picked at runtime from a [`Variant`].
mod basic;
mod common;
mod extended;
mod second_survey;

pub use basic::BasicRules;
pub use common::{RawProfile, determine_starport, hydrographics_dm, tech_dm};
pub use extended::ExtendedRules;
pub use second_survey::SecondSurveyRules;

use super::bases::Bases;
use super::uwp::{Pbg, Starport, Uwp};
use super::variant::Variant;
use super::zone::TravelZone;
use crate::dice::Dice;

pub trait Ruleset: Send + Sync {
    fn variant(&self) -> Variant;

    /// Rolls size through tech level for a world with `starport`.
    fn roll_profile(&self, dice: &mut dyn Dice, starport: Starport) -> Uwp;

    /// Corrections applied once the whole profile is known.
    fn adjust_profile(&self, _uwp: &mut Uwp, _pbg: &mut Pbg, _allegiance: &str) {}

    /// Rolls population multiplier, belts and gas giants.
    ///
    /// `orbits_gas_giant` guarantees at least one gas giant where the rules
    /// know about satellite mainworlds.
    fn roll_pbg(&self, dice: &mut dyn Dice, orbits_gas_giant: bool) -> Pbg;

    fn roll_bases(&self, dice: &mut dyn Dice, starport: Starport, allegiance: &str) -> Bases;

    fn determine_zone(&self, dice: &mut dyn Dice, uwp: &Uwp, allegiance: &str) -> TravelZone;
}

/// The ruleset implementing `variant`.
pub fn ruleset(variant: Variant) -> &'static dyn Ruleset {
    match variant {
        Variant::Basic => &BasicRules,
        Variant::Extended => &ExtendedRules,
        Variant::SecondSurvey => &SecondSurveyRules,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn every_variant_has_its_ruleset() {
        for variant in Variant::iter() {
            assert_eq!(ruleset(variant).variant(), variant);
        }
    }
}
