use super::Ruleset;
use super::common::{RawProfile, hydrographics_dm};
use crate::dice::Dice;
use crate::world::bases::Bases;
use crate::world::uwp::{Pbg, Starport, Uwp};
use crate::world::variant::Variant;
use crate::world::zone::TravelZone;

/// Classic Traveller Book 3.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicRules;

impl BasicRules {
    pub const MAX_LAW: u8 = 15;
    pub const MAX_TECH: u8 = 15;

    /// The Book 3 profile roll, shared with the extended rules.
    pub(crate) fn roll_raw(dice: &mut dyn Dice, starport: Starport) -> RawProfile {
        let mut raw = RawProfile {
            size: dice.two_d6() - 2,
            ..RawProfile::default()
        };

        raw.atmosphere = dice.two_d6() - 7 + raw.size;
        if raw.atmosphere < 0 || raw.size == 0 {
            raw.atmosphere = 0;
        }

        raw.hydrographics = dice.two_d6() - 7 + raw.atmosphere + hydrographics_dm(raw.atmosphere);
        if raw.size == 0 {
            raw.hydrographics = 0;
        }
        raw.hydrographics = raw.hydrographics.clamp(0, 10);

        raw.population = dice.two_d6() - 2;
        raw.government = (dice.two_d6() - 7 + raw.population).clamp(0, 15);
        raw.law = (dice.two_d6() - 7 + raw.government).max(0);
        raw.roll_tech(dice, starport);
        raw
    }
}

impl Ruleset for BasicRules {
    fn variant(&self) -> Variant {
        Variant::Basic
    }

    fn roll_profile(&self, dice: &mut dyn Dice, starport: Starport) -> Uwp {
        Self::roll_raw(dice, starport).into_uwp(starport)
    }

    fn adjust_profile(&self, uwp: &mut Uwp, _pbg: &mut Pbg, _allegiance: &str) {
        uwp.law = uwp.law.min(Self::MAX_LAW);
        uwp.tech = uwp.tech.min(Self::MAX_TECH);
    }

    /// Only whether a gas giant is present.
    fn roll_pbg(&self, dice: &mut dyn Dice, _orbits_gas_giant: bool) -> Pbg {
        let gas_giants = u8::from(dice.two_d6() <= 9);
        Pbg::new(0, 0, gas_giants)
    }

    fn roll_bases(&self, dice: &mut dyn Dice, starport: Starport, _allegiance: &str) -> Bases {
        let mut bases = Bases::empty();
        let scout_dm = match starport {
            Starport::A => -3,
            Starport::B => -2,
            Starport::C => -1,
            Starport::E | Starport::X => return bases,
            _ => 0,
        };
        if matches!(starport, Starport::A | Starport::B) && dice.two_d6() >= 8 {
            bases |= Bases::NAVY;
        }
        if dice.two_d6() + scout_dm >= 7 {
            bases |= Bases::SCOUT;
        }
        bases
    }

    fn determine_zone(&self, _dice: &mut dyn Dice, _uwp: &Uwp, _allegiance: &str) -> TravelZone {
        TravelZone::Green
    }
}
