use super::Ruleset;
use super::basic::BasicRules;
use crate::allegiance;
use crate::dice::Dice;
use crate::world::bases::Bases;
use crate::world::uwp::{Pbg, Starport, Uwp};
use crate::world::variant::Variant;
use crate::world::zone::TravelZone;

/// MegaTraveller basic world generation.
///
/// Rolls the same profile as [`BasicRules`] and then applies its own limits.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExtendedRules;

impl ExtendedRules {
    pub const MAX_LAW: u8 = 20;
    pub const MAX_TECH: u8 = 15;
}

impl Ruleset for ExtendedRules {
    fn variant(&self) -> Variant {
        Variant::Extended
    }

    fn roll_profile(&self, dice: &mut dyn Dice, starport: Starport) -> Uwp {
        BasicRules::roll_raw(dice, starport).into_uwp(starport)
    }

    fn adjust_profile(&self, uwp: &mut Uwp, _pbg: &mut Pbg, _allegiance: &str) {
        uwp.law = uwp.law.min(Self::MAX_LAW);
        let mut tech = i32::from(uwp.tech);
        if matches!(uwp.government, 14 | 15) {
            tech -= 1;
        }
        if uwp.starport == Starport::F {
            tech += 1;
        }
        uwp.tech = tech.clamp(0, i32::from(Self::MAX_TECH)) as u8;
    }

    fn roll_pbg(&self, dice: &mut dyn Dice, _orbits_gas_giant: bool) -> Pbg {
        let population_multiplier = dice.die(9) as u8;

        let mut gas_giants = 0;
        if dice.two_d6() >= 5 {
            gas_giants = match dice.two_d6() {
                2 | 3 => 1,
                4 | 5 => 2,
                6 | 7 => 3,
                8..=10 => 4,
                _ => 5,
            };
        }

        let mut belts = 0;
        if dice.two_d6() + i32::from(gas_giants) >= 8 {
            belts = match dice.two_d6() {
                2..=7 => 1,
                _ => 2,
            };
        }

        Pbg::new(population_multiplier, belts, gas_giants)
    }

    fn roll_bases(&self, dice: &mut dyn Dice, starport: Starport, allegiance: &str) -> Bases {
        let mut bases = Bases::empty();
        if matches!(starport, Starport::E | Starport::X) {
            return bases;
        }

        if !allegiance::is_imperial(allegiance) {
            let roll = dice.two_d6();
            let military = match starport {
                Starport::A => roll >= 10,
                Starport::B => roll >= 9,
                Starport::C => roll >= 8,
                _ => false,
            };
            if military {
                bases |= Bases::MILITARY;
            }
            return bases;
        }

        // (navy target, scout target)
        let targets = match starport {
            Starport::A => (Some(8), 10),
            Starport::B => (Some(8), 9),
            Starport::C => (None, 8),
            Starport::D => (None, 7),
            _ => return bases,
        };
        if let Some(navy) = targets.0 {
            if dice.two_d6() >= navy {
                bases |= Bases::NAVY;
            }
        }
        if dice.two_d6() >= targets.1 {
            bases |= Bases::SCOUT;
        }
        bases
    }

    fn determine_zone(&self, _dice: &mut dyn Dice, uwp: &Uwp, _allegiance: &str) -> TravelZone {
        if uwp.starport == Starport::X {
            return TravelZone::Red;
        }
        let law = uwp.law;
        match uwp.government {
            10 if law == 20 => TravelZone::Amber,
            11 if law >= 19 => TravelZone::Amber,
            12 if law >= 18 => TravelZone::Amber,
            13 if law == 20 => TravelZone::Red,
            13 if (17..=19).contains(&law) => TravelZone::Amber,
            14 if law >= 19 => TravelZone::Red,
            14 if (17..=18).contains(&law) => TravelZone::Amber,
            15 if law >= 18 => TravelZone::Red,
            15 if (16..=17).contains(&law) => TravelZone::Amber,
            _ => TravelZone::Green,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::PcgDice;
    use crate::dice::scripted::ScriptedDice;
    use crate::world::rules::determine_starport;

    #[test]
    fn adjusted_profiles_respect_limits() {
        let mut dice = PcgDice::new(2024);
        for _ in 0..10_000 {
            let port = determine_starport(&mut dice, Default::default());
            let mut uwp = ExtendedRules.roll_profile(&mut dice, port);
            ExtendedRules.adjust_profile(&mut uwp, &mut Pbg::default(), "Im");
            assert!(uwp.atmosphere <= 15);
            assert!(uwp.hydrographics <= 10);
            assert!(uwp.law <= 20);
            assert!(uwp.tech <= 15);
        }
    }

    #[test]
    fn tech_adjustments() {
        let mut uwp = Uwp::new(Starport::C, 5, 5, 5, 9, 14, 12, 0);
        ExtendedRules.adjust_profile(&mut uwp, &mut Pbg::default(), "Im");
        assert_eq!(uwp.tech, 0);

        let mut uwp = Uwp::new(Starport::F, 5, 5, 5, 9, 9, 22, 15);
        ExtendedRules.adjust_profile(&mut uwp, &mut Pbg::default(), "Im");
        assert_eq!((uwp.law, uwp.tech), (20, 15));
    }

    #[test]
    fn zone_table() {
        let zone = |port, gov, law| {
            let uwp = Uwp::new(port, 5, 5, 5, 5, gov, law, 5);
            ExtendedRules.determine_zone(&mut ScriptedDice::new(&[]), &uwp, "Im")
        };
        assert_eq!(zone(Starport::X, 0, 0), TravelZone::Red);
        assert_eq!(zone(Starport::A, 10, 20), TravelZone::Amber);
        assert_eq!(zone(Starport::A, 10, 19), TravelZone::Green);
        assert_eq!(zone(Starport::A, 13, 18), TravelZone::Amber);
        assert_eq!(zone(Starport::A, 13, 20), TravelZone::Red);
        assert_eq!(zone(Starport::A, 14, 17), TravelZone::Amber);
        assert_eq!(zone(Starport::A, 14, 19), TravelZone::Red);
        assert_eq!(zone(Starport::A, 15, 16), TravelZone::Amber);
        assert_eq!(zone(Starport::A, 15, 18), TravelZone::Red);
        assert_eq!(zone(Starport::A, 15, 15), TravelZone::Green);
    }

    #[test]
    fn non_imperial_worlds_get_military_bases() {
        let mut dice = ScriptedDice::new(&[5, 5]);
        assert_eq!(
            ExtendedRules.roll_bases(&mut dice, Starport::A, "Zh"),
            Bases::MILITARY
        );
        let mut dice = ScriptedDice::new(&[4, 5]);
        assert_eq!(ExtendedRules.roll_bases(&mut dice, Starport::A, "Zh"), Bases::empty());
    }

    #[test]
    fn imperial_bases() {
        let mut dice = ScriptedDice::new(&[4, 4, 5, 5]);
        assert_eq!(
            ExtendedRules.roll_bases(&mut dice, Starport::A, "Im"),
            Bases::NAVY | Bases::SCOUT
        );
        let mut dice = ScriptedDice::new(&[3, 4]);
        assert_eq!(ExtendedRules.roll_bases(&mut dice, Starport::D, "Im"), Bases::SCOUT);
    }

    #[test]
    fn pbg_tables() {
        // multiplier 4; GG gate 6 >= 5, table 7 -> 3; belts gate 5+3 >= 8, table 9 -> 2
        let mut dice = ScriptedDice::new(&[4, 3, 3, 3, 4, 2, 3, 4, 5]);
        assert_eq!(ExtendedRules.roll_pbg(&mut dice, false), Pbg::new(4, 2, 3));
        // no gas giants, belts gate fails
        let mut dice = ScriptedDice::new(&[9, 1, 2, 3, 3]);
        assert_eq!(ExtendedRules.roll_pbg(&mut dice, false), Pbg::new(9, 0, 0));
    }
}
