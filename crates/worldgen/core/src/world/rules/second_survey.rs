use super::Ruleset;
use super::common::{RawProfile, hydrographics_dm};
use crate::allegiance;
use crate::dice::Dice;
use crate::world::bases::Bases;
use crate::world::uwp::{Pbg, Starport, Uwp};
use crate::world::variant::Variant;
use crate::world::zone::TravelZone;

/// Traveller5 Second Survey.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecondSurveyRules;

impl SecondSurveyRules {
    pub const MAX_LAW: i32 = 18;
    /// Highest tech level reachable in Zhodani space.
    pub const ZHODANI_MAX_TECH: u8 = 14;
}

impl Ruleset for SecondSurveyRules {
    fn variant(&self) -> Variant {
        Variant::SecondSurvey
    }

    fn roll_profile(&self, dice: &mut dyn Dice, starport: Starport) -> Uwp {
        let mut raw = RawProfile {
            size: dice.two_d6() - 2,
            ..RawProfile::default()
        };
        if raw.size == 10 {
            raw.size = dice.d6() + 9;
        }

        raw.atmosphere = (raw.size + dice.flux(0)).clamp(0, 15);
        if raw.size == 0 {
            raw.atmosphere = 0;
        }

        raw.hydrographics = dice.flux(0) + raw.atmosphere + hydrographics_dm(raw.atmosphere);
        if raw.size < 2 {
            raw.hydrographics = 0;
        }
        raw.hydrographics = raw.hydrographics.clamp(0, 10);

        raw.population = dice.two_d6() - 2;
        if raw.population == 10 {
            raw.population = dice.two_d6() + 3;
        }

        raw.government = (dice.flux(0) + raw.population).clamp(0, 15);
        raw.law = (dice.flux(0) + raw.government).clamp(0, Self::MAX_LAW);
        raw.roll_tech(dice, starport);
        raw.into_uwp(starport)
    }

    fn adjust_profile(&self, uwp: &mut Uwp, pbg: &mut Pbg, allegiance: &str) {
        if allegiance::is_zhodani(allegiance) {
            if uwp.population < 4 {
                uwp.population = 0;
            }
            uwp.tech = uwp.tech.min(Self::ZHODANI_MAX_TECH);
        }
        if uwp.population == 0 {
            pbg.population_multiplier = 0;
        }
    }

    fn roll_pbg(&self, dice: &mut dyn Dice, orbits_gas_giant: bool) -> Pbg {
        let population_multiplier = dice.die(9) as u8;
        let belts = (dice.d6() - 3).max(0) as u8;
        let gas_giants = match dice.two_d6() / 2 - 2 {
            n if n > 0 => n as u8,
            _ => u8::from(orbits_gas_giant),
        };
        Pbg::new(population_multiplier, belts, gas_giants)
    }

    /// Bases appear on a low roll: 2d6 at or under the target.
    fn roll_bases(&self, dice: &mut dyn Dice, starport: Starport, _allegiance: &str) -> Bases {
        let mut bases = Bases::empty();
        // (navy target, scout target)
        let (navy, scout) = match starport {
            Starport::A => (Some(6), 4),
            Starport::B => (Some(5), 5),
            Starport::C => (None, 6),
            Starport::D => (None, 7),
            _ => return bases,
        };
        if let Some(navy) = navy {
            if dice.two_d6() <= navy {
                bases |= Bases::NAVY;
            }
        }
        if dice.two_d6() <= scout {
            bases |= Bases::SCOUT;
        }
        bases
    }

    fn determine_zone(&self, dice: &mut dyn Dice, uwp: &Uwp, allegiance: &str) -> TravelZone {
        let restriction = uwp.government + uwp.law;
        let red = restriction >= 22 || uwp.starport == Starport::X;
        if red {
            return TravelZone::Red;
        }

        // The 1d2 is rolled for every eligible world, already amber or not.
        let unsettled = matches!(uwp.government, 0 | 7) || uwp.government >= 13 || uwp.tech <= 7;
        let zhodani_amber = allegiance::is_zhodani(allegiance) && unsettled && dice.die(2) == 1;
        if restriction >= 20 || zhodani_amber {
            return TravelZone::Amber;
        }
        TravelZone::Green
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::PcgDice;
    use crate::dice::scripted::ScriptedDice;
    use crate::world::rules::determine_starport;

    #[test]
    fn profiles_stay_in_range() {
        let mut dice = PcgDice::new(55);
        let mut saw_big = false;
        for _ in 0..20_000 {
            let port = determine_starport(&mut dice, Default::default());
            let uwp = SecondSurveyRules.roll_profile(&mut dice, port);
            assert!(uwp.size <= 15);
            assert!(uwp.atmosphere <= 15);
            assert!(uwp.hydrographics <= 10);
            assert!(uwp.population <= 15);
            assert!(uwp.government <= 15);
            assert!(uwp.law <= 18);
            if uwp.size >= 11 {
                saw_big = true;
                assert!(uwp.size <= 15);
            }
            if uwp.size < 2 {
                assert_eq!(uwp.hydrographics, 0);
            }
        }
        assert!(saw_big, "size 10 should reroll into 10-15");
    }

    #[test]
    fn size_ten_rerolls() {
        // size 6+6-2=10 -> d6 3 + 9 = 12; atm 12 + (1-1); hyd (3-3) + 12 - 4 = 8
        // pop 2d6 (1,1) = 0; gov flux (2,2) = 0; law flux (4,4) = 0; tech d6 6
        let faces = [6, 6, 3, 1, 1, 3, 3, 1, 1, 2, 2, 4, 4, 6];
        let mut dice = ScriptedDice::new(&faces);
        let uwp = SecondSurveyRules.roll_profile(&mut dice, Starport::B);
        // tech: 6 + B4 + atm 12 +1 + gov 0 +1 = 12
        assert_eq!(uwp.to_string(), "BCC8000-C");
        assert_eq!(dice.remaining(), 0);
    }

    #[test]
    fn zhodani_adjustment() {
        let mut uwp = Uwp::new(Starport::A, 5, 5, 5, 3, 2, 2, 16);
        let mut pbg = Pbg::new(5, 1, 1);
        SecondSurveyRules.adjust_profile(&mut uwp, &mut pbg, "ZhCo");
        assert_eq!(uwp.population, 0);
        assert_eq!(uwp.tech, 14);
        assert_eq!(pbg.population_multiplier, 0);

        let mut uwp = Uwp::new(Starport::A, 5, 5, 5, 3, 2, 2, 16);
        let mut pbg = Pbg::new(5, 1, 1);
        SecondSurveyRules.adjust_profile(&mut uwp, &mut pbg, "ImDd");
        assert_eq!((uwp.population, uwp.tech), (3, 16));
        assert_eq!(pbg.population_multiplier, 5);
    }

    #[test]
    fn pbg_gas_giant_for_satellites() {
        // multiplier 2, belts 6-3 = 3, gas giants (1+2)/2 - 2 < 0
        let mut dice = ScriptedDice::new(&[2, 6, 1, 2]);
        assert_eq!(SecondSurveyRules.roll_pbg(&mut dice, true), Pbg::new(2, 3, 1));
        let mut dice = ScriptedDice::new(&[2, 2, 1, 2]);
        assert_eq!(SecondSurveyRules.roll_pbg(&mut dice, false), Pbg::new(2, 0, 0));
        let mut dice = ScriptedDice::new(&[7, 1, 6, 6]);
        assert_eq!(SecondSurveyRules.roll_pbg(&mut dice, false), Pbg::new(7, 0, 4));
    }

    #[test]
    fn bases_use_low_rolls() {
        let mut dice = ScriptedDice::new(&[3, 3, 2, 2]);
        assert_eq!(
            SecondSurveyRules.roll_bases(&mut dice, Starport::A, "Im"),
            Bases::NAVY | Bases::SCOUT
        );
        let mut dice = ScriptedDice::new(&[4, 4]);
        assert_eq!(
            SecondSurveyRules.roll_bases(&mut dice, Starport::D, "Im"),
            Bases::empty()
        );
        let mut dice = ScriptedDice::new(&[]);
        assert_eq!(
            SecondSurveyRules.roll_bases(&mut dice, Starport::E, "Im"),
            Bases::empty()
        );
    }

    #[test]
    fn zones() {
        let zone = |uwp: Uwp, allegiance: &str, faces: &[i32]| {
            SecondSurveyRules.determine_zone(&mut ScriptedDice::new(faces), &uwp, allegiance)
        };
        assert_eq!(
            zone(Uwp::new(Starport::X, 5, 5, 5, 5, 5, 5, 9), "Im", &[]),
            TravelZone::Red
        );
        assert_eq!(
            zone(Uwp::new(Starport::A, 5, 5, 5, 5, 10, 10, 9), "Im", &[]),
            TravelZone::Amber
        );
        assert_eq!(
            zone(Uwp::new(Starport::A, 5, 5, 5, 5, 11, 11, 9), "Im", &[]),
            TravelZone::Red
        );
        // Zhodani unsettled world: 1d2 decides
        let zh = Uwp::new(Starport::B, 5, 5, 5, 5, 7, 5, 9);
        assert_eq!(zone(zh, "ZhCo", &[1]), TravelZone::Amber);
        assert_eq!(zone(zh, "ZhCo", &[2]), TravelZone::Green);
        assert_eq!(zone(zh, "Im", &[]), TravelZone::Green);
    }

    #[test]
    fn zhodani_roll_is_taken_on_restricted_worlds() {
        let zone = |uwp: Uwp, faces: &[i32]| {
            let mut dice = ScriptedDice::new(faces);
            let zone = SecondSurveyRules.determine_zone(&mut dice, &uwp, "ZhCo");
            (zone, dice.remaining())
        };
        // gov 13 + law 8 is amber without the roll
        let restricted = Uwp::new(Starport::B, 5, 5, 5, 5, 13, 8, 9);
        assert_eq!(zone(restricted, &[2, 4]), (TravelZone::Amber, 1));
        // red worlds skip it
        let red = Uwp::new(Starport::X, 5, 5, 5, 5, 13, 8, 9);
        assert_eq!(zone(red, &[2, 4]), (TravelZone::Red, 2));
    }
}
