//! Rolls shared by every rule set.

use crate::dice::Dice;
use crate::world::uwp::{Starport, Uwp};
use crate::world::variant::Traffic;

/// Rolls the starport class on 2d6, shifted by how busy the subsector is.
pub fn determine_starport<D: Dice + ?Sized>(dice: &mut D, traffic: Traffic) -> Starport {
    let roll = dice.two_d6();
    match traffic {
        Traffic::Backwater => match roll {
            2 | 3 => Starport::A,
            4 | 5 => Starport::B,
            6..=8 => Starport::C,
            9 => Starport::D,
            10 | 11 => Starport::E,
            _ => Starport::X,
        },
        Traffic::Cluster => match roll {
            2..=5 => Starport::A,
            6 | 7 => Starport::B,
            8 | 9 => Starport::C,
            10 => Starport::D,
            11 => Starport::E,
            _ => Starport::X,
        },
        Traffic::Standard | Traffic::Mature => match roll {
            2..=4 => Starport::A,
            5 | 6 => Starport::B,
            7 | 8 => Starport::C,
            9 => Starport::D,
            10 | 11 => Starport::E,
            _ if traffic == Traffic::Mature => Starport::E,
            _ => Starport::X,
        },
    }
}

/// Tech level modifier from the rest of the profile.
pub fn tech_dm(
    starport: Starport,
    size: i32,
    atmosphere: i32,
    hydrographics: i32,
    population: i32,
    government: i32,
) -> i32 {
    let mut dm = match starport {
        Starport::A => 6,
        Starport::B => 4,
        Starport::C => 2,
        Starport::X => -4,
        _ => 0,
    };
    dm += match size {
        0 | 1 => 2,
        2..=4 => 1,
        _ => 0,
    };
    if matches!(atmosphere, 0..=3 | 10..=15) {
        dm += 1;
    }
    dm += match hydrographics {
        9 => 1,
        10 => 2,
        _ => 0,
    };
    dm += match population {
        1..=5 => 1,
        9 => 2,
        10..=15 => 4,
        _ => 0,
    };
    dm += match government {
        0 | 5 => 1,
        13 => -2,
        _ => 0,
    };
    dm
}

/// Raw profile values before they are clamped into a [`Uwp`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawProfile {
    pub size: i32,
    pub atmosphere: i32,
    pub hydrographics: i32,
    pub population: i32,
    pub government: i32,
    pub law: i32,
    pub tech: i32,
}

impl RawProfile {
    /// Rolls `1d6 + DM` for tech level, floored at 0.
    pub fn roll_tech<D: Dice + ?Sized>(&mut self, dice: &mut D, starport: Starport) {
        let dm = tech_dm(
            starport,
            self.size,
            self.atmosphere,
            self.hydrographics,
            self.population,
            self.government,
        );
        self.tech = (dice.d6() + dm).max(0);
    }

    /// Converts to a UWP. Values must already be inside the ehex range.
    pub fn into_uwp(self, starport: Starport) -> Uwp {
        let digit = |value: i32| {
            debug_assert!((0..=33).contains(&value), "profile value {value} out of range");
            value.clamp(0, 33) as u8
        };
        Uwp {
            starport,
            size: digit(self.size),
            atmosphere: digit(self.atmosphere),
            hydrographics: digit(self.hydrographics),
            population: digit(self.population),
            government: digit(self.government),
            law: digit(self.law),
            tech: digit(self.tech),
        }
    }
}

/// The -4 hydrographics modifier for very thin or exotic atmospheres.
pub fn hydrographics_dm(atmosphere: i32) -> i32 {
    if !(2..=9).contains(&atmosphere) { -4 } else { 0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::scripted::ScriptedDice;

    fn port(traffic: Traffic, a: i32, b: i32) -> Starport {
        determine_starport(&mut ScriptedDice::new(&[a, b]), traffic)
    }

    #[test]
    fn starport_tables() {
        assert_eq!(port(Traffic::Standard, 1, 1), Starport::A);
        assert_eq!(port(Traffic::Standard, 2, 3), Starport::B);
        assert_eq!(port(Traffic::Standard, 4, 5), Starport::D);
        assert_eq!(port(Traffic::Standard, 6, 6), Starport::X);
        assert_eq!(port(Traffic::Mature, 6, 6), Starport::E);
        assert_eq!(port(Traffic::Backwater, 1, 2), Starport::A);
        assert_eq!(port(Traffic::Backwater, 4, 4), Starport::C);
        assert_eq!(port(Traffic::Cluster, 2, 3), Starport::A);
        assert_eq!(port(Traffic::Cluster, 5, 5), Starport::D);
        assert_eq!(port(Traffic::Cluster, 6, 5), Starport::E);
        assert_eq!(port(Traffic::Cluster, 6, 6), Starport::X);
    }

    #[test]
    fn tech_modifiers_add_up() {
        // A +6, size 1 +2, atm 0 +1, hyd 10 +2, pop 10 +4, gov 13 -2
        assert_eq!(tech_dm(Starport::A, 1, 0, 10, 10, 13), 13);
        // X -4, nothing else
        assert_eq!(tech_dm(Starport::X, 8, 6, 5, 6, 7), -4);
        assert_eq!(tech_dm(Starport::D, 5, 5, 5, 6, 7), 0);
    }

    #[test]
    fn tech_is_floored() {
        let mut raw = RawProfile {
            size: 8,
            atmosphere: 6,
            hydrographics: 5,
            population: 6,
            government: 7,
            ..RawProfile::default()
        };
        raw.roll_tech(&mut ScriptedDice::new(&[1]), Starport::X);
        assert_eq!(raw.tech, 0);
    }
}
