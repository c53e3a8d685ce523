//! Rolls for stars, the habitable zone and the mainworld's place in the system.

use core::fmt;

use super::star::{Luminosity, SpectralClass, Star, StarKind, StarSystem};
use crate::dice::Dice;

/// Rolls one star.
///
/// The primary uses `dm + spectral_flux` for its class and `size_flux` for
/// its size. Other stars in the system add `1d6+1` and `1d6+2` to the same
/// fluxes, which pushes them towards cooler, smaller stars and lets them come
/// out as brown dwarfs.
pub fn determine_star<D: Dice + ?Sized>(
    dice: &mut D,
    dm: i32,
    spectral_flux: i32,
    size_flux: i32,
    is_primary: bool,
) -> Star {
    let class_roll = if is_primary {
        dm + spectral_flux
    } else {
        spectral_flux + dice.d6() + 1
    }
    .clamp(-6, 6);

    // Rolled before the class so that brown dwarfs consume the same dice.
    let decimal = (dice.die(10) - 1) as u8;

    let class = if is_primary {
        match class_roll {
            -6 => SpectralClass::O,
            -5 => o_or_b(dice),
            -4 | -3 => SpectralClass::A,
            -2 | -1 => SpectralClass::F,
            0 => SpectralClass::G,
            1 | 2 => SpectralClass::K,
            _ => SpectralClass::M,
        }
    } else {
        match class_roll {
            -6 => o_or_b(dice),
            -5 | -4 => SpectralClass::A,
            -3 | -2 => SpectralClass::F,
            -1 | 0 => SpectralClass::G,
            1 | 2 => SpectralClass::K,
            3..=5 => SpectralClass::M,
            _ => return Star::new(StarKind::BrownDwarf),
        }
    };

    let size_roll = if is_primary {
        size_flux
    } else {
        size_flux + dice.d6() + 2
    }
    .clamp(-5, 6);

    match luminosity_for(size_roll, class, decimal, is_primary) {
        Some(luminosity) => Star::normal(class, decimal, luminosity),
        None => Star::new(StarKind::WhiteDwarf { class: Some(class) }),
    }
}

fn o_or_b<D: Dice + ?Sized>(dice: &mut D) -> SpectralClass {
    if dice.die(2) == 2 {
        SpectralClass::O
    } else {
        SpectralClass::B
    }
}

/// Luminosity table. `None` means the star is a white dwarf.
fn luminosity_for(
    roll: i32,
    class: SpectralClass,
    decimal: u8,
    is_primary: bool,
) -> Option<Luminosity> {
    use Luminosity::*;
    use SpectralClass as S;

    let lum = match roll {
        -5 => match class {
            S::O | S::B | S::A => Ia,
            _ => II,
        },
        -4 => match class {
            S::O | S::B | S::A => Ib,
            S::M => II,
            _ => III,
        },
        -3 => match class {
            S::F | S::G => IV,
            S::K if decimal >= 5 => V,
            S::K => IV,
            _ => II,
        },
        -2 => match class {
            S::F | S::G | S::K => V,
            _ => III,
        },
        -1 => match class {
            S::O | S::B => III,
            S::A => IV,
            _ => V,
        },
        0 => match class {
            S::O | S::B => III,
            _ => V,
        },
        1 => match class {
            S::B => III,
            _ => V,
        },
        2 | 3 => V,
        4 => match class {
            S::A => V,
            S::O | S::B => IV,
            S::F if decimal < 5 => V,
            _ => VI,
        },
        5 => return None,
        _ if is_primary => return None,
        _ => match class {
            S::O | S::B => IV,
            S::A => V,
            _ if decimal < 5 => V,
            _ => VI,
        },
    };
    Some(lum)
}

/// Rolls the rest of a system around an already rolled primary.
///
/// Each of the primary's companion, a close star, a near star and a far star
/// appears on `flux >= 3`; close, near and far stars may each have their own
/// companion on the same roll. Orbits: close `1d6-1`, near `1d6+5`, far
/// `1d6+11`.
pub fn generate_system_stars<D: Dice + ?Sized>(
    dice: &mut D,
    primary: Star,
    spectral_flux: i32,
    size_flux: i32,
) -> StarSystem {
    let mut primary = primary;
    if present(dice) {
        primary.companion = Some(Box::new(secondary(dice, spectral_flux, size_flux)));
    }
    let mut system = StarSystem::new(primary);

    for base in [-1, 5, 11] {
        if !present(dice) {
            continue;
        }
        let mut star = secondary(dice, spectral_flux, size_flux).with_orbit(dice.d6() + base);
        if present(dice) {
            star.companion = Some(Box::new(secondary(dice, spectral_flux, size_flux)));
        }
        if let Err(star) = system.push(star) {
            // Only three slots are ever filled after the primary.
            unreachable!("no free slot for {star}");
        }
    }

    tracing::debug!(stars = %system.listing(), "generated system stars");
    system
}

fn present<D: Dice + ?Sized>(dice: &mut D) -> bool {
    dice.flux(0) >= 3
}

fn secondary<D: Dice + ?Sized>(dice: &mut D, spectral_flux: i32, size_flux: i32) -> Star {
    determine_star(dice, 0, spectral_flux, size_flux, false)
}

/// How far the mainworld sits from the centre of the habitable zone:
/// negative is inward (hotter), positive outward (colder).
pub fn determine_habitable_zone_variance<D: Dice + ?Sized>(dice: &mut D, star: &Star) -> i32 {
    let dm = match star.spectral_class() {
        Some(SpectralClass::M) => 2,
        Some(SpectralClass::O | SpectralClass::B) => -2,
        _ => 0,
    };
    match dice.flux(dm) {
        ..=-6 => -2,
        -5..=-3 => -1,
        -2..=2 => 0,
        3..=5 => 1,
        _ => 2,
    }
}

/// Whether the mainworld orbits a star directly or is a satellite.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MainworldType {
    #[default]
    #[strum(serialize = "Planet")]
    Planet,
    #[strum(serialize = "Satellite Close")]
    CloseSatellite,
    #[strum(serialize = "Satellite Far")]
    FarSatellite,
}

impl MainworldType {
    pub const fn is_satellite(self) -> bool {
        !matches!(self, MainworldType::Planet)
    }
}

impl fmt::Display for MainworldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            MainworldType::Planet => "Planet",
            MainworldType::CloseSatellite => "Satellite Close",
            MainworldType::FarSatellite => "Satellite Far",
        })
    }
}

pub fn determine_mainworld_type<D: Dice + ?Sized>(dice: &mut D) -> MainworldType {
    match dice.flux(0) {
        ..=-4 => MainworldType::FarSatellite,
        -3 => MainworldType::CloseSatellite,
        _ => MainworldType::Planet,
    }
}

/// Satellite orbit names and their multipliers (planetary diameters).
const SATELLITE_ORBITS: [(&str, u16); 26] = [
    ("Ay", 1),
    ("Bee", 2),
    ("Cee", 3),
    ("Dee", 4),
    ("Ee", 5),
    ("Eff", 6),
    ("Gee", 8),
    ("Aitch", 10),
    ("Eye", 20),
    ("Jay", 30),
    ("Kay", 40),
    ("Ell", 50),
    ("Em", 60),
    ("En", 70),
    ("Oh", 80),
    ("Pee", 100),
    ("Que", 150),
    ("Arr", 200),
    ("Ess", 250),
    ("Tee", 300),
    ("Yu", 400),
    ("Vee", 500),
    ("Dub", 600),
    ("Ex", 700),
    ("Wye", 800),
    ("Zee", 1000),
];

/// A named satellite orbit ("Ay" through "Zee").
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SatelliteOrbit(u8);

impl SatelliteOrbit {
    /// # Panics
    ///
    /// Panics if `index` is not below 26.
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < SATELLITE_ORBITS.len(),
            "satellite orbit index {index} outside the orbit table"
        );
        Self(index as u8)
    }

    pub fn from_name(name: &str) -> Option<Self> {
        SATELLITE_ORBITS
            .iter()
            .position(|(orbit, _)| orbit.eq_ignore_ascii_case(name))
            .map(|index| Self(index as u8))
    }

    pub fn name(self) -> &'static str {
        SATELLITE_ORBITS[self.0 as usize].0
    }

    /// Orbit radius in planetary diameters.
    pub fn multiplier(self) -> u16 {
        SATELLITE_ORBITS[self.0 as usize].1
    }
}

impl fmt::Display for SatelliteOrbit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rolls the orbit of a satellite mainworld around its host.
///
/// Hosts that are gas giants pull the roll down by 2, big planets push it up
/// by 2. Close satellites land in "Ay".."Em", far ones in "En".."Zee".
pub fn determine_satellite_orbit<D: Dice + ?Sized>(
    dice: &mut D,
    around_gas_giant: bool,
    close: bool,
) -> SatelliteOrbit {
    let dm = if around_gas_giant { -2 } else { 2 };
    let roll = dice.flux(dm).clamp(-6, 6);
    let offset = if close { 6 } else { 19 };
    SatelliteOrbit::from_index((roll + offset) as usize)
}
