//! Universal World Profile and PBG.

use core::fmt;
use core::str::FromStr;

use crate::ehex;

/// Starport (A-E, X) or spaceport (F, G, H, Y) class.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Starport {
    A,
    B,
    C,
    D,
    E,
    #[default]
    X,
    F,
    G,
    H,
    Y,
}

impl Starport {
    pub const fn description(self) -> &'static str {
        match self {
            Starport::A => "Excellent",
            Starport::B => "Good",
            Starport::C => "Routine",
            Starport::D => "Poor",
            Starport::E => "Frontier",
            Starport::X => "No starport",
            Starport::F => "Good spaceport",
            Starport::G => "Poor spaceport",
            Starport::H => "Primitive spaceport",
            Starport::Y => "No spaceport",
        }
    }
}

/// The eight UWP digits, e.g. `A788899-C`.
///
/// Each numeric field holds an ehex value (0-33).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uwp {
    pub starport: Starport,
    pub size: u8,
    pub atmosphere: u8,
    pub hydrographics: u8,
    pub population: u8,
    pub government: u8,
    pub law: u8,
    pub tech: u8,
}

impl Uwp {
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        starport: Starport,
        size: u8,
        atmosphere: u8,
        hydrographics: u8,
        population: u8,
        government: u8,
        law: u8,
        tech: u8,
    ) -> Self {
        Self {
            starport,
            size,
            atmosphere,
            hydrographics,
            population,
            government,
            law,
            tech,
        }
    }
}

impl fmt::Display for Uwp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.starport)?;
        for value in [
            self.size,
            self.atmosphere,
            self.hydrographics,
            self.population,
            self.government,
            self.law,
        ] {
            write!(f, "{}", ehex::encode(value as i32))?;
        }
        write!(f, "-{}", ehex::encode(self.tech as i32))
    }
}

/// Why a UWP or PBG string could not be read.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileError {
    #[error("'{0}' is not shaped like a UWP (SSAHPGL-T)")]
    UwpShape(String),

    #[error("'{text}' has an unknown starport '{starport}'")]
    Starport { text: String, starport: char },

    #[error("'{text}' has a non-ehex digit '{digit}'")]
    Digit { text: String, digit: char },

    #[error("'{0}' is not a three digit PBG")]
    PbgShape(String),
}

impl FromStr for Uwp {
    type Err = ProfileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = text.trim().chars().collect();
        if chars.len() != 9 || chars[7] != '-' {
            return Err(ProfileError::UwpShape(text.to_owned()));
        }

        let starport = Starport::from_str(chars[0].encode_utf8(&mut [0; 4])).map_err(|_| {
            ProfileError::Starport {
                text: text.to_owned(),
                starport: chars[0],
            }
        })?;
        let digit = |ch: char| {
            ehex::decode(ch).ok_or_else(|| ProfileError::Digit {
                text: text.to_owned(),
                digit: ch,
            })
        };

        Ok(Self {
            starport,
            size: digit(chars[1])?,
            atmosphere: digit(chars[2])?,
            hydrographics: digit(chars[3])?,
            population: digit(chars[4])?,
            government: digit(chars[5])?,
            law: digit(chars[6])?,
            tech: digit(chars[8])?,
        })
    }
}

/// Population multiplier, planetoid belts and gas giants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pbg {
    pub population_multiplier: u8,
    pub belts: u8,
    pub gas_giants: u8,
}

impl Pbg {
    pub const fn new(population_multiplier: u8, belts: u8, gas_giants: u8) -> Self {
        Self {
            population_multiplier,
            belts,
            gas_giants,
        }
    }
}

impl fmt::Display for Pbg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            ehex::encode(self.population_multiplier as i32),
            ehex::encode(self.belts as i32),
            ehex::encode(self.gas_giants as i32)
        )
    }
}

impl FromStr for Pbg {
    type Err = ProfileError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let digits: Option<Vec<u8>> = text.trim().chars().map(ehex::decode).collect();
        match digits.as_deref() {
            Some(&[p, b, g]) => Ok(Self::new(p, b, g)),
            _ => Err(ProfileError::PbgShape(text.to_owned())),
        }
    }
}
