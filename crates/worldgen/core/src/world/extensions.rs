//! Second Survey extensions: importance `{Ix}`, economics `(Ex)`, culture
//! `[Cx]`, plus nobility and resource units derived from them.

use core::fmt;
use core::str::FromStr;

use super::bases::Bases;
use super::classification::{TradeCode, TradeCodes};
use super::uwp::{Pbg, Starport, Uwp};
use crate::allegiance;
use crate::dice::Dice;
use crate::ehex;

/// Importance extension, rendered `{ +n }`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Importance(pub i32);

impl Importance {
    pub const fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for Importance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ {:+} }}", self.0)
    }
}

impl FromStr for Importance {
    type Err = core::num::ParseIntError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        text.trim_matches(|c: char| c == '{' || c == '}' || c.is_whitespace())
            .parse()
            .map(Importance)
    }
}

/// Economic extension, rendered `(RLI+E)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Economic {
    pub resource: i32,
    pub labour: i32,
    pub infrastructure: i32,
    pub efficiency: i32,
}

impl Economic {
    /// Resource units.
    ///
    /// Resource, labour and infrastructure only count when above 1, so a world
    /// with nothing still scores 1. Efficiency multiplies whenever non-zero,
    /// which makes negative efficiency yield negative RU.
    pub fn resource_units(&self) -> i32 {
        let mut ru = 1;
        for factor in [self.resource, self.labour, self.infrastructure] {
            if factor > 1 {
                ru *= factor;
            }
        }
        if self.efficiency != 0 {
            ru *= self.efficiency;
        }
        ru
    }
}

impl fmt::Display for Economic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.efficiency < 0 { '-' } else { '+' };
        write!(
            f,
            "({}{}{}{}{})",
            ehex::encode(self.resource),
            ehex::encode(self.labour),
            ehex::encode(self.infrastructure),
            sign,
            ehex::encode(self.efficiency.abs())
        )
    }
}

/// A malformed `(Ex)` or `[Cx]` field.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("unreadable extension '{0}'")]
pub struct ExtensionParseError(pub String);

impl FromStr for Economic {
    type Err = ExtensionParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let err = || ExtensionParseError(text.to_owned());
        let inner: Vec<char> = text.trim().trim_matches(['(', ')']).chars().collect();
        if inner.len() != 5 {
            return Err(err());
        }
        let digit = |ch: char| ehex::decode(ch).map(i32::from).ok_or_else(err);
        let magnitude = digit(inner[4])?;
        let efficiency = match inner[3] {
            '+' => magnitude,
            '-' => -magnitude,
            _ => return Err(err()),
        };
        Ok(Self {
            resource: digit(inner[0])?,
            labour: digit(inner[1])?,
            infrastructure: digit(inner[2])?,
            efficiency,
        })
    }
}

/// Cultural extension, rendered `[HASS]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cultural {
    pub homogeneity: i32,
    pub acceptance: i32,
    pub strangeness: i32,
    pub symbols: i32,
}

impl fmt::Display for Cultural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}{}{}{}]",
            ehex::encode(self.homogeneity),
            ehex::encode(self.acceptance),
            ehex::encode(self.strangeness),
            ehex::encode(self.symbols)
        )
    }
}

impl FromStr for Cultural {
    type Err = ExtensionParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let digits: Option<Vec<i32>> = text
            .trim()
            .trim_matches(['[', ']'])
            .chars()
            .map(|ch| ehex::decode(ch).map(i32::from))
            .collect();
        match digits.as_deref() {
            Some(&[homogeneity, acceptance, strangeness, symbols]) => Ok(Self {
                homogeneity,
                acceptance,
                strangeness,
                symbols,
            }),
            _ => Err(ExtensionParseError(text.to_owned())),
        }
    }
}

/// All three extensions together.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extensions {
    pub importance: Importance,
    pub economic: Economic,
    pub cultural: Cultural,
}

pub fn determine_importance(uwp: &Uwp, codes: &TradeCodes, bases: Bases) -> Importance {
    let mut ix = match uwp.starport {
        Starport::A | Starport::B => 1,
        Starport::C => 0,
        _ => -1,
    };
    if uwp.tech >= 16 {
        ix += 1;
    }
    if uwp.tech >= 10 {
        ix += 1;
    }
    if uwp.tech <= 8 {
        ix -= 1;
    }
    for code in [TradeCode::Ag, TradeCode::Hi, TradeCode::Ri] {
        if codes.contains(code) {
            ix += 1;
        }
    }
    if uwp.population <= 6 {
        ix -= 1;
    }
    if bases.contains(Bases::SCOUT)
        && bases.intersects(Bases::DEPOT | Bases::NAVAL_BASE | Bases::NAVY)
    {
        ix += 1;
    }
    if bases.contains(Bases::WAY_STATION) {
        ix += 1;
    }
    Importance(ix)
}

pub fn determine_economic<D: Dice + ?Sized>(
    dice: &mut D,
    uwp: &Uwp,
    pbg: &Pbg,
    codes: &TradeCodes,
    importance: Importance,
) -> Economic {
    let ix = importance.value();

    let mut resource = dice.two_d6();
    if uwp.tech >= 8 {
        resource += i32::from(pbg.gas_giants) + i32::from(pbg.belts);
    }

    let labour = (i32::from(uwp.population) - 1).max(0);

    let mut infrastructure = dice.two_d6() + ix;
    if codes.contains(TradeCode::Ba) && codes.contains(TradeCode::Di) && codes.contains(TradeCode::Lo)
    {
        infrastructure = 0;
    } else if codes.contains(TradeCode::Lo) {
        infrastructure = 1;
    }
    if codes.contains(TradeCode::Ni) {
        infrastructure = dice.d6() + ix;
    }

    Economic {
        resource: resource.max(0),
        labour,
        infrastructure: infrastructure.max(0),
        efficiency: dice.flux(0),
    }
}

pub fn determine_cultural<D: Dice + ?Sized>(
    dice: &mut D,
    uwp: &Uwp,
    importance: Importance,
) -> Cultural {
    let pop = i32::from(uwp.population);
    let cultural = Cultural {
        homogeneity: dice.flux(pop).max(1),
        acceptance: (pop + importance.value()).max(1),
        strangeness: dice.flux(5).max(1),
        symbols: dice.flux(i32::from(uwp.tech)).max(1),
    };
    if pop == 0 {
        return Cultural::default();
    }
    cultural
}

/// Imperial nobility present on a world, e.g. "BcCEf". Empty outside the Imperium.
pub fn nobility(allegiance_code: &str, codes: &TradeCodes, importance: Importance) -> String {
    if !allegiance::is_imperial(allegiance_code) {
        return String::new();
    }
    let mut ranks = String::from("B");
    let rules: [(&[TradeCode], char); 5] = [
        (&[TradeCode::Pa, TradeCode::Pr], 'c'),
        (&[TradeCode::Ag, TradeCode::Ri], 'C'),
        (&[TradeCode::Pi], 'D'),
        (&[TradeCode::Ph], 'e'),
        (&[TradeCode::In, TradeCode::Hi], 'E'),
    ];
    for (triggers, rank) in rules {
        if codes.contains_any(triggers) {
            ranks.push(rank);
        }
    }
    if importance.value() >= 4 {
        ranks.push('f');
    }
    ranks
}
