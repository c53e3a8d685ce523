//! Trade classifications ("remarks").
//!
//! Each variant evaluates its own list of rules in a fixed order; the codes
//! come out in that order.

use core::fmt;
use core::str::FromStr;

use super::uwp::Uwp;
use super::variant::Variant;
use crate::allegiance;
use crate::stellar::MainworldType;

/// A two letter trade classification.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TradeCode {
    As,
    Va,
    Ic,
    Ag,
    Na,
    Ba,
    Fl,
    Hi,
    Lo,
    De,
    Wa,
    Po,
    In,
    Ni,
    Ri,
    Ga,
    He,
    Oc,
    Di,
    Ph,
    Pa,
    Px,
    Pi,
    Pr,
    Fr,
    Ho,
    Co,
    Lk,
    Tr,
    Tu,
    Re,
    Sa,
}

impl TradeCode {
    pub const fn description(self) -> &'static str {
        use TradeCode::*;
        match self {
            As => "Asteroid Belt",
            Va => "Vacuum",
            Ic => "Ice-capped",
            Ag => "Agricultural",
            Na => "Non-agricultural",
            Ba => "Barren",
            Fl => "Fluid Oceans",
            Hi => "High Population",
            Lo => "Low Population",
            De => "Desert",
            Wa => "Water World",
            Po => "Poor",
            In => "Industrial",
            Ni => "Non-industrial",
            Ri => "Rich",
            Ga => "Garden World",
            He => "Hell World",
            Oc => "Ocean World",
            Di => "Dieback",
            Ph => "Pre-High Population",
            Pa => "Pre-Agricultural",
            Px => "Prison or Exile Camp",
            Pi => "Pre-Industrial",
            Pr => "Pre-Rich",
            Fr => "Frozen",
            Ho => "Hot",
            Co => "Cold",
            Lk => "Locked",
            Tr => "Tropic",
            Tu => "Tundra",
            Re => "Reserve",
            Sa => "Satellite",
        }
    }
}

/// Insertion-ordered set of trade codes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TradeCodes(Vec<TradeCode>);

impl TradeCodes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `code` unless already present.
    pub fn insert(&mut self, code: TradeCode) {
        if !self.contains(code) {
            self.0.push(code);
        }
    }

    pub fn contains(&self, code: TradeCode) -> bool {
        self.0.contains(&code)
    }

    pub fn contains_any(&self, codes: &[TradeCode]) -> bool {
        codes.iter().any(|code| self.contains(*code))
    }

    pub fn iter(&self) -> impl Iterator<Item = TradeCode> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Reads space separated remarks. Unknown codes are logged and skipped.
    pub fn from_remarks(remarks: &str) -> Self {
        let mut codes = Self::new();
        for token in remarks.split_whitespace() {
            match TradeCode::from_str(token) {
                Ok(code) => codes.insert(code),
                Err(_) => tracing::warn!(remark = token, "unknown trade code; skipped"),
            }
        }
        codes
    }
}

impl FromIterator<TradeCode> for TradeCodes {
    fn from_iter<I: IntoIterator<Item = TradeCode>>(iter: I) -> Self {
        let mut codes = Self::new();
        for code in iter {
            codes.insert(code);
        }
        codes
    }
}

impl fmt::Display for TradeCodes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, code) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

/// Everything the classification rules look at.
#[derive(Clone, Copy, Debug)]
pub struct ClassifyInput<'a> {
    pub uwp: &'a Uwp,
    pub allegiance: &'a str,
    /// Habitable zone variance; only the Second Survey rules use it.
    pub hz_variance: i32,
    pub mainworld_type: MainworldType,
}

/// Derives the trade codes for a world under `variant`.
pub fn classify(variant: Variant, input: &ClassifyInput<'_>) -> TradeCodes {
    let u = input.uwp;
    let (siz, atm, hyd) = (u.size, u.atmosphere, u.hydrographics);
    let (pop, gov, law, tech) = (u.population, u.government, u.law, u.tech);
    let mut codes = TradeCodes::new();
    let mut add = |cond: bool, code: TradeCode| {
        if cond {
            codes.insert(code);
        }
    };

    // Shared by all variants
    if siz == 0 && atm == 0 && hyd == 0 {
        add(true, TradeCode::As);
    } else {
        add(atm == 0, TradeCode::Va);
    }
    add(atm <= 1 && hyd != 0, TradeCode::Ic);
    add(
        (4..=9).contains(&atm) && (4..=8).contains(&hyd) && (5..=7).contains(&pop),
        TradeCode::Ag,
    );
    add(atm <= 3 && hyd <= 3 && pop >= 6, TradeCode::Na);

    if matches!(variant, Variant::Extended | Variant::SecondSurvey) {
        add(pop == 0 && gov == 0 && law == 0, TradeCode::Ba);
        add((10..=12).contains(&atm) && hyd >= 1, TradeCode::Fl);
        add(pop >= 9, TradeCode::Hi);
        add((1..=3).contains(&pop), TradeCode::Lo);
    }

    let industrial_atm = atm <= 2 || matches!(atm, 4 | 7 | 9);
    let rich_atm = matches!(atm, 6 | 8);
    let poor = (2..=5).contains(&atm) && hyd <= 3;

    match variant {
        Variant::Basic => {
            add(siz != 0 && hyd == 0, TradeCode::De);
            add(hyd == 10, TradeCode::Wa);
            add(poor, TradeCode::Po);
            add(industrial_atm && pop >= 9, TradeCode::In);
            add(pop <= 6, TradeCode::Ni);
            add(
                rich_atm && (6..=8).contains(&pop) && (4..=9).contains(&gov),
                TradeCode::Ri,
            );
        }
        Variant::Extended => {
            add(siz >= 2 && hyd == 0, TradeCode::De);
            add(hyd == 10, TradeCode::Wa);
            add(industrial_atm && pop >= 9, TradeCode::In);
            add((1..=6).contains(&pop), TradeCode::Ni);
            add(poor && pop > 0, TradeCode::Po);
            add(
                rich_atm && (6..=8).contains(&pop) && allegiance::is_aslan(input.allegiance),
                TradeCode::Ri,
            );
        }
        Variant::SecondSurvey => {
            let hz = input.hz_variance;
            let temperate_world =
                (6..=9).contains(&siz) && (4..=9).contains(&atm) && (3..=7).contains(&hyd);

            add((2..=9).contains(&atm) && hyd == 0, TradeCode::De);
            add(
                (3..=9).contains(&siz) && (3..=12).contains(&atm) && hyd == 10,
                TradeCode::Wa,
            );
            add(poor, TradeCode::Po);
            add(
                (atm <= 2 || matches!(atm, 4 | 7) || (9..=12).contains(&atm)) && pop >= 9,
                TradeCode::In,
            );
            add((4..=6).contains(&pop), TradeCode::Ni);
            add(
                (6..=8).contains(&siz) && matches!(atm, 5 | 6 | 8) && (5..=7).contains(&hyd),
                TradeCode::Ga,
            );
            add(
                (3..=12).contains(&siz)
                    && (matches!(atm, 2 | 4 | 7) || (9..=12).contains(&atm))
                    && hyd <= 2,
                TradeCode::He,
            );
            add(
                siz >= 10 && (3..=12).contains(&atm) && hyd == 10,
                TradeCode::Oc,
            );
            add(pop == 0 && gov == 0 && law == 0 && tech > 0, TradeCode::Di);
            add(pop == 8, TradeCode::Ph);
            add(
                (4..=9).contains(&atm) && (4..=8).contains(&hyd) && matches!(pop, 4 | 8),
                TradeCode::Pa,
            );
            add(
                matches!(atm, 2 | 3 | 10 | 11)
                    && (1..=5).contains(&hyd)
                    && (3..=6).contains(&pop)
                    && (6..=9).contains(&law),
                TradeCode::Px,
            );
            add(industrial_atm && matches!(pop, 7 | 8), TradeCode::Pi);
            add(rich_atm && matches!(pop, 5 | 9), TradeCode::Pr);
            add(rich_atm && (6..=9).contains(&pop), TradeCode::Ri);
            add(hz >= 2 && (2..=9).contains(&siz) && hyd != 0, TradeCode::Fr);
            add(hz == -1, TradeCode::Ho);
            add(hz == 1, TradeCode::Co);
            add(
                input.mainworld_type == MainworldType::CloseSatellite,
                TradeCode::Lk,
            );
            add(temperate_world && hz == -1, TradeCode::Tr);
            add(temperate_world && hz == 1, TradeCode::Tu);
            add(
                (1..=4).contains(&pop) && gov == 6 && (4..=5).contains(&law),
                TradeCode::Re,
            );
            add(
                input.mainworld_type == MainworldType::FarSatellite,
                TradeCode::Sa,
            );
        }
    }

    codes
}
