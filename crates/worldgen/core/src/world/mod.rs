//! Mainworlds: their profile, the rules that roll them, and how they are
//! listed.
pub mod bases;
pub mod classification;
pub mod extensions;
pub mod generator;
pub mod rules;
pub mod serialize;
pub mod summary;
pub mod uwp;
pub mod variant;
pub mod zone;

pub use bases::Bases;
pub use classification::{ClassifyInput, TradeCode, TradeCodes, classify};
pub use extensions::{Cultural, Economic, Extensions, Importance};
pub use generator::WorldGenerator;
pub use rules::{Ruleset, ruleset};
pub use serialize::{ParseError, header};
pub use summary::Summary;
pub use uwp::{Pbg, ProfileError, Starport, Uwp};
pub use variant::{Traffic, Variant};
pub use zone::TravelZone;

use crate::allegiance;
use crate::error::{ErrorSeverity, WorldgenError};
use crate::hex::{HexLoc, HexLocError, SubsectorIndex};
use crate::stellar::{MainworldType, SatelliteOrbit, StarSystem};

/// A generated (or re-read) mainworld and what is known about its system.
///
/// Fields that only the Second Survey rules produce keep their defaults on
/// Basic and Extended worlds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct World {
    pub variant: Variant,
    pub name: String,
    pub sector: String,
    /// Listing abbreviation of `sector`, e.g. "Spin".
    pub sector_abbrev: String,
    /// Subsector name; empty when unknown.
    pub subsector: String,
    pub subsector_index: SubsectorIndex,
    pub hex: HexLoc,
    pub uwp: Uwp,
    pub pbg: Pbg,
    pub trade_codes: TradeCodes,
    pub zone: TravelZone,
    pub bases: Bases,
    pub allegiance: String,
    pub nobility: String,
    pub stars: StarSystem,
    pub extensions: Extensions,
    /// Worlds in the system, mainworld included.
    pub worlds: u32,
    pub resource_units: i32,
    pub hz_variance: i32,
    /// Orbit around the primary. `None` when the primary's habitable zone is unknown.
    pub orbit: Option<i32>,
    pub mainworld_type: MainworldType,
    pub satellite: Option<Satellite>,
}

/// Where a satellite mainworld sits around its host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Satellite {
    pub orbit: SatelliteOrbit,
    /// Host is a gas giant rather than a big planet.
    pub around_gas_giant: bool,
}

impl World {
    /// A world with only its identity filled in.
    pub fn new(variant: Variant, name: impl Into<String>, hex: HexLoc) -> Result<Self, HexLocError> {
        let subsector_index = hex.index().ok_or(HexLocError::WrongScale(hex.scale()))?;
        Ok(Self {
            variant,
            name: name.into(),
            sector: String::new(),
            sector_abbrev: String::new(),
            subsector: String::new(),
            subsector_index,
            hex,
            uwp: Uwp::default(),
            pbg: Pbg::default(),
            trade_codes: TradeCodes::new(),
            zone: TravelZone::default(),
            bases: Bases::empty(),
            allegiance: String::new(),
            nobility: String::new(),
            stars: StarSystem::default(),
            extensions: Extensions::default(),
            worlds: 0,
            resource_units: 0,
            hz_variance: 0,
            orbit: None,
            mainworld_type: MainworldType::default(),
            satellite: None,
        })
    }

    pub fn is_second_survey(&self) -> bool {
        self.variant == Variant::SecondSurvey
    }

    /// Resource units recomputed from the economic extension.
    pub fn calc_ru(&self) -> i32 {
        self.extensions.economic.resource_units()
    }
}

/// What to generate: identity, location and rule set.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldRequest {
    pub variant: Variant,
    pub name: String,
    /// Sector-scale "XXYY".
    pub hex: String,
    pub sector: String,
    /// Allegiance name or code. Basic worlds are always Imperial.
    pub allegiance: String,
    /// Shifts the starport roll. Standard when `None`.
    pub traffic: Option<Traffic>,
}

impl WorldRequest {
    pub fn new(
        variant: Variant,
        name: impl Into<String>,
        hex: impl Into<String>,
        sector: impl Into<String>,
    ) -> Self {
        Self {
            variant,
            name: name.into(),
            hex: hex.into(),
            sector: sector.into(),
            allegiance: allegiance::DEFAULT_CODE.to_owned(),
            traffic: None,
        }
    }

    pub fn with_allegiance(mut self, allegiance: impl Into<String>) -> Self {
        self.allegiance = allegiance.into();
        self
    }

    pub fn with_traffic(mut self, traffic: Traffic) -> Self {
        self.traffic = Some(traffic);
        self
    }

    /// The allegiance code recorded on the world.
    pub fn allegiance_code(&self) -> String {
        match self.variant {
            Variant::Basic => allegiance::DEFAULT_CODE.to_owned(),
            Variant::Extended => allegiance::basic_code(&self.allegiance)
                .map(str::to_owned)
                .unwrap_or_else(|| self.allegiance.clone()),
            Variant::SecondSurvey => self.allegiance.clone(),
        }
    }
}

/// Errors that stop a world from being generated.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GenerationError {
    #[error("invalid hex location: {0}")]
    InvalidHex(#[from] HexLocError),
}

impl WorldgenError for GenerationError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            GenerationError::InvalidHex(_) => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            GenerationError::InvalidHex(_) => "GEN_INVALID_HEX",
        }
    }
}
