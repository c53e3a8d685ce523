//! Procedural mainworld and star system generation for Traveller-style
//! settings.
//!
//! `worldgen-core` holds the rules for three rule sets (Classic Traveller
//! Book 3, MegaTraveller and Traveller5 Second Survey) and nothing else: no
//! file or network access. Reference data such as sector names and stellar
//! orbit tables is reached through the oracle traits in [`oracle`], and every
//! random decision goes through a caller supplied [`Dice`].
//!
//! A world is produced by [`WorldGenerator::generate`], listed with
//! [`World::to_tab_line`] and described with [`World::summary`]. Whole
//! sectors are rolled with [`SectorGenerator`].
pub mod allegiance;
pub mod config;
pub mod dice;
pub mod ehex;
pub mod error;
pub mod hex;
pub mod oracle;
pub mod sector;
pub mod stellar;
pub mod world;

pub use config::{GeneratorConfig, StarDensity};
pub use dice::{Dice, PcgDice, compute_seed};
pub use ehex::Ehex;
pub use error::{ErrorSeverity, WorldgenError};
pub use hex::{HexLoc, HexLocError, Scale, SubsectorIndex, sort_listing};
pub use oracle::{
    Env, OracleError, SectorOracle, StellarDetail, StellarOracle, Subsector, WorldEnv,
};
pub use sector::{Sector, SectorGenerator};
pub use stellar::{
    Luminosity, MainworldType, SatelliteOrbit, SpectralClass, Star, StarKind, StarSystem,
    parse_stars,
};
pub use world::{
    Bases, Extensions, GenerationError, ParseError, Pbg, Satellite, Starport, Summary, TradeCode,
    TradeCodes, Traffic, TravelZone, Uwp, Variant, World, WorldGenerator, WorldRequest, header,
};
