//! Reference data for world generation and loaders for it.
//!
//! This crate provides the data-driven collaborators of `worldgen-core`:
//! - Sector catalogues (RON), answering [`worldgen_core::SectorOracle`]
//! - Stellar tables (RON), answering [`worldgen_core::StellarOracle`]
//! - Generator configuration (TOML)
//!
//! A small catalogue and a complete stellar table are bundled with the crate
//! and used whenever no data directory provides its own.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{
    ConfigLoader, ContentFactory, LoadResult, SectorCatalog, SectorEntry, SectorLoader,
    StellarLoader, StellarTable,
};
