//! Traits describing read-only reference data.
//!
//! Generation needs two kinds of outside knowledge: sector and subsector
//! names, and per-star orbit data. [`Env`] bundles the oracles providing them
//! so the generator never depends on where that data lives.
mod error;
mod sector;
mod stellar;

pub use error::OracleError;
pub use sector::{SectorOracle, Subsector, fallback_abbreviation};
pub use stellar::{StellarDetail, StellarOracle};

use crate::hex::SubsectorIndex;

/// Aggregates the oracles consulted during world generation.
#[derive(Debug)]
pub struct Env<'a, S, T>
where
    S: SectorOracle + ?Sized,
    T: StellarOracle + ?Sized,
{
    sectors: Option<&'a S>,
    stellar: Option<&'a T>,
}

pub type WorldEnv<'a> = Env<'a, dyn SectorOracle + 'a, dyn StellarOracle + 'a>;

impl<S, T> Clone for Env<'_, S, T>
where
    S: SectorOracle + ?Sized,
    T: StellarOracle + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for Env<'_, S, T>
where
    S: SectorOracle + ?Sized,
    T: StellarOracle + ?Sized,
{
}

impl<'a, S, T> Env<'a, S, T>
where
    S: SectorOracle + ?Sized,
    T: StellarOracle + ?Sized,
{
    pub fn new(sectors: Option<&'a S>, stellar: Option<&'a T>) -> Self {
        Self { sectors, stellar }
    }

    pub fn with_all(sectors: &'a S, stellar: &'a T) -> Self {
        Self::new(Some(sectors), Some(stellar))
    }

    pub fn empty() -> Self {
        Self {
            sectors: None,
            stellar: None,
        }
    }

    /// Returns the SectorOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::SectorsNotAvailable` if no sector oracle was provided.
    pub fn sectors(&self) -> Result<&'a S, OracleError> {
        self.sectors.ok_or(OracleError::SectorsNotAvailable)
    }

    /// Returns the StellarOracle, or an error if not available.
    ///
    /// # Errors
    ///
    /// Returns `OracleError::StellarNotAvailable` if no stellar oracle was provided.
    pub fn stellar(&self) -> Result<&'a T, OracleError> {
        self.stellar.ok_or(OracleError::StellarNotAvailable)
    }

    pub fn subsector(&self, sector: &str, index: SubsectorIndex) -> Result<Subsector, OracleError> {
        self.sectors()?
            .subsector(sector, index)
            .ok_or_else(|| OracleError::SubsectorNotFound {
                sector: sector.to_owned(),
                index,
            })
    }

    pub fn abbreviation(&self, sector: &str) -> Result<String, OracleError> {
        self.sectors()?
            .abbreviation(sector)
            .ok_or_else(|| OracleError::SectorNotFound(sector.to_owned()))
    }

    pub fn stellar_detail(&self, star: &str) -> Result<StellarDetail, OracleError> {
        self.stellar()?
            .stellar_detail(star)
            .ok_or_else(|| OracleError::StarNotFound(star.to_owned()))
    }
}

impl<'a, S, T> Env<'a, S, T>
where
    S: SectorOracle + 'a,
    T: StellarOracle + 'a,
{
    /// Converts this environment into a trait-object based `WorldEnv`.
    pub fn into_world_env(self) -> WorldEnv<'a> {
        let sectors: Option<&'a dyn SectorOracle> = self.sectors.map(|sectors| sectors as _);
        let stellar: Option<&'a dyn StellarOracle> = self.stellar.map(|stellar| stellar as _);
        Env::new(sectors, stellar)
    }
}
