//! Oracle access errors.

use crate::error::{ErrorSeverity, WorldgenError};
use crate::hex::SubsectorIndex;

/// Errors that occur when looking data up through an oracle.
///
/// Generation treats all of these as lookup misses: the field is left blank
/// and a warning is logged.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    /// SectorOracle is not available in the environment.
    #[error("SectorOracle not available")]
    SectorsNotAvailable,

    /// StellarOracle is not available in the environment.
    #[error("StellarOracle not available")]
    StellarNotAvailable,

    #[error("sector '{0}' has no known abbreviation")]
    SectorNotFound(String),

    #[error("subsector {index} of '{sector}' not found")]
    SubsectorNotFound {
        sector: String,
        index: SubsectorIndex,
    },

    #[error("no stellar data for '{0}'")]
    StarNotFound(String),
}

impl WorldgenError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            SectorsNotAvailable => "ORACLE_SECTORS_NOT_AVAILABLE",
            StellarNotAvailable => "ORACLE_STELLAR_NOT_AVAILABLE",
            SectorNotFound(_) => "ORACLE_SECTOR_NOT_FOUND",
            SubsectorNotFound { .. } => "ORACLE_SUBSECTOR_NOT_FOUND",
            StarNotFound(_) => "ORACLE_STAR_NOT_FOUND",
        }
    }
}
