//! Common error infrastructure for worldgen-core.
//!
//! Domain-specific errors (e.g. [`HexLocError`](crate::HexLocError),
//! [`GenerationError`](crate::GenerationError)) live next to the code that
//! produces them. They all implement [`WorldgenError`] so callers can decide
//! how to react without matching on every variant.
//!
//! Not every failure is an error value:
//! - Lookup misses from oracles are logged and generation continues with a
//!   blank field.
//! - Unreadable tokens in serialized star lists, UWPs or trade codes are logged
//!   and skipped.
//! - Broken internal invariants panic.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the caller can retry or fall back to a default.
    ///
    /// Examples: oracle not configured, subsector not found
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed hex string, truncated tab line
    Validation,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all worldgen-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait WorldgenError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
