//! Error types for unit parsing, conversion, and evaluation
//!
//! Every fallible operation in the crate reports one of these variants. All of
//! them are recoverable: the tool surface in [`crate::tools`] converts them to
//! `"Error: …"` strings rather than letting them cross the call boundary.

use thiserror::Error;

/// Errors produced by the unit, evaluation, and vector layers.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    /// A unit token or numeric prefix could not be parsed.
    #[error("unrecognized unit expression: {0}")]
    UnitParse(String),

    /// Conversion was attempted between units of different dimension.
    #[error("cannot convert '{from}' to '{to}': incompatible dimensions")]
    DimensionMismatch {
        /// Unit the quantity currently carries.
        from: String,
        /// Unit the caller asked for.
        to: String,
    },

    /// Both the dimension-aware and the dimensionless evaluator failed.
    ///
    /// Carries both underlying causes so neither is silently dropped.
    #[error("could not evaluate expression (units: {unit_cause}; numeric: {numeric_cause})")]
    Evaluation {
        /// Failure message from the dimension-aware evaluator.
        unit_cause: String,
        /// Failure message from the dimensionless fallback evaluator.
        numeric_cause: String,
    },

    /// A vector input's shape was not recognized.
    ///
    /// Only the strict resolution path returns this; the tolerant
    /// [`crate::vector::normalize`] degrades to a zero vector instead.
    #[error("unrecognized vector input: {0}")]
    VectorFormat(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
