//! Error types for countypop.

use thiserror::Error;

/// Result type alias for query engine operations.
pub type Result<T> = std::result::Result<T, QueryError>;

/// Errors raised by the county query engine.
///
/// Each variant carries the offending value rather than a pre-rendered
/// message so callers can format it however they like.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum QueryError {
    /// Filtering by year left nothing.
    #[error("No counties found with the provided year ({year})")]
    NoRecordsForYear {
        /// The requested year.
        year: i32,
    },

    /// The allowed absolute distance was negative (or NaN).
    #[error("Population margin is invalid ({margin})")]
    InvalidPopulationMargin {
        /// The rejected margin.
        margin: f64,
    },

    /// The closest county lies further than the allowed distance from the target.
    #[error("No counties found with a tolerable absolute distance ({target})")]
    NoCountyWithinMargin {
        /// The target population the search was centered on.
        target: f64,
    },

    /// The operation needs at least one record.
    #[error("No county records to query")]
    EmptyInput,

    /// An explicit target population was NaN or infinite.
    #[error("Target population is invalid ({target})")]
    InvalidTargetPopulation {
        /// The rejected target.
        target: f64,
    },
}

/// Errors that can occur while coercing a raw population value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PopulationError {
    /// The value was a string that does not parse as a number.
    #[error("Population is not a number: {0:?}")]
    NotANumber(String),

    /// The value was below zero.
    #[error("Population cannot be negative: {0}")]
    Negative(f64),

    /// The value was NaN or infinite.
    #[error("Population must be finite")]
    NotFinite,
}
