//! Error types for cropgen.
//!
//! Every failure in the generation pipeline is fatal to the caller: there is
//! no retry or partial-result path, so the variants exist to produce a clear
//! message rather than to drive recovery.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for cropgen operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The end of the calendar window precedes its start.
    #[error("invalid date range: end {end} is before start {start}")]
    InvalidDateRange {
        /// First day of the requested window.
        start: NaiveDate,
        /// Last day of the requested window.
        end: NaiveDate,
    },

    /// A date offset fell outside the range chrono can represent.
    #[error("date out of range: {start} + {days} days")]
    DateOutOfRange {
        /// Date the offset was applied to.
        start: NaiveDate,
        /// Offset in days.
        days: u64,
    },

    /// A uniform sampling range is empty, inverted or not finite.
    ///
    /// Ranges are half-open, so `low` must be strictly below `high`.
    #[error("invalid range for {name}: [{low}, {high})")]
    InvalidRange {
        /// Name of the sampled quantity.
        name: &'static str,
        /// Inclusive lower bound.
        low: f64,
        /// Exclusive upper bound.
        high: f64,
    },

    /// A sampled or supplied parameter cannot drive its distribution.
    #[error("invalid {name} {value}: {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value is rejected.
        reason: &'static str,
    },
}

/// Convenience type alias for Results using the cropgen Error type.
pub type Result<T> = std::result::Result<T, Error>;
