use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the timeframes workspace.
///
/// Two classes of failure exist. Insufficient-data errors are actionable: the
/// caller has to supply more history or pick a grid pair that overlaps. Every
/// other variant is a contract violation by the caller (bad period, non-finite
/// values, mismatched lengths).
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TimeframeError {
    /// Fewer source values than the conversion needs to build a reconstruction.
    #[error("insufficient data: need at least {required} values, got {actual}")]
    InsufficientData {
        /// Minimum number of values required.
        required: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// The target grid can never be reached by data on the source grid.
    #[error("insufficient data: {target_grid} does not overlap data on {source_grid}")]
    NoOverlap {
        /// Display form of the grid the data lives on.
        source_grid: String,
        /// Display form of the grid that was requested.
        target_grid: String,
    },

    /// A grid was described with a non-positive period length.
    #[error("invalid period length: {period_length} (must be > 0)")]
    InvalidPeriod {
        /// The rejected period length.
        period_length: i64,
    },

    /// An input value is NaN or infinite.
    #[error("non-finite value at index {index}")]
    NonFiniteValue {
        /// Position of the first offending value.
        index: usize,
    },

    /// A plan was applied to a sequence of a different length than it was built for.
    #[error("length mismatch: expected {expected} values, got {actual}")]
    LengthMismatch {
        /// Length the plan was built for.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),
}

impl TimeframeError {
    /// Helper: build an `InsufficientData` error.
    #[must_use]
    pub const fn insufficient(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Helper: build a `NoOverlap` error from the two grid descriptions.
    pub fn no_overlap(source: impl ToString, target: impl ToString) -> Self {
        Self::NoOverlap {
            source_grid: source.to_string(),
            target_grid: target.to_string(),
        }
    }

    /// Returns true for the actionable "extend the input series" class of errors.
    #[must_use]
    pub const fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData { .. } | Self::NoOverlap { .. })
    }

    /// Returns true if this error signals a caller contract violation.
    #[must_use]
    pub const fn is_domain(&self) -> bool {
        !self.is_insufficient_data()
    }
}
