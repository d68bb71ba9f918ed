//! timeframes-core
//!
//! Regular time grids and area-preserving conversion of period-average series
//! between them.
//!
//! - `timeframe`: the [`Timeframe`] grid value type.
//! - `conversion`: the reconstruction, [`ConversionPlan`] construction and the
//!   cold [`convert`] entry point.
//!
//! Everything here is synchronous, allocation-bounded by the input size and
//! free of shared mutable state; memoization of plans lives in
//! `timeframes-cache`.
#![warn(missing_docs)]

/// Conversion of period averages between grids.
pub mod conversion;
mod timeframe;

pub use conversion::{
    ConversionPlan, MIN_SOURCE_SAMPLES, check_overlap, convert, linearize, target_len,
};
pub use timeframe::Timeframe;
pub use timeframes_types::{CacheConfig, TimeframeError, TimeseriesType};
