//! Area-preserving conversion of period-average series between regular grids.
//!
//! The source averages are turned into a continuous piecewise-linear signal
//! (see [`linearize`]) whose integral over every source period equals that
//! period's average times its length. Each target period then receives the
//! exact average of that signal over the part of the period covered by the
//! source data.
//!
//! - `linearize`: knot values of the reconstruction
//! - `plan`: weight construction and application

/// Piecewise-linear reconstruction of period averages.
pub mod linearize;
/// Precomputed conversion weights.
pub mod plan;

pub use linearize::linearize;
pub use plan::ConversionPlan;

use crate::{Timeframe, TimeframeError};

/// Minimum number of source values a conversion accepts.
pub const MIN_SOURCE_SAMPLES: usize = 3;

/// Number of target periods needed to cover `source_len` source periods.
///
/// Equal to `target.length_until(source.stop_time(source_len))`.
#[must_use]
pub fn target_len(source: &Timeframe, target: &Timeframe, source_len: usize) -> usize {
    target.length_until(source.stop_time(source_len))
}

/// Check that data on `source` can ever reach the first period of `target`.
///
/// This is a static check on the two grids: the first target period must end
/// strictly after the source grid starts, otherwise no amount of source data
/// covers any part of it.
///
/// # Errors
/// Returns `TimeframeError::NoOverlap` when the check fails.
pub fn check_overlap(source: &Timeframe, target: &Timeframe) -> Result<(), TimeframeError> {
    if target.stop_time(1) <= source.start_time() {
        return Err(TimeframeError::no_overlap(source, target));
    }
    Ok(())
}

/// Convert period averages from `source` to `target` without any memoization.
///
/// Converting a series to its own grid returns it unchanged.
///
/// # Errors
/// - `TimeframeError::InsufficientData` for fewer than three values.
/// - `TimeframeError::NoOverlap` if the data cannot reach the target grid.
/// - `TimeframeError::NonFiniteValue` if any value is NaN or infinite.
///
/// ```
/// use timeframes_core::{Timeframe, convert};
///
/// let source = Timeframe::new(0, 10).unwrap();
/// let target = Timeframe::new(4, 7).unwrap();
/// let out = convert(&[1.0, 5.0, 3.0, 5.0, 7.0, 3.0, 2.0, 9.0], &source, &target).unwrap();
/// assert_eq!(out.len(), 11);
/// assert!((out[10] - 10.4).abs() < 1e-9);
/// ```
pub fn convert(
    values: &[f64],
    source: &Timeframe,
    target: &Timeframe,
) -> Result<Vec<f64>, TimeframeError> {
    ConversionPlan::build(*source, *target, values.len())?.apply(values)
}

pub(crate) fn ensure_finite(values: &[f64]) -> Result<(), TimeframeError> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(TimeframeError::NonFiniteValue { index }),
        None => Ok(()),
    }
}
