use std::fmt;

use chrono::{DateTime, TimeDelta, Utc};
use serde::{Deserialize, Serialize};

use crate::{TimeframeError, TimeseriesType};

/// A regular, discrete time axis: an origin and a fixed period length.
///
/// Times are plain `i64` offsets in whatever unit the caller uses consistently
/// (seconds when built through [`Timeframe::from_datetime`]). Period `k` covers
/// the half-open interval `[stop_time(k), stop_time(k + 1))`.
///
/// Equality and hashing are structural over `(start_time, period_length)`,
/// which is what conversion plans are keyed on.
///
/// ```
/// use timeframes_core::Timeframe;
///
/// let tf = Timeframe::new(4, 7).unwrap();
/// assert_eq!(tf.stop_time(11), 81);
/// assert_eq!(tf.length_until(80), 11);
/// assert_eq!(tf.to_string(), "Timeframe(start_time=4, period_length=7)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawTimeframe")]
pub struct Timeframe {
    start_time: i64,
    period_length: i64,
}

#[derive(Deserialize)]
struct RawTimeframe {
    start_time: i64,
    period_length: i64,
}

impl TryFrom<RawTimeframe> for Timeframe {
    type Error = TimeframeError;

    fn try_from(raw: RawTimeframe) -> Result<Self, Self::Error> {
        Self::new(raw.start_time, raw.period_length)
    }
}

impl Timeframe {
    /// Create a grid starting at `start_time` with periods of `period_length`.
    ///
    /// # Errors
    /// Returns `TimeframeError::InvalidPeriod` if `period_length <= 0`.
    pub fn new(start_time: i64, period_length: i64) -> Result<Self, TimeframeError> {
        if period_length <= 0 {
            return Err(TimeframeError::InvalidPeriod { period_length });
        }
        Ok(Self {
            start_time,
            period_length,
        })
    }

    /// Create a grid in whole seconds from a UTC origin and a period duration.
    ///
    /// # Errors
    /// Returns `TimeframeError::InvalidArg` if `period` carries a sub-second
    /// component, and `TimeframeError::InvalidPeriod` if it is not positive.
    pub fn from_datetime(start: DateTime<Utc>, period: TimeDelta) -> Result<Self, TimeframeError> {
        if period.subsec_nanos() != 0 {
            return Err(TimeframeError::InvalidArg(format!(
                "period must be a whole number of seconds, got {period}"
            )));
        }
        Self::new(start.timestamp(), period.num_seconds())
    }

    /// Origin of the grid.
    #[must_use]
    pub const fn start_time(&self) -> i64 {
        self.start_time
    }

    /// Length of every period.
    #[must_use]
    pub const fn period_length(&self) -> i64 {
        self.period_length
    }

    /// Time at which the `n`-th period ends: `start_time + n * period_length`.
    ///
    /// Saturates at the `i64` bounds.
    #[must_use]
    pub fn stop_time(&self, n: usize) -> i64 {
        let span = i128::from(self.period_length).saturating_mul(n as i128);
        saturate(i128::from(self.start_time).saturating_add(span))
    }

    /// Smallest number of periods `n` such that `stop_time(n) >= t`.
    ///
    /// Returns `0` when `t <= start_time`.
    #[must_use]
    pub fn length_until(&self, t: i64) -> usize {
        let span = i128::from(t) - i128::from(self.start_time);
        if span <= 0 {
            return 0;
        }
        let period = i128::from(self.period_length);
        let periods = (span + period - 1) / period;
        usize::try_from(periods).unwrap_or(usize::MAX)
    }

    /// Bounds `[start, end)` of period `k`.
    #[must_use]
    pub fn period_bounds(&self, k: usize) -> (i64, i64) {
        (self.stop_time(k), self.stop_time(k + 1))
    }

    /// The time axis a series of `count` values of the given kind is tagged with.
    ///
    /// Average series get every period boundary (`count + 1` points), point
    /// series get one instant per period start (`count` points).
    #[must_use]
    pub fn time_points(&self, count: usize, kind: TimeseriesType) -> Vec<i64> {
        (0..kind.time_point_count(count))
            .map(|k| self.stop_time(k))
            .collect()
    }
}

fn saturate(t: i128) -> i64 {
    i64::try_from(t).unwrap_or(if t < 0 { i64::MIN } else { i64::MAX })
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Timeframe(start_time={}, period_length={})",
            self.start_time, self.period_length
        )
    }
}
