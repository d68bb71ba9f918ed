use crate::{Timeframe, TimeframeError};

use super::linearize::knot;
use super::{MIN_SOURCE_SAMPLES, check_overlap, ensure_finite};

/// Precomputed linear mapping from `source_len` averages on `source` to the
/// corresponding averages on `target`.
///
/// Building a plan is the expensive part of a conversion; applying it is a
/// banded matrix-vector product. A plan only depends on the grid pair and the
/// input length, never on the values, so it can be memoized and shared.
///
/// ```
/// use timeframes_core::{ConversionPlan, Timeframe};
///
/// let source = Timeframe::new(0, 10).unwrap();
/// let target = Timeframe::new(0, 5).unwrap();
/// let plan = ConversionPlan::build(source, target, 8).unwrap();
/// assert_eq!(plan.target_len(), 16);
///
/// let out = plan.apply(&[1.0, 5.0, 3.0, 5.0, 7.0, 3.0, 2.0, 9.0]).unwrap();
/// assert_eq!(out[..4], [0.0, 2.0, 4.75, 5.25]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionPlan {
    source: Timeframe,
    target: Timeframe,
    source_len: usize,
    rows: Vec<PlanRow>,
}

/// Weights of one output value over a contiguous band of inputs.
#[derive(Debug, Clone, PartialEq, Default)]
struct PlanRow {
    offset: usize,
    weights: Vec<f64>,
}

impl PlanRow {
    fn add(&mut self, index: usize, weight: f64) {
        if self.weights.is_empty() {
            self.offset = index;
            self.weights.push(weight);
            return;
        }
        if index < self.offset {
            let grow = self.offset - index;
            self.weights.splice(0..0, std::iter::repeat_n(0.0, grow));
            self.offset = index;
        }
        let slot = index - self.offset;
        if slot >= self.weights.len() {
            self.weights.resize(slot + 1, 0.0);
        }
        self.weights[slot] += weight;
    }

    fn scale(&mut self, factor: f64) {
        for w in &mut self.weights {
            *w /= factor;
        }
    }

    fn dot(&self, values: &[f64]) -> f64 {
        self.weights
            .iter()
            .zip(&values[self.offset..])
            .map(|(w, v)| w * v)
            .sum()
    }
}

impl ConversionPlan {
    /// Build the plan converting `source_len` values from `source` to `target`.
    ///
    /// # Errors
    /// - `TimeframeError::InsufficientData` if `source_len < 3`.
    /// - `TimeframeError::NoOverlap` if the first target period ends at or
    ///   before the source start, or the data does not reach the target grid.
    pub fn build(
        source: Timeframe,
        target: Timeframe,
        source_len: usize,
    ) -> Result<Self, TimeframeError> {
        if source_len < MIN_SOURCE_SAMPLES {
            return Err(TimeframeError::insufficient(MIN_SOURCE_SAMPLES, source_len));
        }
        check_overlap(&source, &target)?;
        let target_len = super::target_len(&source, &target, source_len);
        if target_len == 0 {
            return Err(TimeframeError::no_overlap(source, target));
        }

        let rows = if source == target {
            (0..source_len)
                .map(|k| PlanRow {
                    offset: k,
                    weights: vec![1.0],
                })
                .collect()
        } else {
            (0..target_len)
                .map(|k| integrate_period(&source, &target, source_len, k))
                .collect()
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            source = %source,
            target = %target,
            source_len,
            target_len,
            "built conversion plan"
        );

        Ok(Self {
            source,
            target,
            source_len,
            rows,
        })
    }

    /// Grid the input values live on.
    #[must_use]
    pub const fn source(&self) -> Timeframe {
        self.source
    }

    /// Grid the output values live on.
    #[must_use]
    pub const fn target(&self) -> Timeframe {
        self.target
    }

    /// Number of input values this plan accepts.
    #[must_use]
    pub const fn source_len(&self) -> usize {
        self.source_len
    }

    /// Number of output values this plan produces.
    #[must_use]
    pub fn target_len(&self) -> usize {
        self.rows.len()
    }

    /// Apply the plan to a series of period averages on the source grid.
    ///
    /// # Errors
    /// - `TimeframeError::LengthMismatch` if `values.len() != self.source_len()`.
    /// - `TimeframeError::NonFiniteValue` if any value is NaN or infinite.
    pub fn apply(&self, values: &[f64]) -> Result<Vec<f64>, TimeframeError> {
        if values.len() != self.source_len {
            return Err(TimeframeError::LengthMismatch {
                expected: self.source_len,
                actual: values.len(),
            });
        }
        ensure_finite(values)?;
        Ok(self.rows.iter().map(|row| row.dot(values)).collect())
    }
}

/// Exact average of the reconstruction over target period `k`, clipped to the
/// support `[source.start, source.stop_time(n)]`, as weights over the inputs.
///
/// Positions are handled in doubled integer units relative to the source
/// start so knot `j` sits exactly at `j * period_length`.
fn integrate_period(source: &Timeframe, target: &Timeframe, n: usize, k: usize) -> PlanRow {
    let origin = i128::from(source.start_time());
    let support_end = i128::from(source.stop_time(n));
    let (lo, hi) = target.period_bounds(k);
    let lo = i128::from(lo).max(origin) - origin;
    let hi = i128::from(hi).min(support_end) - origin;
    debug_assert!(hi > lo, "target period {k} has no coverage");

    let p = i128::from(source.period_length());
    let (lo2, hi2) = (2 * lo, 2 * hi);
    let last_segment = 2 * n - 1;
    let mut j = usize::try_from(lo2 / p).unwrap_or(last_segment).min(last_segment);

    let mut row = PlanRow::default();
    loop {
        let x0 = j as i128 * p;
        if j > last_segment || x0 >= hi2 {
            break;
        }
        let seg_lo = lo2.max(x0);
        let seg_hi = hi2.min(x0 + p);
        if seg_hi > seg_lo {
            let width = (seg_hi - seg_lo) as f64 / 2.0;
            let u_mid = ((seg_lo - x0) + (seg_hi - x0)) as f64 / (2 * p) as f64;
            for &(i, c) in knot(j, n).terms() {
                row.add(i, c * width * (1.0 - u_mid));
            }
            for &(i, c) in knot(j + 1, n).terms() {
                row.add(i, c * width * u_mid);
            }
        }
        j += 1;
    }
    row.scale((hi - lo) as f64);
    row
}
