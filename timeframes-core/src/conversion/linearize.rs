//! Piecewise-linear reconstruction of a period-average series.
//!
//! A series of `n` averages on a grid with period `p` is represented by
//! `2n + 1` knots at `start + j * p / 2`: even `j` are period edges, odd `j`
//! are period midpoints. Knot values are chosen so the linear interpolant
//! integrates to exactly `v[i] * p` over every source period:
//!
//! - interior edge between periods `i` and `i + 1`: `(v[i] + v[i+1]) / 2`
//! - outer edges: `2 v[0] - e[0]` and `2 v[n-1] - e[n-2]`
//! - first/last midpoint: the period's own average
//! - interior midpoint: `(4 v[i] - e[i-1] - e[i]) / 2`
//!
//! Every knot is a fixed linear combination of at most three source values,
//! which is what lets a conversion be precomputed as a weight plan.

use crate::TimeframeError;

use super::MIN_SOURCE_SAMPLES;

/// A knot value expressed as `sum(coefficient * v[index])`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Knot {
    terms: [(usize, f64); 3],
    count: usize,
}

impl Knot {
    const fn one(i: usize) -> Self {
        Self {
            terms: [(i, 1.0), (0, 0.0), (0, 0.0)],
            count: 1,
        }
    }

    const fn two(a: (usize, f64), b: (usize, f64)) -> Self {
        Self {
            terms: [a, b, (0, 0.0)],
            count: 2,
        }
    }

    const fn three(a: (usize, f64), b: (usize, f64), c: (usize, f64)) -> Self {
        Self {
            terms: [a, b, c],
            count: 3,
        }
    }

    pub(crate) fn terms(&self) -> &[(usize, f64)] {
        &self.terms[..self.count]
    }

    fn eval(&self, values: &[f64]) -> f64 {
        self.terms().iter().map(|&(i, c)| c * values[i]).sum()
    }
}

/// Coefficients of knot `j` (`0..=2n`) for a series of `n >= 2` values.
pub(crate) fn knot(j: usize, n: usize) -> Knot {
    debug_assert!(n >= 2 && j <= 2 * n);
    let i = j / 2;
    if j % 2 == 1 {
        if i == 0 || i == n - 1 {
            Knot::one(i)
        } else {
            Knot::three((i - 1, -0.25), (i, 1.5), (i + 1, -0.25))
        }
    } else if i == 0 {
        Knot::two((0, 1.5), (1, -0.5))
    } else if i == n {
        Knot::two((n - 1, 1.5), (n - 2, -0.5))
    } else {
        Knot::two((i - 1, 0.5), (i, 0.5))
    }
}

/// Evaluate all `2n + 1` knot values of the reconstruction of `values`.
///
/// Knot `j` sits at `start_time + j * period_length / 2` of the grid the
/// values are defined on.
///
/// # Errors
/// Returns `TimeframeError::InsufficientData` for fewer than three values and
/// `TimeframeError::NonFiniteValue` if any value is NaN or infinite.
///
/// ```
/// use timeframes_core::conversion::linearize;
///
/// let knots = linearize(&[1.0, 5.0, 3.0]).unwrap();
/// assert_eq!(knots, vec![-1.0, 1.0, 3.0, 6.5, 4.0, 3.0, 2.0]);
/// ```
pub fn linearize(values: &[f64]) -> Result<Vec<f64>, TimeframeError> {
    let n = values.len();
    if n < MIN_SOURCE_SAMPLES {
        return Err(TimeframeError::insufficient(MIN_SOURCE_SAMPLES, n));
    }
    super::ensure_finite(values)?;
    Ok((0..=2 * n).map(|j| knot(j, n).eval(values)).collect())
}
