// Shared fixtures so tests can `use helpers::*;`
#![allow(dead_code)]

use timeframes::Timeframe;

/// Input of the reference scenario on grid `(0, 10)`.
pub const REFERENCE_INPUT: [f64; 8] = [1.0, 5.0, 3.0, 5.0, 7.0, 3.0, 2.0, 9.0];

/// Expected output of the reference scenario on grid `(4, 7)`.
pub const REFERENCE_OUTPUT: [f64; 11] = [
    2.021_428_57,
    5.378_571_43,
    3.428_571_43,
    3.342_857_14,
    5.1,
    7.185_714_29,
    5.446_428_57,
    2.496_428_57,
    1.207_142_86,
    5.592_857_14,
    10.4,
];

/// Period lengths used when sweeping over grid pairs.
pub const PERIODS: &[i64] = &[1, 2, 5, 7, 10, 100];

/// Build a grid without unwrap noise in tests.
pub fn tf(start: i64, period: i64) -> Timeframe {
    Timeframe::new(start, period).unwrap()
}

/// Source grid of the reference scenario.
pub fn reference_source() -> Timeframe {
    tf(0, 10)
}

/// Target grid of the reference scenario.
pub fn reference_target() -> Timeframe {
    tf(4, 7)
}

/// Assert element-wise agreement within `1e-6` relative tolerance.
pub fn assert_close(actual: &[f64], expected: &[f64]) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "length mismatch: {actual:?} vs {expected:?}"
    );
    for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
        let tol = 1e-6 * e.abs().max(1.0);
        assert!(
            (a - e).abs() <= tol,
            "value {i} differs: got {a}, expected {e}"
        );
    }
}
