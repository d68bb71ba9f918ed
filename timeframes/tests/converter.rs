mod helpers;

use helpers::*;
use timeframes::{Timeframe, TimeframeConverter, TimeframeError};

#[test]
fn construction_rejects_target_far_before_source() {
    for &sp in PERIODS {
        for &tp in PERIODS {
            let err = TimeframeConverter::new(tf(0, sp), tf(-1000, tp)).unwrap_err();
            assert!(
                err.is_insufficient_data(),
                "source period {sp}, target period {tp}: {err}"
            );
        }
    }
}

#[test]
fn construction_accepts_target_starting_inside_first_period() {
    for &sp in PERIODS {
        for &tp in PERIODS {
            assert!(TimeframeConverter::new(tf(0, sp), tf(1 - tp, tp)).is_ok());
            assert!(TimeframeConverter::new(tf(0, sp), tf(1000, tp)).is_ok());
        }
    }
}

#[test]
fn target_period_ending_at_source_start_is_rejected() {
    let err = TimeframeConverter::new(tf(0, 10), tf(-7, 7)).unwrap_err();
    assert!(matches!(err, TimeframeError::NoOverlap { .. }));
}

#[test]
fn lengths_of_reference_pair() {
    let c = TimeframeConverter::new(reference_source(), reference_target()).unwrap();
    assert_eq!(c.get_target_len(8), 11);
    assert_eq!(c.get_source_len(11), 9);
    assert_eq!(c.get_target_len(0), 0);
}

#[test]
fn convert_from_matches_reference() {
    let c = TimeframeConverter::new(reference_source(), reference_target()).unwrap();
    let out = c.convert_from(&REFERENCE_INPUT).unwrap();
    assert_close(&out, &REFERENCE_OUTPUT);
}

#[test]
fn convert_to_follows_length_law() {
    let c = TimeframeConverter::new(reference_source(), reference_target()).unwrap();
    let out = c.convert_from(&REFERENCE_INPUT).unwrap();
    let back = c.convert_to(&out).unwrap();

    assert_eq!(back.len(), c.get_source_len(out.len()));
    assert_eq!(back.len(), 9);
    assert!(back.iter().all(|v| v.is_finite()));
}

#[test]
fn identity_converter_returns_input_exactly() {
    let grid = tf(3, 3);
    let c = TimeframeConverter::new(grid, grid).unwrap();
    let values = [0.1, 0.2, 0.3, 1e9, -4.25];
    assert_eq!(c.convert_from(&values).unwrap(), values);
    assert_eq!(c.convert_to(&values).unwrap(), values);
}

#[test]
fn short_series_are_insufficient_in_both_directions() {
    let c = TimeframeConverter::new(reference_source(), reference_target()).unwrap();
    for n in 0..3 {
        let values = vec![1.0; n];
        match c.convert_from(&values) {
            Err(TimeframeError::InsufficientData { required, actual }) => {
                assert_eq!((required, actual), (3, n));
            }
            other => panic!("expected InsufficientData for {n} values, got {other:?}"),
        }
        assert!(c.convert_to(&values).unwrap_err().is_insufficient_data());
    }
    assert!(c.convert_from(&[1.0, 2.0, 3.0]).is_ok());
}

#[test]
fn convert_to_checks_mirrored_overlap() {
    // Forward is fine, but data on the late-starting target never reaches the
    // first source period.
    let c = TimeframeConverter::new(tf(0, 10), tf(1000, 5)).unwrap();
    let err = c.convert_to(&[1.0, 2.0, 3.0]).unwrap_err();
    assert!(matches!(err, TimeframeError::NoOverlap { .. }));
}

#[test]
fn data_ending_before_target_is_insufficient() {
    let c = TimeframeConverter::new(tf(0, 10), tf(1000, 5)).unwrap();
    assert_eq!(c.get_target_len(3), 0);
    let err = c.convert_from(&[1.0, 2.0, 3.0]).unwrap_err();
    assert!(err.is_insufficient_data());
}

#[test]
fn non_finite_values_are_domain_errors() {
    let c = TimeframeConverter::new(reference_source(), reference_target()).unwrap();
    let err = c.convert_from(&[1.0, f64::NAN, 3.0]).unwrap_err();
    assert_eq!(err, TimeframeError::NonFiniteValue { index: 1 });
    assert!(err.is_domain());
}

#[test]
fn invalid_period_is_a_domain_error() {
    let err = Timeframe::new(0, 0).unwrap_err();
    assert!(err.is_domain());
    assert!(Timeframe::new(0, -5).unwrap_err().is_domain());
}

#[test]
fn reversed_swaps_direction_and_shares_cache() {
    let c = TimeframeConverter::new(reference_source(), reference_target()).unwrap();
    let r = c.reversed().unwrap();

    assert_eq!(r.source(), c.target());
    assert_eq!(r.target(), c.source());
    assert!(std::sync::Arc::ptr_eq(r.cache(), c.cache()));

    let out = c.convert_from(&REFERENCE_INPUT).unwrap();
    assert_eq!(r.convert_from(&out).unwrap(), c.convert_to(&out).unwrap());
    assert_eq!(c.cache().stats().hits, 1, "reverse plan should be shared");
}

#[test]
fn reversed_validates_swapped_pair() {
    let c = TimeframeConverter::new(tf(0, 10), tf(1000, 5)).unwrap();
    assert!(c.reversed().unwrap_err().is_insufficient_data());
}
