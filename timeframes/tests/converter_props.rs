use proptest::prelude::*;
use timeframes::{Timeframe, TimeframeConverter, convert};

fn arb_grid() -> impl Strategy<Value = Timeframe> {
    (-50i64..50, 1i64..20).prop_map(|(s, p)| Timeframe::new(s, p).unwrap())
}

fn arb_values() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(-1.0e3f64..1.0e3, 3..24)
}

proptest! {
    #[test]
    fn output_length_law(s in arb_grid(), t in arb_grid(), values in arb_values()) {
        if let Ok(c) = TimeframeConverter::new(s, t) {
            let expected = t.length_until(s.stop_time(values.len()));
            prop_assert_eq!(c.get_target_len(values.len()), expected);
            if let Ok(out) = c.convert_from(&values) {
                prop_assert_eq!(out.len(), expected);
            }
        }
    }

    #[test]
    fn source_len_rederives_from_target_len(s in arb_grid(), t in arb_grid(), n in 0usize..200) {
        if let Ok(c) = TimeframeConverter::new(s, t) {
            let m = c.get_target_len(n);
            prop_assert_eq!(c.get_source_len(m), s.length_until(t.stop_time(m)));
        }
    }

    #[test]
    fn converter_agrees_with_cold_conversion(
        s in arb_grid(),
        t in arb_grid(),
        values in arb_values(),
    ) {
        if let Ok(c) = TimeframeConverter::new(s, t) {
            prop_assert_eq!(c.convert_from(&values), convert(&values, &s, &t));
            prop_assert_eq!(c.convert_from(&values), convert(&values, &s, &t));
            prop_assert_eq!(c.convert_to(&values), convert(&values, &t, &s));
        }
    }

    #[test]
    fn identity_on_any_grid(g in arb_grid(), values in arb_values()) {
        let c = TimeframeConverter::new(g, g).unwrap();
        prop_assert_eq!(c.convert_from(&values).unwrap(), values.clone());
        prop_assert_eq!(c.convert_to(&values).unwrap(), values);
    }
}
