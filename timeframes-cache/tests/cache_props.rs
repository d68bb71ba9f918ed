use proptest::prelude::*;
use timeframes_cache::PlanCache;
use timeframes_core::{Timeframe, convert};

fn arb_grid() -> impl Strategy<Value = Timeframe> {
    (-30i64..30, 1i64..15).prop_map(|(s, p)| Timeframe::new(s, p).unwrap())
}

proptest! {
    #[test]
    fn cache_is_transparent(
        s in arb_grid(),
        t in arb_grid(),
        batches in proptest::collection::vec(
            proptest::collection::vec(-500.0f64..500.0, 0..12),
            1..6,
        ),
    ) {
        let cache = PlanCache::default();
        for values in &batches {
            let cached = cache.convert(values, &s, &t);
            let cold = convert(values, &s, &t);
            prop_assert_eq!(cached, cold);
        }
    }
}
