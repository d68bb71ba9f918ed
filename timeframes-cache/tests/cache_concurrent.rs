use std::sync::{Arc, Barrier};
use std::thread;

use timeframes_cache::PlanCache;
use timeframes_core::{Timeframe, convert};

#[test]
fn concurrent_cold_lookups_agree_on_one_plan() {
    let cache = Arc::new(PlanCache::default());
    let source = Timeframe::new(0, 10).unwrap();
    let target = Timeframe::new(4, 7).unwrap();
    let threads = 8;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|i| {
            let cache = Arc::clone(&cache);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let values: Vec<f64> = (0..64usize).map(|k| ((k * 7 + i) % 13) as f64).collect();
                barrier.wait();
                let out = cache.convert(&values, &source, &target).unwrap();
                (values, out, cache.plan(&source, &target, 64).unwrap())
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let first_plan = &results[0].2;
    for (values, out, plan) in &results {
        assert!(Arc::ptr_eq(first_plan, plan));
        assert_eq!(out, &convert(values, &source, &target).unwrap());
    }
    assert_eq!(cache.stats().entries, 1);
}
