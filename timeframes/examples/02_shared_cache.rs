use std::sync::Arc;

use timeframes::{CacheConfig, PlanCache, Timeframe, TimeframeConverter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // One cache for the whole application, bounded and with idle eviction.
    let cfg = CacheConfig {
        max_entries: 64,
        time_to_idle_ms: Some(60_000),
    };
    let cache = Arc::new(PlanCache::new(&cfg));

    // Hourly model output feeding a three-hourly and a daily component.
    let hourly = Timeframe::new(0, 3_600)?;
    let three_hourly = Timeframe::new(0, 10_800)?;
    let daily = Timeframe::new(0, 86_400)?;

    let to_3h = TimeframeConverter::builder(hourly, three_hourly)
        .shared_cache(Arc::clone(&cache))
        .build()?;
    let to_daily = TimeframeConverter::builder(hourly, daily)
        .shared_cache(Arc::clone(&cache))
        .build()?;

    for day in 0..3u32 {
        let temps: Vec<f64> = (0..48u32)
            .map(|h| {
                let phase = f64::from(h) / 24.0 * std::f64::consts::TAU;
                280.0 + f64::from(day) + 5.0 * phase.sin()
            })
            .collect();
        let coarse = to_3h.convert_from(&temps)?;
        let mean = to_daily.convert_from(&temps)?;
        println!(
            "batch {day}: {} three-hourly values, daily means {mean:.3?}",
            coarse.len()
        );
    }

    let stats = cache.stats();
    println!(
        "cache: {} hits, {} misses, {} plans",
        stats.hits, stats.misses, stats.entries
    );
    Ok(())
}
