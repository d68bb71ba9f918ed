//! Run with `--features tracing` and e.g. `RUST_LOG=trace` to see plan
//! construction and cache lookups.
use timeframes::{Timeframe, TimeframeConverter};
use tracing_subscriber::fmt::format::FmtSpan;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .with_span_events(FmtSpan::ENTER | FmtSpan::EXIT)
        .try_init();

    let source = Timeframe::new(0, 10)?;
    let target = Timeframe::new(4, 7)?;
    let converter = TimeframeConverter::new(source, target)?;

    // Cold lookup builds the plan, the second call hits the cache.
    let values = [1.0, 5.0, 3.0, 5.0, 7.0, 3.0, 2.0, 9.0];
    let _ = converter.convert_from(&values)?;
    let _ = converter.convert_from(&values)?;

    // Rejected construction logs a warning.
    let _ = TimeframeConverter::new(source, Timeframe::new(-1000, 7)?);

    Ok(())
}
