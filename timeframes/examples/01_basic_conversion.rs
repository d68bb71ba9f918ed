use timeframes::{Timeframe, TimeframeConverter};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Describe the two grids: ten-unit periods from 0, seven-unit periods from 4.
    let source = Timeframe::new(0, 10)?;
    let target = Timeframe::new(4, 7)?;

    // 2. Bind them; infeasible pairs are rejected here.
    let converter = TimeframeConverter::new(source, target)?;

    // 3. Convert period averages forward.
    let values = [1.0, 5.0, 3.0, 5.0, 7.0, 3.0, 2.0, 9.0];
    println!("{source} -> {target}");
    println!(
        "{} values become {}",
        values.len(),
        converter.get_target_len(values.len())
    );
    let out = converter.convert_from(&values)?;
    for (k, v) in out.iter().enumerate() {
        let (lo, hi) = target.period_bounds(k);
        println!("  [{lo:>3}, {hi:>3}) {v:>10.6}");
    }

    // 4. And back again.
    let back = converter.convert_to(&out)?;
    println!("back on {source}: {back:.4?}");

    Ok(())
}
