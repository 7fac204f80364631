//! Bin a power-law frequency table with several policies
//!
//! Run with `RUST_LOG=debug` to see the maximum bin count search.

use databin_binning::{
    LinearBinning, LogarithmicBinning, MaximumLinearBinning, MaximumLogarithmicBinning,
};
use databin_frequency::{Distribution, Frequency};
use tracing_subscriber::EnvFilter;

fn print(title: &str, distribution: &Distribution) {
    println!("{title}");
    for (center, weight) in distribution.map() {
        println!("  {:>10.3}  {:>12.3}", center.0, weight);
    }
    println!();
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut frequency = Frequency::new();
    for i in 1..100u64 {
        let occurrences = 10_000 / (i * i);
        for _ in 0..occurrences {
            frequency.add(i as f64)?;
        }
    }
    println!(
        "{} observations over {} distinct values, mode {}\n",
        frequency.sum(),
        frequency.len(),
        frequency.mode()?
    );

    print("Linear, 10 bins", &frequency.bin(&LinearBinning::new(10)?)?);
    print(
        "Logarithmic, 10 bins, base 10",
        &frequency.bin(&LogarithmicBinning::new(10, 10.0)?)?,
    );
    print("Maximum linear", &frequency.bin(&MaximumLinearBinning)?);
    print(
        "Maximum logarithmic, base 2",
        &frequency.bin(&MaximumLogarithmicBinning::new(2.0)?)?,
    );
    print(
        "Maximum logarithmic, base 2, normalized",
        &frequency.bin(&MaximumLogarithmicBinning::new(2.0)?)?.normalize()?,
    );

    Ok(())
}
