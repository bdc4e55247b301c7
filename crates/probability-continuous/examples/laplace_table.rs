//! Prints a density / distribution table for a Laplace distribution
//!
//! Parameters are read as JSON from the first argument, for example:
//!
//! ```text
//! RUST_LOG=debug cargo run --example laplace_table -- '{"location": 2.0, "scale": 3.0}'
//! ```

use anyhow::Result;
use probability_continuous::{Laplace, LaplaceParams};
use probability_core::{ContinuousDistribution, Distribution};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let params: LaplaceParams = match std::env::args().nth(1) {
        Some(json) => serde_json::from_str(&json)?,
        None => LaplaceParams::default(),
    };
    let laplace = Laplace::try_from(params)?;
    info!(
        location = laplace.location(),
        scale = laplace.scale(),
        "evaluating {}",
        laplace.name()
    );

    println!("=== {laplace} ===");
    println!(
        "mean: {:.4}, variance: {:.4}, entropy: {:.4}",
        laplace.mean(),
        laplace.variance(),
        laplace.entropy()
    );

    println!("\n{:>10} {:>12} {:>12}", "x", "pdf", "cdf");
    for step in -6..=6 {
        let x = laplace.location() + step as f64 * 0.5 * laplace.scale();
        let (density, probability) = (laplace.pdf(x)?, laplace.cdf(x)?);
        println!("{x:>10.4} {density:>12.6} {probability:>12.6}");
    }

    println!("\nQuartiles:");
    for p in [0.25, 0.5, 0.75] {
        println!("  p = {p:.2}: {:.4}", laplace.inverse_cdf(p)?);
    }

    // Out-of-domain queries surface as errors rather than NaN
    if let Err(err) = laplace.pdf(f64::NAN) {
        println!("\nRejected query: {err}");
    }

    Ok(())
}
