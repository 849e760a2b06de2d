//! Equal-width, quantile and centroid binning on a small sample.
//!
//! Run with `RUST_LOG=bucketize=trace` to watch the centroid iterations.

use bucketize::{Binner, CentroidBinner, Discretizer, EqualWidthBinner, QuantileBinner, Strategy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> bucketize::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bucketize=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let data = vec![43.0, 44.0, 15.0, 30.0, 35.0, 2.0, 18.0, 1.0, 19.0, 36.0];

    // --- Equal-width (k=3) ---
    let fit = EqualWidthBinner::new(3).fit(&data)?;
    println!("=== Equal-width (k=3) ===");
    print!("{fit}");
    // Asking for a bin that does not exist is an error, not a panic.
    if let Err(e) = fit.count(5) {
        println!("  bin 5: {e}");
    }

    // --- Quantile (k=3) ---
    let fit = QuantileBinner::new(3).fit(&data)?;
    println!("\n=== Quantile (k=3) ===");
    print!("{fit}");

    // --- Centroid (k=5) ---
    let fit = CentroidBinner::new(5).with_seed(42).fit(&data)?;
    println!("\n=== Centroid (k=5) ===");
    print!("{fit}");
    println!("Iterations: {} (converged: {})", fit.iterations(), fit.converged());
    print!("Cut:");
    for bin in fit.cut(&data) {
        print!(" {bin}");
    }
    println!();

    // --- Strategy picked from a string ---
    let strategy: Strategy = std::env::args()
        .nth(1)
        .as_deref()
        .unwrap_or("quantile")
        .parse()?;
    let bins = strategy.fit(&data, 4)?;
    println!("\n=== {strategy} (k=4) ===");
    for (value, bin) in data.iter().zip(bins.cut(&data)) {
        println!("  {value:5.1} => bin {bin}");
    }

    Ok(())
}
