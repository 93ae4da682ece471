//! Dimval demonstration
//!
//! Walks the quantity type through its three construction paths and its
//! arithmetic surface. Not reusable library code; the interesting parts
//! live in the `dimval` crate.

use std::env;

use dimval::{BaseUnit, DimvalError, Quantity};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), DimvalError> {
    // Initialize logging
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    info!("dimval demo v{}", env!("CARGO_PKG_VERSION"));

    // The three construction paths.
    let one_gram: Quantity = "1 g".parse()?;
    let three_grams: Quantity = "3.0 g".parse()?;
    let two_meters = Quantity::new(2.0, BaseUnit::Meter);
    let one_kilogram = Quantity::from_token(1.0, "Kg")?;

    println!("{three_grams}");
    println!("{}", three_grams.add(&one_gram)?);
    println!("{}", two_meters.negated());
    println!("{one_kilogram}");

    // Scalar arithmetic keeps the unit.
    let scaled = Quantity::new(5.0, BaseUnit::Meter).scale(3.0).div_scalar(5.0);
    println!("{scaled}");

    // Same-unit comparison and ratio.
    info!("3 g vs 1 g: {:?}", three_grams.compare(&one_gram)?);
    info!("1 Kg / 1 g = {}", one_kilogram.ratio(&one_gram)?);

    // Mixing dimensions is rejected, not coerced.
    match two_meters.add(&one_gram) {
        Ok(sum) => println!("{sum}"),
        Err(err) => info!("rejected: {err}"),
    }

    if let Ok(json) = serde_json::to_string(&one_kilogram) {
        info!("as json: {json}");
    }

    Ok(())
}
