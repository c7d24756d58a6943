//! Primitive Element Search
//!
//! This example demonstrates:
//! - Building GF(p^m) from a prime, a degree and an irreducible polynomial
//! - Searching the field for a primitive element
//! - Printing the tested powers with `--verbose`
//!
//! Run with: cargo run --example primitive_search -- 2 3 1011 --verbose
//!
//! Set `RUST_LOG=galoisgen=debug` (or `trace`) to see the search events.

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use galoisgen::FieldConfig;

#[derive(Parser, Debug)]
#[command(name = "primitive_search", about = "Find a primitive element of GF(p^m)")]
struct Cli {
    /// Characteristic of the field.
    prime: u64,
    /// Extension degree.
    degree: usize,
    /// Irreducible polynomial, ascending coefficients ("1011" is 1 + x^2 + x^3).
    modulus: String,
    /// Print every tested power g^d mod f(x).
    #[arg(long)]
    verbose: bool,
    /// Accepted for compatibility; has no effect on the result.
    #[arg(long)]
    all_degrees: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = FieldConfig::from_digits(cli.prime, cli.degree, &cli.modulus)
        .context("failed to parse the irreducible polynomial")?
        .verbose(cli.verbose)
        .all_degrees(cli.all_degrees);

    let mut field = config
        .build()
        .with_context(|| format!("invalid field GF({}^{})", cli.prime, cli.degree))?;

    println!("=== GF({}^{}) ===\n", field.characteristic(), field.degree());
    println!("Order: {}", field.order());
    println!("Multiplicative group order: {}", field.multiplicative_group_order());
    if let Some(f) = field.irreducible() {
        println!("f(x) = {}  [{}]\n", f, f.vector_form(field.degree() + 1));
    }

    let report = field
        .find_primitive_element(config.search_options())
        .context("primitive element search failed")?;

    for step in &report.trace {
        println!(
            "  ({})^{} mod f(x) = {}",
            step.candidate, step.exponent, step.residue
        );
    }
    if !report.trace.is_empty() {
        println!();
    }

    println!("Candidates tested: {}", report.candidates_tested);
    println!(
        "Primitive element: {}  [{}]",
        report.primitive,
        report.primitive.vector_form(field.degree())
    );

    Ok(())
}
