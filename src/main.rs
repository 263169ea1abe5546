//! Shopper Spectrum: customer segment prediction CLI
//!
//! This is the main entrypoint that wires artifact loading, prediction,
//! and report rendering.

use anyhow::Result;
use clap::Parser;
use shopper_spectrum::{
    artifacts::{default_artifact_dir, Artifacts},
    cli::Args,
    model::{predict_segment, CustomerFeatures},
    report::{explain, print_report},
    viz,
};
use std::time::Instant;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    if args.verbose {
        println!("Shopper Spectrum - Customer Segment Prediction");
        println!("==============================================\n");
        println!("The model groups customers into 5 segments by annual income and");
        println!("spending score. Typical dataset ranges: income 15-137k$, spending");
        println!("score 1-100, age 18-70. Age and gender are reference details only.\n");
    }

    for note in args.range_advisories() {
        warn!("{note}");
    }

    let start_time = Instant::now();

    let artifact_dir = args.artifacts.clone().unwrap_or_else(default_artifact_dir);
    if args.verbose {
        println!("Loading artifacts from: {}", artifact_dir.display());
    }

    // Loaded once per process; the pair is passed into the predictor
    // explicitly rather than read back through the cache.
    let artifacts = Artifacts::shared(&artifact_dir)?;

    let features = CustomerFeatures {
        income: args.income,
        spending_score: args.score,
    };
    let cluster = predict_segment(&artifacts.scaler, &artifacts.model, &features)?;
    info!(cluster, income = args.income, score = args.score, "segment assigned");

    println!(
        "Input: income {}k$, spending score {}",
        args.income, args.score
    );
    if let Some(profile) = args.profile_line() {
        println!("Reference details ({profile}) are not used for clustering");
    }

    let explanation = explain(cluster, args.income, args.score)?;
    print_report(&explanation);

    if let Some(ref plot_path) = args.plot {
        viz::render_segment_map(&features, cluster, plot_path)?;
        println!("\n✓ Segment map saved to: {plot_path}");
    }

    let elapsed = start_time.elapsed();
    println!(
        "\n✓ Segmentation completed successfully ({:.2}s)",
        elapsed.as_secs_f64()
    );

    Ok(())
}
