// demos/src/bin/strategy_comparison.rs
//
// Fetches posts and comments from the public JSON placeholder API and runs the
// three join strategies over them, logging how long each one takes.
//
// The two collections are requested together; if either request fails the run
// stops with a non-zero exit status.
//
// Run this demo with:
//   cargo run --bin strategy_comparison
//   (from the demos directory)
//
// Set LOGLEVEL=DEBUG or LOGLEVEL=TRACE for more detail.

use postjoin_rs::prelude::*;
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    setup_logger();
    info!("Join Strategy Comparison");

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Run abandoned: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FetchError> {
    let dataset = DataSource::default().fetch_default().await?;

    let outcomes = compare_strategies(&dataset.posts, &dataset.comments, &TracingTimingSink);
    let report = ComparisonReport::from_outcomes(&outcomes);

    info!("\n=== Results ===");
    for entry in &report.entries {
        info!(
            "{:<14} {:>10.3}ms  matched {:>4}/{}  tie-break {}",
            entry.strategy.name(),
            entry.elapsed.as_secs_f64() * 1_000.0,
            entry.matched,
            dataset.posts.len(),
            entry.tie_break
        );
    }

    if let Some(fastest) = report.fastest() {
        info!("Fastest: {}", fastest);
    }

    if report.all_agree() {
        info!("All strategies produced identical output");
    } else {
        for strategy in report.divergent() {
            warn!(
                "{} attaches the {} comment when a post has several",
                strategy,
                strategy.tie_break()
            );
        }
    }

    if let Some(first) = outcomes.first().and_then(|outcome| outcome.output.first()) {
        match serde_json::to_string_pretty(first) {
            Ok(json) => info!("\nFirst joined post:\n{json}"),
            Err(err) => warn!("Could not render first joined post: {err}"),
        }
    }

    Ok(())
}
