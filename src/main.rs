/*!
 * Sync Race - Main Entry Point
 *
 * Races three threads through each of the seven synchronization strategies
 * in turn and prints the transcript to stdout. Takes no arguments.
 */

use miette::IntoDiagnostic;
use sync_race::{init_tracing, RaceConfig, RaceHarness};
use tracing::{debug, info};

fn main() -> miette::Result<()> {
    // Initialize structured tracing (stderr)
    init_tracing();

    let config = RaceConfig::default();
    info!(
        threads = config.threads,
        target = config.target,
        "Sync race starting..."
    );

    let harness = RaceHarness::new(config, std::io::stdout())?;
    let report = harness.run_all()?;

    if let Some(fastest) = report.fastest() {
        info!(
            strategy = %fastest.strategy,
            elapsed_ms = fastest.elapsed_ms,
            "Fastest strategy"
        );
    }
    let json = report.to_json().into_diagnostic()?;
    debug!(report = %json, "Race report");

    info!(emitted = report.total_emitted(), "All races complete");
    Ok(())
}
