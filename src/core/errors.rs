/*!
 * Error Types
 * Harness error handling with thiserror and miette
 *
 * The primitives themselves never fail; only the harness around them can
 * (thread creation, worker panics, a broken output stream).
 */

use miette::Diagnostic;
use thiserror::Error;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Race harness errors
#[derive(Error, Debug, Diagnostic)]
pub enum HarnessError {
    #[error("Failed to spawn racer {thread_id}: {source}")]
    #[diagnostic(
        code(race::spawn_failed),
        help("The OS refused to create a thread. Check process thread limits.")
    )]
    Spawn {
        thread_id: usize,
        #[source]
        source: std::io::Error,
    },

    #[error("Racer {thread_id} panicked during the {strategy} race")]
    #[diagnostic(
        code(race::worker_panicked),
        help("A critical section body panicked. Other racers may have been left waiting.")
    )]
    WorkerPanicked {
        thread_id: usize,
        strategy: &'static str,
    },

    #[error("Race output failed: {0}")]
    #[diagnostic(
        code(race::output_failed),
        help("Standard output was closed or the writer rejected a line.")
    )]
    Output(#[from] std::io::Error),

    #[error("Invalid race configuration: {0}")]
    #[diagnostic(
        code(race::invalid_config),
        help("Thread count and target count must both be at least 1.")
    )]
    InvalidConfig(String),
}
