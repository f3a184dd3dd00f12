/*!
 * Monitoring
 * Timing and structured tracing for race runs
 */

mod stopwatch;
mod tracer;

pub use stopwatch::StopWatch;
pub use tracer::{init_tracing, RaceSpan};
