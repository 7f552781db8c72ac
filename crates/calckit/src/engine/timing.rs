//! Wall-clock timing helper.
//!
//! ## Purpose
//!
//! Runs a closure and reports how long it took, for ad-hoc comparisons
//! between implementations (e.g. iterative vs recursive factorial).
//!
//! ## Non-goals
//!
//! * This module does not aggregate repeated runs; use the Criterion
//!   benchmarks for statistically meaningful comparisons.

// External dependencies
use std::time::Instant;

/// Execute `f` and return its result together with the elapsed time in
/// milliseconds.
///
/// # Examples
/// ```
/// use calckit::timed_execution;
///
/// let (sum, elapsed_ms) = timed_execution(|| calckit::add(5, 3));
/// assert_eq!(sum.unwrap(), 8i64);
/// assert!(elapsed_ms >= 0.0);
/// ```
pub fn timed_execution<F, R>(f: F) -> (R, f64)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = f();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    log::trace!("timed execution finished in {elapsed_ms:.3}ms");
    (result, elapsed_ms)
}
