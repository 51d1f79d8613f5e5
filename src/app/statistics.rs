//! End-of-run statistics.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Logs the non-zero failure counters of a run.
pub fn print_error_statistics(error_stats: &ProcessingStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Error Counts ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

/// Logs a one-line summary of the run.
pub fn print_run_summary(seeds: usize, seeds_failed: usize, domains: usize, elapsed_seconds: f64) {
    info!(
        "Sweep finished: {} seed(s) ({} failed), {} domain(s) validated in {:.1}s",
        seeds, seeds_failed, domains, elapsed_seconds
    );
}
