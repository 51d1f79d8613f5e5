//! Run-level helpers.
//!
//! This module provides seed URL parsing, progress logging, shutdown handling,
//! and statistics printing used by the sweep.

pub mod logging;
pub mod shutdown;
pub mod statistics;
pub mod url;

// Re-export public API
pub use logging::{log_progress, spawn_progress_logger, PhaseProgress};
pub use shutdown::shutdown_gracefully;
pub use statistics::{print_error_statistics, print_run_summary};
pub use url::{parse_seed_list, validate_and_normalize_url};
