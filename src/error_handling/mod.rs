//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for every pipeline stage (retrieval, rendering, lookup,
//!   resolution, reporting, delivery)
//! - Failure categorization into `ErrorType`
//! - Processing statistics tracking
//!
//! Stage failures never unwind the pipeline: extraction failures drop the
//! seed, lookup failures degrade the expiry to unknown, resolution failures
//! degrade the address list to empty.

mod categorization;
mod stats;
mod types;

// Re-export public API
pub use categorization::{
    categorize_extraction_error, categorize_lookup_error, categorize_resolution_error,
    update_extraction_stats,
};
pub use stats::ProcessingStats;
pub use types::{
    DeliveryError, ErrorType, ExtractionError, InitializationError, LookupError, RenderError,
    ReportError, ResolutionError, RetrievalError,
};
