//! Error categorization.
//!
//! Maps the typed failures of each stage onto the `ErrorType` counters.

use super::stats::ProcessingStats;
use super::types::{ErrorType, ExtractionError, LookupError, RenderError, ResolutionError, RetrievalError};

/// Categorizes a failed link extraction.
pub fn categorize_extraction_error(error: &ExtractionError) -> ErrorType {
    match error {
        ExtractionError::Retrieval(e) => match e {
            RetrievalError::InvalidUrl { .. } | RetrievalError::MissingHost(_) => {
                ErrorType::InvalidSeedUrl
            }
            RetrievalError::Status { .. } => ErrorType::HttpStatusError,
            RetrievalError::Transport { source, .. } if source.is_timeout() => {
                ErrorType::HttpTimeoutError
            }
            RetrievalError::Transport { .. } => ErrorType::HttpTransportError,
            RetrievalError::Timeout { .. } => ErrorType::HttpTimeoutError,
        },
        ExtractionError::Render(e) => match e {
            RenderError::Launch { .. } => ErrorType::RenderLaunchError,
            RenderError::Exited { .. } | RenderError::Io(_) => ErrorType::RenderFailedError,
            RenderError::Timeout { .. } => ErrorType::RenderTimeoutError,
        },
    }
}

/// Categorizes a failed registration lookup.
pub fn categorize_lookup_error(error: &LookupError) -> ErrorType {
    match error {
        LookupError::NotFound(_) => ErrorType::LookupNotFound,
        LookupError::Service { .. } => ErrorType::LookupServiceError,
        LookupError::Transport { source, .. } if source.is_timeout() => {
            ErrorType::LookupTimeoutError
        }
        LookupError::Transport { .. } => ErrorType::LookupServiceError,
        LookupError::Malformed { .. } => ErrorType::LookupMalformedError,
        LookupError::Timeout { .. } => ErrorType::LookupTimeoutError,
    }
}

/// Categorizes a failed address lookup.
pub fn categorize_resolution_error(error: &ResolutionError) -> ErrorType {
    match error {
        ResolutionError::Resolve { source, .. } => {
            if matches!(
                source.kind(),
                hickory_resolver::error::ResolveErrorKind::Timeout
            ) {
                ErrorType::DnsTimeoutError
            } else {
                ErrorType::DnsLookupError
            }
        }
        ResolutionError::Timeout { .. } => ErrorType::DnsTimeoutError,
    }
}

/// Records an extraction failure in the run statistics.
pub fn update_extraction_stats(stats: &ProcessingStats, error: &ExtractionError) {
    stats.increment_error(categorize_extraction_error(error));
}
