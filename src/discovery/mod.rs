//! Concurrent discovery over all seed URLs.
//!
//! One extraction task per seed, bounded by a semaphore. Completed tasks are
//! drained by a single collector loop, which is the only place the merged
//! domain set is mutated.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{info, warn};

use crate::app::{shutdown_gracefully, spawn_progress_logger, PhaseProgress};
use crate::error_handling::{update_extraction_stats, ErrorType, ProcessingStats};
use crate::extract::LinkExtractor;
use crate::initialization::init_semaphore;

/// Result of the discovery phase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveryOutcome {
    /// Deduplicated union of every successful extraction
    pub domains: BTreeSet<String>,
    /// Seeds whose extraction succeeded
    pub succeeded: usize,
    /// Seeds whose extraction failed (excluded from `domains`)
    pub failed: usize,
}

/// Extracts in-scope domains from every seed and merges them.
///
/// At most `concurrency` extractions are in flight. A failed seed is logged,
/// counted, and contributes nothing; the others are unaffected. Returns only
/// after every task has finished.
pub async fn fetch_all(
    seeds: &[String],
    extractor: Arc<LinkExtractor>,
    concurrency: usize,
    stats: Arc<ProcessingStats>,
) -> DiscoveryOutcome {
    let mut outcome = DiscoveryOutcome::default();
    if seeds.is_empty() {
        return outcome;
    }

    let semaphore = init_semaphore(concurrency);
    let progress = Arc::new(PhaseProgress::new("Discovery", seeds.len()));
    let (cancel, logging_task) = spawn_progress_logger(Arc::clone(&progress));

    let mut tasks = FuturesUnordered::new();
    for seed in seeds {
        let extractor = Arc::clone(&extractor);
        let semaphore = Arc::clone(&semaphore);
        let seed = seed.clone();
        tasks.push(tokio::spawn(async move {
            // The semaphore is never closed, so acquisition only fails on a bug
            let _permit = semaphore.acquire_owned().await.ok();
            let result = extractor.extract(&seed).await;
            (seed, result)
        }));
    }

    while let Some(joined) = tasks.next().await {
        match joined {
            Ok((seed, Ok(domains))) => {
                info!("Extracted {} domain(s) from {}", domains.len(), seed);
                outcome.domains.extend(domains);
                outcome.succeeded += 1;
                progress.record_success();
            }
            Ok((seed, Err(e))) => {
                warn!("Failed to extract domains from {}: {}", seed, e);
                update_extraction_stats(&stats, &e);
                outcome.failed += 1;
                progress.record_failure();
            }
            Err(join_error) => {
                warn!("Extraction task panicked: {:?}", join_error);
                stats.increment_error(ErrorType::ExtractionTaskPanic);
                outcome.failed += 1;
                progress.record_failure();
            }
        }
    }

    shutdown_gracefully(cancel, Some(logging_task)).await;

    info!(
        "Discovery complete: {} domain(s) from {} seed(s), {} failed",
        outcome.domains.len(),
        outcome.succeeded,
        outcome.failed
    );
    outcome
}
