//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;

use crate::config::LOGGING_INTERVAL;

/// Completion counters for one pipeline phase.
pub struct PhaseProgress {
    label: &'static str,
    total: usize,
    completed: AtomicUsize,
    failed: AtomicUsize,
    started: Instant,
}

impl PhaseProgress {
    pub fn new(label: &'static str, total: usize) -> Self {
        Self {
            label,
            total,
            completed: AtomicUsize::new(0),
            failed: AtomicUsize::new(0),
            started: Instant::now(),
        }
    }

    pub fn record_success(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_failure(&self) {
        self.completed.fetch_add(1, Ordering::SeqCst);
        self.failed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    pub fn failed(&self) -> usize {
        self.failed.load(Ordering::SeqCst)
    }
}

/// Logs progress information about a phase.
pub fn log_progress(progress: &PhaseProgress) {
    let elapsed_secs = progress.started.elapsed().as_secs_f64();
    let completed = progress.completed();
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "{}: {}/{} done ({} failed) in {:.2} seconds (~{:.2}/sec)",
        progress.label,
        completed,
        progress.total,
        progress.failed(),
        elapsed_secs,
        rate
    );
}

/// Spawns a task logging `progress` every `LOGGING_INTERVAL` seconds until cancelled.
pub fn spawn_progress_logger(
    progress: Arc<PhaseProgress>,
) -> (CancellationToken, tokio::task::JoinHandle<()>) {
    let cancel = CancellationToken::new();
    let cancel_logging = cancel.child_token();

    let handle = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(LOGGING_INTERVAL));
        // The first tick completes immediately; skip it so short phases stay quiet
        interval.tick().await;
        loop {
            tokio::select! {
                _ = interval.tick() => log_progress(&progress),
                _ = cancel_logging.cancelled() => break,
            }
        }
    });

    (cancel, handle)
}
