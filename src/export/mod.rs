//! Result export.
//!
//! The `Reporter` persists a run's validation records twice:
//! - a CSV file with one row per domain (`Domain,Expired,DNS Records`)
//! - a plain-text summary, also returned so it can be emailed

mod csv;
mod report;

use std::path::PathBuf;

use crate::config::Config;
use crate::error_handling::ReportError;
use crate::models::ValidationRecord;

pub use self::csv::{export_csv, write_csv};
pub use report::{render_summary, write_report};

/// Writes the CSV export and the text summary of a run.
#[derive(Debug, Clone)]
pub struct Reporter {
    csv_path: PathBuf,
    report_path: PathBuf,
}

impl Reporter {
    pub fn new(csv_path: impl Into<PathBuf>, report_path: impl Into<PathBuf>) -> Self {
        Self {
            csv_path: csv_path.into(),
            report_path: report_path.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.csv_path.clone(), config.report_path.clone())
    }

    /// Writes both files and returns the summary text.
    ///
    /// Files are overwritten. An empty run still produces a header-only CSV
    /// and a summary reporting zero domains.
    pub fn emit(&self, records: &[ValidationRecord]) -> Result<String, ReportError> {
        let rows = export_csv(records, &self.csv_path)?;
        log::info!("Wrote {} row(s) to {}", rows, self.csv_path.display());

        let summary = render_summary(records);
        write_report(&summary, &self.report_path)?;
        log::info!("Wrote report to {}", self.report_path.display());

        Ok(summary)
    }
}
