//! Plain-text run summary.

use std::fmt::Write as _;
use std::path::Path;

use crate::error_handling::ReportError;
use crate::models::ValidationRecord;

/// Renders the human-readable summary of a run.
pub fn render_summary(records: &[ValidationRecord]) -> String {
    let mut summary = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(summary, "Domain Extraction Report");
    let _ = writeln!(summary, "{}", "=".repeat(40));
    let _ = writeln!(summary, "Total domains extracted: {}", records.len());
    let _ = writeln!(summary);
    let _ = writeln!(summary, "Extracted Domains:");
    for record in records {
        let _ = writeln!(summary, "- {}: {}", record.domain, record.expired.label());
        let _ = writeln!(summary, "  DNS Records: {}", record.addresses.join(", "));
    }
    summary
}

/// Writes `summary` to `path`, replacing it.
pub fn write_report(summary: &str, path: &Path) -> Result<(), ReportError> {
    std::fs::write(path, summary)?;
    Ok(())
}
