//! CSV export functionality.
//!
//! One row per domain. The `Expired` column is `true`, `false`, or `unknown`;
//! addresses are joined with ", " into a single quoted field.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::Writer;

use crate::error_handling::ReportError;
use crate::models::ValidationRecord;

const CSV_HEADER: [&str; 3] = ["Domain", "Expired", "DNS Records"];

/// Writes `records` as CSV to `output`.
///
/// # Returns
///
/// Returns the number of data rows written.
pub fn write_csv<W: Write>(records: &[ValidationRecord], output: W) -> Result<usize, ReportError> {
    let mut writer = Writer::from_writer(output);
    writer.write_record(CSV_HEADER)?;

    for record in records {
        let addresses = record.addresses.join(", ");
        writer.write_record([
            record.domain.as_str(),
            record.expired.as_csv_value(),
            addresses.as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(records.len())
}

/// Writes `records` as CSV to the file at `path`, replacing it.
pub fn export_csv(records: &[ValidationRecord], path: &Path) -> Result<usize, ReportError> {
    let file = File::create(path)?;
    write_csv(records, file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExpiryStatus;

    #[test]
    fn test_write_csv_rows() {
        let records = vec![
            ValidationRecord {
                domain: "example.com".to_string(),
                expired: ExpiryStatus::Active,
                addresses: vec!["192.0.2.1".to_string(), "192.0.2.2".to_string()],
            },
            ValidationRecord {
                domain: "gone.test".to_string(),
                expired: ExpiryStatus::Expired,
                addresses: vec![],
            },
            ValidationRecord::degraded("mystery.test"),
        ];

        let mut buffer = Vec::new();
        let rows = write_csv(&records, &mut buffer).unwrap();
        assert_eq!(rows, 3);

        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(
            text,
            "Domain,Expired,DNS Records\n\
             example.com,false,\"192.0.2.1, 192.0.2.2\"\n\
             gone.test,true,\n\
             mystery.test,unknown,\n"
        );
    }

    #[test]
    fn test_write_csv_empty_has_header_only() {
        let mut buffer = Vec::new();
        assert_eq!(write_csv(&[], &mut buffer).unwrap(), 0);
        assert_eq!(String::from_utf8(buffer).unwrap(), "Domain,Expired,DNS Records\n");
    }
}
