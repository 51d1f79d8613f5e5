//! Validation record types shared by the pipeline and the reporter.

use serde::Serialize;

/// Registration expiry of a domain.
///
/// A three-valued result: a failed or empty lookup is `Unknown`, never `Active`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExpiryStatus {
    /// The earliest known expiration date is in the past
    Expired,
    /// The earliest known expiration date is now or in the future
    Active,
    /// The expiration date could not be determined
    Unknown,
}

impl ExpiryStatus {
    /// Label used in the human-readable report.
    pub fn label(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "Expired",
            ExpiryStatus::Active => "Active",
            ExpiryStatus::Unknown => "Unknown",
        }
    }

    /// Value used in the CSV `Expired` column.
    pub fn as_csv_value(&self) -> &'static str {
        match self {
            ExpiryStatus::Expired => "true",
            ExpiryStatus::Active => "false",
            ExpiryStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Final per-domain result: registration expiry plus resolved addresses.
///
/// Built once per discovered domain and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationRecord {
    /// Normalized hostname
    pub domain: String,
    /// Registration expiry status
    pub expired: ExpiryStatus,
    /// IPv4 addresses from A records (empty when none or when resolution failed)
    pub addresses: Vec<String>,
}

impl ValidationRecord {
    /// Record for a domain whose checks all degraded to their defaults.
    pub fn degraded(domain: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            expired: ExpiryStatus::Unknown,
            addresses: Vec::new(),
        }
    }
}
