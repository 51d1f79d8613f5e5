//! Configuration constants.
//!
//! This module defines the defaults and operational limits used throughout the
//! application: concurrency caps, network timeouts, and report locations.

use std::time::Duration;

/// Maximum number of seed pages fetched at the same time
pub const FETCH_CONCURRENCY: usize = 10;
/// Maximum number of domains validated at the same time
pub const VALIDATION_CONCURRENCY: usize = 10;
/// Progress logging interval in seconds
pub const LOGGING_INTERVAL: u64 = 5;

// Network operation timeouts
/// Per-request HTTP timeout in seconds (static page retrieval)
pub const HTTP_TIMEOUT_SECS: u64 = 10;
/// DNS query timeout in seconds
/// Most DNS queries complete in <1s, 3s provides good buffer while failing fast
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Number of attempts the resolver makes per query before giving up
pub const DNS_ATTEMPTS: usize = 2;
/// Upper bound for a whole address lookup, covering every resolver attempt
pub const DNS_LOOKUP_TIMEOUT: Duration = Duration::from_secs(DNS_TIMEOUT_SECS * 3);
/// RDAP query timeout in seconds
pub const RDAP_TIMEOUT_SECS: u64 = 10;

// Rendered mode
/// Time given to page scripts before the rendered DOM is captured
pub const RENDER_SETTLE_SECS: u64 = 5;
/// Extra time allowed for browser start-up and DOM dump on top of the settle period
pub const RENDER_OVERHEAD_SECS: u64 = 25;
/// Browser executable used for rendered mode when none is configured
pub const DEFAULT_BROWSER: &str = "chromium";

/// Public RDAP redirector; it forwards each query to the authoritative registry
pub const DEFAULT_RDAP_URL: &str = "https://rdap.org/";

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// URL validation
/// Maximum URL length (2048 characters), matching common browser and server limits
pub const MAX_URL_LENGTH: usize = 2048;

// Reporting
pub const DEFAULT_CSV_PATH: &str = "domains.csv";
pub const DEFAULT_REPORT_PATH: &str = "report.txt";
pub const REPORT_EMAIL_SUBJECT: &str = "Domain Extraction Report";

// Notification
/// Submission port used with STARTTLS when `SMTP_PORT` is not set
pub const DEFAULT_SMTP_PORT: u16 = 587;
/// SMTP send timeout in seconds
pub const SMTP_TIMEOUT_SECS: u64 = 30;
