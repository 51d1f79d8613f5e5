//! Error type definitions.
//!
//! This module defines the typed failures of every pipeline stage and the
//! categories used to count them.

use std::time::Duration;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Failure to retrieve a seed page over HTTP.
#[derive(Error, Debug)]
pub enum RetrievalError {
    /// The seed is not a parseable URL.
    #[error("Invalid seed URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The seed URL has no host component to scope links against.
    #[error("Seed URL {0} has no host")]
    MissingHost(String),

    /// The server answered with a non-success status.
    #[error("HTTP {status} for {url}")]
    Status { url: String, status: u16 },

    /// Connection, TLS, or body transfer failed.
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The request did not complete in time.
    #[error("Request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },
}

/// Failure of a headless browser session.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The browser process could not be started.
    #[error("Failed to launch browser {browser}: {source}")]
    Launch {
        browser: String,
        #[source]
        source: std::io::Error,
    },

    /// The browser exited unsuccessfully.
    #[error("Browser exited with status {code:?} while rendering {url}")]
    Exited { url: String, code: Option<i32> },

    /// The capture did not finish within the settle period plus overhead.
    #[error("Rendering {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    /// Reading the rendered markup failed.
    #[error("Failed to read rendered page: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure of one link extraction task.
///
/// Either variant removes the seed from the merged result; neither stops the run.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Failure of a registration (expiry) lookup. Degrades the expiry to unknown.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The registry has no record of the domain.
    #[error("No registration record for {0}")]
    NotFound(String),

    /// The lookup service answered with an error status.
    #[error("Registration lookup for {domain} returned HTTP {status}")]
    Service { domain: String, status: u16 },

    /// The lookup service could not be reached.
    #[error("Registration lookup for {domain} failed: {source}")]
    Transport {
        domain: String,
        #[source]
        source: ReqwestError,
    },

    /// The response could not be parsed.
    #[error("Malformed registration data for {domain}: {reason}")]
    Malformed { domain: String, reason: String },

    /// The lookup did not complete in time.
    #[error("Registration lookup for {domain} timed out after {timeout:?}")]
    Timeout { domain: String, timeout: Duration },
}

/// Failure of an address lookup. Degrades the address list to empty.
///
/// "No records" and "no such name" are not errors; resolvers report those as
/// an empty list.
#[derive(Error, Debug)]
pub enum ResolutionError {
    #[error("DNS lookup for {domain} failed: {source}")]
    Resolve {
        domain: String,
        #[source]
        source: hickory_resolver::error::ResolveError,
    },

    #[error("DNS lookup for {domain} timed out after {timeout:?}")]
    Timeout { domain: String, timeout: Duration },
}

/// Failure to write the CSV export or the text report.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
}

/// Failure to deliver the report by email. Reported once, never retried.
#[derive(Error, Debug)]
pub enum DeliveryError {
    /// A required relay setting was not provided.
    #[error("Missing SMTP setting: {0}")]
    MissingSetting(&'static str),

    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("SMTP delivery failed: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Failure categories counted during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    // Discovery
    InvalidSeedUrl,
    HttpStatusError,
    HttpTransportError,
    HttpTimeoutError,
    RenderLaunchError,
    RenderFailedError,
    RenderTimeoutError,
    ExtractionTaskPanic,
    // Validation
    LookupNotFound,
    LookupServiceError,
    LookupTimeoutError,
    LookupMalformedError,
    DnsLookupError,
    DnsTimeoutError,
    ValidationTaskPanic,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::InvalidSeedUrl => "Invalid seed URL",
            ErrorType::HttpStatusError => "HTTP status error",
            ErrorType::HttpTransportError => "HTTP transport error",
            ErrorType::HttpTimeoutError => "HTTP timeout",
            ErrorType::RenderLaunchError => "Browser launch error",
            ErrorType::RenderFailedError => "Browser render error",
            ErrorType::RenderTimeoutError => "Browser render timeout",
            ErrorType::ExtractionTaskPanic => "Extraction task panic",
            ErrorType::LookupNotFound => "Registration not found",
            ErrorType::LookupServiceError => "Registration lookup error",
            ErrorType::LookupTimeoutError => "Registration lookup timeout",
            ErrorType::LookupMalformedError => "Malformed registration data",
            ErrorType::DnsLookupError => "DNS lookup error",
            ErrorType::DnsTimeoutError => "DNS lookup timeout",
            ErrorType::ValidationTaskPanic => "Validation task panic",
        }
    }
}
