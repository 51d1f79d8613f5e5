//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BROWSER, DEFAULT_CSV_PATH, DEFAULT_RDAP_URL, DEFAULT_REPORT_PATH, DEFAULT_SMTP_PORT,
    DEFAULT_USER_AGENT, FETCH_CONCURRENCY, HTTP_TIMEOUT_SECS, RENDER_OVERHEAD_SECS,
    RENDER_SETTLE_SECS, VALIDATION_CONCURRENCY,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How seed pages are retrieved.
///
/// Selected once per run and applied to every seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RenderMode {
    /// Plain HTTP GET; the markup is read as served
    Static,
    /// Headless browser; page scripts run before the markup is captured
    Rendered,
}

/// Run configuration.
///
/// Parsed from the command line (with `SMTP_*` settings also read from the
/// environment), or constructed programmatically.
///
/// # Examples
///
/// ```no_run
/// use domain_sweep::{Config, RenderMode};
///
/// let config = Config {
///     urls: "https://example.com, https://example.org".to_string(),
///     render_mode: RenderMode::Static,
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Parser)]
#[command(
    name = "domain_sweep",
    about = "Finds same-site domains linked from seed pages and checks their registration expiry and DNS records."
)]
pub struct Config {
    /// Comma-separated list of seed URLs
    #[arg(value_parser)]
    pub urls: String,

    /// How pages are retrieved: static|rendered
    #[arg(long, value_enum, default_value_t = RenderMode::Static)]
    pub render_mode: RenderMode,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Maximum number of seed pages fetched concurrently
    #[arg(long, default_value_t = FETCH_CONCURRENCY)]
    pub fetch_concurrency: usize,

    /// Maximum number of domains validated concurrently
    #[arg(long, default_value_t = VALIDATION_CONCURRENCY)]
    pub validation_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = HTTP_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Headless browser executable used in rendered mode
    #[arg(long, value_parser, default_value = DEFAULT_BROWSER)]
    pub browser: PathBuf,

    /// Seconds page scripts get to run before the rendered page is captured
    #[arg(long, default_value_t = RENDER_SETTLE_SECS)]
    pub settle_seconds: u64,

    /// RDAP base URL used for registration lookups
    #[arg(long, default_value = DEFAULT_RDAP_URL)]
    pub rdap_url: String,

    /// CSV export path
    #[arg(long, value_parser, default_value = DEFAULT_CSV_PATH)]
    pub csv_path: PathBuf,

    /// Text report path
    #[arg(long, value_parser, default_value = DEFAULT_REPORT_PATH)]
    pub report_path: PathBuf,

    /// Email the report to this address
    #[arg(long)]
    pub notify: Option<String>,

    /// SMTP relay host
    #[arg(long, env = "SMTP_HOST")]
    pub smtp_host: Option<String>,

    /// SMTP relay port (STARTTLS)
    #[arg(long, env = "SMTP_PORT", default_value_t = DEFAULT_SMTP_PORT)]
    pub smtp_port: u16,

    /// SMTP login
    #[arg(long, env = "SMTP_USERNAME")]
    pub smtp_username: Option<String>,

    /// SMTP password
    #[arg(long, env = "SMTP_PASSWORD", hide_env_values = true)]
    pub smtp_password: Option<String>,

    /// Sender address; defaults to the SMTP login
    #[arg(long, env = "SMTP_FROM")]
    pub smtp_from: Option<String>,
}

impl Config {
    /// Per-request HTTP timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    /// Settle period given to page scripts in rendered mode.
    pub fn settle_period(&self) -> Duration {
        Duration::from_secs(self.settle_seconds)
    }

    /// Upper bound for one rendered capture (settle period plus browser overhead).
    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.settle_seconds + RENDER_OVERHEAD_SECS)
    }
}

// Hand-written so the SMTP password never ends up in debug logs
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("urls", &self.urls)
            .field("render_mode", &self.render_mode)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("fetch_concurrency", &self.fetch_concurrency)
            .field("validation_concurrency", &self.validation_concurrency)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("browser", &self.browser)
            .field("settle_seconds", &self.settle_seconds)
            .field("rdap_url", &self.rdap_url)
            .field("csv_path", &self.csv_path)
            .field("report_path", &self.report_path)
            .field("notify", &self.notify)
            .field("smtp_host", &self.smtp_host)
            .field("smtp_port", &self.smtp_port)
            .field("smtp_username", &self.smtp_username)
            .field("smtp_password", &self.smtp_password.as_ref().map(|_| "***"))
            .field("smtp_from", &self.smtp_from)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: String::new(),
            render_mode: RenderMode::Static,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            fetch_concurrency: FETCH_CONCURRENCY,
            validation_concurrency: VALIDATION_CONCURRENCY,
            timeout_seconds: HTTP_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            browser: PathBuf::from(DEFAULT_BROWSER),
            settle_seconds: RENDER_SETTLE_SECS,
            rdap_url: DEFAULT_RDAP_URL.to_string(),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            notify: None,
            smtp_host: None,
            smtp_port: DEFAULT_SMTP_PORT,
            smtp_username: None,
            smtp_password: None,
            smtp_from: None,
        }
    }
}
