//! Tests for command-line parsing.

use clap::Parser;
use domain_sweep::config::{LogFormat, LogLevel, RenderMode};
use domain_sweep::Config;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::try_parse_from(["domain_sweep", "https://example.com"]).unwrap();
    assert_eq!(config.urls, "https://example.com");
    assert_eq!(config.render_mode, RenderMode::Static);
    assert!(matches!(config.log_level, LogLevel::Info));
    assert!(matches!(config.log_format, LogFormat::Plain));
    assert_eq!(config.fetch_concurrency, 10);
    assert_eq!(config.validation_concurrency, 10);
    assert_eq!(config.settle_seconds, 5);
    assert_eq!(config.csv_path, PathBuf::from("domains.csv"));
    assert_eq!(config.report_path, PathBuf::from("report.txt"));
    assert!(config.notify.is_none());
}

#[test]
fn test_rendered_mode_and_overrides() {
    let config = Config::try_parse_from([
        "domain_sweep",
        "https://a.example, https://b.example",
        "--render-mode",
        "rendered",
        "--settle-seconds",
        "2",
        "--fetch-concurrency",
        "4",
        "--log-format",
        "json",
        "--notify",
        "ops@example.com",
    ])
    .unwrap();

    assert_eq!(config.render_mode, RenderMode::Rendered);
    assert_eq!(config.settle_seconds, 2);
    assert_eq!(config.fetch_concurrency, 4);
    assert!(matches!(config.log_format, LogFormat::Json));
    assert_eq!(config.notify.as_deref(), Some("ops@example.com"));
}

#[test]
fn test_missing_urls_is_rejected() {
    assert!(Config::try_parse_from(["domain_sweep"]).is_err());
}

#[test]
fn test_unknown_render_mode_is_rejected() {
    assert!(
        Config::try_parse_from(["domain_sweep", "https://example.com", "--render-mode", "gui"])
            .is_err()
    );
}
