//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `domain_sweep` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output, report files, and the optional email
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use domain_sweep::config::REPORT_EMAIL_SUBJECT;
use domain_sweep::export::Reporter;
use domain_sweep::initialization::init_logger_with;
use domain_sweep::notify::{Notifier, SmtpNotifier};
use domain_sweep::{run_sweep, Config, ValidationRecord};

#[tokio::main]
async fn main() -> Result<()> {
    // SMTP settings may live in a .env file; try the current directory first,
    // then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let reporter = Reporter::from_config(&config);
    let notify_to = config.notify.clone();
    let notifier_config = config.clone();

    let report = match run_sweep(config).await {
        Ok(report) => report,
        Err(e) => {
            eprintln!("domain_sweep error: {:#}", e);
            process::exit(1);
        }
    };

    print_records(&report.records);

    // Output failures are reported but do not fail a completed sweep
    let summary = match reporter.emit(&report.records) {
        Ok(summary) => summary,
        Err(e) => {
            log::error!("Failed to write report: {}", e);
            return Ok(());
        }
    };

    if let Some(to) = notify_to {
        let sent = match SmtpNotifier::from_config(&notifier_config) {
            Ok(notifier) => notifier.send(REPORT_EMAIL_SUBJECT, &summary, &to).await,
            Err(e) => Err(e),
        };
        if let Err(e) = sent {
            log::error!("Failed to email report to {}: {}", to, e);
        }
    }

    Ok(())
}

fn print_records(records: &[ValidationRecord]) {
    if records.is_empty() {
        println!("No domains were extracted.");
        return;
    }
    for record in records {
        println!(
            "{}: {}, DNS Records: {}",
            record.domain,
            record.expired,
            record.addresses.join(", ")
        );
    }
}
