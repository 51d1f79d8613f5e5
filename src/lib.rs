//! domain_sweep library: domain discovery and validation
//!
//! This library crawls a list of seed pages, collects every linked hostname
//! that belongs to the seed's domain family, and validates each one:
//! registration expiry over RDAP and IPv4 addresses over DNS.
//!
//! # Example
//!
//! ```no_run
//! use domain_sweep::{run_sweep, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     urls: "https://example.com, https://example.org".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_sweep(config).await?;
//! for record in &report.records {
//!     println!("{}: {}", record.domain, record.expired);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod config;
pub mod discovery;
pub mod dns;
pub mod error_handling;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod models;
pub mod notify;
pub mod validate;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, RenderMode};
pub use models::{ExpiryStatus, ValidationRecord};
pub use run::{run_sweep, Sweep, SweepReport};

// Internal run module (wires the pipeline together)
mod run {
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use anyhow::{Context, Result};
    use log::{info, warn};

    use crate::app::{parse_seed_list, print_error_statistics, print_run_summary};
    use crate::config::{Config, DNS_LOOKUP_TIMEOUT, RDAP_TIMEOUT_SECS};
    use crate::discovery::fetch_all;
    use crate::dns::{AddressResolver, DnsResolver};
    use crate::error_handling::ProcessingStats;
    use crate::extract::LinkExtractor;
    use crate::fetch::{page_source_for, PageSource};
    use crate::initialization::{init_client, init_resolver};
    use crate::models::ValidationRecord;
    use crate::validate::{validate_all, DomainValidator};
    use crate::whois::{RdapClient, RegistrationLookup};

    /// Results of a sweep.
    #[derive(Debug, Clone)]
    pub struct SweepReport {
        /// Number of seed URLs processed
        pub seeds: usize,
        /// Seeds whose extraction failed
        pub seeds_failed: usize,
        /// One record per discovered domain, in lexicographic domain order
        pub records: Vec<ValidationRecord>,
        /// Wall-clock duration of the sweep
        pub elapsed_seconds: f64,
    }

    /// Discovery followed by validation, over injected collaborators.
    pub struct Sweep {
        extractor: Arc<LinkExtractor>,
        validator: Arc<DomainValidator>,
        stats: Arc<ProcessingStats>,
        fetch_concurrency: usize,
        validation_concurrency: usize,
    }

    impl Sweep {
        pub fn new(
            page_source: Arc<dyn PageSource>,
            registration: Arc<dyn RegistrationLookup>,
            resolver: Arc<dyn AddressResolver>,
            fetch_concurrency: usize,
            validation_concurrency: usize,
        ) -> Self {
            let stats = Arc::new(ProcessingStats::new());
            Self {
                extractor: Arc::new(LinkExtractor::new(page_source)),
                validator: Arc::new(DomainValidator::new(
                    registration,
                    resolver,
                    Arc::clone(&stats),
                )),
                stats,
                fetch_concurrency,
                validation_concurrency,
            }
        }

        /// Failure counters accumulated by every run of this sweep.
        pub fn stats(&self) -> &ProcessingStats {
            &self.stats
        }

        /// Runs both phases. Validation starts only after every extraction
        /// has finished.
        pub async fn run(&self, seeds: &[String]) -> SweepReport {
            let start = Instant::now();

            let discovery = fetch_all(
                seeds,
                Arc::clone(&self.extractor),
                self.fetch_concurrency,
                Arc::clone(&self.stats),
            )
            .await;

            let records = validate_all(
                &discovery.domains,
                Arc::clone(&self.validator),
                self.validation_concurrency,
            )
            .await;

            SweepReport {
                seeds: seeds.len(),
                seeds_failed: discovery.failed,
                records,
                elapsed_seconds: start.elapsed().as_secs_f64(),
            }
        }
    }

    /// Runs a sweep over the seed URLs in `config.urls`.
    ///
    /// Builds the shared HTTP client, DNS resolver, RDAP client and page
    /// source, then runs discovery and validation.
    ///
    /// # Errors
    ///
    /// Returns an error only if the shared clients cannot be built. Failures
    /// of individual seeds or domains are logged, counted, and absorbed.
    pub async fn run_sweep(config: Config) -> Result<SweepReport> {
        let seeds = parse_seed_list(&config.urls);
        if seeds.is_empty() {
            warn!("No valid seed URLs given");
        } else {
            info!(
                "Sweeping {} seed(s) in {:?} mode",
                seeds.len(),
                config.render_mode
            );
        }

        let client = init_client(&config).context("Failed to initialize HTTP client")?;
        let registration: Arc<dyn RegistrationLookup> = Arc::new(RdapClient::new(
            Arc::clone(&client),
            &config.rdap_url,
            Duration::from_secs(RDAP_TIMEOUT_SECS),
        ));
        let resolver: Arc<dyn AddressResolver> =
            Arc::new(DnsResolver::new(init_resolver(), DNS_LOOKUP_TIMEOUT));
        let page_source = page_source_for(&config, client);

        let sweep = Sweep::new(
            page_source,
            registration,
            resolver,
            config.fetch_concurrency,
            config.validation_concurrency,
        );
        let report = sweep.run(&seeds).await;

        print_error_statistics(sweep.stats());
        print_run_summary(
            report.seeds,
            report.seeds_failed,
            report.records.len(),
            report.elapsed_seconds,
        );

        Ok(report)
    }
}
