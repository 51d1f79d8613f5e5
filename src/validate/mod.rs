//! Domain validation.
//!
//! `DomainValidator` checks one domain: registration expiry and A records,
//! run concurrently. Neither check can fail the validation; failures degrade
//! to `Unknown` and an empty address list respectively.
//!
//! `validate_all` runs the validator over the discovered set with bounded
//! concurrency and returns exactly one record per domain, in the set's order.

use std::collections::BTreeSet;
use std::sync::Arc;

use chrono::Utc;
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, info, warn};

use crate::app::{shutdown_gracefully, spawn_progress_logger, PhaseProgress};
use crate::dns::AddressResolver;
use crate::error_handling::{
    categorize_lookup_error, categorize_resolution_error, ErrorType, ProcessingStats,
};
use crate::initialization::init_semaphore;
use crate::models::{ExpiryStatus, ValidationRecord};
use crate::whois::{expiry_status, RegistrationLookup};

/// Validates single domains against injected lookup services.
pub struct DomainValidator {
    registration: Arc<dyn RegistrationLookup>,
    resolver: Arc<dyn AddressResolver>,
    stats: Arc<ProcessingStats>,
}

impl DomainValidator {
    pub fn new(
        registration: Arc<dyn RegistrationLookup>,
        resolver: Arc<dyn AddressResolver>,
        stats: Arc<ProcessingStats>,
    ) -> Self {
        Self {
            registration,
            resolver,
            stats,
        }
    }

    /// Validates `domain`. Always returns a record.
    pub async fn validate(&self, domain: &str) -> ValidationRecord {
        let (expired, addresses) = tokio::join!(self.check_expiry(domain), self.resolve(domain));
        debug!("{}: {}, {} address(es)", domain, expired, addresses.len());

        ValidationRecord {
            domain: domain.to_string(),
            expired,
            addresses,
        }
    }

    async fn check_expiry(&self, domain: &str) -> ExpiryStatus {
        match self.registration.expiration_dates(domain).await {
            Ok(dates) => expiry_status(&dates, Utc::now()),
            Err(e) => {
                warn!("Expiry check failed for {}: {}", domain, e);
                self.stats.increment_error(categorize_lookup_error(&e));
                ExpiryStatus::Unknown
            }
        }
    }

    async fn resolve(&self, domain: &str) -> Vec<String> {
        match self.resolver.resolve(domain).await {
            Ok(addresses) => addresses,
            Err(e) => {
                warn!("Address lookup failed for {}: {}", domain, e);
                self.stats.increment_error(categorize_resolution_error(&e));
                Vec::new()
            }
        }
    }
}

/// Validates every domain with at most `concurrency` validations in flight.
///
/// The result has one record per input domain, ordered as the set iterates.
/// A validation task that dies still yields a degraded record for its domain.
pub async fn validate_all(
    domains: &BTreeSet<String>,
    validator: Arc<DomainValidator>,
    concurrency: usize,
) -> Vec<ValidationRecord> {
    if domains.is_empty() {
        return Vec::new();
    }

    let ordered: Vec<String> = domains.iter().cloned().collect();
    let semaphore = init_semaphore(concurrency);
    let progress = Arc::new(PhaseProgress::new("Validation", ordered.len()));
    let (cancel, logging_task) = spawn_progress_logger(Arc::clone(&progress));

    let mut tasks = FuturesUnordered::new();
    for (index, domain) in ordered.iter().enumerate() {
        let validator = Arc::clone(&validator);
        let semaphore = Arc::clone(&semaphore);
        let domain = domain.clone();
        let handle = tokio::spawn(async move {
            // The semaphore is never closed, so acquisition only fails on a bug
            let _permit = semaphore.acquire_owned().await.ok();
            validator.validate(&domain).await
        });
        tasks.push(async move { (index, handle.await) });
    }

    let mut slots: Vec<Option<ValidationRecord>> = vec![None; ordered.len()];
    while let Some((index, joined)) = tasks.next().await {
        match joined {
            Ok(record) => {
                progress.record_success();
                slots[index] = Some(record);
            }
            Err(join_error) => {
                warn!(
                    "Validation task for {} panicked: {:?}",
                    ordered[index], join_error
                );
                validator
                    .stats
                    .increment_error(ErrorType::ValidationTaskPanic);
                progress.record_failure();
            }
        }
    }

    shutdown_gracefully(cancel, Some(logging_task)).await;

    let records: Vec<ValidationRecord> = slots
        .into_iter()
        .zip(ordered)
        .map(|(slot, domain)| slot.unwrap_or_else(|| ValidationRecord::degraded(domain)))
        .collect();

    info!("Validation complete: {} domain(s)", records.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error_handling::{LookupError, ResolutionError};
    use async_trait::async_trait;
    use chrono::{DateTime, TimeZone};

    struct FixedDates(Vec<DateTime<Utc>>);

    #[async_trait]
    impl RegistrationLookup for FixedDates {
        async fn expiration_dates(
            &self,
            _domain: &str,
        ) -> Result<Vec<DateTime<Utc>>, LookupError> {
            Ok(self.0.clone())
        }
    }

    struct BrokenLookup;

    #[async_trait]
    impl RegistrationLookup for BrokenLookup {
        async fn expiration_dates(
            &self,
            domain: &str,
        ) -> Result<Vec<DateTime<Utc>>, LookupError> {
            Err(LookupError::Service {
                domain: domain.to_string(),
                status: 503,
            })
        }
    }

    struct FixedAddresses(Vec<&'static str>);

    #[async_trait]
    impl AddressResolver for FixedAddresses {
        async fn resolve(&self, _host: &str) -> Result<Vec<String>, ResolutionError> {
            Ok(self.0.iter().map(|a| a.to_string()).collect())
        }
    }

    struct TimingOutResolver;

    #[async_trait]
    impl AddressResolver for TimingOutResolver {
        async fn resolve(&self, host: &str) -> Result<Vec<String>, ResolutionError> {
            Err(ResolutionError::Timeout {
                domain: host.to_string(),
                timeout: std::time::Duration::from_secs(3),
            })
        }
    }

    /// Resolver whose task dies on one particular host.
    struct PanicsOn(&'static str);

    #[async_trait]
    impl AddressResolver for PanicsOn {
        async fn resolve(&self, host: &str) -> Result<Vec<String>, ResolutionError> {
            if host == self.0 {
                panic!("resolver crashed on {}", host);
            }
            Ok(vec!["192.0.2.9".to_string()])
        }
    }

    fn validator(
        registration: impl RegistrationLookup + 'static,
        resolver: impl AddressResolver + 'static,
    ) -> (DomainValidator, Arc<ProcessingStats>) {
        let stats = Arc::new(ProcessingStats::new());
        let validator =
            DomainValidator::new(Arc::new(registration), Arc::new(resolver), Arc::clone(&stats));
        (validator, stats)
    }

    #[tokio::test]
    async fn test_validate_past_expiry_is_expired() {
        let past = Utc.with_ymd_and_hms(2001, 1, 1, 0, 0, 0).unwrap();
        let (validator, stats) = validator(FixedDates(vec![past]), FixedAddresses(vec!["192.0.2.1"]));

        let record = validator.validate("expired.test").await;
        assert_eq!(record.domain, "expired.test");
        assert_eq!(record.expired, ExpiryStatus::Expired);
        assert_eq!(record.addresses, vec!["192.0.2.1".to_string()]);
        assert_eq!(stats.total_errors(), 0);
    }

    #[tokio::test]
    async fn test_validate_future_expiry_is_active() {
        let future = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();
        let (validator, _) = validator(FixedDates(vec![future]), FixedAddresses(vec![]));

        let record = validator.validate("live.test").await;
        assert_eq!(record.expired, ExpiryStatus::Active);
        assert!(record.addresses.is_empty());
    }

    #[tokio::test]
    async fn test_validate_lookup_failure_is_unknown_and_keeps_addresses() {
        let (validator, stats) = validator(BrokenLookup, FixedAddresses(vec!["192.0.2.7"]));

        let record = validator.validate("down.test").await;
        assert_eq!(record.expired, ExpiryStatus::Unknown);
        assert_eq!(record.addresses, vec!["192.0.2.7".to_string()]);
        assert_eq!(stats.get_error_count(ErrorType::LookupServiceError), 1);
    }

    #[tokio::test]
    async fn test_validate_resolution_failure_is_empty() {
        let (validator, stats) = validator(FixedDates(vec![]), TimingOutResolver);

        let record = validator.validate("quiet.test").await;
        assert_eq!(record, ValidationRecord::degraded("quiet.test"));
        assert_eq!(stats.get_error_count(ErrorType::DnsTimeoutError), 1);
    }

    #[tokio::test]
    async fn test_validate_all_empty_set() {
        let (validator, _) = validator(FixedDates(vec![]), FixedAddresses(vec![]));
        let records = validate_all(&BTreeSet::new(), Arc::new(validator), 10).await;
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_validate_all_preserves_set_order() {
        let (validator, _) = validator(FixedDates(vec![]), FixedAddresses(vec!["192.0.2.1"]));
        let domains: BTreeSet<String> = ["c.test", "a.test", "b.test"]
            .iter()
            .map(|d| d.to_string())
            .collect();

        let records = validate_all(&domains, Arc::new(validator), 2).await;
        let names: Vec<&str> = records.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(names, vec!["a.test", "b.test", "c.test"]);
    }

    #[tokio::test]
    async fn test_validate_all_panicking_task_yields_degraded_record() {
        let future = Utc.with_ymd_and_hms(2999, 1, 1, 0, 0, 0).unwrap();
        let (validator, stats) = validator(FixedDates(vec![future]), PanicsOn("b.test"));
        let domains: BTreeSet<String> = ["a.test", "b.test", "c.test"]
            .iter()
            .map(|d| d.to_string())
            .collect();

        let records = validate_all(&domains, Arc::new(validator), 10).await;

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].expired, ExpiryStatus::Active);
        assert_eq!(records[1], ValidationRecord::degraded("b.test"));
        assert_eq!(records[2].addresses, vec!["192.0.2.9".to_string()]);
        assert_eq!(stats.get_error_count(ErrorType::ValidationTaskPanic), 1);
    }
}
