//! DNS address resolution.
//!
//! This module resolves hostnames to their IPv4 (A record) addresses using
//! `hickory-resolver`. "No such name" and "no records" are ordinary answers and
//! come back as an empty list; only infrastructure failures are errors.

mod resolution;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ResolutionError;

// Re-export public API
pub use resolution::{is_no_records, resolve_ipv4_addresses};

/// Resolves a hostname to its addresses.
#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Returns the host's A record addresses in textual form.
    async fn resolve(&self, host: &str) -> Result<Vec<String>, ResolutionError>;
}

/// `AddressResolver` backed by a shared hickory resolver.
pub struct DnsResolver {
    resolver: Arc<TokioAsyncResolver>,
    timeout: Duration,
}

impl DnsResolver {
    /// Wraps `resolver`; `timeout` bounds each lookup including retries.
    pub fn new(resolver: Arc<TokioAsyncResolver>, timeout: Duration) -> Self {
        Self { resolver, timeout }
    }
}

#[async_trait]
impl AddressResolver for DnsResolver {
    async fn resolve(&self, host: &str) -> Result<Vec<String>, ResolutionError> {
        match tokio::time::timeout(self.timeout, resolve_ipv4_addresses(host, &self.resolver))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(ResolutionError::Timeout {
                domain: host.to_string(),
                timeout: self.timeout,
            }),
        }
    }
}
