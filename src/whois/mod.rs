// whois/mod.rs
// Registration (expiry) lookup over RDAP

mod parse;
mod types;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error_handling::LookupError;

pub use parse::expiry_status;

/// Looks up the registration expiration dates of a domain.
#[async_trait]
pub trait RegistrationLookup: Send + Sync {
    /// Returns every expiration date the registry reports for `domain`.
    ///
    /// An empty list means the registry answered without an expiration date.
    async fn expiration_dates(&self, domain: &str) -> Result<Vec<DateTime<Utc>>, LookupError>;
}

/// Reduces a host to the name a registry knows about.
///
/// `shop.example.co.uk` is registered as `example.co.uk`. Hosts without a
/// registrable part (bare suffixes, single labels) are returned unchanged.
pub fn registrable_domain(host: &str) -> &str {
    psl::domain_str(host).unwrap_or(host)
}

/// RDAP client querying `{base_url}domain/{name}`.
///
/// The default base is the rdap.org bootstrap redirector, which forwards to
/// the authoritative registry for the TLD.
pub struct RdapClient {
    client: Arc<reqwest::Client>,
    base_url: String,
    timeout: Duration,
}

impl RdapClient {
    /// Creates a client against `base_url` using the shared HTTP client.
    pub fn new(client: Arc<reqwest::Client>, base_url: &str, timeout: Duration) -> Self {
        let base_url = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };
        Self {
            client,
            base_url,
            timeout,
        }
    }

    fn query_url(&self, name: &str) -> String {
        format!("{}domain/{}", self.base_url, name)
    }

    async fn query(&self, name: &str) -> Result<Vec<DateTime<Utc>>, LookupError> {
        let url = self.query_url(name);
        log::debug!("RDAP query: {}", url);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/rdap+json")
            .send()
            .await
            .map_err(|source| LookupError::Transport {
                domain: name.to_string(),
                source,
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Err(LookupError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::Service {
                domain: name.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|source| LookupError::Transport {
                domain: name.to_string(),
                source,
            })?;

        parse::parse_expiration_dates(&body).map_err(|reason| LookupError::Malformed {
            domain: name.to_string(),
            reason,
        })
    }
}

#[async_trait]
impl RegistrationLookup for RdapClient {
    async fn expiration_dates(&self, domain: &str) -> Result<Vec<DateTime<Utc>>, LookupError> {
        let name = registrable_domain(domain);
        match tokio::time::timeout(self.timeout, self.query(name)).await {
            Ok(result) => result,
            Err(_) => Err(LookupError::Timeout {
                domain: name.to_string(),
                timeout: self.timeout,
            }),
        }
    }
}
