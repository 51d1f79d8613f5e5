//! Link extraction for a single seed page.
//!
//! Retrieves the page through the run's `PageSource`, collects the hosts of
//! all hyperlinks, and keeps the ones on the same site as the seed.

mod links;
mod scope;

use std::collections::HashSet;
use std::sync::Arc;

use url::Url;

use crate::error_handling::{ExtractionError, RetrievalError};
use crate::fetch::PageSource;

pub use links::extract_link_hosts;
pub use scope::{accept_host, is_hostname_like, is_in_scope};

/// Extracts in-scope domains from seed pages.
///
/// Holds the page source selected for the run; cheap to share across tasks.
pub struct LinkExtractor {
    source: Arc<dyn PageSource>,
}

impl LinkExtractor {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self { source }
    }

    /// Returns the same-site hostnames linked from `seed`.
    ///
    /// A page without links (or without in-scope links) yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns an `ExtractionError` if the seed is not a usable URL or the
    /// page cannot be retrieved.
    pub async fn extract(&self, seed: &str) -> Result<HashSet<String>, ExtractionError> {
        let base = Url::parse(seed).map_err(|source| RetrievalError::InvalidUrl {
            url: seed.to_string(),
            source,
        })?;
        let seed_host = base
            .host_str()
            .map(|host| host.to_ascii_lowercase())
            .ok_or_else(|| RetrievalError::MissingHost(seed.to_string()))?;

        let markup = self.source.retrieve(&base).await?;

        let domains: HashSet<String> = extract_link_hosts(&markup, &base)
            .into_iter()
            .filter(|host| accept_host(&seed_host, host))
            .collect();

        log::debug!("Found {} in-scope domain(s) on {}", domains.len(), seed);
        Ok(domains)
    }
}
