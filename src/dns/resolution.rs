//! IPv4 address resolution.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::ResolutionError;

/// Returns true when the resolver answered that the name has no records
/// (including NXDOMAIN).
pub fn is_no_records(error: &ResolveError) -> bool {
    matches!(error.kind(), ResolveErrorKind::NoRecordsFound { .. })
}

/// Resolves a hostname to its A record addresses.
///
/// # Arguments
///
/// * `host` - The hostname to resolve
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// The addresses in answer order, or an empty list if the name does not exist
/// or has no A records.
///
/// # Errors
///
/// Returns `ResolutionError::Resolve` for timeouts, unreachable servers, and
/// other infrastructure failures.
pub async fn resolve_ipv4_addresses(
    host: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, ResolutionError> {
    match resolver.ipv4_lookup(host).await {
        Ok(lookup) => Ok(lookup.iter().map(|record| record.0.to_string()).collect()),
        Err(e) if is_no_records(&e) => {
            log::debug!("No A records for {}", host);
            Ok(Vec::new())
        }
        Err(source) => Err(ResolutionError::Resolve {
            domain: host.to_string(),
            source,
        }),
    }
}
