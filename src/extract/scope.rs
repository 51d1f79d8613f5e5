//! Same-site scope filter for discovered hostnames.

use regex::Regex;
use std::net::IpAddr;
use std::sync::LazyLock;

/// Hostname surface form accepted for discovered domains.
const HOSTNAME_PATTERN: &str = r"^[a-z0-9.-]+$";

static HOSTNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HOSTNAME_PATTERN).unwrap_or_else(|e| {
        panic!(
            "Failed to compile hostname pattern '{}': {}. This is a programming error.",
            HOSTNAME_PATTERN, e
        )
    })
});

/// Returns true if `host` only uses letters, digits, hyphens, and dots.
///
/// Expects a lowercased host; IPv6 literals and internationalized names in
/// Unicode form are rejected.
pub fn is_hostname_like(host: &str) -> bool {
    !host.is_empty() && HOSTNAME_REGEX.is_match(host)
}

/// Returns true if `host` belongs to the same site as `seed_host`.
///
/// A host is in scope when it contains the seed host (the seed itself and its
/// subdomains), or when the seed is a subdomain of it and it is still a
/// registrable name rather than a bare public suffix (`example.com` for a
/// `www.example.com` seed, but never `com`). IP literal seeds have no
/// parents.
pub fn is_in_scope(seed_host: &str, host: &str) -> bool {
    if seed_host.is_empty() || host.is_empty() {
        return false;
    }

    if host.contains(seed_host) {
        return true;
    }

    if seed_host.parse::<IpAddr>().is_ok() {
        return false;
    }

    let is_parent = seed_host
        .strip_suffix(host)
        .is_some_and(|prefix| prefix.ends_with('.'));
    is_parent && psl::domain_str(host).is_some()
}

/// Applies both the scope and the surface-form checks.
pub fn accept_host(seed_host: &str, host: &str) -> bool {
    is_in_scope(seed_host, host) && is_hostname_like(host)
}
