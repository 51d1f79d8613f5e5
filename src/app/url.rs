//! Seed URL parsing, validation, and normalization.

use log::warn;

use crate::config::MAX_URL_LENGTH;

/// Validates and normalizes a URL.
///
/// Adds https:// prefix if missing, then validates that the URL is syntactically
/// valid and uses http/https scheme. Rejects URLs longer than MAX_URL_LENGTH.
/// Logs a warning and returns None if the URL is invalid, too long, or uses an
/// unsupported scheme.
///
/// # Returns
///
/// `Some(normalized_url)` if the URL is valid and should be processed, `None` otherwise.
pub fn validate_and_normalize_url(url: &str) -> Option<String> {
    if url.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping URL exceeding maximum length ({} > {}): {}...",
            url.len(),
            MAX_URL_LENGTH,
            url.chars().take(50).collect::<String>()
        );
        return None;
    }

    let normalized = if !url.starts_with("http://") && !url.starts_with("https://") {
        format!("https://{url}")
    } else {
        url.to_string()
    };

    if normalized.len() > MAX_URL_LENGTH {
        warn!(
            "Skipping normalized URL exceeding maximum length ({} > {}): {}...",
            normalized.len(),
            MAX_URL_LENGTH,
            normalized.chars().take(50).collect::<String>()
        );
        return None;
    }

    match url::Url::parse(&normalized) {
        Ok(parsed) => match parsed.scheme() {
            "http" | "https" if parsed.host_str().is_some() => Some(normalized),
            "http" | "https" => {
                warn!("Skipping URL without host: {url}");
                None
            }
            _ => {
                warn!("Skipping unsupported scheme for URL: {url}");
                None
            }
        },
        Err(_) => {
            warn!("Skipping invalid URL: {url}");
            None
        }
    }
}

/// Splits a comma-separated seed list into normalized URLs.
///
/// Blank entries are ignored, invalid entries are logged and skipped, and
/// repeated seeds are kept once in first-seen order.
pub fn parse_seed_list(input: &str) -> Vec<String> {
    let mut seeds: Vec<String> = Vec::new();
    for entry in input.split(',') {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(url) = validate_and_normalize_url(trimmed) {
            if !seeds.contains(&url) {
                seeds.push(url);
            }
        }
    }
    seeds
}
