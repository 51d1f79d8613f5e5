//! Hyperlink extraction from page markup.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

const LINK_SELECTOR_STR: &str = "a[href]";

static LINK_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(LINK_SELECTOR_STR).unwrap_or_else(|e| {
        panic!(
            "Failed to parse CSS selector '{}': {}. This is a programming error.",
            LINK_SELECTOR_STR, e
        )
    })
});

/// Returns the host of every hyperlink in `html`, resolved against `base`.
///
/// Relative targets inherit the base's scheme, host, and path. Targets that do
/// not resolve, or resolve to URLs without a host (`mailto:`, `javascript:`),
/// are skipped. Hosts are returned lowercase, without port; duplicates are
/// kept so callers decide how to merge.
pub fn extract_link_hosts(html: &str, base: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    document
        .select(&LINK_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| base.join(href.trim()).ok())
        .filter_map(|target| target.host_str().map(|host| host.to_ascii_lowercase()))
        .collect()
}
