//! Registration data parsing and expiry evaluation.

use chrono::{DateTime, Utc};

use super::types::{RdapDomain, EXPIRATION_EVENT};
use crate::models::ExpiryStatus;

/// Extracts every expiration date from an RDAP domain response body.
///
/// Events with unparseable dates are skipped; an object without expiration
/// events yields an empty list.
///
/// # Errors
///
/// Returns the serde error message if the body is not an RDAP domain object.
pub(crate) fn parse_expiration_dates(body: &str) -> Result<Vec<DateTime<Utc>>, String> {
    let domain: RdapDomain = serde_json::from_str(body).map_err(|e| e.to_string())?;

    let dates = domain
        .events
        .iter()
        .filter(|event| event.event_action.eq_ignore_ascii_case(EXPIRATION_EVENT))
        .filter_map(|event| event.event_date.as_deref())
        .filter_map(|date| {
            let parsed = parse_date_string(date);
            if parsed.is_none() {
                log::debug!("Ignoring unparseable expiration date '{}'", date);
            }
            parsed
        })
        .collect();

    Ok(dates)
}

/// Attempts to parse a date string in the formats registries use.
pub(crate) fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(naive_dt) = chrono::NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

/// Decides the expiry status from the known expiration dates.
///
/// The earliest date is authoritative. A date strictly before `now` means
/// expired; no dates at all means the status is unknown.
pub fn expiry_status(dates: &[DateTime<Utc>], now: DateTime<Utc>) -> ExpiryStatus {
    match dates.iter().min() {
        Some(earliest) if *earliest < now => ExpiryStatus::Expired,
        Some(_) => ExpiryStatus::Active,
        None => ExpiryStatus::Unknown,
    }
}
