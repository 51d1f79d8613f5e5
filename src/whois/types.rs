//! RDAP response structures.
//!
//! Only the parts needed for expiry checks are modelled; unknown members are
//! ignored by serde.

use serde::Deserialize;

/// RDAP domain object (RFC 9083, section 5.3).
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RdapDomain {
    #[serde(default)]
    pub(crate) events: Vec<RdapEvent>,
}

/// One entry of an RDAP `events` array.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RdapEvent {
    #[serde(rename = "eventAction")]
    pub(crate) event_action: String,
    #[serde(rename = "eventDate", default)]
    pub(crate) event_date: Option<String>,
}

/// Event action marking the registration expiration date.
pub(crate) const EXPIRATION_EVENT: &str = "expiration";
