//! Caller-supplied feed settings.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_CALENDAR_DESCRIPTION, DEFAULT_CALENDAR_NAME, DEFAULT_LOCATION, DEFAULT_PRODID,
    DEFAULT_TZID, DEFAULT_UID_DOMAIN,
};

/// Everything the feed assembler needs besides the events themselves.
///
/// Every field has a default, so a config file only needs to name what it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedOptions {
    /// Zone paired with every DTSTART/DTEND wall-clock value
    pub tzid: String,
    /// X-WR-CALNAME
    pub calendar_name: String,
    /// X-WR-CALDESC
    pub calendar_description: String,
    pub prodid: String,
    /// LOCATION for events that don't name their own; empty disables the fallback
    pub default_location: String,
    pub uid_domain: String,
}

impl Default for FeedOptions {
    fn default() -> Self {
        FeedOptions {
            tzid: DEFAULT_TZID.to_string(),
            calendar_name: DEFAULT_CALENDAR_NAME.to_string(),
            calendar_description: DEFAULT_CALENDAR_DESCRIPTION.to_string(),
            prodid: DEFAULT_PRODID.to_string(),
            default_location: DEFAULT_LOCATION.to_string(),
            uid_domain: DEFAULT_UID_DOMAIN.to_string(),
        }
    }
}
