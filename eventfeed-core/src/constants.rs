//! Defaults for the published feed.

pub const DEFAULT_TZID: &str = "Australia/Sydney";
pub const DEFAULT_CALENDAR_NAME: &str = "Sydney Amateur Winemakers Club";
pub const DEFAULT_CALENDAR_DESCRIPTION: &str =
    "Meetings and club events for the Sydney Amateur Winemakers Club";
pub const DEFAULT_PRODID: &str = "-//Sydney AWC//sawc-events//EN";
pub const DEFAULT_LOCATION: &str = "Club Rivers, 32 Littleton St, Riverwood NSW 2210";

/// Domain appended to every UID.
pub const DEFAULT_UID_DOMAIN: &str = "sydneyawc.com";

/// Wall-clock end time given to normalized events that have none.
pub const DEFAULT_END_HOUR: u32 = 21;
pub const DEFAULT_END_MINUTE: u32 = 30;
