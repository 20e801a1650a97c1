//! ICS (RFC 5545) generation.
//!
//! Content lines are built as plain strings. Every line goes through [`fold`] before it is
//! joined with CRLF; TEXT values go through [`escape`] first.

mod datetime;
mod escape;
mod fold;
mod generate;
mod vtimezone;

pub use datetime::{format_local, format_utc, parse_timestamp};
pub use escape::escape;
pub use fold::{fold, FOLD_WIDTH};
pub use generate::{generate, generate_at, serialize_event, serialize_record};
pub use vtimezone::{build_vtimezone, zone_rules, AnnualRule, Observance, ZoneRules, ZONES};
