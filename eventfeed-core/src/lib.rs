//! Core types for eventfeed.
//!
//! This crate turns a club's event records into publishable formats:
//! - `event` for raw records and their validated form
//! - `ics` for the RFC 5545 feed (escaping, folding, VTIMEZONE, VEVENT serialization)
//! - `normalize` for cleaning and ordering records into the published JSON array

pub mod constants;
pub mod error;
pub mod event;
pub mod ics;
pub mod normalize;
pub mod options;

pub use error::{FeedError, FeedResult};
pub use event::{Event, EventRecord};
pub use options::FeedOptions;
