//! ICS feed generation.

use chrono::{DateTime, Utc};

use super::datetime::{format_local, format_utc};
use super::escape::escape;
use super::fold::fold;
use super::vtimezone::build_vtimezone;
use crate::error::{FeedError, FeedResult};
use crate::event::{Event, EventRecord};
use crate::options::FeedOptions;

/// Serialize one validated event as folded VEVENT lines.
///
/// `dtstamp_utc` is the already-formatted UTC generation time shared by the whole document.
pub fn serialize_event(event: &Event, dtstamp_utc: &str, options: &FeedOptions) -> Vec<String> {
    let tzid = &options.tzid;

    let mut lines = vec![
        "BEGIN:VEVENT".to_string(),
        format!("UID:{}", event.uid(&options.uid_domain)),
        format!("DTSTAMP:{}", dtstamp_utc),
        format!("DTSTART;TZID={}:{}", tzid, format_local(&event.start)),
        format!("DTEND;TZID={}:{}", tzid, format_local(&event.end)),
        format!("SUMMARY:{}", escape(Some(event.summary()))),
    ];

    let location = event
        .location
        .as_deref()
        .unwrap_or_else(|| options.default_location.trim());
    if !location.is_empty() {
        lines.push(format!("LOCATION:{}", escape(Some(location))));
    }

    let description = event.description_lines().join("\n");
    if !description.is_empty() {
        lines.push(format!("DESCRIPTION:{}", escape(Some(&description))));
    }

    lines.push("END:VEVENT".to_string());

    lines.iter().map(|l| fold(l)).collect()
}

/// Validate a raw record and serialize it.
pub fn serialize_record(
    record: &EventRecord,
    dtstamp_utc: &str,
    options: &FeedOptions,
) -> FeedResult<Vec<String>> {
    check_tzid(&options.tzid)?;
    let event = Event::try_from(record)?;
    Ok(serialize_event(&event, dtstamp_utc, options))
}

/// Generate a complete VCALENDAR document, stamped with the current UTC time.
pub fn generate(records: &[EventRecord], options: &FeedOptions) -> FeedResult<String> {
    generate_at(records, options, Utc::now())
}

/// Generate a complete VCALENDAR document with an explicit DTSTAMP instant.
///
/// Every record is validated before any output is built; the first invalid record aborts the
/// whole document. Events keep their input order.
pub fn generate_at(
    records: &[EventRecord],
    options: &FeedOptions,
    now: DateTime<Utc>,
) -> FeedResult<String> {
    check_tzid(&options.tzid)?;

    let events = records
        .iter()
        .map(Event::try_from)
        .collect::<FeedResult<Vec<_>>>()?;

    let dtstamp = format_utc(&now);

    let mut lines: Vec<String> = [
        "BEGIN:VCALENDAR".to_string(),
        "VERSION:2.0".to_string(),
        format!("PRODID:{}", options.prodid),
        "CALSCALE:GREGORIAN".to_string(),
        "METHOD:PUBLISH".to_string(),
        format!("X-WR-CALNAME:{}", escape(Some(&options.calendar_name))),
        format!("X-WR-CALDESC:{}", escape(Some(&options.calendar_description))),
        format!("X-WR-TIMEZONE:{}", options.tzid),
    ]
    .iter()
    .map(|l| fold(l))
    .collect();

    let tz_block = build_vtimezone(&options.tzid);
    if tz_block.is_empty() {
        tracing::debug!(tzid = %options.tzid, "no VTIMEZONE for zone, clients resolve it");
    }
    lines.extend(tz_block);

    for event in &events {
        lines.extend(serialize_event(event, &dtstamp, options));
    }

    lines.push("END:VCALENDAR".to_string());

    tracing::debug!(events = events.len(), lines = lines.len(), "generated calendar");

    let mut output = lines.join("\r\n");
    output.push_str("\r\n");
    Ok(output)
}

/// The zone id is written unescaped into a parameter and a property value.
fn check_tzid(tzid: &str) -> FeedResult<()> {
    let bad_char = |c: char| c.is_control() || matches!(c, ':' | ';' | ',' | '"');
    if tzid.trim().is_empty() || tzid.contains(bad_char) {
        return Err(FeedError::Config(format!(
            "Time zone id {:?} can't be written to a feed",
            tzid
        )));
    }
    Ok(())
}
