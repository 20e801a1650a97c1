//! Record normalization for the published events JSON.

use std::collections::HashSet;

use chrono::{DateTime, Days, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_END_HOUR, DEFAULT_END_MINUTE};
use crate::error::{FeedError, FeedResult};
use crate::event::{non_blank, Event, EventRecord};
use crate::ics::parse_timestamp;

/// Longest slug kept in a deterministic id.
const MAX_SLUG_LEN: usize = 60;

/// How to fill in missing event ids.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdMode {
    /// Random v4 UUID
    #[default]
    Uuid,
    /// `YYYYMMDD-<slugified title>`, stable across runs
    Deterministic,
}

#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    pub id_mode: IdMode,
}

/// Clean up a batch of records for publishing.
///
/// - trims text fields, dropping blank ones
/// - skips records with neither a title nor a meeting activity
/// - skips records without a parseable start
/// - defaults a missing end to 21:30 on the start's date, and moves an end that isn't after
///   the start forward one day
/// - fills missing ids according to `options.id_mode`
/// - validates the result (any failure aborts the batch)
/// - sorts chronologically by start instant, keeping input order for ties
pub fn normalize(
    records: &[EventRecord],
    options: &NormalizeOptions,
) -> FeedResult<Vec<EventRecord>> {
    let mut normalized: Vec<(Event, EventRecord)> = Vec::with_capacity(records.len());

    for record in records {
        let Some(title) = non_blank(record.title.as_deref())
            .or_else(|| non_blank(record.meeting_activity.as_deref()))
        else {
            tracing::debug!(record = %record.label(), "skipping record without a title");
            continue;
        };

        let Some(start) =
            non_blank(record.start.as_deref()).and_then(|value| parse_timestamp(&value).ok())
        else {
            tracing::warn!(record = %record.label(), "skipping record without a usable start");
            continue;
        };
        let end = match non_blank(record.end.as_deref()) {
            Some(value) => Some(
                parse_timestamp(&value).map_err(|_| FeedError::Parse { field: "end", value })?,
            ),
            None => None,
        };
        let end = settle_end(record, start, end)?;

        let event = Event::try_from(&EventRecord {
            start: Some(start.to_rfc3339()),
            end: Some(end.to_rfc3339()),
            ..record.clone()
        })?;
        let id = event
            .id
            .clone()
            .unwrap_or_else(|| make_id(&title, &event, options.id_mode));

        let cleaned = EventRecord {
            id: Some(id),
            title: Some(title),
            start: Some(event.start.to_rfc3339()),
            end: Some(event.end.to_rfc3339()),
            location: event.location.clone(),
            description: event.description.clone(),
            meeting_activity: event.activity.clone(),
            mini_competition: event.mini_competition.clone(),
            comments: event.comments.clone(),
        };
        normalized.push((event, cleaned));
    }

    normalized.sort_by_key(|(event, _)| event.start);

    let mut seen = HashSet::new();
    for (_, record) in &normalized {
        if let Some(ref id) = record.id {
            if !seen.insert(id.clone()) {
                tracing::warn!(id = %id, "duplicate event id, calendar UIDs will collide");
            }
        }
    }

    Ok(normalized.into_iter().map(|(_, record)| record).collect())
}

fn settle_end(
    record: &EventRecord,
    start: DateTime<FixedOffset>,
    end: Option<DateTime<FixedOffset>>,
) -> FeedResult<DateTime<FixedOffset>> {
    let end = match end {
        Some(end) => Some(end),
        None => start
            .date_naive()
            .and_hms_opt(DEFAULT_END_HOUR, DEFAULT_END_MINUTE, 0)
            .and_then(|naive| naive.and_local_timezone(*start.offset()).single()),
    };

    let end = match end {
        Some(end) if end <= start => end.checked_add_days(Days::new(1)),
        other => other,
    };

    end.ok_or_else(|| {
        FeedError::Validation(format!("Event {} has no representable end", record.label()))
    })
}

fn make_id(title: &str, event: &Event, mode: IdMode) -> String {
    match mode {
        IdMode::Uuid => uuid::Uuid::new_v4().to_string(),
        IdMode::Deterministic => {
            let slug: String = slug::slugify(title).chars().take(MAX_SLUG_LEN).collect();
            format!("{}-{}", event.start.format("%Y%m%d"), slug)
        }
    }
}
