//! Event records and their validated form.
//!
//! An [`EventRecord`] is what the ingestion stage hands us: every field optional, strings
//! possibly blank. [`Event`] is the same data after defaulting and validation, which is the
//! only shape the ICS generator works with.

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{FeedError, FeedResult};
use crate::ics::parse_timestamp;

/// Fallback used for SUMMARY when an event has neither a title nor an activity.
pub const DEFAULT_SUMMARY: &str = "Event";

/// Fallback UID prefix when an event has neither an id nor a title.
const DEFAULT_UID_PREFIX: &str = "event";

/// One row of the events JSON array, as produced by the ingestion stage.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// ISO-8601 with explicit UTC offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// ISO-8601 with explicit UTC offset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_activity: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mini_competition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<String>,
}

impl EventRecord {
    /// Short human-readable identification for error messages.
    pub fn label(&self) -> String {
        let id = non_blank(self.id.as_deref());
        let title = non_blank(self.title.as_deref());
        match (id, title) {
            (Some(id), Some(title)) => format!("'{}' (id {})", title, id),
            (Some(id), None) => format!("id {}", id),
            (None, Some(title)) => format!("'{}'", title),
            (None, None) => "<untitled event>".to_string(),
        }
    }
}

/// A validated event: blank text fields are `None`, and start/end are parsed timestamps with
/// `end > start`.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Option<String>,
    pub title: Option<String>,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub activity: Option<String>,
    pub mini_competition: Option<String>,
    pub comments: Option<String>,
}

impl Event {
    /// Display title: the title, else the meeting activity, else "Event".
    pub fn summary(&self) -> &str {
        self.title
            .as_deref()
            .or(self.activity.as_deref())
            .unwrap_or(DEFAULT_SUMMARY)
    }

    /// Globally unique identifier, stable across regenerations of the same event.
    ///
    /// Line breaks inside the id or title collapse to single spaces.
    pub fn uid(&self, domain: &str) -> String {
        let local = self
            .id
            .as_deref()
            .or(self.title.as_deref())
            .unwrap_or(DEFAULT_UID_PREFIX);
        let local = local
            .split(['\r', '\n'])
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        format!("{}@{}", local, domain)
    }

    /// Lines combined into the DESCRIPTION property, unescaped.
    pub fn description_lines(&self) -> Vec<String> {
        let mut parts = Vec::new();

        if let Some(ref desc) = self.description {
            parts.push(desc.clone());
        }
        if let Some(ref activity) = self.activity {
            if activity != self.summary() {
                parts.push(format!("Activity: {}", activity));
            }
        }
        if let Some(ref mini) = self.mini_competition {
            parts.push(format!("Mini competition: {}", mini));
        }
        if let Some(ref comments) = self.comments {
            parts.push(format!("Notes: {}", comments));
        }

        parts
    }
}

impl TryFrom<&EventRecord> for Event {
    type Error = FeedError;

    fn try_from(record: &EventRecord) -> FeedResult<Self> {
        let start = required_timestamp(record, "start", record.start.as_deref())?;
        let end = required_timestamp(record, "end", record.end.as_deref())?;

        if end <= start {
            return Err(FeedError::Validation(format!(
                "Event {} does not end ({}) after it starts ({})",
                record.label(),
                end.to_rfc3339(),
                start.to_rfc3339()
            )));
        }

        Ok(Event {
            id: non_blank(record.id.as_deref()),
            title: non_blank(record.title.as_deref()),
            start,
            end,
            location: non_blank(record.location.as_deref()),
            description: non_blank(record.description.as_deref()),
            activity: non_blank(record.meeting_activity.as_deref()),
            mini_competition: non_blank(record.mini_competition.as_deref()),
            comments: non_blank(record.comments.as_deref()),
        })
    }
}

fn required_timestamp(
    record: &EventRecord,
    field: &'static str,
    value: Option<&str>,
) -> FeedResult<DateTime<FixedOffset>> {
    let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Err(FeedError::Validation(format!(
            "Event {} is missing required '{}'",
            record.label(),
            field
        )));
    };

    parse_timestamp(value).map_err(|_| FeedError::Parse {
        field,
        value: value.to_string(),
    })
}

/// Trim and treat blank as absent.
pub(crate) fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
