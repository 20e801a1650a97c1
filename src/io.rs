//! Reading event records and committing output files.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use eventfeed_core::{EventRecord, FeedError};

use crate::failure::Failure;

/// Read the events JSON array from `path`.
pub fn read_records(path: &Path) -> Result<Vec<EventRecord>> {
    if !path.exists() {
        return Err(Failure::MissingInput(path.to_path_buf()).into());
    }

    parse_records(path).context(Failure::UnreadableInput(path.to_path_buf()))
}

fn parse_records(path: &Path) -> Result<Vec<EventRecord>, FeedError> {
    let content = std::fs::read_to_string(path)?;
    let value: serde_json::Value = serde_json::from_str(&content)?;

    if !value.is_array() {
        return Err(FeedError::Serialization(
            "Root JSON must be a list of events".into(),
        ));
    }

    let records: Vec<EventRecord> = serde_json::from_value(value)?;
    tracing::debug!(path = %path.display(), count = records.len(), "read event records");
    Ok(records)
}

/// Write `contents` to `path`, creating parent directories.
///
/// The data goes to a temporary file in the same directory first and is renamed into place,
/// so an interrupted run never leaves a half-written file behind.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    persist(path, contents).context(Failure::WriteOutput(path.to_path_buf()))
}

fn persist(path: &Path, contents: &str) -> Result<(), FeedError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(contents.as_bytes())?;
    tmp.persist(path).map_err(|e| FeedError::Io(e.error))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}
