use std::path::Path;

use anyhow::{Context, Result};
use eventfeed_core::ics::generate;
use eventfeed_core::normalize::{normalize, NormalizeOptions};
use eventfeed_core::FeedOptions;
use owo_colors::OwoColorize;

use crate::failure::Failure;
use crate::io::{read_records, write_atomic};

pub fn run(
    input: &Path,
    output: &Path,
    ics_output: Option<&Path>,
    normalize_options: &NormalizeOptions,
    feed_options: &FeedOptions,
) -> Result<()> {
    let records = read_records(input)?;
    let events = normalize(&records, normalize_options).context(Failure::Generate)?;
    let skipped = records.len() - events.len();
    if skipped > 0 {
        tracing::warn!(skipped, "dropped records without a title");
    }

    // Build everything before writing anything
    let mut json = serde_json::to_string_pretty(&events).context(Failure::Generate)?;
    json.push('\n');
    let ics = match ics_output {
        Some(_) => Some(generate(&events, feed_options).context(Failure::Generate)?),
        None => None,
    };

    write_atomic(output, &json)?;
    let mut written = output.display().to_string();

    if let (Some(path), Some(ics)) = (ics_output, ics) {
        write_atomic(path, &ics)?;
        written = format!("{} and {}", written, path.display());
    }

    println!(
        "{}",
        format!("Wrote {} events to {}", events.len(), written).green()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use eventfeed_core::normalize::IdMode;
    use eventfeed_core::EventRecord;

    const EVENTS: &str = r#"[
        {"title": "Christmas party", "start": "2025-12-04T19:00:00+11:00", "end": "2025-12-04T23:00:00+11:00"},
        {"title": "  ", "start": "2025-11-06T19:30:00+11:00", "end": "2025-11-06T21:30:00+11:00"},
        {"title": "AGM", "start": "2025-10-02T19:30:00+10:00", "end": "2025-10-02T21:30:00+10:00", "location": " "}
    ]"#;

    fn deterministic() -> NormalizeOptions {
        NormalizeOptions {
            id_mode: IdMode::Deterministic,
        }
    }

    #[test]
    fn writes_sorted_json_and_optional_ics() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.json");
        let output = dir.path().join("events.json");
        let ics = dir.path().join("calendar.ics");
        std::fs::write(&input, EVENTS).unwrap();

        run(&input, &output, Some(&ics), &deterministic(), &FeedOptions::default()).unwrap();

        let written: Vec<EventRecord> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        let ids: Vec<_> = written.iter().map(|r| r.id.as_deref().unwrap()).collect();
        assert_eq!(ids, vec!["20251002-agm", "20251204-christmas-party"]);
        assert_eq!(written[0].location, None);

        let calendar = std::fs::read_to_string(&ics).unwrap();
        assert!(calendar.contains("UID:20251002-agm@sydneyawc.com\r\n"));
        assert_eq!(calendar.matches("BEGIN:VEVENT").count(), 2);
    }

    #[test]
    fn json_only_when_no_ics_requested() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.json");
        let output = dir.path().join("events.json");
        std::fs::write(&input, EVENTS).unwrap();

        run(&input, &output, None, &deterministic(), &FeedOptions::default()).unwrap();

        assert!(output.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 2);
    }

    #[test]
    fn non_ascii_is_preserved() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("raw.json");
        let output = dir.path().join("events.json");
        std::fs::write(
            &input,
            r#"[{"title": "Dégustation", "start": "2025-10-02T19:30:00+10:00", "end": "2025-10-02T21:30:00+10:00"}]"#,
        )
        .unwrap();

        run(&input, &output, None, &deterministic(), &FeedOptions::default()).unwrap();
        assert!(std::fs::read_to_string(&output).unwrap().contains("Dégustation"));
    }
}
