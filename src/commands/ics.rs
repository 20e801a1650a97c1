use std::path::Path;

use anyhow::{Context, Result};
use eventfeed_core::ics::generate;
use eventfeed_core::FeedOptions;
use owo_colors::OwoColorize;

use crate::failure::Failure;
use crate::io::{read_records, write_atomic};

pub fn run(input: &Path, output: &Path, options: &FeedOptions) -> Result<()> {
    let records = read_records(input)?;
    let ics = generate(&records, options).context(Failure::Generate)?;
    write_atomic(output, &ics)?;

    tracing::info!(output = %output.display(), events = records.len(), tzid = %options.tzid, "wrote calendar");
    println!(
        "{}",
        format!("Wrote {} with {} events.", output.display(), records.len()).green()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::failure::exit_code;

    const EVENTS: &str = r#"[
        {
            "id": "abc",
            "title": "AGM",
            "start": "2025-10-02T19:30:00+10:00",
            "end": "2025-10-02T21:30:00+10:00",
            "location": "",
            "comments": "Members, bring ID"
        }
    ]"#;

    #[test]
    fn writes_calendar_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("events.json");
        let output = dir.path().join("assets").join("sawc-events.ics");
        std::fs::write(&input, EVENTS).unwrap();

        let options = FeedOptions {
            default_location: "Club Rivers".to_string(),
            ..Default::default()
        };
        run(&input, &output, &options).unwrap();

        let ics = std::fs::read_to_string(&output).unwrap();
        assert!(ics.contains("SUMMARY:AGM\r\n"));
        assert!(ics.contains("LOCATION:Club Rivers\r\n"));
        assert!(ics.contains("DESCRIPTION:Notes: Members\\, bring ID\r\n"));
        assert!(ics.ends_with("END:VCALENDAR\r\n"));
    }

    #[test]
    fn invalid_event_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("events.json");
        let output = dir.path().join("sawc-events.ics");
        std::fs::write(&input, r#"[{"id": "x", "start": "2025-10-02T19:30:00+10:00"}]"#).unwrap();

        let err = run(&input, &output, &FeedOptions::default()).unwrap_err();
        assert_eq!(exit_code(&err), 4);
        assert!(!output.exists());
    }
}
