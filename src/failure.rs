//! Failure stages and their exit codes.

use std::path::PathBuf;

use thiserror::Error;

/// Which step of a run failed. Attached as context so `main` can pick the exit code.
#[derive(Error, Debug)]
pub enum Failure {
    #[error("{} not found", .0.display())]
    MissingInput(PathBuf),

    #[error("Failed to read/parse {}", .0.display())]
    UnreadableInput(PathBuf),

    #[error("Failed to generate output")]
    Generate,

    #[error("Failed to write {}", .0.display())]
    WriteOutput(PathBuf),
}

impl Failure {
    pub fn exit_code(&self) -> u8 {
        match self {
            Failure::MissingInput(_) => 2,
            Failure::UnreadableInput(_) => 3,
            Failure::Generate | Failure::WriteOutput(_) => 4,
        }
    }
}

/// Exit code for an error chain: the stage's code if one is attached, else 1.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.downcast_ref::<Failure>().map_or(1, Failure::exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use eventfeed_core::FeedError;

    #[test]
    fn stage_context_sets_exit_code() {
        let result: anyhow::Result<()> = Err(FeedError::Validation("missing end".into()))
            .context(Failure::Generate);
        assert_eq!(exit_code(&result.unwrap_err()), 4);
    }

    #[test]
    fn missing_input_is_two() {
        let err = anyhow::Error::from(Failure::MissingInput(PathBuf::from("events.json")));
        assert_eq!(exit_code(&err), 2);
        assert_eq!(err.to_string(), "events.json not found");
    }

    #[test]
    fn unclassified_errors_are_one() {
        let err = anyhow::anyhow!("bad flag");
        assert_eq!(exit_code(&err), 1);
    }

    #[test]
    fn outer_context_still_finds_stage() {
        let result: anyhow::Result<()> = Err(FeedError::Serialization("eof".into()))
            .context(Failure::UnreadableInput(PathBuf::from("in.json")))
            .context("while running ics");
        assert_eq!(exit_code(&result.unwrap_err()), 3);
    }
}
