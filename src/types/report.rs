//! Per-entry results of a fetch run.
//!
//! Failures are recorded as data instead of being propagated, so one bad
//! entry never stops the rest of the run.

use std::path::PathBuf;

use serde::Serialize;

use crate::error::FetcherError;

/// What happened to a single sound entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum EntryOutcome {
    /// The sound was saved at `path`.
    Downloaded {
        /// Final file location.
        path: PathBuf,
        /// Number of bytes written.
        bytes: u64,
    },
    /// The sound could not be fetched or saved.
    Failed {
        /// Error code string, e.g. `HTTP_STATUS`.
        error_code: String,
        /// Human-readable reason.
        reason: String,
    },
}

impl EntryOutcome {
    /// Builds a failed outcome from an error.
    pub fn failed(err: &FetcherError) -> Self {
        EntryOutcome::Failed {
            error_code: err.code.as_str().to_string(),
            reason: err.message.clone(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, EntryOutcome::Downloaded { .. })
    }
}

/// Outcome of one entry, tagged with its logical name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    pub name: String,
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

/// Ordered results of a full run, one report per catalog entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    pub entries: Vec<EntryReport>,
}

impl RunReport {
    /// Number of entries saved successfully.
    pub fn succeeded(&self) -> usize {
        self.entries.iter().filter(|r| r.outcome.is_success()).count()
    }

    /// Number of entries that failed.
    pub fn failed(&self) -> usize {
        self.entries.len() - self.succeeded()
    }

    /// Returns the report for `name`, if that entry was processed.
    pub fn get(&self, name: &str) -> Option<&EntryReport> {
        self.entries.iter().find(|r| r.name == name)
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed() == 0
    }
}
