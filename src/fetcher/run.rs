//! Sequential fetch loop.
//!
//! Entries are processed one at a time in catalog order. A failing entry is
//! recorded in the [`RunReport`] and the loop moves on; only failing to
//! create the output directory aborts the run.

use std::fmt;
use std::fs;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::catalog::{default_catalog, OUTPUT_DIR};
use crate::config::FetcherConfig;
use crate::error::{FetcherError, Result};
use crate::types::{EntryOutcome, EntryReport, RunReport, SoundCatalog, SoundEntry, SOUND_EXTENSION};

use super::source::{HttpSource, SoundSource};

/// Progress notification emitted while a run is in flight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchEvent {
    /// About to fetch the named entry.
    Started { name: String },
    /// The entry was saved.
    Finished { name: String, bytes: u64 },
    /// The entry failed and was skipped.
    Failed { name: String, reason: String },
    /// Every entry has been processed.
    Completed { succeeded: usize, failed: usize },
}

impl fmt::Display for FetchEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchEvent::Started { name } => {
                write!(f, "Downloading {}.{}...", name, SOUND_EXTENSION)
            }
            FetchEvent::Finished { name, .. } => {
                write!(f, "Downloaded {}.{}", name, SOUND_EXTENSION)
            }
            FetchEvent::Failed { name, reason } => {
                write!(f, "Error downloading {}.{}: {}", name, SOUND_EXTENSION, reason)
            }
            FetchEvent::Completed { .. } => write!(f, "Done downloading sounds!"),
        }
    }
}

/// Prints an event as one console line on stdout.
pub fn print_event(event: &FetchEvent) {
    println!("{}", event);
}

/// Downloads every entry of `catalog` into `output_dir`.
///
/// # Arguments
///
/// * `catalog` - Sounds to fetch, processed in order
/// * `output_dir` - Directory receiving `<name>.mp3` files; created if absent
/// * `source` - Where the bytes come from
/// * `on_event` - Callback receiving progress events
///
/// # Returns
///
/// A [`RunReport`] with one entry per catalog entry. Per-entry failures are
/// part of the report; `Err` is returned only when the output directory
/// cannot be created, in which case nothing is fetched.
pub fn fetch_sounds<S, F>(
    catalog: &SoundCatalog,
    output_dir: &Path,
    source: &S,
    mut on_event: F,
) -> Result<RunReport>
where
    S: SoundSource + ?Sized,
    F: FnMut(&FetchEvent),
{
    fs::create_dir_all(output_dir).map_err(|e| FetcherError::output_dir_failed(output_dir, e))?;

    let mut report = RunReport::default();

    for entry in catalog {
        on_event(&FetchEvent::Started {
            name: entry.name.clone(),
        });
        debug!(entry = %entry.name, url = %entry.url, "fetching sound");

        let outcome = match fetch_entry(entry, output_dir, source) {
            Ok(outcome) => {
                if let EntryOutcome::Downloaded { bytes, .. } = outcome {
                    debug!(entry = %entry.name, bytes, "sound saved");
                    on_event(&FetchEvent::Finished {
                        name: entry.name.clone(),
                        bytes,
                    });
                }
                outcome
            }
            Err(err) => {
                warn!(entry = %entry.name, code = %err.code, error = %err.message, "sound skipped");
                on_event(&FetchEvent::Failed {
                    name: entry.name.clone(),
                    reason: err.message.clone(),
                });
                EntryOutcome::failed(&err)
            }
        };

        report.entries.push(EntryReport {
            name: entry.name.clone(),
            outcome,
        });
    }

    info!(
        succeeded = report.succeeded(),
        failed = report.failed(),
        "fetch run complete"
    );
    on_event(&FetchEvent::Completed {
        succeeded: report.succeeded(),
        failed: report.failed(),
    });

    Ok(report)
}

/// Runs the built-in catalog into `audio/` over HTTP, printing progress.
pub fn fetch_default_sounds(config: &FetcherConfig) -> Result<RunReport> {
    let catalog = default_catalog()?;
    let source = HttpSource::new(config)?;
    fetch_sounds(&catalog, Path::new(OUTPUT_DIR), &source, print_event)
}

/// Fetches one entry into a temporary file, then moves it into place.
///
/// The temporary file lives in `output_dir` so the final rename stays on one
/// filesystem. It is removed on drop if anything fails before the rename.
fn fetch_entry<S>(entry: &SoundEntry, output_dir: &Path, source: &S) -> Result<EntryOutcome>
where
    S: SoundSource + ?Sized,
{
    let dest = entry.output_path(output_dir);

    let prefix = format!(".{}.", entry.name);
    let mut builder = tempfile::Builder::new();
    builder.prefix(&prefix).suffix(".part");

    // tempfile defaults to 0600; saved sounds must be as readable as any
    // other file the user creates, so ask for 0666 and let the umask apply.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(fs::Permissions::from_mode(0o666));
    }

    let mut tmp = builder
        .tempfile_in(output_dir)
        .map_err(|e| {
            FetcherError::write_failed(
                format!("Failed to create temporary file in {}", output_dir.display()),
                e,
            )
        })?;

    let bytes = source.fetch(&entry.url, tmp.as_file_mut())?;

    tmp.persist(&dest).map_err(|e| {
        FetcherError::write_failed(format!("Failed to save {}", dest.display()), e.error)
    })?;

    Ok(EntryOutcome::Downloaded { path: dest, bytes })
}
