//! Core types for the sound fetcher.
//!
//! - [`SoundEntry`] / [`SoundCatalog`]: what to download
//! - [`EntryOutcome`] / [`EntryReport`] / [`RunReport`]: what happened

mod entry;
mod report;

pub use entry::{SoundCatalog, SoundEntry, SOUND_EXTENSION};
pub use report::{EntryOutcome, EntryReport, RunReport};
