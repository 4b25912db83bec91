//! sound-fetcher: downloads the breakout game's sound effects.
//!
//! A fixed catalog of logical sound names is fetched over HTTP, one entry at
//! a time, into `audio/<name>.mp3`. A failing entry is reported and skipped;
//! only failing to create the output directory aborts the run.
//!
//! # Modules
//!
//! - [`types`]: Sound entries, catalogs and run reports
//! - [`catalog`]: The built-in sound list
//! - [`fetcher`]: Byte sources and the fetch loop
//! - [`config`]: Transport configuration (FetcherConfig)
//! - [`error`]: Error types and codes (FetcherError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::path::Path;
//! use sound_fetcher::{fetch_sounds, print_event, FetcherConfig, HttpSource, SoundCatalog};
//!
//! let catalog = SoundCatalog::from_pairs([("hit", "https://example.com/hit.mp3")])?;
//! let source = HttpSource::new(&FetcherConfig::default())?;
//! let report = fetch_sounds(&catalog, Path::new("audio"), &source, print_event)?;
//! println!("{} saved, {} failed", report.succeeded(), report.failed());
//! ```

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod logging;
pub mod types;

pub use catalog::{default_catalog, OUTPUT_DIR, SOUND_URLS};
pub use config::FetcherConfig;
pub use error::{ErrorCode, FetcherError, Result};
pub use fetcher::{fetch_default_sounds, fetch_sounds, print_event, FetchEvent, HttpSource, SoundSource};
pub use types::{EntryOutcome, EntryReport, RunReport, SoundCatalog, SoundEntry};
