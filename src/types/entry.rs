//! Sound entries and the catalog that holds them.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{FetcherError, Result};

/// File extension used for every downloaded sound.
pub const SOUND_EXTENSION: &str = "mp3";

/// One logical sound name paired with the URL it is downloaded from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SoundEntry {
    /// Logical name, also the stem of the output file.
    pub name: String,
    /// Absolute http(s) URL of the sound.
    pub url: String,
}

impl SoundEntry {
    /// Creates a validated entry.
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let entry = Self {
            name: name.into(),
            url: url.into(),
        };
        if let Some(reason) = entry.validate() {
            return Err(FetcherError::invalid_entry(&entry.name, reason));
        }
        Ok(entry)
    }

    /// Validates the entry.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("name cannot be empty".to_string());
        }

        if self.name == "." || self.name == ".." {
            return Some("name cannot be a relative path component".to_string());
        }

        if self.name.contains(['/', '\\']) || self.name.contains('\0') {
            return Some("name cannot contain path separators".to_string());
        }

        match reqwest::Url::parse(&self.url) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => None,
            Ok(url) => Some(format!("unsupported URL scheme '{}'", url.scheme())),
            Err(e) => Some(format!("invalid URL '{}': {}", self.url, e)),
        }
    }

    /// File name the sound is saved under, e.g. `hit.mp3`.
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, SOUND_EXTENSION)
    }

    /// Deterministic output path inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(self.file_name())
    }
}

/// Ordered set of sound entries with unique names.
///
/// Iteration follows insertion order, so progress output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SoundCatalog {
    entries: Vec<SoundEntry>,
}

impl SoundCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from `(name, url)` pairs.
    pub fn from_pairs<N, U>(pairs: impl IntoIterator<Item = (N, U)>) -> Result<Self>
    where
        N: Into<String>,
        U: Into<String>,
    {
        let mut catalog = Self::new();
        for (name, url) in pairs {
            catalog.insert(SoundEntry::new(name, url)?)?;
        }
        Ok(catalog)
    }

    /// Appends an entry, rejecting duplicate names.
    pub fn insert(&mut self, entry: SoundEntry) -> Result<()> {
        if self.get(&entry.name).is_some() {
            return Err(FetcherError::invalid_entry(&entry.name, "duplicate name"));
        }
        self.entries.push(entry);
        Ok(())
    }

    /// Looks up an entry by logical name.
    pub fn get(&self, name: &str) -> Option<&SoundEntry> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SoundEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a SoundCatalog {
    type Item = &'a SoundEntry;
    type IntoIter = std::slice::Iter<'a, SoundEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
