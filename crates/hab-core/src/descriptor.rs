//! Discovered content file metadata.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::enums::FileKind;

/// Metadata for one candidate content file, produced by Discovery and
/// discarded after the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentFileDescriptor {
    pub path: PathBuf,
    pub filename: String,
    /// Topical category derived from the filename (`sleep-habits.json` ->
    /// `sleep`), or `legacy` for legacy files.
    pub category: String,
    pub kind: FileKind,
    pub modified_at: DateTime<Utc>,
    pub size_bytes: u64,
}

impl ContentFileDescriptor {
    /// Identifier recorded in `_sources` for items this file contributed.
    #[must_use]
    pub fn file_id(&self) -> &str {
        &self.filename
    }
}
