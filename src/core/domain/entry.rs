//! Entry type.
//!
//! One tracked file: its metadata at add time plus the encrypted payload.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A tracked file and its encrypted contents.
///
/// The path is the key of the entry mapping in the metadata file, so it is
/// not serialized alongside the other fields. The store fills it back in
/// after loading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(skip)]
    path: PathBuf,
    size: u64,
    mode: u32,
    modified: DateTime<Utc>,
    ciphertext: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(
        path: PathBuf,
        size: u64,
        mode: u32,
        modified: DateTime<Utc>,
        ciphertext: String,
    ) -> Self {
        Self {
            path,
            size,
            mode,
            modified,
            ciphertext,
        }
    }

    /// Absolute path of the tracked file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Plaintext length in bytes at add time.
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Permission bits at add time.
    pub fn mode(&self) -> u32 {
        self.mode
    }

    /// Last modification time of the plaintext at add time.
    pub fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Encrypted payload.
    pub fn ciphertext(&self) -> &str {
        &self.ciphertext
    }

    pub(crate) fn set_path(&mut self, path: PathBuf) {
        self.path = path;
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
