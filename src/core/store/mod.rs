//! Entry store.
//!
//! Persists the whole entry mapping of one workspace as a single TOML
//! document. Every save rewrites the file through a temporary sibling and a
//! rename, so a failed write leaves the previous snapshot untouched and a
//! successful one is always complete.

mod fs;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::constants;
use crate::core::domain::Entry;
use crate::error::{Result, StoreError};

pub use fs::{file_mode, write_with_mode};

/// Tracked files keyed by absolute path.
pub type Entries = BTreeMap<PathBuf, Entry>;

/// On-disk layout of the metadata file.
#[derive(Debug, Deserialize)]
struct Document {
    cellar: Meta,
    #[serde(default)]
    entries: Entries,
}

#[derive(Debug, Serialize, Deserialize)]
struct Meta {
    version: String,
}

/// Metadata file for a single workspace.
#[derive(Debug, Clone)]
pub struct EntryStore {
    path: PathBuf,
}

impl EntryStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the metadata file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether `path` is the metadata file or one of the temporary and
    /// backup files written beside it.
    pub fn owns(&self, path: &Path) -> bool {
        if path == self.path {
            return true;
        }
        let (Some(name), Some(own)) = (path.file_name(), self.path.file_name()) else {
            return false;
        };
        if path.parent() != self.path.parent() {
            return false;
        }
        let mut prefix = own.to_os_string();
        prefix.push(".");
        name.as_encoded_bytes()
            .starts_with(prefix.as_encoded_bytes())
    }

    /// Whether the metadata file is present.
    ///
    /// This is the only signal that a workspace is initialized.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Create parent directories and write an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the directory or file cannot be
    /// created.
    pub fn init(&self) -> Result<()> {
        debug!(path = %self.path.display(), "initializing store");
        if let Some(parent) = self.path.parent() {
            fs::create_private_dir(parent).map_err(|source| StoreError::WriteFailed {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        self.save(&Entries::new())
    }

    /// Read and parse the metadata file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ReadFailed` if the file cannot be read, and
    /// `StoreError::Parse` or `StoreError::UnsupportedVersion` if it is not a
    /// metadata document this version understands.
    pub fn load(&self) -> Result<Entries> {
        debug!(path = %self.path.display(), "loading store");

        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| StoreError::ReadFailed {
                path: self.path.clone(),
                source,
            })?;
        let document: Document = toml::from_str(&contents).map_err(StoreError::Parse)?;

        if document.cellar.version != constants::FORMAT_VERSION {
            return Err(StoreError::UnsupportedVersion(document.cellar.version).into());
        }

        let mut entries = document.entries;
        for (path, entry) in entries.iter_mut() {
            entry.set_path(path.clone());
        }

        debug!(entries = entries.len(), "store loaded");
        Ok(entries)
    }

    /// Replace the metadata file with a snapshot of `entries`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Serialize` or `StoreError::WriteFailed`. On
    /// failure the previous file is left as it was.
    pub fn save(&self, entries: &Entries) -> Result<()> {
        Self::write_to(&self.path, entries)
    }

    /// Write a snapshot of `entries` next to the store, stamped with
    /// `timestamp`, without changing the live file.
    ///
    /// # Returns
    ///
    /// Path of the backup file.
    pub fn backup(&self, entries: &Entries, timestamp: i64) -> Result<PathBuf> {
        let mut name = self.path.clone().into_os_string();
        name.push(format!(".backup.{}", timestamp));
        let target = PathBuf::from(name);

        Self::write_to(&target, entries)?;
        Ok(target)
    }

    /// Delete the metadata file.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::WriteFailed` if the file cannot be removed.
    pub fn destroy(&self) -> Result<()> {
        debug!(path = %self.path.display(), "destroying store");
        std::fs::remove_file(&self.path).map_err(|source| StoreError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }

    fn write_to(path: &Path, entries: &Entries) -> Result<()> {
        debug!(path = %path.display(), entries = entries.len(), "saving store");

        let document = DocumentRef {
            cellar: Meta {
                version: constants::FORMAT_VERSION.to_string(),
            },
            entries,
        };
        let contents = toml::to_string_pretty(&document).map_err(StoreError::Serialize)?;

        fs::write_private(path, contents.as_bytes()).map_err(|source| StoreError::WriteFailed {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

/// Borrowing twin of [`Document`] so saving does not clone every entry.
#[derive(Serialize)]
struct DocumentRef<'a> {
    cellar: Meta,
    entries: &'a Entries,
}
