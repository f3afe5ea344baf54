//! Lifecycle operations.
//!
//! Init, destroy, listing, and the metadata snapshots used by `info` and
//! `backup`.

use std::path::PathBuf;

use tracing::info;

use super::{loaded, Workspace};
use crate::core::confirm::{Confirm, Request};
use crate::core::domain::{Entry, WorkspaceInfo};
use crate::core::store::Entries;
use crate::error::{Result, WorkspaceError};

impl Workspace {
    /// Create the metadata file with an empty mapping.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::AlreadyInitialized` if the metadata file
    /// already exists.
    pub fn init(&mut self) -> Result<()> {
        if self.store.exists() {
            return Err(WorkspaceError::AlreadyInitialized(self.store.path().to_path_buf()).into());
        }

        self.store.init()?;
        self.entries = Some(Entries::new());
        info!(store = %self.store.path().display(), "workspace initialized");
        Ok(())
    }

    /// Tracked entries ordered by path.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::NotInitialized` before `init`, or a store
    /// error if the metadata file cannot be loaded.
    pub fn list(&mut self) -> Result<Vec<Entry>> {
        let entries = loaded(&self.store, &mut self.entries)?;
        Ok(entries.values().cloned().collect())
    }

    /// Summary of the workspace.
    pub fn info(&mut self) -> Result<WorkspaceInfo> {
        let entries = loaded(&self.store, &mut self.entries)?;
        Ok(WorkspaceInfo {
            local_root: self.local_root.clone(),
            store_path: self.store.path().to_path_buf(),
            tracked: entries.len(),
            total_size: entries.values().map(Entry::size).sum(),
        })
    }

    /// Write a timestamped copy of the metadata file beside the original.
    ///
    /// # Returns
    ///
    /// Path of the backup file.
    pub fn backup(&mut self) -> Result<PathBuf> {
        let entries = loaded(&self.store, &mut self.entries)?;
        let target = self
            .store
            .backup(entries, chrono::Utc::now().timestamp())?;
        info!(backup = %target.display(), entries = entries.len(), "workspace backed up");
        Ok(target)
    }

    /// Delete the metadata file after confirmation.
    ///
    /// Afterwards the workspace is uninitialized and every operation other
    /// than [`Workspace::init`] fails with `NotInitialized`.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::NotInitialized` if there is no metadata
    /// file, and `WorkspaceError::Aborted` if the confirmation is declined,
    /// in which case nothing is touched. The file is never parsed, so a
    /// corrupt or foreign store can still be destroyed.
    pub fn destroy(&mut self, confirm: &mut dyn Confirm) -> Result<()> {
        if !self.store.exists() {
            self.entries = None;
            return Err(WorkspaceError::NotInitialized.into());
        }

        let items = [self.store.path().display().to_string()];
        let request = Request {
            heading: "about to destroy the workspace stored at:",
            items: &items,
            question: "destroy workspace",
        };
        if !confirm.confirm(&request)? {
            return Err(WorkspaceError::Aborted.into());
        }

        self.store.destroy()?;
        self.entries = None;
        info!(store = %self.store.path().display(), "workspace destroyed");
        Ok(())
    }
}
