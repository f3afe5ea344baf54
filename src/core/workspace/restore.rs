//! Restore operations.
//!
//! Decrypt tracked files back to disk, or into memory for display.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::{loaded, require_passphrase, Workspace};
use crate::core::confirm::{Confirm, Request};
use crate::core::store;
use crate::error::{Result, WorkspaceError};

impl Workspace {
    /// Decrypt a tracked file without writing it anywhere.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::NotTracked` for unknown paths and
    /// `CipherError::DecryptionFailed` for a wrong passphrase or corrupted
    /// ciphertext.
    pub fn read(&mut self, path: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = self.resolve(path);
        let entries = loaded(&self.store, &mut self.entries)?;
        let passphrase = require_passphrase(&self.passphrase)?;

        let entry = entries
            .get(&path)
            .ok_or_else(|| WorkspaceError::NotTracked(path.clone()))?;
        self.cipher.decrypt(entry.ciphertext(), passphrase)
    }

    /// Decrypt a tracked file back to its original location and restore
    /// its recorded permission bits.
    ///
    /// Missing parent directories are created. An existing file at the
    /// destination is replaced atomically, even when it is read-only.
    ///
    /// # Returns
    ///
    /// The path written.
    pub fn fetch(&mut self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = self.resolve(path);
        let entries = loaded(&self.store, &mut self.entries)?;
        let passphrase = require_passphrase(&self.passphrase)?;

        let entry = entries
            .get(&path)
            .ok_or_else(|| WorkspaceError::NotTracked(path.clone()))?;
        let plaintext = self.cipher.decrypt(entry.ciphertext(), passphrase)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        store::write_with_mode(&path, &plaintext, entry.mode())?;

        info!(path = %path.display(), size = plaintext.len(), "fetched");
        Ok(path)
    }

    /// Tracked paths containing `filter`, or every tracked path without one.
    pub fn matching(&mut self, filter: Option<&str>) -> Result<Vec<PathBuf>> {
        let entries = loaded(&self.store, &mut self.entries)?;
        Ok(entries
            .keys()
            .filter(|p| filter.map_or(true, |f| p.to_string_lossy().contains(f)))
            .cloned()
            .collect())
    }

    /// Fetch every tracked file whose path contains `filter` after
    /// confirmation.
    ///
    /// Files are fetched in path order; the first failure stops the batch
    /// and files already written stay written.
    ///
    /// # Returns
    ///
    /// The files written. When nothing matches, no prompt is shown and
    /// nothing is decrypted.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Aborted` if the confirmation is declined.
    pub fn fetch_all(
        &mut self,
        filter: Option<&str>,
        confirm: &mut dyn Confirm,
    ) -> Result<Vec<PathBuf>> {
        let matches = self.matching(filter)?;
        if matches.is_empty() {
            debug!(filter = ?filter, "no files to fetch");
            return Ok(matches);
        }
        require_passphrase(&self.passphrase)?;

        let items: Vec<String> = matches.iter().map(|p| p.display().to_string()).collect();
        let request = Request {
            heading: "about to fetch these files:",
            items: &items,
            question: "continue",
        };
        if !confirm.confirm(&request)? {
            return Err(WorkspaceError::Aborted.into());
        }

        for path in &matches {
            self.fetch(path)?;
        }
        Ok(matches)
    }
}
