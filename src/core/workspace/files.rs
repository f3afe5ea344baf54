//! Tracking operations.
//!
//! Add single files or whole directory trees, and stop tracking files.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};
use walkdir::WalkDir;

use super::{loaded, require_passphrase, Workspace};
use crate::core::confirm::{Confirm, Request};
use crate::core::domain::Entry;
use crate::core::store;
use crate::error::{Result, WorkspaceError};

impl Workspace {
    /// Encrypt a file and store it, replacing any previous entry for the
    /// same path.
    ///
    /// # Arguments
    ///
    /// * `path` - File to add; relative paths resolve against the local root
    ///
    /// # Returns
    ///
    /// The stored entry.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::NotFound` if the file does not exist,
    /// `WorkspaceError::NotAFile` for directories and other non-regular
    /// files, and `CipherError` if encryption fails. Nothing is written in
    /// those cases.
    pub fn add(&mut self, path: impl AsRef<Path>) -> Result<Entry> {
        let path = self.resolve(path);
        let entries = loaded(&self.store, &mut self.entries)?;
        let passphrase = require_passphrase(&self.passphrase)?;

        let metadata = std::fs::metadata(&path).map_err(|e| not_found_or(e, &path))?;
        if !metadata.is_file() {
            return Err(WorkspaceError::NotAFile(path).into());
        }

        let plaintext = std::fs::read(&path).map_err(|e| not_found_or(e, &path))?;
        let ciphertext = self.cipher.encrypt(&plaintext, passphrase)?;
        let modified = metadata
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        let entry = Entry::new(
            path.clone(),
            plaintext.len() as u64,
            store::file_mode(&metadata),
            modified,
            ciphertext,
        );

        let previous = entries.insert(path.clone(), entry.clone());
        if let Err(e) = self.store.save(entries) {
            match previous {
                Some(old) => entries.insert(path, old),
                None => entries.remove(&path),
            };
            return Err(e);
        }

        info!(path = %entry.path().display(), size = entry.size(), "added");
        Ok(entry)
    }

    /// Add every regular file under a directory after confirmation.
    ///
    /// Files are added one at a time, each persisted as it goes. The first
    /// failure stops the batch; files added before it stay tracked.
    ///
    /// # Returns
    ///
    /// The files that were added. An empty directory adds nothing and asks
    /// nothing.
    ///
    /// # Errors
    ///
    /// Returns `WorkspaceError::Aborted` if the confirmation is declined,
    /// in which case nothing is added.
    pub fn add_tree(
        &mut self,
        dir: impl AsRef<Path>,
        confirm: &mut dyn Confirm,
    ) -> Result<Vec<PathBuf>> {
        let dir = self.resolve(dir);
        loaded(&self.store, &mut self.entries)?;
        require_passphrase(&self.passphrase)?;

        let metadata = std::fs::metadata(&dir).map_err(|e| not_found_or(e, &dir))?;
        if !metadata.is_dir() {
            return Err(WorkspaceError::NotADirectory(dir).into());
        }

        let files = self.collect_files(&dir)?;
        if files.is_empty() {
            debug!(dir = %dir.display(), "no files to add");
            return Ok(files);
        }

        let items: Vec<String> = files.iter().map(|p| p.display().to_string()).collect();
        let request = Request {
            heading: "about to add the following files:",
            items: &items,
            question: "add files to workspace",
        };
        if !confirm.confirm(&request)? {
            return Err(WorkspaceError::Aborted.into());
        }

        for file in &files {
            self.add(file)?;
        }
        Ok(files)
    }

    /// Stop tracking a file.
    ///
    /// # Returns
    ///
    /// `true` if an entry was removed. Removing an untracked path is a
    /// successful no-op and writes nothing.
    pub fn remove(&mut self, path: impl AsRef<Path>) -> Result<bool> {
        let path = self.resolve(path);
        let entries = loaded(&self.store, &mut self.entries)?;

        let Some(old) = entries.remove(&path) else {
            debug!(path = %path.display(), "not tracked, nothing to remove");
            return Ok(false);
        };

        if let Err(e) = self.store.save(entries) {
            entries.insert(path, old);
            return Err(e);
        }

        info!(path = %path.display(), "removed");
        Ok(true)
    }

    /// Regular files under `dir`, sorted, skipping the workspace's own
    /// metadata file and its siblings.
    fn collect_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for item in WalkDir::new(dir).sort_by_file_name() {
            let item = item.map_err(|e| {
                e.into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"))
            })?;
            if !item.file_type().is_file() {
                continue;
            }
            if self.store.owns(item.path()) {
                debug!(path = %item.path().display(), "skipping store file");
                continue;
            }
            files.push(item.into_path());
        }

        Ok(files)
    }
}

fn not_found_or(err: std::io::Error, path: &Path) -> crate::error::Error {
    if err.kind() == ErrorKind::NotFound {
        WorkspaceError::NotFound(path.to_path_buf()).into()
    } else {
        err.into()
    }
}
