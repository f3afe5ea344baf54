//! The primary interface for cellar operations.
//!
//! A [`Workspace`] binds a local root directory to one metadata file, holds
//! the passphrase for the process lifetime, and exposes every operation on
//! tracked files. Entries are loaded lazily on first use; each mutation is
//! persisted before the operation returns.

mod files;
mod lifecycle;
mod restore;

use std::path::{Component, Path, PathBuf};

use crate::core::cipher::{Age, Cipher};
use crate::core::domain::Passphrase;
use crate::core::store::{Entries, EntryStore};
use crate::error::{Result, WorkspaceError};

/// Encrypted-file workspace.
pub struct Workspace {
    pub(super) local_root: PathBuf,
    pub(super) store: EntryStore,
    pub(super) passphrase: Option<Passphrase>,
    pub(super) cipher: Box<dyn Cipher>,
    pub(super) entries: Option<Entries>,
}

impl std::fmt::Debug for Workspace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Workspace")
            .field("local_root", &self.local_root)
            .field("store", &self.store)
            .field("cipher", &self.cipher.name())
            .field("has_passphrase", &self.passphrase.is_some())
            .field("loaded", &self.entries.as_ref().map(|e| e.len()))
            .finish()
    }
}

impl Workspace {
    /// Bind a workspace to a local root and a metadata file.
    ///
    /// No I/O happens here; the workspace may or may not be initialized.
    pub fn new(local_root: impl Into<PathBuf>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            local_root: local_root.into(),
            store: EntryStore::new(store_path),
            passphrase: None,
            cipher: Box::new(Age::new()),
            entries: None,
        }
    }

    /// Set the passphrase used for every encrypt and decrypt call.
    pub fn with_passphrase(mut self, passphrase: Passphrase) -> Self {
        self.passphrase = Some(passphrase);
        self
    }

    /// Replace the encryption backend.
    pub fn with_cipher(mut self, cipher: impl Cipher + 'static) -> Self {
        self.cipher = Box::new(cipher);
        self
    }

    /// Whether the metadata file exists.
    pub fn exists(&self) -> bool {
        self.store.exists()
    }

    /// Directory relative paths resolve against.
    pub fn local_root(&self) -> &Path {
        &self.local_root
    }

    /// Location of the metadata file.
    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    /// Absolute, lexically normalized form of `path`.
    ///
    /// Relative paths resolve against the local root. Symlinks are not
    /// followed, so the key matches what the user typed.
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.local_root.join(path)
        };
        normalize(&joined)
    }
}

/// Entries of an initialized workspace, loading them on first use.
///
/// Takes fields rather than `&mut Workspace` so callers can keep borrowing
/// the store, cipher, and passphrase alongside the returned map.
pub(super) fn loaded<'a>(
    store: &EntryStore,
    cache: &'a mut Option<Entries>,
) -> Result<&'a mut Entries> {
    if !store.exists() {
        *cache = None;
        return Err(WorkspaceError::NotInitialized.into());
    }
    let entries = match cache.take() {
        Some(entries) => entries,
        None => store.load()?,
    };
    Ok(cache.insert(entries))
}

pub(super) fn require_passphrase(passphrase: &Option<Passphrase>) -> Result<&Passphrase> {
    passphrase
        .as_ref()
        .ok_or_else(|| WorkspaceError::PassphraseRequired.into())
}

/// Drop `.` components and fold `..` into their parent.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
