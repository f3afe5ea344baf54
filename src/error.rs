//! Error types.
//!
//! Every fallible operation returns [`Result`], whose error side is the
//! top-level [`Error`]. Domain-specific enums keep messages close to the
//! subsystem that produces them.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Workspace(#[from] WorkspaceError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the user declined a confirmation.
    ///
    /// The CLI prints a plain notice for this case instead of an error.
    pub fn is_aborted(&self) -> bool {
        matches!(self, Error::Workspace(WorkspaceError::Aborted))
    }
}

/// Workspace lifecycle and entry lookup errors.
#[derive(Error, Debug)]
pub enum WorkspaceError {
    #[error("workspace already exists: {0}")]
    AlreadyInitialized(PathBuf),

    #[error("workspace is not initialized")]
    NotInitialized,

    #[error("file not found: {0}")]
    NotFound(PathBuf),

    #[error("file is not tracked: {0}")]
    NotTracked(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("a passphrase is required for this operation")]
    PassphraseRequired,

    #[error("aborted")]
    Aborted,
}

/// Metadata file persistence errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("corrupt metadata file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize metadata: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("unsupported metadata version: {0}")]
    UnsupportedVersion(String),
}

/// Encryption primitive errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("armor encoding failed: {0}")]
    ArmorFailed(String),

    #[error("passphrase cannot be empty")]
    EmptyPassphrase,
}

/// Configuration resolution errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unable to determine home directory")]
    NoHomeDir,

    #[error("failed to read config: {0}")]
    ReadFile(std::io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
