//! Workspace resolution helpers for CLI commands.

use crate::cli::prompt;
use crate::core::config::Config;
use crate::core::workspace::Workspace;
use crate::error::{Result, WorkspaceError};

/// Workspace for the current directory, without checking that it exists.
pub fn workspace() -> Result<Workspace> {
    let config = Config::load()?;
    let local_root = std::env::current_dir()?;
    let store_path = config.store_path(&local_root);

    Ok(Workspace::new(local_root, store_path).with_cipher(config.cipher()))
}

/// Initialized workspace for the current directory.
///
/// The passphrase is only requested when `with_passphrase` is set, and only
/// after the workspace is known to exist.
pub fn initialized(with_passphrase: bool) -> Result<Workspace> {
    let workspace = workspace()?;
    if !workspace.exists() {
        return Err(WorkspaceError::NotInitialized.into());
    }

    if with_passphrase {
        Ok(workspace.with_passphrase(prompt::passphrase()?))
    } else {
        Ok(workspace)
    }
}
