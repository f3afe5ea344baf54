//! Workspace summary for the `info` command.

use std::path::PathBuf;

use serde::Serialize;

/// Summary of a workspace.
#[derive(Debug, Clone, Serialize)]
pub struct WorkspaceInfo {
    /// Directory relative paths resolve against
    pub local_root: PathBuf,
    /// Metadata file location
    pub store_path: PathBuf,
    /// Number of tracked files
    pub tracked: usize,
    /// Sum of tracked plaintext sizes in bytes
    pub total_size: u64,
}
