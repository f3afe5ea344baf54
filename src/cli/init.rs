//! Init command - create the workspace for the current directory.

use tracing::info;

use crate::cli::{output, resolve};
use crate::error::Result;

/// Initialize a workspace.
pub fn execute() -> Result<()> {
    let mut workspace = resolve::workspace()?;
    workspace.init()?;

    output::success(&format!(
        "initialized workspace for {}",
        output::path(&workspace.local_root().display().to_string())
    ));
    info!(store = %workspace.store_path().display(), "initialized");
    Ok(())
}
