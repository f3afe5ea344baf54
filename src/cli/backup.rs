//! Backup command.

use crate::cli::{output, resolve};
use crate::error::Result;

/// Write a timestamped copy of the workspace metadata.
pub fn execute() -> Result<()> {
    let mut workspace = resolve::initialized(false)?;
    let target = workspace.backup()?;
    output::success(&format!(
        "backed up store to {}",
        output::path(&target.display().to_string())
    ));
    Ok(())
}
