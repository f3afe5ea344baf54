//! Add command.
//!
//! Adds a single file, or a whole directory tree after confirmation.

use tracing::info;

use crate::cli::{output, resolve};
use crate::core::confirm::Confirm;
use crate::error::Result;

/// Add a file or directory to the workspace.
pub fn execute(path: &str, confirm: &mut dyn Confirm) -> Result<()> {
    let mut workspace = resolve::initialized(true)?;
    let target = workspace.resolve(path);

    if target.is_dir() {
        info!(dir = %target.display(), "adding directory");
        let added = workspace.add_tree(&target, confirm)?;
        if added.is_empty() {
            output::dimmed("no files to add");
        } else {
            output::success(&format!("added {} files", added.len()));
        }
        return Ok(());
    }

    let entry = workspace.add(&target)?;
    output::success(&format!(
        "added {} ({})",
        output::path(&entry.path().display().to_string()),
        output::size(entry.size())
    ));
    Ok(())
}
