//! Fetch command - restore tracked files to disk.

use crate::cli::{output, resolve};
use crate::core::confirm::Confirm;
use crate::error::Result;

/// Restore tracked files matching `filter`.
pub fn execute(filter: Option<&str>, confirm: &mut dyn Confirm) -> Result<()> {
    let mut workspace = resolve::initialized(false)?;
    if workspace.matching(filter)?.is_empty() {
        output::dimmed("did not find any files to fetch");
        return Ok(());
    }

    let mut workspace = workspace.with_passphrase(crate::cli::prompt::passphrase()?);
    let fetched = workspace.fetch_all(filter, confirm)?;
    output::success(&format!("fetched {} files", fetched.len()));
    Ok(())
}
