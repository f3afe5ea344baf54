//! Remove command.

use crate::cli::{output, resolve};
use crate::error::Result;

/// Stop tracking a file.
pub fn execute(path: &str) -> Result<()> {
    let mut workspace = resolve::initialized(false)?;
    let target = workspace.resolve(path);

    if workspace.remove(&target)? {
        output::success(&format!(
            "removed {}",
            output::path(&target.display().to_string())
        ));
    } else {
        output::dimmed(&format!("{} is not tracked", target.display()));
    }
    Ok(())
}
