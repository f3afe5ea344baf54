//! Destroy command.

use crate::cli::{output, resolve};
use crate::core::confirm::Confirm;
use crate::error::Result;

/// Delete the workspace metadata file after confirmation.
pub fn execute(confirm: &mut dyn Confirm) -> Result<()> {
    let mut workspace = resolve::initialized(false)?;
    workspace.destroy(confirm)?;
    output::success("workspace has been destroyed");
    Ok(())
}
