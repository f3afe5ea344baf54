//! Info command.

use crate::cli::{output, resolve};
use crate::error::Result;

/// Show workspace details.
pub fn execute() -> Result<()> {
    let mut workspace = resolve::initialized(false)?;
    let info = workspace.info()?;

    output::section("Workspace");
    output::kv("local root ", info.local_root.display());
    output::kv("store path ", info.store_path.display());
    output::kv("tracked    ", format!("{} files", info.tracked));
    output::kv("total size ", output::size(info.total_size));
    Ok(())
}
