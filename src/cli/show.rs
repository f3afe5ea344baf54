//! Show command.

use std::io::Write;

use crate::cli::resolve;
use crate::error::Result;

/// Print the decrypted contents of a tracked file.
pub fn execute(path: &str) -> Result<()> {
    let mut workspace = resolve::initialized(true)?;
    let plaintext = workspace.read(path)?;

    // Raw bytes for piping; no decoration.
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&plaintext)?;
    stdout.flush()?;
    Ok(())
}
