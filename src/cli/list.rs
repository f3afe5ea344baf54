//! List command.

use crate::cli::{output, resolve};
use crate::error::Result;

/// List tracked files.
pub fn execute(json: bool) -> Result<()> {
    let mut workspace = resolve::initialized(false)?;
    let entries = workspace.list()?;

    if json {
        let files: Vec<_> = entries
            .iter()
            .map(|e| {
                serde_json::json!({
                    "path": e.path(),
                    "size": e.size(),
                    "mode": format!("{:o}", e.mode()),
                    "modified": e.modified().to_rfc3339(),
                })
            })
            .collect();
        let result = serde_json::json!({
            "files": files,
            "count": entries.len(),
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else if entries.is_empty() {
        output::dimmed("no files tracked");
    } else {
        println!();
        output::header(&format!("{} files", entries.len()));
        output::rule();
        for entry in &entries {
            output::list_item(&format!(
                "{}  {}  {}",
                entry.path().display(),
                output::size(entry.size()),
                entry.modified().format("%Y-%m-%d %H:%M:%S UTC"),
            ));
        }
    }

    Ok(())
}
