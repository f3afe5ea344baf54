//! Domain types.

mod entry;
mod passphrase;
mod workspace_info;

pub use entry::Entry;
pub use passphrase::Passphrase;
pub use workspace_info::WorkspaceInfo;
