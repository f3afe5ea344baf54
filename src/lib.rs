//! Cellar - a personal encrypted-file workspace manager.
//!
//! Tracks local files, keeps passphrase-encrypted copies of their contents in
//! a per-directory metadata file, and restores them on demand.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Create the workspace
//! │   ├── add / remove  # Track and untrack files
//! │   ├── fetch / show  # Restore or print decrypted contents
//! │   ├── destroy       # Delete the workspace
//! │   ├── info / backup # Inspect and snapshot the metadata file
//! │   └── prompt        # Passphrase and confirmation prompts
//! └── core/             # Core library components
//!     ├── config        # Store location and cipher cost
//!     ├── cipher/       # Encryption backends (age passphrase)
//!     ├── confirm       # Confirmation capability
//!     ├── domain/       # Entry, Passphrase, WorkspaceInfo
//!     ├── store/        # Metadata file persistence
//!     └── workspace/    # Workspace operations
//! ```
//!
//! # Example
//!
//! ```no_run
//! use cellar::core::confirm::Always;
//! use cellar::core::domain::Passphrase;
//! use cellar::core::workspace::Workspace;
//!
//! # fn main() -> cellar::error::Result<()> {
//! let mut ws = Workspace::new("/home/me", "/home/me/.cellar/workspaces/me.toml")
//!     .with_passphrase(Passphrase::new("correct horse battery staple")?);
//! ws.init()?;
//! ws.add("notes/todo.txt")?;
//! let plaintext = ws.read("notes/todo.txt")?;
//! ws.fetch_all(Some("notes"), &mut Always(true))?;
//! # let _ = plaintext;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod core;
pub mod error;
