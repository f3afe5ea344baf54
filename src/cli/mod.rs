//! Command-line interface.

pub mod add;
pub mod backup;
pub mod completions;
pub mod destroy;
pub mod fetch;
pub mod info;
pub mod init;
pub mod list;
pub mod output;
pub mod prompt;
pub mod remove;
pub mod resolve;
pub mod show;

use clap::{Parser, Subcommand};

/// Cellar - encrypted copies of your personal files.
#[derive(Parser)]
#[command(
    name = "cellar",
    about = "Keep encrypted copies of your personal files",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Answer yes to confirmation prompts
    #[arg(short, long, global = true)]
    pub yes: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize a workspace for the current directory
    Init,

    /// List tracked files
    #[command(alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a file, or every file under a directory
    Add {
        /// File or directory to add
        path: String,
    },

    /// Stop tracking a file
    #[command(alias = "rm")]
    Remove {
        /// Tracked file
        path: String,
    },

    /// Restore tracked files whose path contains the filter
    Fetch {
        /// Substring to match against tracked paths
        filter: Option<String>,
    },

    /// Print the decrypted contents of a tracked file
    Show {
        /// Tracked file
        path: String,
    },

    /// Delete the workspace and everything stored in it
    Destroy,

    /// Show workspace details
    Info,

    /// Write a timestamped copy of the workspace metadata
    Backup,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, assume_yes: bool) -> crate::error::Result<()> {
    use Command::*;

    let mut confirm = prompt::Terminal::new(assume_yes);

    match command {
        Init => init::execute(),
        List { json } => list::execute(json),
        Add { path } => add::execute(&path, &mut confirm),
        Remove { path } => remove::execute(&path),
        Fetch { filter } => fetch::execute(filter.as_deref(), &mut confirm),
        Show { path } => show::execute(&path),
        Destroy => destroy::execute(&mut confirm),
        Info => info::execute(),
        Backup => backup::execute(),
        Completions { shell } => completions::execute(shell),
    }
}
