//! Cellar - encrypted copies of your personal files.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cellar::cli::output;
use cellar::cli::{execute, Cli};
use cellar::core::constants;
use cellar::error::{Error, WorkspaceError};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(constants::ENV_LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cellar=debug")
        } else {
            EnvFilter::new("cellar=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .init();

    if let Err(e) = execute(cli.command, cli.yes) {
        if e.is_aborted() {
            output::warn("aborted");
            std::process::exit(1);
        }

        let suggestion = match &e {
            Error::Workspace(WorkspaceError::NotInitialized) => Some("run: cellar init"),
            Error::Workspace(WorkspaceError::PassphraseRequired) => {
                Some("set CELLAR_PASSPHRASE or run from a terminal")
            }
            Error::Cipher(cellar::error::CipherError::DecryptionFailed(_)) => {
                Some("check that the passphrase matches the one used to add the file")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
