//! Terminal interaction: passphrase acquisition and confirmation prompts.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::{Input, Password};
use tracing::debug;

use crate::core::confirm::{Confirm, Request};
use crate::core::constants;
use crate::core::domain::Passphrase;
use crate::error::Result;

/// Acquire the workspace passphrase.
///
/// Uses `CELLAR_PASSPHRASE` when set, then a hidden prompt on a terminal,
/// then a single line from piped stdin.
pub fn passphrase() -> Result<Passphrase> {
    if let Ok(value) = std::env::var(constants::ENV_PASSPHRASE) {
        if !value.is_empty() {
            debug!("passphrase taken from environment");
            return Passphrase::new(value);
        }
    }

    if io::stdin().is_terminal() {
        let value = Password::new().with_prompt("Passphrase").interact()?;
        return Passphrase::new(value);
    }

    debug!("reading passphrase from stdin");
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Passphrase::new(line.trim_end_matches(['\r', '\n']))
}

/// Confirmation on the controlling terminal.
///
/// Lists the affected items, then requires the literal answer `yes`.
#[derive(Debug, Default)]
pub struct Terminal {
    assume_yes: bool,
}

impl Terminal {
    /// Prompt interactively, or answer `yes` without asking when
    /// `assume_yes` is set.
    pub fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }
}

impl Confirm for Terminal {
    fn confirm(&mut self, request: &Request<'_>) -> Result<bool> {
        println!("{}", request.heading);
        for item in request.items {
            super::output::list_item(item);
        }

        if self.assume_yes {
            debug!(question = request.question, "confirmation assumed");
            return Ok(true);
        }

        let question = format!("{} (yes/no)", request.question);
        let answer = if io::stdin().is_terminal() {
            Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()?
        } else {
            print!("{}: ", question);
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        };

        Ok(is_affirmative(&answer))
    }
}

fn is_affirmative(answer: &str) -> bool {
    answer.trim() == constants::AFFIRMATIVE
}
