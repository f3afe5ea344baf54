//! Confirmation capability.
//!
//! Bulk and irreversible workspace operations ask a [`Confirm`]
//! implementation before touching anything. The CLI supplies a terminal
//! prompt; tests supply canned answers.

use crate::error::Result;

/// What an operation is about to do, and the question it needs answered.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    /// Line shown above the affected items
    pub heading: &'a str,
    /// Paths the operation will touch
    pub items: &'a [String],
    /// Yes/no question asked after the items
    pub question: &'a str,
}

/// Yes/no decision over a set of affected items.
pub trait Confirm {
    /// Show the request and report whether the user agreed.
    ///
    /// Anything other than an explicit affirmative must return `false`.
    fn confirm(&mut self, request: &Request<'_>) -> Result<bool>;
}

/// Fixed answer, for `--yes` and tests.
#[derive(Debug, Clone, Copy)]
pub struct Always(pub bool);

impl Confirm for Always {
    fn confirm(&mut self, _request: &Request<'_>) -> Result<bool> {
        Ok(self.0)
    }
}

/// Records every question it sees and answers with a fixed decision.
#[derive(Debug, Default)]
pub struct Recorder {
    answer: bool,
    /// Each question with the items shown alongside it
    pub asked: Vec<(String, Vec<String>)>,
}

impl Recorder {
    /// Recorder that answers `answer` to every prompt.
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            asked: Vec::new(),
        }
    }
}

impl Confirm for Recorder {
    fn confirm(&mut self, request: &Request<'_>) -> Result<bool> {
        self.asked
            .push((request.question.to_string(), request.items.to_vec()));
        Ok(self.answer)
    }
}
