//! Workspace passphrase.

use zeroize::Zeroizing;

use crate::error::{CipherError, Result};

/// The shared secret used to encrypt every entry in a workspace.
///
/// Held in memory only; the buffer is wiped on drop and never printed.
#[derive(Clone)]
pub struct Passphrase(Zeroizing<String>);

impl Passphrase {
    /// Wrap a passphrase, rejecting empty input.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = Zeroizing::new(value.into());
        if value.is_empty() {
            return Err(CipherError::EmptyPassphrase.into());
        }
        Ok(Self(value))
    }

    /// Borrow the raw passphrase.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase(<redacted>)")
    }
}
