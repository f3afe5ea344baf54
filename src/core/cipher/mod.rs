//! Encryption primitive.
//!
//! Workspace operations treat ciphertext as opaque: they hand plaintext and
//! the workspace passphrase to a [`Cipher`] and store whatever string comes
//! back. The only contract relied upon is round-trip fidelity for the same
//! passphrase.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::domain::Passphrase;
use crate::error::Result;

mod age;

pub use self::age::Age;

/// Passphrase-based cryptographic backend.
pub trait Cipher {
    /// Encrypt plaintext bytes with a passphrase.
    ///
    /// # Returns
    ///
    /// A self-contained encrypted blob carrying everything needed to decrypt
    /// it again with the same passphrase.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if encryption fails.
    fn encrypt(&self, plaintext: &[u8], passphrase: &Passphrase) -> Result<String>;

    /// Decrypt a blob produced by [`Cipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError::DecryptionFailed` on a wrong passphrase or
    /// corrupted ciphertext.
    fn decrypt(&self, ciphertext: &str, passphrase: &Passphrase) -> Result<Vec<u8>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;
}
