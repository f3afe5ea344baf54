//! Age encryption backend implementation.
//!
//! Seals file contents with age's scrypt passphrase recipient and ASCII
//! armor, so the ciphertext can live inside the TOML metadata file.

use std::io::{Read, Write};

use ::age::secrecy::SecretString;
use tracing::trace;

use super::Cipher;
use crate::core::domain::Passphrase;
use crate::error::{CipherError, Result};

/// Age-based passphrase cipher.
///
/// Without a pinned work factor, age calibrates scrypt to take about a
/// second on the current machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Age {
    work_factor: Option<u8>,
}

impl Age {
    /// Cipher that lets age pick the scrypt work factor.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cipher with a fixed scrypt work factor (log2 of N).
    pub fn with_work_factor(log_n: u8) -> Self {
        Self {
            work_factor: Some(log_n),
        }
    }

    fn secret(passphrase: &Passphrase) -> SecretString {
        SecretString::from(passphrase.expose().to_owned())
    }
}

impl Cipher for Age {
    fn name(&self) -> &'static str {
        "age"
    }

    fn encrypt(&self, plaintext: &[u8], passphrase: &Passphrase) -> Result<String> {
        trace!(
            plaintext_len = plaintext.len(),
            work_factor = ?self.work_factor,
            "encrypting"
        );

        let mut recipient = ::age::scrypt::Recipient::new(Self::secret(passphrase));
        if let Some(log_n) = self.work_factor {
            recipient.set_work_factor(log_n);
        }

        let encryptor =
            ::age::Encryptor::with_recipients(std::iter::once(&recipient as &dyn ::age::Recipient))
                .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        let mut encrypted = Vec::new();
        let mut writer = encryptor
            .wrap_output(
                ::age::armor::ArmoredWriter::wrap_output(
                    &mut encrypted,
                    ::age::armor::Format::AsciiArmor,
                )
                .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?,
            )
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;

        writer.write_all(plaintext)?;
        let armored = writer
            .finish()
            .map_err(|e| CipherError::EncryptionFailed(format!("{}", e)))?;
        armored
            .finish()
            .map_err(|e| CipherError::ArmorFailed(format!("{}", e)))?;

        trace!(ciphertext_len = encrypted.len(), "encrypted");

        String::from_utf8(encrypted)
            .map_err(|e| CipherError::EncryptionFailed(format!("UTF-8 error: {}", e)).into())
    }

    fn decrypt(&self, ciphertext: &str, passphrase: &Passphrase) -> Result<Vec<u8>> {
        trace!(ciphertext_len = ciphertext.len(), "decrypting");

        let reader = ::age::armor::ArmoredReader::new(ciphertext.as_bytes());
        let decryptor = ::age::Decryptor::new(reader)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let identity = ::age::scrypt::Identity::new(Self::secret(passphrase));
        let mut reader = decryptor
            .decrypt(std::iter::once(&identity as &dyn ::age::Identity))
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        let mut decrypted = Vec::new();
        reader
            .read_to_end(&mut decrypted)
            .map_err(|e| CipherError::DecryptionFailed(format!("{}", e)))?;

        trace!(plaintext_len = decrypted.len(), "decrypted");

        Ok(decrypted)
    }
}
