// src/core/crypto/text.rs
//! Text-in, Base64-out convenience wrappers around the engine
//!
//! Strings travel as UTF-8 bytes; ciphertext travels as standard Base64.

use crate::aliases::Passphrase;
use crate::core::codec::{base64_decode, base64_encode};
use crate::enums::CipherMode;

use super::engine::{AesCipher, Result};
use super::key::passphrase_seed;

impl AesCipher {
    /// UTF-8 encode, encrypt, Base64 encode
    pub fn encrypt_to_text(
        &self,
        mode: impl Into<Option<CipherMode>>,
        plaintext: &str,
        key: &str,
    ) -> Result<String> {
        let ciphertext = self.encrypt(mode, plaintext.as_bytes(), key.as_bytes())?;
        Ok(base64_encode(&ciphertext))
    }

    /// Base64 decode, decrypt, UTF-8 decode
    pub fn decrypt_from_text(
        &self,
        mode: impl Into<Option<CipherMode>>,
        transport: &str,
        key: &str,
    ) -> Result<String> {
        let ciphertext = base64_decode(transport)?;
        let plaintext = self.decrypt(mode, &ciphertext, key.as_bytes())?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Like [`AesCipher::encrypt_to_text`], but any-length passphrase → MD5 → key seed.
    ///
    /// Convenience only: a single unsalted digest pass is not a secure KDF.
    pub fn encrypt_with_passphrase(
        &self,
        mode: impl Into<Option<CipherMode>>,
        plaintext: &str,
        passphrase: &Passphrase,
    ) -> Result<String> {
        let seed = passphrase_seed(passphrase.expose_secret());
        let ciphertext = self.encrypt(mode, plaintext.as_bytes(), seed.expose_secret())?;
        Ok(base64_encode(&ciphertext))
    }

    pub fn decrypt_with_passphrase(
        &self,
        mode: impl Into<Option<CipherMode>>,
        transport: &str,
        passphrase: &Passphrase,
    ) -> Result<String> {
        let seed = passphrase_seed(passphrase.expose_secret());
        let ciphertext = base64_decode(transport)?;
        let plaintext = self.decrypt(mode, &ciphertext, seed.expose_secret())?;
        Ok(String::from_utf8(plaintext)?)
    }
}

pub fn encrypt_to_text(
    mode: impl Into<Option<CipherMode>>,
    plaintext: &str,
    key: &str,
) -> Result<String> {
    AesCipher::global().encrypt_to_text(mode, plaintext, key)
}

pub fn decrypt_from_text(
    mode: impl Into<Option<CipherMode>>,
    transport: &str,
    key: &str,
) -> Result<String> {
    AesCipher::global().decrypt_from_text(mode, transport, key)
}

pub fn encrypt_with_passphrase(
    mode: impl Into<Option<CipherMode>>,
    plaintext: &str,
    passphrase: &Passphrase,
) -> Result<String> {
    AesCipher::global().encrypt_with_passphrase(mode, plaintext, passphrase)
}

pub fn decrypt_with_passphrase(
    mode: impl Into<Option<CipherMode>>,
    transport: &str,
    passphrase: &Passphrase,
) -> Result<String> {
    AesCipher::global().decrypt_with_passphrase(mode, transport, passphrase)
}
