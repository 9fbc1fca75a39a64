// src/core/crypto/key.rs
//! Key generation from seed bytes and passphrases
//!
//! Seed bytes are never used as the AES key. They seed a SHA1PRNG-style
//! generator and the first 128 bits it produces become the key: when the
//! generator is seeded before first use its state is `SHA1(seed)` and its
//! first output block is `SHA1(state)`, so `key = SHA1(SHA1(seed))[..16]`.
//!
//! Ciphertexts produced by keying AES directly with the raw 16 key bytes
//! are NOT decryptable here: the two schemes use different keys for the
//! same key text.
//!
//! SECURITY: this collapses every seed onto the output of a public,
//! unsalted hash. Do not copy it into a new protocol.

use sha1::{Digest, Sha1};

use crate::aliases::{AesKey128, KeySeed};
use crate::consts::AES_KEY_LEN;
use crate::core::digest::digest;
use crate::enums::DigestAlgorithm;
use crate::error::CoreError;

pub type Result<T> = std::result::Result<T, CoreError>;

/// Seeded 128-bit key generation: the same seed gives the same key on every platform
pub fn derive_key_material(seed: &[u8]) -> Result<AesKey128> {
    if seed.is_empty() {
        return Err(CoreError::EmptyKey);
    }

    let state = Sha1::digest(seed);
    let block = Sha1::digest(state);

    let mut key = [0u8; AES_KEY_LEN];
    key.copy_from_slice(&block[..AES_KEY_LEN]);
    Ok(AesKey128::new(key))
}

/// MD5 of the UTF-8 passphrase → 16-byte key seed.
///
/// One digest pass, no salt, no iterations: this lets arbitrary-length
/// human passphrases be used, it is not a password-hardening KDF.
pub fn passphrase_seed(passphrase: &str) -> KeySeed {
    KeySeed::new(digest(DigestAlgorithm::Md5, passphrase.as_bytes()))
}
