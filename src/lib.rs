// src/lib.rs
//! lime-security: small crypto, codec and I/O façades
//!
//! Features:
//! - AES-128 in ECB / CBC / CFB with PKCS#7 or no padding
//! - Seeded key generation (never the raw key bytes)
//! - MD5 / SHA-1 / SHA-2 / BLAKE3 digests and CRC32
//! - Base64 and hex codecs, file helpers, GZIP streaming
//!
//! CBC and CFB use a fixed IV ([`consts::DEFAULT_IV`]) and keys come from an
//! unsalted seeded hash. Neither is a security property.

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;

// Re-export everything users need at the crate root
pub use aliases::{AesKey128, KeySeed, Passphrase};
pub use config::load as load_config;
pub use core::{
    decrypt, decrypt_from_text, decrypt_with_passphrase, encrypt, encrypt_to_text,
    encrypt_with_passphrase, AesCipher, Result as CoreResult,
};
pub use enums::{CipherMode, DigestAlgorithm};
pub use error::CoreError;
