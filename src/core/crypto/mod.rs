// src/core/crypto/mod.rs
//! AES-128 cipher engine: pure in-memory operations, no I/O
//!
//! Mode resolution, seeded key generation, the fixed-IV engine and the
//! Base64 text wrappers.
mod decrypt;
mod encrypt;
mod engine;
mod key;
mod mode;
mod text;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use engine::AesCipher;
pub use key::{derive_key_material, passphrase_seed};
pub use mode::{resolve_mode, ModeSpec};
pub use text::{decrypt_from_text, decrypt_with_passphrase, encrypt_to_text, encrypt_with_passphrase};
