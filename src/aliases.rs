// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical key types used throughout lime-security.

pub use secure_gate::{dynamic_alias, fixed_alias};

// Fixed-size secrets
fixed_alias!(AesKey128, 16); // generated AES-128 key, never the raw seed

// Dynamic secrets
dynamic_alias!(KeySeed, Vec<u8>); // raw bytes fed to the key generator
dynamic_alias!(Passphrase, String); // human passphrase for the MD5 path
