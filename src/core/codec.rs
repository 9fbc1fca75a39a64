// src/core/codec.rs
//! Text-safe byte encodings: standard Base64 and lowercase hex

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::CoreResult as Result;

/// Standard alphabet, `=` padded, no line breaks
pub fn base64_encode(bytes: impl AsRef<[u8]>) -> String {
    STANDARD.encode(bytes)
}

/// Inverse of [`base64_encode`]; surrounding whitespace is ignored
pub fn base64_decode(text: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(text.trim())?)
}

pub fn hex_encode(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}

/// Accepts upper or lower case digits; odd length is an error
pub fn hex_decode(text: &str) -> Result<Vec<u8>> {
    Ok(hex::decode(text.trim())?)
}
