// src/core/digest.rs
//! Message digests and checksums
//!
//! Thin dispatch over the RustCrypto hashes, BLAKE3 and CRC32.
//! Hex output is always lowercase, two characters per byte.

use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

use crate::core::codec::hex_encode;
use crate::enums::DigestAlgorithm;

/// Compute the digest of `data` under `algorithm`
pub fn digest(algorithm: DigestAlgorithm, data: &[u8]) -> Vec<u8> {
    match algorithm {
        DigestAlgorithm::Md5 => Md5::digest(data).to_vec(),
        DigestAlgorithm::Sha1 => Sha1::digest(data).to_vec(),
        DigestAlgorithm::Sha256 => Sha256::digest(data).to_vec(),
        DigestAlgorithm::Sha384 => Sha384::digest(data).to_vec(),
        DigestAlgorithm::Sha512 => Sha512::digest(data).to_vec(),
        DigestAlgorithm::Blake3 => blake3::hash(data).as_bytes().to_vec(),
    }
}

pub fn digest_hex(algorithm: DigestAlgorithm, data: &[u8]) -> String {
    hex_encode(digest(algorithm, data))
}

pub fn md5_hex(text: &str) -> String {
    digest_hex(DigestAlgorithm::Md5, text.as_bytes())
}

pub fn sha1_hex(text: &str) -> String {
    digest_hex(DigestAlgorithm::Sha1, text.as_bytes())
}

pub fn sha256_hex(text: &str) -> String {
    digest_hex(DigestAlgorithm::Sha256, text.as_bytes())
}

pub fn sha384_hex(text: &str) -> String {
    digest_hex(DigestAlgorithm::Sha384, text.as_bytes())
}

pub fn sha512_hex(text: &str) -> String {
    digest_hex(DigestAlgorithm::Sha512, text.as_bytes())
}

/// Compute BLAKE3 hash and return as lowercase hex string
pub fn blake3_hex(data: &[u8]) -> String {
    blake3::Hasher::new().update(data).finalize().to_hex().to_string()
}

/// IEEE CRC32 checksum
pub fn crc32(data: &[u8]) -> u32 {
    let mut hasher = crc32fast::Hasher::new();
    hasher.update(data);
    hasher.finalize()
}
