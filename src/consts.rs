// src/consts.rs
//! Shared constants: cipher parameters and I/O defaults

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// Length of the generated AES-128 key
pub const AES_KEY_LEN: usize = 16;

/// Fixed IV used by every CBC/CFB operation.
///
/// ASCII `"LIMElime"` followed by `00 09 00 04 01 09 09 06`.
/// Not randomized per message: identical plaintexts under the same key
/// produce identical ciphertexts. Kept byte-exact so existing ciphertexts
/// stay decryptable; do not reuse this scheme in a new protocol.
pub const DEFAULT_IV: [u8; 16] = [
    0x4C, 0x49, 0x4D, 0x45, 0x6C, 0x69, 0x6D, 0x65, 0x00, 0x09, 0x00, 0x04, 0x01, 0x09, 0x09, 0x06,
];

/// Chunk size for stream copies and GZIP streaming
pub const IO_BUFFER_SIZE: usize = 1024;

/// Default GZIP compression level (flate2 / zlib scale 0–9)
pub const DEFAULT_GZIP_LEVEL: u32 = 6;

/// Environment variable naming the TOML config file
pub const CONFIG_ENV_VAR: &str = "LIME_SECURITY_CONFIG";

/// Config file used when the environment variable is unset
pub const DEFAULT_CONFIG_PATH: &str = "lime-security.toml";
