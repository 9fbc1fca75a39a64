// src/config/defaults.rs
use crate::config::app::{CipherConfig, GzipConfig};
use crate::consts::{DEFAULT_GZIP_LEVEL, DEFAULT_IV};

pub fn default_cipher() -> CipherConfig {
    CipherConfig {
        iv_hex: hex::encode(DEFAULT_IV),
    }
}

pub fn default_gzip() -> GzipConfig {
    GzipConfig {
        level: DEFAULT_GZIP_LEVEL,
    }
}
