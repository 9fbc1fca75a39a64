// src/config/app.rs
use super::defaults::*;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

use tracing::{debug, warn};

use crate::consts::{AES_BLOCK_SIZE, CONFIG_ENV_VAR, DEFAULT_CONFIG_PATH};
use crate::core::codec::hex_decode;
use crate::error::CoreError;
use crate::CoreResult as Result;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cipher: CipherConfig,
    pub gzip: GzipConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CipherConfig {
    /// 16-byte IV for CBC/CFB modes, as 32 hex digits
    pub iv_hex: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GzipConfig {
    pub level: u32,
}

impl Default for CipherConfig {
    fn default() -> Self {
        default_cipher()
    }
}

impl Default for GzipConfig {
    fn default() -> Self {
        default_gzip()
    }
}

impl CipherConfig {
    /// Decoded IV; must be exactly one AES block
    pub fn iv(&self) -> Result<[u8; AES_BLOCK_SIZE]> {
        let bytes = hex_decode(&self.iv_hex)?;
        bytes
            .as_slice()
            .try_into()
            .map_err(|_| CoreError::InvalidIv { len: bytes.len() })
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once; falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        if !Path::new(&config_path).exists() {
            debug!(path = %config_path, "no config file, using built-in defaults");
            return Config::default();
        }

        Config::from_file(&config_path).unwrap_or_else(|err| {
            warn!(path = %config_path, %err, "unusable config file, using built-in defaults");
            Config::default()
        })
    })
}
