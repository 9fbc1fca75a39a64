// src/core/crypto/engine.rs
//! The AES-128 cipher engine handle
//!
//! An [`AesCipher`] only carries the IV. Every encrypt/decrypt call
//! generates its own key and cipher context and drops both on return, so a
//! single engine can be shared freely between threads.

use std::sync::OnceLock;

use tracing::warn;

use crate::config::Config;
use crate::consts::{AES_BLOCK_SIZE, DEFAULT_IV};
use crate::error::CoreError;

use super::mode::ModeSpec;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AesCipher {
    iv: [u8; AES_BLOCK_SIZE],
}

impl Default for AesCipher {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL: OnceLock<AesCipher> = OnceLock::new();

impl AesCipher {
    /// Engine using [`DEFAULT_IV`]
    pub const fn new() -> Self {
        Self { iv: DEFAULT_IV }
    }

    /// Engine with a caller-chosen IV (tests, other deployments)
    pub const fn with_iv(iv: [u8; AES_BLOCK_SIZE]) -> Self {
        Self { iv }
    }

    pub fn from_iv_slice(iv: &[u8]) -> Result<Self> {
        let iv: [u8; AES_BLOCK_SIZE] = iv
            .try_into()
            .map_err(|_| CoreError::InvalidIv { len: iv.len() })?;
        Ok(Self::with_iv(iv))
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::with_iv(config.cipher.iv()?))
    }

    /// Process-wide engine, built once from [`crate::config::load`].
    ///
    /// An invalid configured IV is logged and replaced by [`DEFAULT_IV`].
    pub fn global() -> &'static AesCipher {
        GLOBAL.get_or_init(|| {
            Self::from_config(crate::config::load()).unwrap_or_else(|err| {
                warn!(%err, "ignoring configured IV, falling back to the default");
                Self::new()
            })
        })
    }

    pub fn iv(&self) -> &[u8; AES_BLOCK_SIZE] {
        &self.iv
    }
}

/// Reject input an unpadded (or padded, when decrypting) block transform cannot take
pub(super) fn check_alignment(spec: &ModeSpec, len: usize, decrypting: bool) -> Result<()> {
    if spec.needs_block_alignment(decrypting) && len % AES_BLOCK_SIZE != 0 {
        return Err(CoreError::BlockSize { len });
    }
    Ok(())
}
