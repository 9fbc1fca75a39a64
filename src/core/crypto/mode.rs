// src/core/crypto/mode.rs
//! Mode resolution table: a pure, total function over [`CipherMode`]

use crate::enums::{BlockMode, CipherMode, Padding};

/// Concrete primitive parameters for one [`CipherMode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeSpec {
    pub block_mode: BlockMode,
    pub padding: Padding,
    pub requires_iv: bool,
}

impl ModeSpec {
    /// JCE-style transform descriptor, e.g. `AES/CBC/PKCS5Padding`
    pub fn transform(&self) -> &'static str {
        match (self.block_mode, self.padding) {
            (BlockMode::Ecb, Padding::Pkcs7) => "AES/ECB/PKCS5Padding",
            (BlockMode::Ecb, Padding::None) => "AES/ECB/NoPadding",
            (BlockMode::Cbc, Padding::Pkcs7) => "AES/CBC/PKCS5Padding",
            (BlockMode::Cbc, Padding::None) => "AES/CBC/NoPadding",
            (BlockMode::Cfb, Padding::Pkcs7) => "AES/CFB/PKCS5Padding",
            (BlockMode::Cfb, Padding::None) => "AES/CFB/NoPadding",
        }
    }

    /// Whether input must be a whole number of blocks in this direction.
    ///
    /// Unpadded CFB is a stream and never needs alignment.
    pub fn needs_block_alignment(&self, decrypting: bool) -> bool {
        match (self.block_mode, self.padding) {
            (BlockMode::Cfb, Padding::None) => false,
            (_, Padding::None) => true,
            (_, Padding::Pkcs7) => decrypting,
        }
    }
}

/// Resolve a mode; `None` resolves as [`CipherMode::Default`]
pub fn resolve_mode(mode: impl Into<Option<CipherMode>>) -> ModeSpec {
    let (block_mode, padding) = match mode.into().unwrap_or_default() {
        CipherMode::Default | CipherMode::EcbPkcs7 => (BlockMode::Ecb, Padding::Pkcs7),
        CipherMode::CbcNoPadding => (BlockMode::Cbc, Padding::None),
        CipherMode::CbcPkcs7 => (BlockMode::Cbc, Padding::Pkcs7),
        CipherMode::CfbNoPadding => (BlockMode::Cfb, Padding::None),
        CipherMode::CfbPkcs7 => (BlockMode::Cfb, Padding::Pkcs7),
    };

    ModeSpec {
        block_mode,
        padding,
        requires_iv: block_mode != BlockMode::Ecb,
    }
}
