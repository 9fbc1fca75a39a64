// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the closed enums that represent user-visible
//! choices: cipher modes, their block-mode/padding parts, digest algorithms.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::CoreError;

/// AES-128 operating mode + padding combination.
///
/// Every variant except [`CipherMode::Default`] and [`CipherMode::EcbPkcs7`]
/// uses the fixed 16-byte IV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(try_from = "String")]
pub enum CipherMode {
    /// The primitive's default transform: ECB with PKCS#7 padding
    #[default]
    Default,
    EcbPkcs7,
    /// Plaintext length must be a multiple of 16 bytes
    CbcNoPadding,
    CbcPkcs7,
    /// Full-block CFB stream; any length, ciphertext is as long as plaintext
    CfbNoPadding,
    CfbPkcs7,
}

impl CipherMode {
    pub const ALL: [CipherMode; 6] = [
        CipherMode::Default,
        CipherMode::EcbPkcs7,
        CipherMode::CbcNoPadding,
        CipherMode::CbcPkcs7,
        CipherMode::CfbNoPadding,
        CipherMode::CfbPkcs7,
    ];

    /// Snake-case identifier, as accepted in config files
    pub fn name(self) -> &'static str {
        match self {
            CipherMode::Default => "default",
            CipherMode::EcbPkcs7 => "ecb_pkcs7",
            CipherMode::CbcNoPadding => "cbc_nopadding",
            CipherMode::CbcPkcs7 => "cbc_pkcs7",
            CipherMode::CfbNoPadding => "cfb_nopadding",
            CipherMode::CfbPkcs7 => "cfb_pkcs7",
        }
    }
}

impl fmt::Display for CipherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CipherMode {
    type Err = CoreError;

    /// Accepts the snake-case name (`cbc_pkcs7`) or the transform
    /// descriptor (`AES/CBC/PKCS5Padding`), case-insensitively. A bare
    /// `AES` names the primitive's default transform.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("AES") {
            return Ok(CipherMode::Default);
        }
        CipherMode::ALL
            .into_iter()
            .find(|mode| {
                wanted.eq_ignore_ascii_case(mode.name())
                    || wanted.eq_ignore_ascii_case(crate::core::resolve_mode(*mode).transform())
            })
            .ok_or_else(|| CoreError::UnsupportedMode(wanted.to_owned()))
    }
}

impl TryFrom<String> for CipherMode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Block chaining scheme of a resolved mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockMode {
    Ecb,
    Cbc,
    Cfb,
}

/// Padding scheme of a resolved mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Padding {
    /// PKCS#7 over 16-byte blocks (what JCE calls `PKCS5Padding`)
    Pkcs7,
    None,
}

/// Named message-digest algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DigestAlgorithm {
    Md5,
    Sha1,
    Sha256,
    Sha384,
    Sha512,
    Blake3,
}

impl DigestAlgorithm {
    pub const ALL: [DigestAlgorithm; 6] = [
        DigestAlgorithm::Md5,
        DigestAlgorithm::Sha1,
        DigestAlgorithm::Sha256,
        DigestAlgorithm::Sha384,
        DigestAlgorithm::Sha512,
        DigestAlgorithm::Blake3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DigestAlgorithm::Md5 => "MD5",
            DigestAlgorithm::Sha1 => "SHA-1",
            DigestAlgorithm::Sha256 => "SHA-256",
            DigestAlgorithm::Sha384 => "SHA-384",
            DigestAlgorithm::Sha512 => "SHA-512",
            DigestAlgorithm::Blake3 => "BLAKE3",
        }
    }

    /// Digest length in bytes
    pub fn output_len(self) -> usize {
        match self {
            DigestAlgorithm::Md5 => 16,
            DigestAlgorithm::Sha1 => 20,
            DigestAlgorithm::Sha256 | DigestAlgorithm::Blake3 => 32,
            DigestAlgorithm::Sha384 => 48,
            DigestAlgorithm::Sha512 => 64,
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DigestAlgorithm {
    type Err = CoreError;

    /// `"SHA-256"`, `"sha256"` and `"Sha-256"` all resolve to the same variant
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s.trim().chars().filter(|c| *c != '-').collect();
        DigestAlgorithm::ALL
            .into_iter()
            .find(|alg| {
                let name: String = alg.name().chars().filter(|c| *c != '-').collect();
                wanted.eq_ignore_ascii_case(&name)
            })
            .ok_or_else(|| CoreError::UnsupportedAlgorithm(s.trim().to_owned()))
    }
}
