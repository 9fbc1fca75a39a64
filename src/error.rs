// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unsupported cipher mode: {0}")]
    UnsupportedMode(String),

    #[error("unsupported digest algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Input to an unpadded block transform was not a whole number of blocks
    #[error("data length {len} is not a multiple of the 16-byte block size")]
    BlockSize { len: usize },

    #[error("invalid padding in decrypted data")]
    Padding,

    #[error("malformed Base64 input: {0}")]
    Decoding(#[from] base64::DecodeError),

    #[error("malformed hex input: {0}")]
    Hex(#[from] hex::FromHexError),

    #[error("text is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("key seed must not be empty")]
    EmptyKey,

    #[error("initialization vector must be 16 bytes, got {len}")]
    InvalidIv { len: usize },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl From<cipher::block_padding::UnpadError> for CoreError {
    fn from(_: cipher::block_padding::UnpadError) -> Self {
        CoreError::Padding
    }
}
