// src/core/mod.rs
pub mod codec;
pub mod crypto;
pub mod digest;
pub mod file;
pub mod gzip;

pub use codec::*;
pub use crypto::*;
pub use digest::*;
pub use file::*;
pub use gzip::*;

pub type Result<T> = std::result::Result<T, crate::error::CoreError>;
