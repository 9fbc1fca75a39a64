// tests/common.rs
//! Shared test utilities: logging setup and fixed inputs

#![allow(dead_code)] // each test binary uses a different subset

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Sixteen-character key used by the reference vectors
pub const KEY: &str = "1234567812345678";

/// Short message used by the reference vectors
pub const MESSAGE: &str = "Lime";

/// Install a test-friendly subscriber once; respects RUST_LOG=
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// Deterministic, non-repeating test payload of `len` bytes
pub fn payload(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i * 31 % 251) as u8).collect()
}
