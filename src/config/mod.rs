// src/config/mod.rs
//! Configuration system for lime-security
//!
//! Central, lazy-loaded global config from TOML with built-in defaults.

pub use app::{load, CipherConfig, Config, GzipConfig};

mod app;
mod defaults;
