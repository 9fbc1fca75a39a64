// src/core/file.rs
//! Byte-stream and file helpers
//!
//! Whole-buffer reads and writes, append, copy/move, plus file-level
//! encryption built on the in-memory engine in `core::crypto`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::consts::IO_BUFFER_SIZE;
use crate::core::crypto::AesCipher;
use crate::enums::CipherMode;
use crate::CoreResult as Result;

/// Drain a reader into memory
pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    let mut buf = [0u8; IO_BUFFER_SIZE];
    loop {
        match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => out.extend_from_slice(&buf[..n]),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(out)
}

/// Write the whole buffer and flush
pub fn write_all<W: Write>(bytes: &[u8], mut writer: W) -> Result<()> {
    writer.write_all(bytes)?;
    writer.flush()?;
    Ok(())
}

pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    Ok(fs::read(path.as_ref())?)
}

/// Create or truncate `path` and write `bytes`
pub fn write_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    write_all(bytes, File::create(path.as_ref())?)
}

pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> Result<()> {
    write_file(path, text.as_bytes())
}

/// Create `path` if missing, then append `bytes`
pub fn append_file<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path.as_ref())?;
    write_all(bytes, file)
}

/// Create or truncate `path` and write `bytes[offset..offset + len]`
pub fn write_range<P: AsRef<Path>>(path: P, bytes: &[u8], offset: usize, len: usize) -> Result<()> {
    let range = offset
        .checked_add(len)
        .and_then(|end| bytes.get(offset..end))
        .ok_or_else(|| {
            io::Error::new(
                ErrorKind::InvalidInput,
                format!("range {offset}+{len} out of bounds for {} bytes", bytes.len()),
            )
        })?;
    write_file(path, range)
}

/// Create an empty file at `path` unless one already exists
pub fn ensure_file<P: AsRef<Path>>(path: P) -> Result<()> {
    match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path.as_ref())
    {
        Ok(_) => Ok(()),
        Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(e.into()),
    }
}

/// Copy `from` → `to`, returning the number of bytes copied
pub fn copy_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<u64> {
    Ok(fs::copy(from.as_ref(), to.as_ref())?)
}

/// Rename `from` → `to`
pub fn move_file<P: AsRef<Path>, Q: AsRef<Path>>(from: P, to: Q) -> Result<()> {
    if !from.as_ref().exists() {
        return Err(io::Error::new(
            ErrorKind::NotFound,
            format!("{} does not exist", from.as_ref().display()),
        )
        .into());
    }
    fs::rename(from.as_ref(), to.as_ref())?;
    Ok(())
}

/// Encrypt a file on disk with the process-wide engine.
///
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    mode: CipherMode,
    key_seed: &[u8],
) -> Result<u64> {
    let plaintext = fs::read(input_path.as_ref())?;
    let ciphertext = AesCipher::global().encrypt(mode, &plaintext, key_seed)?;
    write_file(output_path.as_ref(), &ciphertext)?;
    debug!(path = %output_path.as_ref().display(), %mode, "encrypted file");
    Ok(plaintext.len() as u64)
}

/// Decrypt a file on disk with the process-wide engine.
///
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input_path: P,
    output_path: Q,
    mode: CipherMode,
    key_seed: &[u8],
) -> Result<u64> {
    let ciphertext = fs::read(input_path.as_ref())?;
    let plaintext = AesCipher::global().decrypt(mode, &ciphertext, key_seed)?;
    write_file(output_path.as_ref(), &plaintext)?;
    debug!(path = %output_path.as_ref().display(), %mode, "decrypted file");
    Ok(plaintext.len() as u64)
}
