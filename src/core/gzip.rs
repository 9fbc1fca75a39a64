// src/core/gzip.rs
//! GZIP compression over flate2
//!
//! Streaming variants copy in `IO_BUFFER_SIZE` chunks and flush the sink;
//! the `_bytes` variants work on in-memory buffers.

use std::io::{ErrorKind, Read, Write};

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::consts::IO_BUFFER_SIZE;
use crate::core::file::read_all;
use crate::CoreResult as Result;

/// Compress everything from `input` into `output` at `level` (0–9).
///
/// Returns the number of uncompressed bytes read.
pub fn gzip<R: Read, W: Write>(mut input: R, output: W, level: u32) -> Result<u64> {
    let mut encoder = GzEncoder::new(output, Compression::new(level.min(9)));
    let mut buf = [0u8; IO_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match input.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        encoder.write_all(&buf[..n])?;
        total += n as u64;
    }
    let mut output = encoder.finish()?;
    output.flush()?;
    Ok(total)
}

/// Decompress a GZIP stream from `input` into `output`.
///
/// Returns the number of decompressed bytes written.
pub fn gunzip<R: Read, W: Write>(input: R, mut output: W) -> Result<u64> {
    let mut decoder = GzDecoder::new(input);
    let mut buf = [0u8; IO_BUFFER_SIZE];
    let mut total = 0u64;
    loop {
        let n = match decoder.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        output.write_all(&buf[..n])?;
        total += n as u64;
    }
    output.flush()?;
    Ok(total)
}

/// Compress in memory at the configured level
pub fn gzip_bytes(data: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    gzip(data, &mut out, crate::config::load().gzip.level)?;
    Ok(out)
}

pub fn gunzip_bytes(data: &[u8]) -> Result<Vec<u8>> {
    read_all(GzDecoder::new(data))
}
