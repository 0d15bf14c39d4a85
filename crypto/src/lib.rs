//! Primitive hash adapters for FishHash
//!
//! Thin contracts over the two hash primitives the FishHash core consumes:
//! original Keccak with a 512-bit output, and BLAKE3 with variable-length
//! output. Both are treated as black boxes with standard contracts; this
//! crate exists so the core algorithm crate never reaches for `sha3` or
//! `blake3` directly.

use sha3::{digest::Digest, Keccak512};
use thiserror::Error;

/// Errors surfaced by the primitive adapters.
///
/// Keccak-512 and BLAKE3 are total functions given well-formed input, so in
/// practice this type is never constructed; it exists so call sites can use
/// `Result` uniformly rather than assuming infallibility.
#[derive(Error, Debug)]
pub enum PrimitiveError {
    #[error("output buffer has the wrong length: expected {expected}, got {actual}")]
    OutputLength { expected: usize, actual: usize },
}

/// Computes the 64-byte Keccak-512 digest of `data`.
///
/// This is original Keccak padding (as used by the FishHash reference
/// implementation), not SHA3-512 padding. The `sha3` crate's `Keccak512`
/// type implements the former.
pub fn keccak512(data: &[u8]) -> [u8; 64] {
    let mut out = [0u8; 64];
    keccak512_into(&mut out, data);
    out
}

/// Computes the Keccak-512 digest of `data` into `out`.
///
/// Tolerates `out` and `data` aliasing the same buffer: the digest is
/// computed into an internal scratch value before being copied out, so
/// in-place calls (`keccak512_into(&mut buf, &buf)`) are safe.
pub fn keccak512_into(out: &mut [u8; 64], data: &[u8]) {
    let mut hasher = Keccak512::new();
    hasher.update(data);
    let digest = hasher.finalize();
    out.copy_from_slice(&digest);
}

/// Computes a BLAKE3 extendable-output digest of `data` into `out`, whose
/// length determines the digest length. FishHash uses this at 64 bytes
/// (header seed expansion) and 32 bytes (final digest).
pub fn blake3_xof(data: &[u8], out: &mut [u8]) {
    let mut hasher = blake3::Hasher::new();
    hasher.update(data);
    let mut reader = hasher.finalize_xof();
    reader.fill(out);
}
