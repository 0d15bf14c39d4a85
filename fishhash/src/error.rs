//! Error types for context construction.
//!
//! The hash function itself is infallible given a valid context: Keccak-512
//! and BLAKE3 are total functions here, and dataset indices are bounded by
//! construction rather than supplied by callers. The only fallible
//! operation is allocating a context.

use thiserror::Error;

/// Errors that can occur while building or upgrading the shared context.
#[derive(Error, Debug)]
pub enum FishHashError {
    /// Allocation of the light cache or full dataset failed.
    #[error("out of memory while allocating fishhash context")]
    OutOfMemory,
}
