//! Fixed constants for the FishHash algorithm.
//!
//! These are part of the specification: changing any of them changes the
//! hash function. They are not configurable at runtime.

use crate::hash_types::Hash256;

/// FNV-1 prime used by the lane-wise mixing steps.
pub const FNV_PRIME: u32 = 0x0100_0193;

/// Number of 64-byte items in the light cache.
pub const LIGHT_CACHE_NUM_ITEMS: usize = 1_179_641;

/// Number of 128-byte items in the full dataset.
pub const FULL_DATASET_NUM_ITEMS: usize = 37_748_717;

/// Number of passes the light-cache builder makes over the whole cache.
pub const LIGHT_CACHE_ROUNDS: u32 = 3;

/// Number of parent-mixing rounds per dataset item half.
pub const FULL_DATASET_ITEM_PARENTS: u32 = 512;

/// Number of dataset lookups the mixing kernel performs per hash.
pub const NUM_DATASET_ACCESSES: usize = 32;

/// The fixed 256-bit seed the light cache is derived from.
pub const SEED: Hash256 = Hash256([
    0xeb, 0x01, 0x63, 0xae, 0xf2, 0xab, 0x1c, 0x5a, 0x66, 0x31, 0x0c, 0x1c, 0x14, 0xd6, 0x0f, 0x42,
    0x55, 0xa9, 0xb3, 0x9b, 0x0e, 0xdf, 0x26, 0x53, 0x98, 0x44, 0xf1, 0x17, 0xad, 0x67, 0x21, 0x19,
]);
