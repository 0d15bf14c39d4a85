//! FishHash — a memory-hard proof-of-work hash function over a
//! deterministically generated dataset.
//!
//! Given a variable-length header, [`hash`] produces a 256-bit digest whose
//! evaluation requires access to a dataset derived from a fixed 256-bit
//! seed. The dataset can be held as a compact light cache (~72 MiB, every
//! item recomputed on demand) or fully materialised as a full dataset
//! (~4.6 GiB, avoiding recomputation). See [`get_context`] and
//! [`prebuild_dataset`].
//!
//! This crate has no CLI, no benchmark harness, no language bindings, and
//! no integration with a wider miner — it exposes a programmatic hashing
//! API only.

mod constants;
mod context;
mod dataset;
mod error;
mod fnv;
mod hash_types;
mod kernel;
mod light_cache;

pub use constants::{
    FULL_DATASET_ITEM_PARENTS, FULL_DATASET_NUM_ITEMS, LIGHT_CACHE_NUM_ITEMS,
    LIGHT_CACHE_ROUNDS, NUM_DATASET_ACCESSES, SEED,
};
pub use context::{get_context, prebuild_dataset, Context, ContextHandle};
pub use error::FishHashError;
pub use hash_types::{Hash1024, Hash256, Hash512, HashWords};
pub use kernel::{hash, hash_into};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_context_returns_the_same_instance_on_repeat_calls() {
        let light = get_context(false).expect("light context");
        let light_again = get_context(false).expect("light context again");
        assert!(std::sync::Arc::ptr_eq(&light, &light_again));
    }
}
