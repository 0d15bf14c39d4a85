//! Computes individual full-dataset items from the light cache.

use crate::constants::FULL_DATASET_ITEM_PARENTS;
use crate::fnv::{fnv1, fnv1_512};
use crate::hash_types::{Hash1024, Hash512, HashWords};
use fishhash_crypto::keccak512_into;

/// Per-half state machine for one 512-bit half of a dataset item.
struct ItemState<'a> {
    light_cache: &'a [Hash512],
    seed: u32,
    mix: Hash512,
}

impl<'a> ItemState<'a> {
    fn new(light_cache: &'a [Hash512], sub_index: i64) -> Self {
        let num_cache_items = light_cache.len();
        let seed = sub_index as u32;
        let mut mix = light_cache[(sub_index as usize) % num_cache_items];
        let w0 = mix.word32(0) ^ seed;
        mix.set_word32(0, w0);
        let copy = mix.0;
        keccak512_into(&mut mix.0, &copy);
        Self { light_cache, seed, mix }
    }

    fn update(&mut self, round: u32) {
        let num_cache_items = self.light_cache.len();
        let t = fnv1(self.seed ^ round, self.mix.word32((round % 16) as usize));
        let parent = (t as usize) % num_cache_items;
        self.mix = fnv1_512(&self.mix, &self.light_cache[parent]);
    }

    fn finalize(mut self) -> Hash512 {
        let copy = self.mix.0;
        keccak512_into(&mut self.mix.0, &copy);
        self.mix
    }
}

/// Computes the 1024-bit dataset item at `index` from the light cache.
///
/// Pure function of `(light_cache, index)`: recomputing the same index from
/// the same cache always yields the same bytes, whether or not a full
/// dataset is ever materialised.
pub fn dataset_item_1024(light_cache: &[Hash512], index: usize) -> Hash1024 {
    let mut item0 = ItemState::new(light_cache, index as i64 * 2);
    let mut item1 = ItemState::new(light_cache, index as i64 * 2 + 1);

    for round in 0..FULL_DATASET_ITEM_PARENTS {
        item0.update(round);
        item1.update(round);
    }

    Hash1024::from_halves(&item0.finalize(), &item1.finalize())
}
