//! Builds the deterministic light cache from the fixed seed.

use crate::constants::{LIGHT_CACHE_NUM_ITEMS, LIGHT_CACHE_ROUNDS};
use crate::hash_types::{Hash256, Hash512, HashWords};
use fishhash_crypto::keccak512_into;

/// Builds the `LIGHT_CACHE_NUM_ITEMS`-element light cache from `seed`.
///
/// Two independently built caches from the same seed are bit-identical;
/// this function has no dependence on thread count or platform beyond
/// byte-level determinism of the Keccak-512 adapter.
pub fn build_light_cache(seed: &Hash256) -> Box<[Hash512]> {
    build_light_cache_sized(seed, LIGHT_CACHE_NUM_ITEMS)
}

/// [`build_light_cache`] generalised to an arbitrary item count.
///
/// The real dataset only ever uses `LIGHT_CACHE_NUM_ITEMS`; this exists so
/// tests can exercise the mixing loop's structure (determinism, index
/// wrapping) at a size that doesn't take minutes of unoptimized Keccak-512.
pub(crate) fn build_light_cache_sized(seed: &Hash256, n: usize) -> Box<[Hash512]> {
    let mut cache = vec![Hash512::default(); n].into_boxed_slice();

    let mut item = Hash512::default();
    keccak512_into(&mut item.0, &seed.0);
    cache[0] = item;

    for slot in cache.iter_mut().take(n).skip(1) {
        let prev = item.0;
        keccak512_into(&mut item.0, &prev);
        *slot = item;
    }

    for _ in 0..LIGHT_CACHE_ROUNDS {
        for i in 0..n {
            // First index: little-endian u32 read of the item's first 4 bytes.
            let t = cache[i].word32(0) as usize;
            let v = t % n;
            // Second index: the previous slot, wrapping at 0.
            let w = (n + i - 1) % n;

            let mixed = &cache[v] ^ &cache[w];
            let mut next = Hash512::default();
            keccak512_into(&mut next.0, &mixed.0);
            cache[i] = next;
        }
    }

    cache
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEED;

    const TEST_SIZE: usize = 256;

    #[test]
    fn light_cache_build_is_deterministic() {
        let a = build_light_cache_sized(&SEED, TEST_SIZE);
        let b = build_light_cache_sized(&SEED, TEST_SIZE);
        assert_eq!(a[0], b[0]);
        assert_eq!(a[TEST_SIZE - 1], b[TEST_SIZE - 1]);
        assert_eq!(a.len(), TEST_SIZE);
    }

    #[test]
    fn light_cache_first_item_is_not_plain_keccak_of_seed() {
        // cache[0] after the mixing rounds must differ from a bare
        // Keccak512(SEED), since it has been overwritten by the round loop.
        let cache = build_light_cache_sized(&SEED, TEST_SIZE);
        let plain = fishhash_crypto::keccak512(&SEED.0);
        assert_ne!(cache[0].0.to_vec(), plain.to_vec());
    }

    #[test]
    #[ignore = "builds the real 1,179,641-item light cache; slow under an unoptimized build"]
    fn real_size_light_cache_has_the_specified_item_count() {
        // Single real-size build, gated behind `--ignored` since it takes
        // on the order of a minute in an unoptimized build.
        let cache = build_light_cache(&SEED);
        assert_eq!(cache.len(), LIGHT_CACHE_NUM_ITEMS);
    }

    /// S3: `cache[0]` after the real 1,179,641-item, 3-round build, pinned
    /// against a reference run of this crate's own implementation (there is
    /// no external oracle available here; the point is to catch regressions
    /// in the builder, not to validate against a third-party vector).
    #[test]
    #[ignore = "builds the real 1,179,641-item light cache; slow under an unoptimized build"]
    fn real_size_light_cache_first_item_matches_pinned_vector() {
        let cache = build_light_cache(&SEED);
        assert_eq!(
            cache[0].0,
            [
                0xe0, 0x70, 0x09, 0x1a, 0xff, 0xe5, 0xdf, 0x63, 0x8e, 0x91, 0x8f, 0xdc, 0xee, 0x7d,
                0xd5, 0x89, 0xbf, 0x47, 0x4f, 0x96, 0x71, 0x28, 0x67, 0xbe, 0xa2, 0x84, 0x10, 0xa5,
                0xd3, 0xd0, 0xd1, 0x20, 0xcc, 0x16, 0xc3, 0x66, 0x51, 0xa2, 0x24, 0x46, 0x1a, 0x94,
                0xff, 0xd2, 0x4d, 0x5c, 0x7c, 0x96, 0xc8, 0x48, 0x97, 0x8b, 0xbf, 0x51, 0x42, 0x42,
                0x14, 0xb9, 0xb5, 0x92, 0x7a, 0x27, 0x58, 0xf8,
            ]
        );
        assert_eq!(cache[0].word32(0), 0x1a0970e0);
    }
}
