//! The memory-hard mixing kernel and the end-to-end hash function.

use crate::constants::{FULL_DATASET_NUM_ITEMS, NUM_DATASET_ACCESSES};
use crate::context::Context;
use crate::fnv::fnv1;
use crate::hash_types::{Hash1024, Hash256, Hash512, HashWords};
use fishhash_crypto::blake3_xof;

/// Runs the 32-round dataset-mixing loop and collapses the result to 256
/// bits. `seed` is the BLAKE3-derived header seed, duplicated into both
/// 512-bit halves of the initial 1024-bit mix.
pub fn fishhash_kernel(ctx: &Context, seed: &Hash512) -> Hash256 {
    let mut mix = Hash1024::from_halves(seed, seed);

    for _ in 0..NUM_DATASET_ACCESSES {
        let p0 = (mix.word32(0) as usize) % FULL_DATASET_NUM_ITEMS;
        let p1 = (mix.word32(4) as usize) % FULL_DATASET_NUM_ITEMS;
        let p2 = (mix.word32(8) as usize) % FULL_DATASET_NUM_ITEMS;

        let fetch0 = ctx.lookup(p0);
        let mut fetch1 = ctx.lookup(p1);
        let mut fetch2 = ctx.lookup(p2);

        for j in 0..32 {
            fetch1.set_word32(j, fnv1(mix.word32(j), fetch1.word32(j)));
            fetch2.set_word32(j, mix.word32(j) ^ fetch2.word32(j));
        }

        for k in 0..16 {
            let product = fetch0.word64(k).wrapping_mul(fetch1.word64(k));
            mix.set_word64(k, product.wrapping_add(fetch2.word64(k)));
        }
    }

    let mut out = Hash256::default();
    for i in (0..32).step_by(4) {
        let h1 = fnv1(mix.word32(i), mix.word32(i + 1));
        let h2 = fnv1(h1, mix.word32(i + 2));
        let h3 = fnv1(h2, mix.word32(i + 3));
        out.set_word32(i / 4, h3);
    }
    out
}

/// Hashes `header` against `ctx`, writing the 32-byte digest into `output`.
///
/// `header` may be any length, including zero. `output` must be provided by
/// the caller; unlike the reference implementation, this crate never
/// allocates an output buffer on the caller's behalf.
pub fn hash_into(ctx: &Context, header: &[u8], output: &mut [u8; 32]) {
    let mut seed = Hash512::default();
    blake3_xof(header, &mut seed.0);

    let mix_hash = fishhash_kernel(ctx, &seed);

    let mut final_data = [0u8; 96];
    final_data[..64].copy_from_slice(&seed.0);
    final_data[64..].copy_from_slice(&mix_hash.0);

    blake3_xof(&final_data, output);
}

/// Hashes `header` against `ctx`, returning the 32-byte digest.
pub fn hash(ctx: &Context, header: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    hash_into(ctx, header, &mut output);
    output
}
