//! Owns the light cache and optional full dataset, and serves the single
//! process-wide shared context.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use once_cell::sync::Lazy;
use rayon::ThreadPoolBuilder;

use crate::constants::{FULL_DATASET_NUM_ITEMS, SEED};
use crate::dataset::dataset_item_1024;
use crate::error::FishHashError;
use crate::hash_types::{Hash1024, Hash512, HashWords};
use crate::light_cache::build_light_cache;

/// One full-dataset slot, stored as sixteen `AtomicU64` lanes so concurrent
/// hashers can read and lazily fill it without a per-slot lock.
///
/// `word64s[0]` is the zero sentinel: an unpopulated slot reads as all
/// zero there. It is written last (`Release`) by a writer and read first
/// (`Acquire`) by a reader, so a reader that observes a non-zero sentinel
/// is guaranteed to observe the other fifteen words fully written too.
#[derive(Default)]
struct DatasetSlot {
    words: [AtomicU64; 16],
}

impl DatasetSlot {
    fn load(&self) -> Option<Hash1024> {
        let w0 = self.words[0].load(Ordering::Acquire);
        if w0 == 0 {
            return None;
        }
        let mut out = Hash1024::default();
        out.set_word64(0, w0);
        for i in 1..16 {
            out.set_word64(i, self.words[i].load(Ordering::Relaxed));
        }
        Some(out)
    }

    fn store(&self, item: &Hash1024) {
        for i in 1..16 {
            self.words[i].store(item.word64(i), Ordering::Relaxed);
        }
        self.words[0].store(item.word64(0), Ordering::Release);
    }
}

/// Owns the light cache and, optionally, the full dataset.
pub struct Context {
    light_cache: Arc<[Hash512]>,
    full_dataset: Option<Box<[DatasetSlot]>>,
}

impl Context {
    fn build(full: bool) -> Result<Self, FishHashError> {
        log::debug!("building fishhash light cache");
        let started = std::time::Instant::now();
        let light_cache: Arc<[Hash512]> = Arc::from(build_light_cache(&SEED));
        log::debug!("light cache built in {:?}", started.elapsed());

        let full_dataset = if full {
            Some(Self::alloc_full_dataset()?)
        } else {
            None
        };

        Ok(Self { light_cache, full_dataset })
    }

    fn alloc_full_dataset() -> Result<Box<[DatasetSlot]>, FishHashError> {
        let mut items: Vec<DatasetSlot> = Vec::new();
        items
            .try_reserve_exact(FULL_DATASET_NUM_ITEMS)
            .map_err(|_| FishHashError::OutOfMemory)?;
        items.resize_with(FULL_DATASET_NUM_ITEMS, DatasetSlot::default);
        Ok(items.into_boxed_slice())
    }

    /// Whether this context has a full dataset (as opposed to light-only).
    pub fn has_full_dataset(&self) -> bool {
        self.full_dataset.is_some()
    }

    /// Builds a context whose full dataset has `num_items` slots instead of
    /// `FULL_DATASET_NUM_ITEMS`. The light cache is still built at its real
    /// size, since dataset items are a pure function of the full cache, but
    /// is shared across calls (building it is the expensive part) via
    /// [`Self::test_light_cache`]. Test-only: lets the parallel-prebuild and
    /// lazy-fill invariants be exercised without allocating the real
    /// ~4.6 GiB dataset.
    #[cfg(test)]
    fn with_dataset_size(num_items: usize) -> Self {
        let mut items: Vec<DatasetSlot> = Vec::with_capacity(num_items);
        items.resize_with(num_items, DatasetSlot::default);
        Self { light_cache: Self::test_light_cache(), full_dataset: Some(items.into_boxed_slice()) }
    }

    /// Light-only context sharing the same cached light cache as
    /// [`Self::with_dataset_size`], so tests don't rebuild it per case.
    #[cfg(test)]
    fn light_only_for_test() -> Self {
        Self { light_cache: Self::test_light_cache(), full_dataset: None }
    }

    /// A light cache sized for tests, not the real ~72 MiB one: big enough to
    /// exercise the mixing loop's index wrapping, small enough to build in
    /// milliseconds. Shared across test cases via a `OnceCell` so it's built
    /// once per test binary rather than once per test.
    #[cfg(test)]
    fn test_light_cache() -> Arc<[Hash512]> {
        use crate::light_cache::build_light_cache_sized;
        use once_cell::sync::OnceCell;
        static CACHE: OnceCell<Arc<[Hash512]>> = OnceCell::new();
        CACHE.get_or_init(|| Arc::from(build_light_cache_sized(&SEED, 256))).clone()
    }

    /// Fetches the dataset item at `index`, from the full dataset if present
    /// (filling it lazily on first access) or by recomputing from the light
    /// cache otherwise.
    pub(crate) fn lookup(&self, index: usize) -> Hash1024 {
        match &self.full_dataset {
            Some(dataset) => {
                if let Some(item) = dataset[index].load() {
                    return item;
                }
                let item = dataset_item_1024(&self.light_cache, index);
                dataset[index].store(&item);
                item
            }
            None => dataset_item_1024(&self.light_cache, index),
        }
    }
}

/// A shared, reference-counted handle to a context.
pub type ContextHandle = Arc<Context>;

static SHARED_CONTEXT: Lazy<Mutex<Option<ContextHandle>>> = Lazy::new(|| Mutex::new(None));

/// Returns the single process-wide shared context, building it on first
/// call. A request for `full = true` after a light-only context exists
/// upgrades the shared slot to a full context; a request for `full = false`
/// when a full context already exists is satisfied by that context.
pub fn get_context(full: bool) -> Result<ContextHandle, FishHashError> {
    let mut slot = SHARED_CONTEXT.lock().expect("fishhash context lock poisoned");

    if let Some(ctx) = slot.as_ref() {
        if !full || ctx.has_full_dataset() {
            return Ok(ctx.clone());
        }
    }

    let ctx: ContextHandle = Arc::new(Context::build(full)?);
    *slot = Some(ctx.clone());
    Ok(ctx)
}

/// Fills every slot of `ctx`'s full dataset, partitioning the index range
/// into `num_threads` contiguous chunks (the last chunk absorbs the
/// remainder) and filling them in parallel. A no-op on a light-only
/// context. `num_threads == 0` is treated as `1`.
pub fn prebuild_dataset(ctx: &Context, num_threads: u32) {
    let dataset = match &ctx.full_dataset {
        Some(dataset) => dataset,
        None => return,
    };

    let num_threads = num_threads.max(1) as usize;
    let n = dataset.len();
    let batch = n / num_threads;
    let light_cache = &ctx.light_cache;

    log::info!("prebuilding full dataset: {n} items across {num_threads} threads");
    let started = std::time::Instant::now();

    let pool = ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build()
        .expect("failed to build fishhash prebuild thread pool");

    pool.scope(|scope| {
        for t in 0..num_threads {
            let start = t * batch;
            let end = if t == num_threads - 1 { n } else { (t + 1) * batch };
            scope.spawn(move |_| {
                for i in start..end {
                    let item = dataset_item_1024(light_cache, i);
                    dataset[i].store(&item);
                }
            });
        }
    });

    log::info!("full dataset prebuilt in {:?}", started.elapsed());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dataset_slot_round_trips_through_atomics() {
        let slot = DatasetSlot::default();
        assert!(slot.load().is_none());

        let mut item = Hash1024::default();
        item.set_word64(0, 42);
        item.set_word64(15, 7);
        slot.store(&item);

        let loaded = slot.load().expect("slot should be populated");
        assert_eq!(loaded.word64(0), 42);
        assert_eq!(loaded.word64(15), 7);
    }

    #[test]
    fn prebuild_dataset_is_thread_count_invariant() {
        let ctx_one = Context::with_dataset_size(4096);
        let ctx_many = Context::with_dataset_size(4096);

        prebuild_dataset(&ctx_one, 1);
        prebuild_dataset(&ctx_many, 8);

        for i in 0..4096 {
            assert_eq!(ctx_one.lookup(i), ctx_many.lookup(i), "mismatch at index {i}");
        }
    }

    #[test]
    fn prebuild_dataset_num_threads_zero_behaves_like_one() {
        let a = Context::with_dataset_size(256);
        let b = Context::with_dataset_size(256);

        prebuild_dataset(&a, 0);
        prebuild_dataset(&b, 1);

        for i in 0..256 {
            assert_eq!(a.lookup(i), b.lookup(i));
        }
    }

    #[test]
    fn lazy_lookup_matches_prebuilt_value() {
        let light_only = Context::light_only_for_test();
        let full = Context::with_dataset_size(64);
        prebuild_dataset(&full, 4);

        for i in 0..64 {
            assert_eq!(light_only.lookup(i), full.lookup(i));
        }
    }

    #[test]
    fn prebuild_is_a_no_op_on_a_light_only_context() {
        let ctx = Context::light_only_for_test();
        // Must not panic or allocate a dataset.
        prebuild_dataset(&ctx, 4);
        assert!(!ctx.has_full_dataset());
    }
}
