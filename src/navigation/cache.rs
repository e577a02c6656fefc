//! Build-wide memoization of menu orderings.
//!
//! Templates ask for the same ordering of the same menu once per rendered
//! page. [`MenuCache`] computes each ordering once and hands out the stored
//! result afterwards.
//!
//! # Keying
//!
//! Results are keyed by `(operation key, storage identity of the input)`.
//! Two menus with identical content but different storage (e.g. `main` and
//! `footer` built from the same config) are cached independently. The cache
//! keeps the input alive, so its address cannot be reused by another menu
//! while the entry exists; and because [`Menu`] mutates copy-on-write, a
//! menu changed after caching gets new storage and therefore a new key.
//!
//! The same holds for menus derived per call. `menu.limit(3)` copies when it
//! cuts entries off, so `menu.limit(3).by_weight(&cache)` misses every time
//! and pins one more slot per call. Order first and limit the cached result:
//!
//! ```ignore
//! menu.by_weight(&cache).limit(3) // one slot, hit after the first call
//! ```
//!
//! # Thread Safety
//!
//! ```text
//!  worker 1 ─┐                        ┌─ hit: clone stored Menu
//!  worker 2 ─┼─► slots (RwLock) ─► Slot┤
//!  worker 3 ─┘    read-mostly          └─ miss: OnceLock::get_or_init
//!                                          (one computes, others wait)
//! ```
//!
//! The slot table is only write-locked to insert an empty slot. The ordering
//! itself is computed outside the table lock, under the slot's `OnceLock`,
//! so workers on different menus never wait on each other and workers on the
//! same menu never observe a partially sorted result.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::{entry::MenuEntry, menu::Menu, sort::MenuSort};
use crate::debug;

type CacheKey = (&'static str, usize);

#[derive(Debug)]
struct Slot {
    /// Pins the input storage so `CacheKey` stays unique.
    _input: Menu,
    value: OnceLock<Menu>,
}

/// Memoized menu orderings for one build.
///
/// Create one per build and share it by reference with every renderer.
/// Drop it (or call [`MenuCache::clear`]) before the next build.
#[derive(Debug, Default)]
pub struct MenuCache {
    slots: RwLock<FxHashMap<CacheKey, Arc<Slot>>>,
}

impl MenuCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered view of `menu`, computed on first request.
    pub fn apply(&self, sort: MenuSort, menu: &Menu) -> Menu {
        self.get(sort.key(), menu, |entries| sort.apply(entries)).0
    }

    /// Get the result of `mutate` applied to a copy of `menu`.
    ///
    /// `mutate` runs at most once per `(key, menu)`; later calls return the
    /// stored menu. The flag is `true` when the result came from the cache.
    pub fn get<F>(&self, key: &'static str, menu: &Menu, mutate: F) -> (Menu, bool)
    where
        F: FnOnce(&mut [Arc<MenuEntry>]),
    {
        let slot = self.slot((key, menu.storage_id()), menu);

        let mut computed = false;
        let value = slot.value.get_or_init(|| {
            computed = true;
            let mut entries = menu.to_vec();
            mutate(&mut entries);
            Menu::from(entries)
        });

        if computed {
            debug!("cache"; "computed {key} ({} entries)", value.len());
        }
        (value.clone(), !computed)
    }

    fn slot(&self, id: CacheKey, menu: &Menu) -> Arc<Slot> {
        // Fast path: read lock only
        if let Some(slot) = self.slots.read().get(&id) {
            return Arc::clone(slot);
        }

        // Slow path: another worker may have inserted meanwhile
        let mut slots = self.slots.write();
        let slot = slots.entry(id).or_insert_with(|| {
            Arc::new(Slot {
                _input: menu.clone(),
                value: OnceLock::new(),
            })
        });
        Arc::clone(slot)
    }

    /// Number of cached orderings.
    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }

    /// Drop all cached orderings, e.g. before a rebuild in watch mode.
    pub fn clear(&self) {
        self.slots.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rayon::prelude::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::navigation::sort::default_order;

    fn menu(entries: &[(&str, i32)]) -> Menu {
        entries
            .iter()
            .map(|(name, weight)| MenuEntry::new(*name, "").with_weight(*weight))
            .collect()
    }

    fn names(menu: &Menu) -> Vec<&str> {
        menu.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_by_weight_zero_last() {
        let cache = MenuCache::new();
        let m = menu(&[("z1", 0), ("five", 5), ("minus", -3), ("z2", 0)]);
        assert_eq!(names(&m.by_weight(&cache)), ["minus", "five", "z1", "z2"]);
        // Input is untouched
        assert_eq!(names(&m), ["z1", "five", "minus", "z2"]);
    }

    #[test]
    fn test_second_request_skips_comparator() {
        let cache = MenuCache::new();
        let m = menu(&[("c", 3), ("a", 1), ("b", 2)]);
        let calls = AtomicUsize::new(0);
        let sort = |entries: &mut [Arc<MenuEntry>]| {
            entries.sort_by(|a, b| {
                calls.fetch_add(1, Ordering::Relaxed);
                default_order(a, b)
            });
        };

        let (first, cached) = cache.get("test.ByWeight", &m, sort);
        assert!(!cached);
        let after_first = calls.load(Ordering::Relaxed);
        assert!(after_first > 0);

        let (second, cached) = cache.get("test.ByWeight", &m, sort);
        assert!(cached);
        assert_eq!(calls.load(Ordering::Relaxed), after_first);
        assert_eq!(first, second);
        assert_eq!(names(&second), ["a", "b", "c"]);
    }

    #[test]
    fn test_named_views_cache_separately() {
        let cache = MenuCache::new();
        let m = menu(&[("b", 1), ("a", 2), ("c", 0)]);

        assert_eq!(names(&m.by_weight(&cache)), ["b", "a", "c"]);
        assert_eq!(names(&m.by_name(&cache)), ["a", "b", "c"]);
        assert_eq!(names(&m.reverse(&cache)), ["c", "a", "b"]);
        assert_eq!(cache.len(), 3);

        // Repeat requests reuse the slots
        m.by_weight(&cache);
        m.reverse(&cache);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_identical_menus_are_isolated() {
        let cache = MenuCache::new();
        let main = menu(&[("b", 2), ("a", 1)]);
        let footer = menu(&[("b", 2), ("a", 1)]);

        let (_, cached) = cache.get(MenuSort::ByWeight.key(), &main, |e| MenuSort::ByWeight.apply(e));
        assert!(!cached);
        let (_, cached) = cache.get(MenuSort::ByWeight.key(), &footer, |e| MenuSort::ByWeight.apply(e));
        assert!(!cached);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_mutation_after_caching() {
        let cache = MenuCache::new();
        let mut main = menu(&[("b", 2), ("a", 1)]);
        let footer = menu(&[("y", 2), ("x", 1)]);

        let main_sorted = main.by_weight(&cache);
        let footer_sorted = footer.by_weight(&cache);

        main.add(MenuEntry::new("first", "").with_weight(-1));

        // Mutated menu gets a fresh ordering
        assert_eq!(names(&main.by_weight(&cache)), ["first", "a", "b"]);
        // Earlier results are unchanged
        assert_eq!(names(&main_sorted), ["a", "b"]);
        assert_eq!(names(&footer.by_weight(&cache)), ["x", "y"]);
        assert_eq!(footer.by_weight(&cache), footer_sorted);
    }

    #[test]
    fn test_chained_views() {
        let cache = MenuCache::new();
        let m = menu(&[("c", 3), ("a", 1), ("b", 2)]);
        let top = m.by_weight(&cache).reverse(&cache).limit(2);
        assert_eq!(names(&top), ["c", "b"]);
    }

    #[test]
    fn test_limited_copies_are_separate_inputs() {
        let cache = MenuCache::new();
        let m = menu(&[("c", 3), ("a", 1), ("b", 2), ("d", 4)]);

        for _ in 0..10 {
            let (top, cached) = cache.get(MenuSort::ByWeight.key(), &m.limit(3), |e| MenuSort::ByWeight.apply(e));
            assert!(!cached);
            assert_eq!(names(&top), ["a", "b", "c"]);
        }
        assert_eq!(cache.len(), 10);

        cache.clear();
        for _ in 0..10 {
            assert_eq!(names(&m.by_weight(&cache).limit(3)), ["a", "b", "c"]);
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = MenuCache::new();
        let m = menu(&[("a", 1)]);
        m.by_weight(&cache);
        assert!(!cache.is_empty());

        cache.clear();
        assert!(cache.is_empty());
        let (_, cached) = cache.get(MenuSort::ByWeight.key(), &m, |e| MenuSort::ByWeight.apply(e));
        assert!(!cached);
    }

    #[test]
    fn test_concurrent_requests_compute_once() {
        let cache = MenuCache::new();
        let main = menu(&[("d", 4), ("b", 2), ("a", 1), ("c", 3)]);
        let footer = menu(&[("y", 0), ("x", 0)]);
        let computations = AtomicUsize::new(0);

        let results: Vec<Menu> = (0..256)
            .into_par_iter()
            .map(|i| {
                let m = if i % 2 == 0 { &main } else { &footer };
                cache
                    .get("test.ByWeight", m, |entries| {
                        computations.fetch_add(1, Ordering::SeqCst);
                        MenuSort::ByWeight.apply(entries);
                    })
                    .0
            })
            .collect();

        assert_eq!(computations.load(Ordering::SeqCst), 2);
        for (i, result) in results.iter().enumerate() {
            let expected: &[&str] = if i % 2 == 0 { &["a", "b", "c", "d"] } else { &["x", "y"] };
            assert_eq!(names(result), expected);
        }
    }
}
