//! Unbounded memoization store
//!
//! Entries are created on first computation for a key and never evicted:
//! the store lives as long as one code-generation run, so growth is
//! bounded by the distinct argument keys the run produces.

use std::collections::hash_map::{Entry, HashMap};
use std::hash::Hash;

use ahash::RandomState;

/// Store mapping canonical argument keys to previously computed results
pub struct MemoCache<K, V> {
    entries: HashMap<K, V, RandomState>,
}

impl<K, V> MemoCache<K, V>
where
    K: Hash + Eq,
{
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            entries: HashMap::with_hasher(RandomState::new()),
        }
    }

    /// Look up the cached result for a key
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    /// Insert a computed result, returning the previous one if any
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.entries.insert(key, value)
    }

    /// Check whether a key already has a cached result
    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// Return the cached result for `key`, computing it on first use
    ///
    /// `compute` runs at most once per distinct key over the store's
    /// lifetime and receives the key by reference.
    pub fn get_or_compute(&mut self, key: K, compute: impl FnOnce(&K) -> V) -> &V {
        match self.entries.entry(key) {
            Entry::Occupied(slot) => slot.into_mut(),
            Entry::Vacant(slot) => {
                let value = compute(slot.key());
                slot.insert(value)
            }
        }
    }

    /// Fallible variant of [`get_or_compute`](Self::get_or_compute)
    ///
    /// A failed computation inserts nothing: the error propagates to the
    /// caller unchanged and the next call with an equal key runs
    /// `compute` again.
    pub fn try_get_or_compute<E>(
        &mut self,
        key: K,
        compute: impl FnOnce(&K) -> Result<V, E>,
    ) -> Result<&V, E> {
        match self.entries.entry(key) {
            Entry::Occupied(slot) => Ok(slot.into_mut()),
            Entry::Vacant(slot) => {
                let value = compute(slot.key())?;
                Ok(slot.insert(value))
            }
        }
    }

    /// Get the number of cached results
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all cached results
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<K, V> Default for MemoCache<K, V>
where
    K: Hash + Eq,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_once() {
        let mut cache = MemoCache::new();
        let mut calls = 0;

        let first = *cache.get_or_compute(7u64, |k| {
            calls += 1;
            k * 2
        });
        assert_eq!(first, 14);

        let second = *cache.get_or_compute(7u64, |k| {
            calls += 1;
            k * 2
        });
        assert_eq!(second, 14);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_distinct_keys_compute_separately() {
        let mut cache = MemoCache::new();

        assert_eq!(*cache.get_or_compute(1u32, |k| k + 10), 11);
        assert_eq!(*cache.get_or_compute(2u32, |k| k + 10), 12);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_failure_not_cached() {
        let mut cache: MemoCache<&str, u32> = MemoCache::new();
        let mut calls = 0;

        let first: Result<&u32, &str> = cache.try_get_or_compute("key", |_| {
            calls += 1;
            Err("transient")
        });
        assert!(first.is_err());
        assert!(cache.is_empty());

        // Same key must be recomputed after the failure.
        let second: Result<&u32, &str> = cache.try_get_or_compute("key", |_| {
            calls += 1;
            Ok(42)
        });
        assert_eq!(second, Ok(&42));
        assert_eq!(calls, 2);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_success_cached_on_fallible_path() {
        let mut cache: MemoCache<u8, u8> = MemoCache::new();
        let mut calls = 0;

        for _ in 0..3 {
            let value: Result<&u8, ()> = cache.try_get_or_compute(5, |k| {
                calls += 1;
                Ok(k + 1)
            });
            assert_eq!(value, Ok(&6));
        }
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_get_insert_contains() {
        let mut cache = MemoCache::new();

        assert_eq!(cache.get(&1), None);
        assert_eq!(cache.insert(1, "a"), None);
        assert!(cache.contains(&1));
        assert_eq!(cache.get(&1), Some(&"a"));

        // Direct insert overwrites: last write wins.
        assert_eq!(cache.insert(1, "b"), Some("a"));
        assert_eq!(cache.get(&1), Some(&"b"));
    }

    #[test]
    fn test_clear() {
        let mut cache = MemoCache::new();

        cache.insert(1, 1);
        cache.insert(2, 2);
        cache.clear();

        assert_eq!(cache.len(), 0);
        assert!(cache.is_empty());
    }
}
