//! Memoized function wrappers
//!
//! `Memo` wraps a pure function and computes each distinct argument key
//! at most once. `TryMemo` does the same for fallible functions without
//! ever caching a failure. `SharedMemo` is the thread-safe variant.

use std::hash::Hash;

use parking_lot::Mutex;
use tracing::trace;

use crate::cache::MemoCache;
use crate::stats::MemoStats;

/// Memoized pure function
///
/// The wrapped function must be deterministic and side-effect free:
/// the first computed value for a key is returned for every later call
/// with an equal key, and the function is never re-invoked for it.
pub struct Memo<A, R, F> {
    func: F,
    cache: MemoCache<A, R>,
    stats: MemoStats,
}

impl<A, R, F> Memo<A, R, F>
where
    A: Hash + Eq,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wrap a function
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: MemoCache::new(),
            stats: MemoStats::new(),
        }
    }

    /// Call the wrapped function, memoized
    ///
    /// # Arguments
    /// * `args` - Canonical argument key for this call
    ///
    /// # Returns
    /// * The value computed on the first call with an equal key
    pub fn call(&mut self, args: A) -> R {
        if let Some(value) = self.cache.get(&args) {
            self.stats.record_hit();
            return value.clone();
        }

        self.stats.record_miss();
        trace!(entries = self.cache.len(), "memo miss");
        let value = (self.func)(&args);
        self.cache.insert(args, value.clone());
        value
    }

    /// Check whether a key is already cached, without recording stats
    pub fn contains(&self, args: &A) -> bool {
        self.cache.contains(args)
    }

    /// Get memoization statistics
    pub fn stats(&self) -> &MemoStats {
        &self.stats
    }

    /// Get the number of cached results
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop all cached results and reset statistics
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }
}

/// Memoized fallible function
///
/// Failures propagate to the caller unchanged and are never cached, so
/// the next call with an equal key re-invokes the function and may
/// succeed or fail independently.
pub struct TryMemo<A, R, F> {
    func: F,
    cache: MemoCache<A, R>,
    stats: MemoStats,
}

impl<A, R, E, F> TryMemo<A, R, F>
where
    A: Hash + Eq,
    R: Clone,
    F: Fn(&A) -> Result<R, E>,
{
    /// Wrap a fallible function
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: MemoCache::new(),
            stats: MemoStats::new(),
        }
    }

    /// Call the wrapped function, memoizing successes only
    pub fn call(&mut self, args: A) -> Result<R, E> {
        if let Some(value) = self.cache.get(&args) {
            self.stats.record_hit();
            return Ok(value.clone());
        }

        self.stats.record_miss();
        match (self.func)(&args) {
            Ok(value) => {
                self.cache.insert(args, value.clone());
                Ok(value)
            }
            Err(err) => {
                self.stats.record_error();
                trace!("memoized call failed, nothing cached");
                Err(err)
            }
        }
    }

    /// Get memoization statistics
    pub fn stats(&self) -> &MemoStats {
        &self.stats
    }

    /// Get the number of cached results
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drop all cached results and reset statistics
    pub fn clear(&mut self) {
        self.cache.clear();
        self.stats.reset();
    }
}

/// Thread-safe memoized pure function
///
/// Concurrent misses on the same key may each run the function: the
/// computation happens outside the lock and the last completed write
/// wins the cache slot. Every caller still observes a correct value
/// because the wrapped function is pure.
pub struct SharedMemo<A, R, F> {
    func: F,
    cache: Mutex<MemoCache<A, R>>,
    stats: MemoStats,
}

impl<A, R, F> SharedMemo<A, R, F>
where
    A: Hash + Eq,
    R: Clone,
    F: Fn(&A) -> R,
{
    /// Wrap a function
    pub fn new(func: F) -> Self {
        Self {
            func,
            cache: Mutex::new(MemoCache::new()),
            stats: MemoStats::new(),
        }
    }

    /// Call the wrapped function, memoized
    pub fn call(&self, args: A) -> R {
        if let Some(value) = self.cache.lock().get(&args) {
            self.stats.record_hit();
            return value.clone();
        }

        self.stats.record_miss();
        let value = (self.func)(&args);
        self.cache.lock().insert(args, value.clone());
        value
    }

    /// Get memoization statistics
    pub fn stats(&self) -> &MemoStats {
        &self.stats
    }

    /// Get the number of cached results
    pub fn len(&self) -> usize {
        self.cache.lock().len()
    }

    /// Check if nothing has been cached yet
    pub fn is_empty(&self) -> bool {
        self.cache.lock().is_empty()
    }

    /// Drop all cached results and reset statistics
    pub fn clear(&self) {
        self.cache.lock().clear();
        self.stats.reset();
    }
}
