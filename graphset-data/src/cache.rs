// graphset-data/src/cache.rs

use cached::{Cached, SizedCache};
use graphset_core::Result;
use log::warn;
use std::sync::{Mutex, MutexGuard};

/// Number of items memoised per dataset when no capacity is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 16;

/// Bounded least-recently-used memoisation of dataset items, keyed by index.
///
/// Backed by `cached::SizedCache`. A capacity of `0` disables memoisation:
/// every lookup recomputes the item.
#[derive(Debug)]
pub struct ItemCache<T> {
    inner: Option<Mutex<SizedCache<usize, T>>>,
    capacity: usize,
}

impl<T: Clone> ItemCache<T> {
    /// Creates a cache holding at most `capacity` items.
    pub fn new(capacity: usize) -> Self {
        let inner = if capacity == 0 {
            None
        } else {
            Some(Mutex::new(SizedCache::with_size(capacity)))
        };
        ItemCache { inner, capacity }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn lock<'a>(cache: &'a Mutex<SizedCache<usize, T>>) -> MutexGuard<'a, SizedCache<usize, T>> {
        cache.lock().unwrap_or_else(|poisoned| {
            warn!("ItemCache: mutex was poisoned. Recovering guard.");
            poisoned.into_inner()
        })
    }

    /// Returns the cached item for `index`, computing and storing it with `f`
    /// on a miss. Errors from `f` are returned and nothing is cached.
    ///
    /// The lock is not held while `f` runs.
    pub fn get_or_try_insert_with<F>(&self, index: usize, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        let cache = match &self.inner {
            Some(cache) => cache,
            None => return f(),
        };
        if let Some(item) = Self::lock(cache).cache_get(&index) {
            return Ok(item.clone());
        }
        let item = f()?;
        Self::lock(cache).cache_set(index, item.clone());
        Ok(item)
    }

    /// True if `index` is currently cached. Does not refresh its recency.
    pub fn contains(&self, index: usize) -> bool {
        match &self.inner {
            Some(cache) => Self::lock(cache).key_order().any(|&k| k == index),
            None => false,
        }
    }

    /// Cached indices, most recently used first.
    pub fn cached_indices(&self) -> Vec<usize> {
        match &self.inner {
            Some(cache) => Self::lock(cache).key_order().copied().collect(),
            None => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        match &self.inner {
            Some(cache) => Self::lock(cache).cache_size(),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn hits(&self) -> u64 {
        match &self.inner {
            Some(cache) => Self::lock(cache).cache_hits().unwrap_or(0),
            None => 0,
        }
    }

    pub fn misses(&self) -> u64 {
        match &self.inner {
            Some(cache) => Self::lock(cache).cache_misses().unwrap_or(0),
            None => 0,
        }
    }

    pub fn clear(&self) {
        if let Some(cache) = &self.inner {
            Self::lock(cache).cache_clear();
        }
    }
}

impl<T: Clone> Default for ItemCache<T> {
    fn default() -> Self {
        ItemCache::new(DEFAULT_CACHE_CAPACITY)
    }
}

#[cfg(test)]
#[path = "cache_test.rs"]
mod tests;
