//! Bounded LRU cache mapping literal input text to its embedding vector.
//!
//! Capacity 0 disables the cache entirely: `get` always misses and `put` is
//! a no-op, matching the §4.4 contract so callers don't need a separate
//! feature flag to turn caching off.

use std::num::NonZeroUsize;

use lru::LruCache;
use parking_lot::Mutex;

pub struct EmbeddingCache {
    inner: Option<Mutex<LruCache<String, Vec<f32>>>>,
}

impl EmbeddingCache {
    /// `capacity == 0` disables the cache.
    pub fn new(capacity: usize) -> Self {
        let inner = NonZeroUsize::new(capacity).map(|n| Mutex::new(LruCache::new(n)));
        Self { inner }
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.is_some()
    }

    /// Returns the cached vector and promotes it to most-recently-used on a
    /// hit. The critical section is held only while cloning the vector, so a
    /// concurrent reader never observes a partially-written entry.
    pub fn get(&self, text: &str) -> Option<Vec<f32>> {
        let cache = self.inner.as_ref()?;
        cache.lock().get(text).cloned()
    }

    pub fn put(&self, text: String, vector: Vec<f32>) {
        if let Some(cache) = self.inner.as_ref() {
            cache.lock().put(text, vector);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.as_ref().map(|c| c.lock().len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
