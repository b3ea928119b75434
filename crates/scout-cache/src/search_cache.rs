//! In-memory search result cache.

use std::future::Future;
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lru::LruCache;
use parking_lot::Mutex;
use scout_core::{MovieSummary, Result};
use tracing::debug;

/// Default number of distinct queries kept.
pub const DEFAULT_CAPACITY: usize = 100;

/// Search results keyed by `"search:" + query`.
///
/// Entries live until evicted by the LRU policy or the process exits; there
/// is no TTL. The lock is never held across the fetch, so two concurrent
/// misses for one query both fetch and the later insert wins.
#[derive(Clone)]
pub struct SearchCache {
    entries: Arc<Mutex<LruCache<String, Vec<MovieSummary>>>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
}

impl SearchCache {
    /// Create a cache holding at most `capacity` queries (minimum 1).
    pub fn new(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            entries: Arc::new(Mutex::new(LruCache::new(capacity))),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Cache key for a query: trimmed, case preserved.
    pub fn key(query: &str) -> String {
        format!("search:{}", query.trim())
    }

    /// Cached results for a query, refreshing its recency.
    pub fn get(&self, query: &str) -> Option<Vec<MovieSummary>> {
        self.entries.lock().get(&Self::key(query)).cloned()
    }

    /// Store results for a query.
    pub fn insert(&self, query: &str, results: Vec<MovieSummary>) {
        let key = Self::key(query);
        if let Some((evicted, _)) = self.entries.lock().push(key.clone(), results) {
            if evicted != key {
                debug!("Evicted {evicted} from search cache");
            }
        }
    }

    /// Return cached results, or run `fetch` and cache what it returns.
    ///
    /// A failed fetch leaves the query uncached so the next identical
    /// lookup retries.
    pub async fn lookup_or_fetch<F, Fut>(&self, query: &str, fetch: F) -> Result<Vec<MovieSummary>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<MovieSummary>>>,
    {
        if let Some(cached) = self.get(query) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Using cached results for {:?}", query.trim());
            return Ok(cached);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let results = fetch().await?;
        self.insert(query, results.clone());
        Ok(results)
    }

    pub fn contains(&self, query: &str) -> bool {
        self.entries.lock().contains(&Self::key(query))
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        let entries = self.entries.lock();
        CacheStats {
            entries: entries.len(),
            capacity: entries.cap().get(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl Default for SearchCache {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub capacity: usize,
    pub hits: u64,
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from cache.
    #[allow(clippy::cast_precision_loss)]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
