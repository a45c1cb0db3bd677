//! Matcher cache for repeated byte-pattern searches.
//!
//! Building a [`Matcher`] costs `O(m)`. Callers that search for the same
//! patterns over and over (log scanners, request filters) can keep the built
//! matchers here and share them across threads.

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::Result;
use crate::matcher::Matcher;

/// Default maximum cache size.
pub const DEFAULT_CACHE_SIZE: usize = 100;

/// A bounded cache of byte matchers keyed by pattern.
///
/// When full, inserting a new pattern evicts the one inserted earliest.
pub struct MatcherCache {
    cache: RwLock<Entries>,
    max_size: usize,
    total_hits: AtomicUsize,
    total_misses: AtomicUsize,
}

#[derive(Default)]
struct Entries {
    matchers: HashMap<Box<[u8]>, Arc<Matcher<u8>>>,
    order: VecDeque<Box<[u8]>>,
}

impl MatcherCache {
    /// Create a new cache holding at most `max_size` matchers.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        Self {
            cache: RwLock::new(Entries {
                matchers: HashMap::with_capacity(max_size),
                order: VecDeque::with_capacity(max_size),
            }),
            max_size,
            total_hits: AtomicUsize::new(0),
            total_misses: AtomicUsize::new(0),
        }
    }

    /// Create a new cache with default size.
    #[must_use]
    pub fn with_default_size() -> Self {
        Self::new(DEFAULT_CACHE_SIZE)
    }

    /// Get the matcher for `pattern`, building and caching it on a miss.
    ///
    /// # Errors
    ///
    /// Returns [`KmpError::InvalidInput`](crate::KmpError::InvalidInput) if
    /// `pattern` is empty. Failed builds are not cached.
    pub fn get_or_build(&self, pattern: &[u8]) -> Result<Arc<Matcher<u8>>> {
        // The cache is only an optimisation, so a poisoned lock is still usable.
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(matcher) = cache.matchers.get(pattern) {
                self.total_hits.fetch_add(1, Ordering::Relaxed);
                return Ok(Arc::clone(matcher));
            }
        }

        self.total_misses.fetch_add(1, Ordering::Relaxed);
        let matcher = Arc::new(Matcher::new(pattern)?);

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);

        // Another thread may have inserted while we were building.
        if let Some(existing) = cache.matchers.get(pattern) {
            return Ok(Arc::clone(existing));
        }

        if self.max_size == 0 {
            return Ok(matcher);
        }

        while cache.matchers.len() >= self.max_size {
            let Some(oldest) = cache.order.pop_front() else {
                break;
            };
            cache.matchers.remove(&oldest);
            tracing::debug!(pattern.len = oldest.len(), "evicted cached matcher");
        }

        let key: Box<[u8]> = pattern.into();
        cache.order.push_back(key.clone());
        cache.matchers.insert(key, Arc::clone(&matcher));

        Ok(matcher)
    }

    /// Check if a pattern is cached.
    #[must_use]
    pub fn contains(&self, pattern: &[u8]) -> bool {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.matchers.contains_key(pattern)
    }

    /// Get the current number of cached matchers.
    #[must_use]
    pub fn len(&self) -> usize {
        let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
        cache.matchers.len()
    }

    /// Check if the cache is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear the cache. Statistics are kept.
    pub fn clear(&self) {
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        cache.matchers.clear();
        cache.order.clear();
    }

    /// Get the maximum cache size.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.max_size
    }

    /// Get cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            size: self.len(),
            max_size: self.max_size,
            total_hits: self.total_hits.load(Ordering::Relaxed),
            total_misses: self.total_misses.load(Ordering::Relaxed),
        }
    }

    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no lookups have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        self.stats().hit_rate()
    }
}

impl Default for MatcherCache {
    fn default() -> Self {
        Self::with_default_size()
    }
}

impl std::fmt::Debug for MatcherCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatcherCache")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}

/// Statistics about a matcher cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of cached matchers.
    pub size: usize,
    /// Maximum cache size.
    pub max_size: usize,
    /// Total cache hits.
    pub total_hits: usize,
    /// Total cache misses.
    pub total_misses: usize,
}

impl CacheStats {
    /// Get the cache hit rate as a ratio (0.0 to 1.0).
    ///
    /// Returns 1.0 if no lookups have been made.
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.total_hits + self.total_misses;
        if total == 0 {
            1.0
        } else {
            self.total_hits as f64 / total as f64
        }
    }
}

/// Global matcher cache for shared use.
pub static GLOBAL_CACHE: std::sync::LazyLock<MatcherCache> =
    std::sync::LazyLock::new(MatcherCache::with_default_size);

/// Get or build a byte matcher using the global cache.
///
/// # Errors
///
/// Returns [`KmpError::InvalidInput`](crate::KmpError::InvalidInput) if
/// `pattern` is empty.
pub fn get_matcher(pattern: &[u8]) -> Result<Arc<Matcher<u8>>> {
    GLOBAL_CACHE.get_or_build(pattern)
}
