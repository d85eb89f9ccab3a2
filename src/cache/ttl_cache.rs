//! TTL Cache Module
//!
//! In-memory keyed snapshots with a fixed time-to-live. Expired entries are
//! never removed eagerly; a read past expiry reports a miss and the next
//! insert for that key overwrites the stale entry.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::cache::{CacheCounters, CacheEntry, CacheStats};
use crate::clock::Clock;

// == TTL Cache ==
/// Shared map of snapshots, each valid for `ttl` after it was inserted.
///
/// The lock is only ever held for a map probe or write, never across an
/// `.await`, so lookups stay non-blocking for async callers.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    /// Key to snapshot storage
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
    /// Lookup counters
    counters: CacheCounters,
    /// Lifetime given to every inserted entry
    ttl: Duration,
    /// Time source for expiry decisions
    clock: Arc<dyn Clock>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl`.
    pub fn new(ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            counters: CacheCounters::new(),
            ttl,
            clock,
        }
    }

    // == Get ==
    /// Returns a clone of the cached value if present and not expired.
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();
        let entries = self.entries.read().unwrap_or_else(|e| e.into_inner());

        match entries.get(key) {
            Some(entry) if !entry.is_expired(now) => {
                self.counters.record_hit();
                Some(entry.value.clone())
            }
            _ => {
                self.counters.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its TTL.
    pub fn insert(&self, key: K, value: V) {
        let entry = CacheEntry::new(value, self.clock.now(), self.ttl);
        let mut entries = self.entries.write().unwrap_or_else(|e| e.into_inner());
        entries.insert(key, entry);
        self.counters.record_population();
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.counters.snapshot(self.len())
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub(crate) fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;

    const TTL: Duration = Duration::from_secs(30);

    fn cache_with_clock() -> (TtlCache<i64, String>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new());
        (TtlCache::new(TTL, clock.clone()), clock)
    }

    #[test]
    fn test_cache_new_is_empty() {
        let (cache, _) = cache_with_clock();
        assert_eq!(cache.len(), 0);
        assert_eq!(cache.stats().total_entries, 0);
    }

    #[test]
    fn test_insert_and_get() {
        let (cache, _) = cache_with_clock();

        cache.insert(1, "first".to_string());

        assert_eq!(cache.get(&1), Some("first".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_get_absent_key() {
        let (cache, _) = cache_with_clock();
        assert_eq!(cache.get(&42), None);
    }

    #[test]
    fn test_entry_served_until_expiry() {
        let (cache, clock) = cache_with_clock();
        cache.insert(1, "first".to_string());

        clock.advance(TTL - Duration::from_millis(1));

        assert_eq!(cache.get(&1), Some("first".to_string()));
    }

    #[test]
    fn test_expired_entry_is_a_miss_but_kept() {
        let (cache, clock) = cache_with_clock();
        cache.insert(1, "first".to_string());

        clock.advance(TTL);

        assert_eq!(cache.get(&1), None);
        // Stale entry stays until overwritten
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_reinsert_restarts_ttl() {
        let (cache, clock) = cache_with_clock();
        cache.insert(1, "first".to_string());
        clock.advance(Duration::from_secs(31));

        cache.insert(1, "second".to_string());
        clock.advance(Duration::from_secs(29));

        assert_eq!(cache.get(&1), Some("second".to_string()));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_stats_track_lookups() {
        let (cache, clock) = cache_with_clock();
        cache.insert(1, "first".to_string());

        cache.get(&1); // hit
        cache.get(&2); // miss
        clock.advance(TTL);
        cache.get(&1); // miss, expired

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 2);
        assert_eq!(stats.populations, 1);
        assert_eq!(stats.total_entries, 1);
    }

    #[test]
    fn test_concurrent_inserts_same_key() {
        let (cache, _) = cache_with_clock();
        let cache = Arc::new(cache);

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.insert(7, "same".to_string()))
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.get(&7), Some("same".to_string()));
        assert_eq!(cache.stats().populations, 8);
    }
}
