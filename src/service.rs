//! Item Service
//!
//! Composes the record store with the TTL cache. Creates go straight to the
//! store; fetches go through the cache first and populate it on a store hit.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheStats, TtlCache};
use crate::clock::Clock;
use crate::error::StoreError;
use crate::models::{Item, NewItem};
use crate::store::RecordStore;

// == Item Service ==
pub struct ItemService {
    store: Arc<dyn RecordStore>,
    cache: TtlCache<i64, Item>,
}

impl ItemService {
    // == Constructor ==
    /// Builds a service whose cached items live for `ttl` as measured by
    /// `clock`.
    pub fn new(store: Arc<dyn RecordStore>, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            store,
            cache: TtlCache::new(ttl, clock),
        }
    }

    // == Create ==
    /// Persists a new item. The cache is not touched.
    pub async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        let created = self.store.create(item).await?;
        debug!(id = created.id, "created item");
        Ok(created)
    }

    // == Fetch ==
    /// Returns the item with `id`, serving a fresh cached copy when one exists.
    ///
    /// On a miss the store is queried and a found item is cached for the TTL.
    /// Absent ids are not cached, so every lookup for one reaches the store.
    /// Store faults are returned unchanged.
    pub async fn fetch(&self, id: i64) -> Result<Option<Item>, StoreError> {
        if let Some(item) = self.cache.get(&id) {
            debug!(id, "cache hit");
            return Ok(Some(item));
        }

        debug!(id, "cache miss, querying store");
        let found = self.store.find_by_id(id).await?;

        if let Some(item) = &found {
            self.cache.insert(id, item.clone());
        }
        Ok(found)
    }

    // == Stats ==
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    /// Store access count, when the store is instrumented.
    pub fn store_accesses(&self) -> Option<u64> {
        self.store.access_count()
    }
}
