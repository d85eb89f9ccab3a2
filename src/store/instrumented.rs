//! Access-counting wrapper around a record store.
//!
//! Every call that reaches the wrapped store is counted and emitted as a
//! `debug` event on the `todo_cache::store` target, so an observer can tell
//! whether a lookup was served by the cache or went to the store.

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::debug;

use super::RecordStore;
use crate::error::StoreError;
use crate::models::{Item, NewItem};

#[derive(Debug)]
pub struct InstrumentedStore<S> {
    inner: S,
    accesses: AtomicU64,
}

impl<S> InstrumentedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            accesses: AtomicU64::new(0),
        }
    }

    /// Total number of calls forwarded to the inner store.
    pub fn accesses(&self) -> u64 {
        self.accesses.load(Ordering::SeqCst)
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    fn record(&self, op: &'static str) {
        let total = self.accesses.fetch_add(1, Ordering::SeqCst) + 1;
        debug!(target: "todo_cache::store", op, total, "record store access");
    }
}

#[async_trait]
impl<S: RecordStore> RecordStore for InstrumentedStore<S> {
    async fn create(&self, item: NewItem) -> Result<Item, StoreError> {
        self.record("create");
        self.inner.create(item).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError> {
        self.record("find_by_id");
        self.inner.find_by_id(id).await
    }

    fn access_count(&self) -> Option<u64> {
        Some(self.accesses())
    }
}
