//! Record Store Module
//!
//! Durable storage for todo items. The store owns id assignment; the cache
//! never writes through to it.

mod instrumented;
mod sqlite;

pub use instrumented::InstrumentedStore;
pub use sqlite::SqliteRecordStore;

use async_trait::async_trait;

use crate::error::StoreError;
use crate::models::{Item, NewItem};

// == Record Store Port ==
/// Durable keyed storage for items.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Persists `item` under a freshly assigned id and returns the stored row.
    ///
    /// The write is all-or-nothing: a dropped future never leaves a partial
    /// item behind.
    async fn create(&self, item: NewItem) -> Result<Item, StoreError>;

    /// Looks up an item. A missing id is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<Item>, StoreError>;

    /// Number of calls that reached the store, if this store counts them.
    fn access_count(&self) -> Option<u64> {
        None
    }
}
