//! Cache Module
//!
//! Provides the in-memory TTL cache that sits in front of the record store
//! on the read path.

mod entry;
mod stats;
mod ttl_cache;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::{CacheCounters, CacheStats};
pub use ttl_cache::TtlCache;

// == Public Constants ==
/// Default lifetime of a cached item, in seconds
pub const DEFAULT_TTL_SECS: u64 = 30;
