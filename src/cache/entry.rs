//! Cache Entry Module
//!
//! Defines a single cached snapshot together with its expiry instant.

use std::time::{Duration, Instant};

/// Expiry horizon used when `now + ttl` is not representable.
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

// == Cache Entry ==
/// A cached value and the instant from which it must be treated as absent.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// Snapshot of the cached value
    pub value: V,
    /// Instant at which the entry stops being served
    pub expires_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry that expires `ttl` after `now`.
    ///
    /// A TTL too large for `Instant` saturates to a horizon about a century
    /// out instead of overflowing.
    pub fn new(value: V, now: Instant, ttl: Duration) -> Self {
        let expires_at = now
            .checked_add(ttl)
            .or_else(|| now.checked_add(FAR_FUTURE))
            .unwrap_or(now);
        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now`.
    ///
    /// Boundary condition: an entry is expired once `now >= expires_at`, so
    /// a read landing exactly on the expiry instant is already a miss.
    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_fresh_within_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now, Duration::from_secs(30));

        assert!(!entry.is_expired(now));
        assert!(!entry.is_expired(now + Duration::from_secs(29)));
    }

    #[test]
    fn test_entry_expired_after_ttl() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now, Duration::from_secs(30));

        assert!(entry.is_expired(now + Duration::from_secs(31)));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now, Duration::from_secs(30));

        assert!(
            entry.is_expired(now + Duration::from_secs(30)),
            "Entry should be expired at boundary"
        );
    }

    #[test]
    fn test_zero_ttl_is_immediately_expired() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now, Duration::ZERO);

        assert!(entry.is_expired(now));
    }

    #[test]
    fn test_huge_ttl_saturates() {
        let now = Instant::now();
        let entry = CacheEntry::new("value", now, Duration::MAX);

        assert!(entry.expires_at > now);
        assert!(!entry.is_expired(now + Duration::from_secs(365 * 24 * 60 * 60)));
    }
}
