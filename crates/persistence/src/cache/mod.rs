//! In-memory caching layer for feed snapshots

use kripto_core::FeedSnapshot;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

/// Cached item with expiration
struct CacheEntry {
    snapshot: FeedSnapshot,
    inserted_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() > self.ttl
    }
}

/// Thread-safe snapshot cache keyed by request signature.
///
/// `get_fresh` honors the TTL; `get_stale` ignores it, serving the feed
/// client's fallback path when the network is unavailable.
pub struct SnapshotCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

impl SnapshotCache {
    /// Create a new cache with the given freshness window
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl,
        }
    }

    /// Get a snapshot if one exists and is younger than the TTL
    pub fn get_fresh(&self, key: &str) -> Option<FeedSnapshot> {
        let cache = self.entries.read().ok()?;
        let entry = cache.get(key)?;

        if entry.is_expired() {
            None
        } else {
            Some(entry.snapshot.clone())
        }
    }

    /// Get the most recent snapshot regardless of age
    pub fn get_stale(&self, key: &str) -> Option<FeedSnapshot> {
        let cache = self.entries.read().ok()?;
        cache.get(key).map(|entry| entry.snapshot.clone())
    }

    /// Insert or update a snapshot under the given key
    pub fn insert(&self, key: &str, snapshot: FeedSnapshot) {
        if let Ok(mut cache) = self.entries.write() {
            cache.insert(
                key.to_string(),
                CacheEntry {
                    snapshot,
                    inserted_at: Instant::now(),
                    ttl: self.default_ttl,
                },
            );
        }
    }

    /// Remove a snapshot from cache
    pub fn invalidate(&self, key: &str) {
        if let Ok(mut cache) = self.entries.write() {
            cache.remove(key);
        }
    }

    /// Clear entire cache
    pub fn clear(&self) {
        if let Ok(mut cache) = self.entries.write() {
            cache.clear();
        }
    }

    /// Get current cache size
    pub fn len(&self) -> usize {
        self.entries.read().map(|c| c.len()).unwrap_or(0)
    }

    /// Check if cache is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        // One-minute freshness window keeps within provider rate limits
        Self::new(Duration::from_secs(60))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kripto_core::FeedAsset;

    fn snapshot_of(symbol: &str) -> FeedSnapshot {
        FeedSnapshot {
            success: true,
            result: vec![FeedAsset {
                symbol: symbol.to_string(),
                name: symbol.to_string(),
                price: Some(1.0),
                change_1h: None,
                change_24h: None,
                change_7d: None,
                volume: None,
                market_cap: None,
                circulating_supply: None,
                image: None,
            }],
        }
    }

    #[test]
    fn test_fresh_entry_is_served() {
        let cache = SnapshotCache::new(Duration::from_secs(60));
        cache.insert("markets", snapshot_of("BTC"));
        let hit = cache.get_fresh("markets").unwrap();
        assert_eq!(hit.result[0].symbol, "BTC");
    }

    #[test]
    fn test_expired_entry_is_stale_only() {
        let cache = SnapshotCache::new(Duration::from_millis(0));
        cache.insert("markets", snapshot_of("BTC"));
        std::thread::sleep(Duration::from_millis(5));
        assert!(cache.get_fresh("markets").is_none());
        assert!(cache.get_stale("markets").is_some());
    }

    #[test]
    fn test_miss_on_unknown_key() {
        let cache = SnapshotCache::default();
        assert!(cache.get_fresh("other").is_none());
        assert!(cache.get_stale("other").is_none());
    }
}
