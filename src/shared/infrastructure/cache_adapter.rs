use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use crate::shared::domain::{CacheStats, CacheStore};
use crate::shared::utils::LogContext;

/// Simple cache entry with expiration
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    expires_at: Instant,
}

impl<T> CacheEntry<T> {
    fn new(data: T, ttl: Duration) -> Self {
        Self {
            data,
            expires_at: Instant::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        Instant::now() > self.expires_at
    }
}

/// In-memory cache with a per-entry time to live
pub struct CacheAdapter {
    entries: DashMap<String, CacheEntry<Value>>,
    ttl: Duration,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl CacheAdapter {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    fn region_prefix(region: &str) -> String {
        format!("{}:", region)
    }
}

#[async_trait]
impl CacheStore for CacheAdapter {
    async fn get(&self, key: &str) -> Option<Value> {
        let lookup = self
            .entries
            .get(key)
            .map(|entry| (!entry.is_expired()).then(|| entry.data.clone()));

        match lookup {
            Some(Some(value)) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            Some(None) => {
                self.entries.remove(key);
                self.misses.fetch_add(1, Ordering::Relaxed);
                LogContext::cache_event(key, "expired", None);
                None
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    async fn put(&self, key: &str, value: Value) {
        self.entries
            .insert(key.to_string(), CacheEntry::new(value, self.ttl));
    }

    async fn evict_region(&self, region: &str) {
        let prefix = Self::region_prefix(region);
        self.entries.retain(|key, _| !key.starts_with(&prefix));
        LogContext::cache_event(region, "evicted", None);
    }

    async fn clear(&self) {
        self.entries.clear();
        log::info!("All cache data cleared");
    }

    async fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            ttl_seconds: self.ttl.as_secs(),
        }
    }
}

/// Cache that stores nothing; used when caching is switched off
#[derive(Debug, Default)]
pub struct NoopCache;

#[async_trait]
impl CacheStore for NoopCache {
    async fn get(&self, _key: &str) -> Option<Value> {
        None
    }

    async fn put(&self, _key: &str, _value: Value) {}

    async fn evict_region(&self, _region: &str) {}

    async fn clear(&self) {}

    async fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn stores_and_counts_hits() {
        let cache = CacheAdapter::new(Duration::from_secs(60));
        assert!(cache.get("movies:all").await.is_none());

        cache.put("movies:all", json!([1, 2])).await;
        assert_eq!(cache.get("movies:all").await, Some(json!([1, 2])));

        let stats = cache.stats().await;
        assert_eq!(stats.entries, 1);
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hit_rate(), 0.5);
    }

    #[tokio::test]
    async fn expired_entries_are_dropped() {
        let cache = CacheAdapter::new(Duration::from_millis(0));
        cache.put("games:all", json!([])).await;
        tokio::time::sleep(Duration::from_millis(5)).await;

        assert!(cache.get("games:all").await.is_none());
        assert_eq!(cache.stats().await.entries, 0);
    }

    #[tokio::test]
    async fn evicts_only_the_given_region() {
        let cache = CacheAdapter::new(Duration::from_secs(60));
        cache.put("shows:all", json!([])).await;
        cache.put("shows:item:1", json!({})).await;
        cache.put("showsx:all", json!([])).await;
        cache.put("genres:all", json!([])).await;

        cache.evict_region("shows").await;

        assert!(cache.get("shows:all").await.is_none());
        assert!(cache.get("shows:item:1").await.is_none());
        assert!(cache.get("showsx:all").await.is_some());
        assert!(cache.get("genres:all").await.is_some());
    }

    #[tokio::test]
    async fn noop_cache_never_hits() {
        let cache = NoopCache;
        cache.put("books:all", json!([])).await;
        assert!(cache.get("books:all").await.is_none());
    }
}
