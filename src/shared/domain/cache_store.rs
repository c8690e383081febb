use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key-value cache shared by the catalog services.
///
/// Keys are `"{region}:{suffix}"`; a region groups everything one service caches
/// so a write can evict it in one call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Option<Value>;

    async fn put(&self, key: &str, value: Value);

    /// Remove every key of `region`
    async fn evict_region(&self, region: &str);

    /// Clear all cached data
    async fn clear(&self);

    async fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub ttl_seconds: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f32 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f32 / total as f32
        }
    }
}
