use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::domain::CacheStore;
use crate::shared::utils::LogContext;

/// Typed view of one cache region
pub struct TypedCache<T> {
    store: Arc<dyn CacheStore>,
    region: &'static str,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for TypedCache<T> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            region: self.region,
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> TypedCache<T> {
    pub fn new(store: Arc<dyn CacheStore>, region: &'static str) -> Self {
        Self {
            store,
            region,
            _marker: PhantomData,
        }
    }

    pub fn region(&self) -> &'static str {
        self.region
    }

    fn all_key(&self) -> String {
        format!("{}:all", self.region)
    }

    fn item_key(&self, id: i32) -> String {
        format!("{}:item:{}", self.region, id)
    }

    pub async fn get_all(&self) -> Option<Vec<T>> {
        self.load(&self.all_key()).await
    }

    pub async fn put_all(&self, items: &[T]) {
        self.store_value(&self.all_key(), &items).await;
    }

    pub async fn get_item(&self, id: i32) -> Option<T> {
        self.load(&self.item_key(id)).await
    }

    pub async fn put_item(&self, id: i32, item: &T) {
        self.store_value(&self.item_key(id), item).await;
    }

    /// Evict this region and the given dependent regions
    pub async fn invalidate(&self, dependents: &[&'static str]) {
        self.store.evict_region(self.region).await;
        for region in dependents {
            self.store.evict_region(region).await;
        }
    }

    async fn load<V: DeserializeOwned>(&self, key: &str) -> Option<V> {
        let value = self.store.get(key).await?;
        match serde_json::from_value(value) {
            Ok(decoded) => {
                LogContext::cache_event(self.region, "hit", Some(key));
                Some(decoded)
            }
            Err(e) => {
                log::warn!("Discarding unreadable cache entry {}: {}", key, e);
                None
            }
        }
    }

    async fn store_value<V: Serialize + ?Sized>(&self, key: &str, value: &V) {
        match serde_json::to_value(value) {
            Ok(json) => self.store.put(key, json).await,
            Err(e) => log::warn!("Not caching {}: {}", key, e),
        }
    }
}
