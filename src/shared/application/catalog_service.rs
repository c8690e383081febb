use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::typed_cache::TypedCache;
use crate::shared::domain::{positions, CacheStore, CatalogRepository, Movable};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;
use crate::{log_debug, log_error, log_info};

/// CRUD and ordering for one aggregate type.
///
/// Reads go through the cache region; every write evicts the region and its
/// dependents before returning.
pub struct CatalogService<T> {
    repository: Arc<dyn CatalogRepository<T>>,
    cache: TypedCache<T>,
    dependent_regions: Vec<&'static str>,
    kind: &'static str,
}

impl<T> CatalogService<T>
where
    T: Movable + Serialize + DeserializeOwned,
{
    pub fn new(
        repository: Arc<dyn CatalogRepository<T>>,
        cache_store: Arc<dyn CacheStore>,
        region: &'static str,
        kind: &'static str,
    ) -> Self {
        Self {
            repository,
            cache: TypedCache::new(cache_store, region),
            dependent_regions: Vec::new(),
            kind,
        }
    }

    /// Regions holding copies of this aggregate (e.g. genres inside movies)
    pub fn with_dependent_regions(mut self, regions: &[&'static str]) -> Self {
        self.dependent_regions.extend_from_slice(regions);
        self
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn region(&self) -> &'static str {
        self.cache.region()
    }

    async fn invalidate(&self) {
        self.cache.invalidate(&self.dependent_regions).await;
    }

    /// Remove everything
    pub async fn new_data(&self) -> AppResult<()> {
        self.repository.delete_all().await?;
        self.invalidate().await;
        log_info!("Cleared all {} records", self.kind);
        Ok(())
    }

    pub async fn get_all(&self) -> AppResult<Vec<T>> {
        if let Some(items) = self.cache.get_all().await {
            return Ok(items);
        }

        let items = self.repository.find_all().await?;
        self.cache.put_all(&items).await;
        Ok(items)
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<T>> {
        if let Some(item) = self.cache.get_item(id).await {
            return Ok(Some(item));
        }

        let item = self.repository.find_by_id(id).await?;
        if let Some(found) = &item {
            self.cache.put_item(id, found).await;
        }
        Ok(item)
    }

    pub async fn require(&self, id: i32) -> AppResult<T> {
        self.get(id)
            .await?
            .ok_or_else(|| AppError::not_found(self.kind, id))
    }

    pub async fn count(&self) -> AppResult<usize> {
        Ok(self.get_all().await?.len())
    }

    /// Insert at the end of the list
    pub async fn add(&self, mut item: T) -> AppResult<T> {
        let count = self.get_all().await?.len();
        item.set_id(None);
        item.set_position(Some(count as i32));
        item.reindex_children();

        let stored = self.repository.insert(&item).await?;
        self.invalidate().await;
        log_debug!("Added {} {:?} at position {}", self.kind, stored.id(), count);
        Ok(stored)
    }

    pub async fn update(&self, item: T) -> AppResult<T> {
        if item.id().is_none() {
            return Err(AppError::InvalidInput(format!(
                "{} without ID can't be updated",
                self.kind
            )));
        }

        let stored = self.repository.update(&item).await?;
        self.invalidate().await;
        Ok(stored)
    }

    pub async fn update_all(&self, items: Vec<T>) -> AppResult<()> {
        self.repository.update_all(&items).await?;
        self.invalidate().await;
        Ok(())
    }

    /// Delete and close the gap in the sibling positions
    pub async fn remove(&self, id: i32) -> AppResult<()> {
        let mut items = self.repository.find_all().await?;
        positions::remove(&mut items, id).ok_or_else(|| AppError::not_found(self.kind, id))?;

        let outcome = self.repository.delete_and_reorder(id, &items).await;
        self.invalidate().await;
        if let Err(e) = &outcome {
            log_error!("Removing {} {} failed: {}", self.kind, id, e);
        }
        outcome?;
        log_debug!("Removed {} {}", self.kind, id);
        Ok(())
    }

    /// Store a deep copy of the record at the end of the list
    pub async fn duplicate(&self, id: i32) -> AppResult<T> {
        let mut items = self.repository.find_all().await?;
        positions::duplicate(&mut items, id).ok_or_else(|| AppError::not_found(self.kind, id))?;

        let copy = items
            .pop()
            .ok_or_else(|| AppError::InternalError("duplicate produced no record".to_string()))?;
        let outcome = self.repository.insert_and_reorder(&copy, &items).await;
        self.invalidate().await;
        if let Err(e) = &outcome {
            log_error!("Duplicating {} {} failed: {}", self.kind, id, e);
        }
        outcome
    }

    pub async fn move_up(&self, id: i32) -> AppResult<bool> {
        self.move_by(id, positions::move_up).await
    }

    pub async fn move_down(&self, id: i32) -> AppResult<bool> {
        self.move_by(id, positions::move_down).await
    }

    async fn move_by(&self, id: i32, step: fn(&mut [T], i32) -> bool) -> AppResult<bool> {
        let mut items = self.repository.find_all().await?;
        if positions::find_index(&items, id).is_none() {
            return Err(AppError::not_found(self.kind, id));
        }

        if !step(&mut items, id) {
            log_debug!("{} {} is already at the boundary", self.kind, id);
            return Ok(false);
        }

        self.repository.update_all(&items).await?;
        self.invalidate().await;
        Ok(true)
    }

    /// Restore `position == index` for every record and every child collection
    pub async fn update_positions(&self) -> AppResult<()> {
        let timer = TimedOperation::new(&format!("update_positions({})", self.kind));

        let mut items = self.repository.find_all().await?;
        positions::reindex_all(&mut items);
        self.repository.update_all(&items).await?;
        self.invalidate().await;

        timer.finish_with_info(&format!("{} records", items.len()));
        Ok(())
    }

    /// First aggregate matching `predicate`, e.g. the show owning an episode
    pub async fn find_containing<P>(&self, predicate: P) -> AppResult<Option<T>>
    where
        P: Fn(&T) -> bool,
    {
        Ok(self.get_all().await?.into_iter().find(|item| predicate(item)))
    }
}
