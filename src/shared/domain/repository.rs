use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Storage for one aggregate type.
///
/// Aggregates are stored whole: inserting or updating a show also writes its
/// seasons and episodes.
#[async_trait]
pub trait CatalogRepository<T>: Send + Sync {
    /// All aggregates in canonical order, children ordered the same way
    async fn find_all(&self) -> AppResult<Vec<T>>;

    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>>;

    /// Persist a new aggregate, assigning identities to it and its children
    async fn insert(&self, item: &T) -> AppResult<T>;

    /// Replace a stored aggregate. Children without identity are inserted,
    /// children no longer present are deleted.
    async fn update(&self, item: &T) -> AppResult<T>;

    /// Replace several aggregates at once
    async fn update_all(&self, items: &[T]) -> AppResult<()>;

    async fn delete(&self, id: i32) -> AppResult<()>;

    async fn delete_all(&self) -> AppResult<()>;

    /// Delete `id` and store its reindexed `siblings`; both happen or neither
    async fn delete_and_reorder(&self, id: i32, siblings: &[T]) -> AppResult<()>;

    /// Store reindexed `siblings` and insert `item`; both happen or neither
    async fn insert_and_reorder(&self, item: &T, siblings: &[T]) -> AppResult<T>;
}
