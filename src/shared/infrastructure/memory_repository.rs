use std::sync::atomic::{AtomicI32, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::shared::domain::{positions, CatalogRepository, Movable};
use crate::shared::errors::{AppError, AppResult};

/// Gives identities to a record and its unsaved children
pub trait AssignIds {
    fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i32);
}

/// Implements [`AssignIds`] for records without children
#[macro_export]
macro_rules! impl_assign_ids {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::shared::infrastructure::AssignIds for $ty {
                fn assign_ids(&mut self, next_id: &mut dyn FnMut() -> i32) {
                    if self.id.is_none() {
                        self.id = Some(next_id());
                    }
                }
            }
        )+
    };
}

/// Repository keeping aggregates in process memory.
///
/// Used when no database is configured and by tests.
pub struct InMemoryRepository<T> {
    items: RwLock<Vec<T>>,
    sequence: AtomicI32,
    kind: &'static str,
}

impl<T> InMemoryRepository<T> {
    pub fn new(kind: &'static str) -> Self {
        Self {
            items: RwLock::new(Vec::new()),
            sequence: AtomicI32::new(1),
            kind,
        }
    }

    fn next_id(&self) -> i32 {
        self.sequence.fetch_add(1, Ordering::SeqCst)
    }
}

impl<T> InMemoryRepository<T>
where
    T: Movable + AssignIds,
{
    fn push(&self, items: &mut Vec<T>, item: &T) -> T {
        let mut stored = item.clone();
        stored.set_id(None);
        stored.assign_ids(&mut || self.next_id());
        items.push(stored.clone());
        stored
    }

    fn replace(&self, items: &mut [T], item: &T) -> AppResult<T> {
        let id = item
            .id()
            .ok_or_else(|| AppError::InvalidInput(format!("{} without ID can't be updated", self.kind)))?;

        let slot = items
            .iter_mut()
            .find(|existing| existing.id() == Some(id))
            .ok_or_else(|| AppError::not_found(self.kind, id))?;
        let mut stored = item.clone();
        stored.assign_ids(&mut || self.next_id());
        *slot = stored.clone();
        Ok(stored)
    }

    fn take(&self, items: &mut Vec<T>, id: i32) -> AppResult<()> {
        let before = items.len();
        items.retain(|item| item.id() != Some(id));

        if items.len() == before {
            return Err(AppError::not_found(self.kind, id));
        }
        Ok(())
    }

    fn replace_all(&self, items: &mut [T], updates: &[T]) -> AppResult<()> {
        for item in updates {
            self.replace(items, item)?;
        }
        Ok(())
    }
}

/// Multi-record writes work on a copy that replaces the stored list only
/// when every step succeeded.
#[async_trait]
impl<T> CatalogRepository<T> for InMemoryRepository<T>
where
    T: Movable + AssignIds,
{
    async fn find_all(&self) -> AppResult<Vec<T>> {
        let mut items = self.items.read().await.clone();
        positions::sort(&mut items);
        Ok(items)
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<T>> {
        let items = self.items.read().await;
        Ok(items.iter().find(|item| item.id() == Some(id)).cloned())
    }

    async fn insert(&self, item: &T) -> AppResult<T> {
        let mut items = self.items.write().await;
        Ok(self.push(&mut items, item))
    }

    async fn update(&self, item: &T) -> AppResult<T> {
        let mut items = self.items.write().await;
        self.replace(&mut items, item)
    }

    async fn update_all(&self, updates: &[T]) -> AppResult<()> {
        let mut items = self.items.write().await;
        let mut working = items.clone();
        self.replace_all(&mut working, updates)?;
        *items = working;
        Ok(())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let mut items = self.items.write().await;
        self.take(&mut items, id)
    }

    async fn delete_all(&self) -> AppResult<()> {
        self.items.write().await.clear();
        Ok(())
    }

    async fn delete_and_reorder(&self, id: i32, siblings: &[T]) -> AppResult<()> {
        let mut items = self.items.write().await;
        let mut working = items.clone();
        self.take(&mut working, id)?;
        self.replace_all(&mut working, siblings)?;
        *items = working;
        Ok(())
    }

    async fn insert_and_reorder(&self, item: &T, siblings: &[T]) -> AppResult<T> {
        let mut items = self.items.write().await;
        let mut working = items.clone();
        self.replace_all(&mut working, siblings)?;
        let stored = self.push(&mut working, item);
        *items = working;
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Note {
        id: Option<i32>,
        text: String,
        position: Option<i32>,
    }

    crate::impl_movable!(Note);
    crate::impl_assign_ids!(Note);

    fn note(text: &str, position: i32) -> Note {
        Note {
            id: None,
            text: text.to_string(),
            position: Some(position),
        }
    }

    #[tokio::test]
    async fn insert_assigns_fresh_ids() {
        let repo = InMemoryRepository::new("Note");
        let first = repo.insert(&note("a", 0)).await.unwrap();
        let second = repo.insert(&note("b", 1)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn find_all_returns_canonical_order() {
        let repo = InMemoryRepository::new("Note");
        repo.insert(&note("last", 2)).await.unwrap();
        repo.insert(&note("first", 0)).await.unwrap();
        repo.insert(&note("middle", 1)).await.unwrap();

        let texts: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert_eq!(texts, vec!["first", "middle", "last"]);
    }

    #[tokio::test]
    async fn update_and_delete_unknown_ids_fail() {
        let repo: InMemoryRepository<Note> = InMemoryRepository::new("Note");
        let mut ghost = note("ghost", 0);
        ghost.id = Some(42);

        assert!(repo.update(&ghost).await.unwrap_err().is_not_found());
        assert!(repo.delete(42).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn delete_all_empties_store() {
        let repo = InMemoryRepository::new("Note");
        repo.insert(&note("a", 0)).await.unwrap();
        repo.delete_all().await.unwrap();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn failed_delete_and_reorder_leaves_store_untouched() {
        let repo = InMemoryRepository::new("Note");
        let a = repo.insert(&note("a", 0)).await.unwrap();
        let mut b = repo.insert(&note("b", 1)).await.unwrap();
        let before = repo.find_all().await.unwrap();

        let mut ghost = note("ghost", 1);
        ghost.id = Some(42);
        b.position = Some(0);
        let err = repo
            .delete_and_reorder(a.id.unwrap(), &[b, ghost])
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(repo.find_all().await.unwrap(), before);
    }

    #[tokio::test]
    async fn insert_and_reorder_applies_both_steps() {
        let repo = InMemoryRepository::new("Note");
        let mut a = repo.insert(&note("a", 0)).await.unwrap();
        a.position = Some(1);

        let stored = repo.insert_and_reorder(&note("new", 0), &[a]).await.unwrap();

        assert_eq!(stored.id, Some(2));
        let texts: Vec<String> = repo
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.text)
            .collect();
        assert_eq!(texts, vec!["new", "a"]);
    }
}
