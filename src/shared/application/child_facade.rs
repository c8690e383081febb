use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::catalog_facade::validate_record;
use super::catalog_service::CatalogService;
use super::converter::{TransferRecord, UpdateFrom};
use crate::shared::domain::{positions, Movable, Owns};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::validation::{DtoValidator, ValidationMode};

/// Operations on records nested inside an aggregate root `R`.
///
/// Every change loads the owning root, edits the child list through the
/// position maintainer and stores the root again.
pub struct ChildFacade<R, C, D> {
    service: Arc<CatalogService<R>>,
    validator: Arc<dyn DtoValidator<D>>,
    kind: &'static str,
    parent_kind: &'static str,
    _child: std::marker::PhantomData<fn() -> C>,
}

impl<R, C, D> Clone for ChildFacade<R, C, D> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            validator: Arc::clone(&self.validator),
            kind: self.kind,
            parent_kind: self.parent_kind,
            _child: std::marker::PhantomData,
        }
    }
}

impl<R, C, D> ChildFacade<R, C, D>
where
    R: Movable + Serialize + DeserializeOwned + Owns<C>,
    C: Movable + From<D> + UpdateFrom<D>,
    D: TransferRecord + From<C>,
{
    pub fn new(
        service: Arc<CatalogService<R>>,
        validator: Arc<dyn DtoValidator<D>>,
        kind: &'static str,
        parent_kind: &'static str,
    ) -> Self {
        Self {
            service,
            validator,
            kind,
            parent_kind,
            _child: std::marker::PhantomData,
        }
    }

    pub fn service(&self) -> &Arc<CatalogService<R>> {
        &self.service
    }

    async fn root_of_child(&self, id: i32) -> AppResult<R> {
        self.service
            .find_containing(|root| root.child(id).is_some())
            .await?
            .ok_or_else(|| AppError::not_found(self.kind, id))
    }

    async fn root_of_parent(&self, parent_id: i32) -> AppResult<R> {
        self.service
            .find_containing(|root| root.children_of(parent_id).is_some())
            .await?
            .ok_or_else(|| AppError::not_found(self.parent_kind, parent_id))
    }

    /// Run `edit` on the sibling list of child `id` and store the root
    async fn edit_siblings<F, T>(&self, id: i32, edit: F) -> AppResult<(R, T)>
    where
        F: FnOnce(&mut Vec<C>) -> T,
    {
        let mut root = self.root_of_child(id).await?;
        let siblings = root
            .siblings_of_mut(id)
            .ok_or_else(|| AppError::not_found(self.kind, id))?;
        let outcome = edit(siblings);
        let stored = self.service.update(root).await?;
        Ok((stored, outcome))
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<D>> {
        let root = self
            .service
            .find_containing(|root| root.child(id).is_some())
            .await?;
        Ok(root.and_then(|r| r.child(id).cloned()).map(D::from))
    }

    pub async fn find_by_parent(&self, parent_id: i32) -> AppResult<Vec<D>> {
        let root = self.root_of_parent(parent_id).await?;
        let children = root.children_of(parent_id).cloned().unwrap_or_default();
        Ok(children.into_iter().map(D::from).collect())
    }

    /// Add a child at the end of the parent's list
    pub async fn add(&self, parent_id: i32, dto: D) -> AppResult<D> {
        validate_record(self.validator.as_ref(), &dto, ValidationMode::New).await?;

        let mut root = self.root_of_parent(parent_id).await?;
        let children = root
            .children_of_mut(parent_id)
            .ok_or_else(|| AppError::not_found(self.parent_kind, parent_id))?;
        positions::append(children, C::from(dto));

        let stored = self.service.update(root).await?;
        self.last_child_of(&stored, parent_id)
    }

    pub async fn update(&self, dto: D) -> AppResult<D> {
        validate_record(self.validator.as_ref(), &dto, ValidationMode::Existing).await?;
        // validated above: id is present
        let id = dto.id().unwrap_or_default();

        let (stored, _) = self
            .edit_siblings(id, |siblings| {
                if let Some(child) = siblings.iter_mut().find(|c| c.id() == Some(id)) {
                    child.apply(dto);
                }
            })
            .await?;

        stored
            .child(id)
            .cloned()
            .map(D::from)
            .ok_or_else(|| AppError::not_found(self.kind, id))
    }

    pub async fn remove(&self, id: i32) -> AppResult<()> {
        self.edit_siblings(id, |siblings| positions::remove(siblings, id))
            .await?;
        Ok(())
    }

    /// Copy the child (with its own children) to the end of its list
    pub async fn duplicate(&self, id: i32) -> AppResult<D> {
        let mut root = self.root_of_child(id).await?;
        let siblings = root
            .siblings_of_mut(id)
            .ok_or_else(|| AppError::not_found(self.kind, id))?;
        let index = positions::duplicate(siblings, id)
            .ok_or_else(|| AppError::not_found(self.kind, id))?;

        let mut stored = self.service.update(root).await?;
        let siblings = stored
            .siblings_of_mut(id)
            .ok_or_else(|| AppError::not_found(self.kind, id))?;
        siblings
            .get(index)
            .cloned()
            .map(D::from)
            .ok_or_else(|| AppError::InternalError(format!("{} copy was not stored", self.kind)))
    }

    pub async fn move_up(&self, id: i32) -> AppResult<()> {
        self.move_by(id, positions::move_up).await
    }

    pub async fn move_down(&self, id: i32) -> AppResult<()> {
        self.move_by(id, positions::move_down).await
    }

    async fn move_by(&self, id: i32, step: fn(&mut [C], i32) -> bool) -> AppResult<()> {
        let mut root = self.root_of_child(id).await?;
        let siblings = root
            .siblings_of_mut(id)
            .ok_or_else(|| AppError::not_found(self.kind, id))?;

        if step(siblings, id) {
            self.service.update(root).await?;
        }
        Ok(())
    }

    fn last_child_of(&self, root: &R, parent_id: i32) -> AppResult<D> {
        root.children_of(parent_id)
            .and_then(|children| children.last())
            .cloned()
            .map(D::from)
            .ok_or_else(|| AppError::InternalError(format!("{} was not stored", self.kind)))
    }
}
