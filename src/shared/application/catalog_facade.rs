use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::catalog_service::CatalogService;
use super::converter::{TransferRecord, UpdateFrom};
use super::resolver::ReferenceResolver;
use crate::shared::domain::Movable;
use crate::shared::errors::AppResult;
use crate::shared::validation::{DtoValidator, ValidationMode, ValidationResult};

/// Entry point for one top-level aggregate: validates transfer records,
/// converts them and delegates to the catalog service.
pub struct CatalogFacade<E, D> {
    service: Arc<CatalogService<E>>,
    validator: Arc<dyn DtoValidator<D>>,
    resolver: Option<Arc<dyn ReferenceResolver<E>>>,
}

impl<E, D> Clone for CatalogFacade<E, D> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            validator: Arc::clone(&self.validator),
            resolver: self.resolver.clone(),
        }
    }
}

impl<E, D> CatalogFacade<E, D>
where
    E: Movable + Serialize + DeserializeOwned + From<D> + UpdateFrom<D>,
    D: TransferRecord + From<E>,
{
    pub fn new(service: Arc<CatalogService<E>>, validator: Arc<dyn DtoValidator<D>>) -> Self {
        Self {
            service,
            validator,
            resolver: None,
        }
    }

    /// Resolve references (e.g. genres) against stored records before saving
    pub fn with_resolver(mut self, resolver: Arc<dyn ReferenceResolver<E>>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn service(&self) -> &Arc<CatalogService<E>> {
        &self.service
    }

    pub async fn new_data(&self) -> AppResult<()> {
        self.service.new_data().await
    }

    pub async fn get_all(&self) -> AppResult<Vec<D>> {
        Ok(self
            .service
            .get_all()
            .await?
            .into_iter()
            .map(D::from)
            .collect())
    }

    pub async fn get(&self, id: i32) -> AppResult<Option<D>> {
        Ok(self.service.get(id).await?.map(D::from))
    }

    pub async fn add(&self, dto: D) -> AppResult<D> {
        self.validate(&dto, ValidationMode::New).await?;
        let mut entity = E::from(dto);
        self.resolve(&mut entity).await?;
        let stored = self.service.add(entity).await?;
        Ok(D::from(stored))
    }

    pub async fn update(&self, dto: D) -> AppResult<D> {
        self.validate(&dto, ValidationMode::Existing).await?;
        // validated above: id is present
        let id = dto.id().unwrap_or_default();
        let mut entity = self.service.require(id).await?;
        entity.apply(dto);
        self.resolve(&mut entity).await?;
        let stored = self.service.update(entity).await?;
        Ok(D::from(stored))
    }

    pub async fn remove(&self, id: i32) -> AppResult<()> {
        self.service.remove(id).await
    }

    pub async fn duplicate(&self, id: i32) -> AppResult<D> {
        Ok(D::from(self.service.duplicate(id).await?))
    }

    /// No-op for the first record
    pub async fn move_up(&self, id: i32) -> AppResult<()> {
        self.service.move_up(id).await.map(|_| ())
    }

    /// No-op for the last record
    pub async fn move_down(&self, id: i32) -> AppResult<()> {
        self.service.move_down(id).await.map(|_| ())
    }

    pub async fn update_positions(&self) -> AppResult<()> {
        self.service.update_positions().await
    }

    async fn validate(&self, dto: &D, mode: ValidationMode) -> AppResult<()> {
        validate_record(self.validator.as_ref(), dto, mode).await
    }

    async fn resolve(&self, entity: &mut E) -> AppResult<()> {
        match &self.resolver {
            Some(resolver) => resolver.resolve(entity).await,
            None => Ok(()),
        }
    }
}

/// Identity rules for `mode`, then the record's own field checks
pub(crate) async fn validate_record<D: TransferRecord>(
    validator: &dyn DtoValidator<D>,
    dto: &D,
    mode: ValidationMode,
) -> AppResult<()> {
    let mut result = ValidationResult::valid();
    match (mode, dto.id()) {
        (ValidationMode::New, Some(_)) => result.add_error("ID must be null."),
        (ValidationMode::Existing, None) => result.add_error("ID mustn't be null."),
        _ => {}
    }

    validator.validate_data(dto, &mut result).await;

    if !result.is_valid() {
        log::debug!(
            "{} failed validation: {:?}",
            validator.record_name(),
            result.errors
        );
    }
    result.into_result()
}
