use async_trait::async_trait;

use crate::shared::errors::AppResult;

/// Replaces references carried by an incoming record with the stored records
/// they point to, so derived values never depend on caller-supplied copies.
#[async_trait]
pub trait ReferenceResolver<E>: Send + Sync {
    async fn resolve(&self, record: &mut E) -> AppResult<()>;
}
