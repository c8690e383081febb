/// Catalog builders and small assertions shared by the integration tests
use catalog::shared::infrastructure::Database;
use catalog::{CatalogConfig, CatalogContext};
use std::sync::Arc;

/// Fresh in-memory catalog with caching enabled
pub fn memory_catalog() -> CatalogContext {
    CatalogContext::in_memory(&CatalogConfig::default())
}

/// Fresh in-memory catalog without a cache
pub fn uncached_catalog() -> CatalogContext {
    CatalogContext::in_memory(&CatalogConfig::default().without_cache())
}

pub fn postgres_catalog(db: Arc<Database>) -> CatalogContext {
    CatalogContext::with_database(db, &CatalogConfig::default())
}

/// `(name, position)` pairs, the usual shape asserted on ordered lists
pub fn ordered<T>(items: &[T], name: impl Fn(&T) -> Option<String>, position: impl Fn(&T) -> Option<i32>) -> Vec<(String, i32)> {
    items
        .iter()
        .map(|item| (name(item).unwrap_or_default(), position(item).unwrap_or(-1)))
        .collect()
}

pub fn validation_message(error: catalog::AppError) -> String {
    match error {
        catalog::AppError::ValidationError(msg) => msg,
        other => panic!("expected validation error, got {:?}", other),
    }
}
