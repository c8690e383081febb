/// Shared application layer patterns
///
/// Generic service and facades reused by every catalog module.
pub mod catalog_facade;
pub mod catalog_service;
pub mod child_facade;
pub mod converter;
pub mod resolver;
pub mod typed_cache;

pub use catalog_facade::CatalogFacade;
pub use catalog_service::CatalogService;
pub use child_facade::ChildFacade;
pub use converter::{TransferRecord, UpdateFrom};
pub use resolver::ReferenceResolver;
pub use typed_cache::TypedCache;
