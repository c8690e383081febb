// Shared catalog domain: movable records, position maintenance, storage contract
pub mod cache_store;
pub mod language;
pub mod movable;
pub mod owns;
pub mod positions;
pub mod repository;
pub mod time;

pub use cache_store::{CacheStats, CacheStore};
pub use language::Language;
pub use movable::{null_as_empty, Movable};
pub use owns::Owns;
pub use repository::CatalogRepository;
pub use time::Time;
