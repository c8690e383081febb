/// Shared infrastructure concerns
///
/// This module contains infrastructure implementations that are shared across
/// multiple bounded contexts (modules).
pub mod cache_adapter;
pub mod database;
pub mod database_state;
pub mod memory_repository;

// Re-exports for convenience
pub use cache_adapter::{CacheAdapter, NoopCache};
pub use database::{Database, DbConnection, DbPool};
pub use database_state::DatabaseState;
pub use memory_repository::{AssignIds, InMemoryRepository};
