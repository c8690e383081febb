// Shared kernel used by every catalog module

pub mod application; // Generic service and facades
pub mod config; // Environment configuration
pub mod domain; // Movable records, positions, repository and cache contracts
pub mod errors; // Shared error types
pub mod infrastructure; // Database, cache and in-memory storage
pub mod utils; // Logging and field validation helpers
pub mod validation; // Validation results and validator contract

pub use config::CatalogConfig;
pub use errors::{AppError, AppResult};
pub use infrastructure::{Database, DatabaseState};
