pub mod app;
pub mod modules;
pub mod schema;
pub mod shared;

pub use app::{spawn_bootstrap, CatalogContext};
pub use shared::{AppError, AppResult, CatalogConfig};
