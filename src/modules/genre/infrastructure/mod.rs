pub mod models;
pub mod repository;

pub use repository::{genres_by_id, resolve_genres, GenreRepositoryImpl};

crate::impl_assign_ids!(crate::modules::genre::domain::Genre);
