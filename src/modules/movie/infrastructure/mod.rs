pub mod models;
pub mod repository;

pub use repository::MovieRepositoryImpl;

crate::impl_assign_ids!(crate::modules::movie::domain::Movie);
