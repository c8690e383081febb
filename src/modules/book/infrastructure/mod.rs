pub mod models;
pub mod repository;

pub use repository::BookRepositoryImpl;

crate::impl_assign_ids!(crate::modules::book::domain::Book);
