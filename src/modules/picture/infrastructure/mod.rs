pub mod models;
pub mod repository;

pub use repository::PictureRepositoryImpl;

crate::impl_assign_ids!(crate::modules::picture::domain::Picture);
