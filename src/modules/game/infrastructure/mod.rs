pub mod models;
pub mod repository;

pub use repository::GameRepositoryImpl;

crate::impl_assign_ids!(crate::modules::game::domain::Game);
