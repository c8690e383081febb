pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{GameDto, GameFacade, GameValidator};
pub use domain::{Format, Game};
pub use infrastructure::GameRepositoryImpl;
