pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{MovieDto, MovieFacade, MovieValidator};
pub use domain::Movie;
pub use infrastructure::MovieRepositoryImpl;
