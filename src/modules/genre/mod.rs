pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{GenreDto, GenreFacade, GenreResolver, GenreValidator};
pub use domain::Genre;
pub use infrastructure::GenreRepositoryImpl;
