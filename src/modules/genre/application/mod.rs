pub mod dto;
pub mod resolver;
pub mod validator;

pub use dto::GenreDto;
pub use resolver::GenreResolver;
pub use validator::{validate_genre_references, GenreValidator};

use crate::modules::genre::domain::Genre;
use crate::shared::application::CatalogFacade;

pub type GenreFacade = CatalogFacade<Genre, GenreDto>;
