pub mod dto;
pub mod validator;

pub use dto::BookDto;
pub use validator::BookValidator;

use crate::modules::book::domain::Book;
use crate::shared::application::CatalogFacade;

pub type BookFacade = CatalogFacade<Book, BookDto>;
