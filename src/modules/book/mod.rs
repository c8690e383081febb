pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{BookDto, BookFacade, BookValidator};
pub use domain::Book;
pub use infrastructure::BookRepositoryImpl;
