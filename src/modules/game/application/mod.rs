pub mod dto;
pub mod facade;
pub mod validator;

pub use dto::GameDto;
pub use facade::GameFacade;
pub use validator::GameValidator;
