pub mod dto;
pub mod facade;
pub mod validator;

pub use dto::MovieDto;
pub use facade::MovieFacade;
pub use validator::MovieValidator;
