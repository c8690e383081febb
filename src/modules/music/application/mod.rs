pub mod dto;
pub mod facade;
pub mod validator;

pub use dto::{MusicDto, SongDto};
pub use facade::{MusicFacade, SongFacade};
pub use validator::{MusicValidator, SongValidator};
