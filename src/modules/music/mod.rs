pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{MusicDto, MusicFacade, MusicValidator, SongDto, SongFacade};
pub use domain::{Music, Song};
pub use infrastructure::MusicRepositoryImpl;
