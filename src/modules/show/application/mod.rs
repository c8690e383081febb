pub mod dto;
pub mod facade;
pub mod validator;

pub use dto::{EpisodeDto, SeasonDto, ShowDto};
pub use facade::{EpisodeFacade, SeasonFacade, ShowFacade};
pub use validator::{EpisodeValidator, SeasonValidator, ShowValidator};
