pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{
    EpisodeDto, EpisodeFacade, SeasonDto, SeasonFacade, ShowDto, ShowFacade, ShowValidator,
};
pub use domain::{Episode, Season, Show};
pub use infrastructure::ShowRepositoryImpl;
