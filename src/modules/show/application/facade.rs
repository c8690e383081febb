use super::dto::{EpisodeDto, SeasonDto, ShowDto};
use crate::modules::show::domain::{Episode, Season, Show};
use crate::shared::application::{CatalogFacade, ChildFacade};
use crate::shared::domain::{Owns, Time};
use crate::shared::errors::{AppError, AppResult};

pub type ShowFacade = CatalogFacade<Show, ShowDto>;
pub type SeasonFacade = ChildFacade<Show, Season, SeasonDto>;
pub type EpisodeFacade = ChildFacade<Show, Episode, EpisodeDto>;

impl CatalogFacade<Show, ShowDto> {
    pub async fn seasons_count(&self) -> AppResult<usize> {
        let shows = self.service().get_all().await?;
        Ok(shows.iter().map(Show::seasons_count).sum())
    }

    pub async fn episodes_count(&self) -> AppResult<usize> {
        let shows = self.service().get_all().await?;
        Ok(shows.iter().map(Show::episodes_count).sum())
    }

    pub async fn total_length(&self) -> AppResult<Time> {
        let shows = self.service().get_all().await?;
        Ok(shows.iter().map(Show::total_length).sum())
    }

    pub async fn genre_names(&self, id: i32) -> AppResult<String> {
        Ok(self.service().require(id).await?.genre_names())
    }
}

impl ChildFacade<Show, Season, SeasonDto> {
    async fn stored_season(&self, id: i32) -> AppResult<Season> {
        self.service()
            .find_containing(|show| show.season(id).is_some())
            .await?
            .and_then(|show| Owns::<Season>::child(&show, id).cloned())
            .ok_or_else(|| AppError::not_found("Season", id))
    }

    pub async fn episodes_count(&self, id: i32) -> AppResult<usize> {
        Ok(self.stored_season(id).await?.episodes_count())
    }

    pub async fn total_length(&self, id: i32) -> AppResult<Time> {
        Ok(self.stored_season(id).await?.total_length())
    }
}
