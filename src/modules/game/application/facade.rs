use super::dto::GameDto;
use crate::modules::game::domain::Game;
use crate::shared::application::CatalogFacade;
use crate::shared::errors::AppResult;

pub type GameFacade = CatalogFacade<Game, GameDto>;

impl CatalogFacade<Game, GameDto> {
    pub async fn total_media_count(&self) -> AppResult<i32> {
        let games = self.service().get_all().await?;
        Ok(games.iter().map(|g| g.media_count).sum())
    }
}
