use super::dto::MovieDto;
use crate::modules::movie::domain::Movie;
use crate::shared::application::CatalogFacade;
use crate::shared::domain::Time;
use crate::shared::errors::AppResult;

pub type MovieFacade = CatalogFacade<Movie, MovieDto>;

impl CatalogFacade<Movie, MovieDto> {
    /// Number of media over all movies
    pub async fn total_media_count(&self) -> AppResult<usize> {
        let movies = self.service().get_all().await?;
        Ok(movies.iter().map(Movie::media_count).sum())
    }

    /// Length of all movies
    pub async fn total_length(&self) -> AppResult<Time> {
        let movies = self.service().get_all().await?;
        Ok(movies.iter().map(Movie::total_length).sum())
    }
}
