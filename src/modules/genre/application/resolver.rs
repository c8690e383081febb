use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::genre::domain::{Genre, GenreReferences};
use crate::shared::application::{CatalogService, ReferenceResolver};
use crate::shared::errors::{AppError, AppResult};

/// Swaps the genres a caller sent for the stored genre records; only the IDs
/// of incoming references are trusted.
pub struct GenreResolver {
    genres: Arc<CatalogService<Genre>>,
}

impl GenreResolver {
    pub fn new(genres: Arc<CatalogService<Genre>>) -> Self {
        Self { genres }
    }
}

#[async_trait]
impl<E> ReferenceResolver<E> for GenreResolver
where
    E: GenreReferences + Send,
{
    async fn resolve(&self, record: &mut E) -> AppResult<()> {
        let ids: Vec<Option<i32>> = record.genres_mut().iter().map(|g| g.id).collect();

        let mut stored = Vec::with_capacity(ids.len());
        for id in ids {
            let id = id.ok_or_else(|| {
                AppError::ValidationError("Genre ID mustn't be null.".to_string())
            })?;
            stored.push(self.genres.require(id).await?);
        }

        *record.genres_mut() = stored;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infrastructure::{InMemoryRepository, NoopCache};

    struct Tagged {
        genres: Vec<Genre>,
    }

    impl GenreReferences for Tagged {
        fn genres_mut(&mut self) -> &mut Vec<Genre> {
            &mut self.genres
        }
    }

    fn genre_service() -> Arc<CatalogService<Genre>> {
        Arc::new(CatalogService::new(
            Arc::new(InMemoryRepository::new("Genre")),
            Arc::new(NoopCache),
            "genres",
            "Genre",
        ))
    }

    fn reference(id: Option<i32>, name: &str) -> Genre {
        Genre {
            id,
            name: name.to_string(),
            position: None,
        }
    }

    #[tokio::test]
    async fn caller_names_are_replaced_by_stored_ones() {
        let genres = genre_service();
        let drama = genres.add(Genre::new("Drama")).await.unwrap();
        let comedy = genres.add(Genre::new("Comedy")).await.unwrap();

        let mut record = Tagged {
            genres: vec![reference(comedy.id, "Bogus"), reference(drama.id, "")],
        };
        GenreResolver::new(genres).resolve(&mut record).await.unwrap();

        assert_eq!(record.genres, vec![comedy, drama]);
        assert_eq!(Genre::join_names(&record.genres), "Comedy, Drama");
    }

    #[tokio::test]
    async fn unknown_genre_is_not_found() {
        let mut record = Tagged {
            genres: vec![reference(Some(42), "Ghost")],
        };
        let err = GenreResolver::new(genre_service())
            .resolve(&mut record)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
    }
}
