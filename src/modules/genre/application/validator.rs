use std::sync::Arc;

use async_trait::async_trait;

use super::dto::GenreDto;
use crate::modules::genre::domain::Genre;
use crate::shared::application::CatalogService;
use crate::shared::utils::Validator;
use crate::shared::validation::{DtoValidator, ValidationResult};

pub struct GenreValidator;

#[async_trait]
impl DtoValidator<GenreDto> for GenreValidator {
    async fn validate_data(&self, dto: &GenreDto, result: &mut ValidationResult) {
        Validator::require_not_blank(result, &dto.name, "Name");
    }

    fn record_name(&self) -> &'static str {
        "Genre"
    }
}

/// Checks that every referenced genre carries an ID of a stored genre
pub async fn validate_genre_references(
    genres: &Arc<CatalogService<Genre>>,
    references: &Option<Vec<GenreDto>>,
    result: &mut ValidationResult,
) {
    let Some(references) = references else {
        result.add_error("Genres mustn't be null.");
        return;
    };

    for reference in references {
        match reference.id {
            None => result.add_error("Genre ID mustn't be null."),
            Some(id) => match genres.get(id).await {
                Ok(Some(_)) => {}
                Ok(None) => result.add_error(format!("Genre {} doesn't exist.", id)),
                Err(e) => result.add_error(format!("Genre {} can't be loaded: {}", id, e)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::infrastructure::{InMemoryRepository, NoopCache};

    fn genre_service() -> Arc<CatalogService<Genre>> {
        Arc::new(CatalogService::new(
            Arc::new(InMemoryRepository::new("Genre")),
            Arc::new(NoopCache),
            "genres",
            "Genre",
        ))
    }

    #[tokio::test]
    async fn blank_name_is_rejected() {
        let mut result = ValidationResult::valid();
        let dto = GenreDto {
            name: Some(String::new()),
            ..Default::default()
        };
        GenreValidator.validate_data(&dto, &mut result).await;
        assert_eq!(result.errors, vec!["Name mustn't be empty string."]);
    }

    #[tokio::test]
    async fn unknown_and_unsaved_references_are_reported() {
        let genres = genre_service();
        let stored = genres.add(Genre::new("Drama")).await.unwrap();

        let references = Some(vec![
            GenreDto::from(stored),
            GenreDto {
                id: Some(99),
                ..Default::default()
            },
            GenreDto::default(),
        ]);
        let mut result = ValidationResult::valid();
        validate_genre_references(&genres, &references, &mut result).await;

        assert_eq!(
            result.errors,
            vec!["Genre 99 doesn't exist.", "Genre ID mustn't be null."]
        );
    }
}
