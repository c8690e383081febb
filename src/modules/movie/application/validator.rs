use std::sync::Arc;

use async_trait::async_trait;

use super::dto::MovieDto;
use crate::modules::genre::application::validate_genre_references;
use crate::modules::genre::domain::Genre;
use crate::modules::picture::application::validate_picture_reference;
use crate::modules::picture::domain::Picture;
use crate::shared::application::CatalogService;
use crate::shared::utils::Validator;
use crate::shared::validation::{DtoValidator, ValidationResult};

pub struct MovieValidator {
    genres: Arc<CatalogService<Genre>>,
    pictures: Arc<CatalogService<Picture>>,
}

impl MovieValidator {
    pub fn new(genres: Arc<CatalogService<Genre>>, pictures: Arc<CatalogService<Picture>>) -> Self {
        Self { genres, pictures }
    }
}

#[async_trait]
impl DtoValidator<MovieDto> for MovieValidator {
    async fn validate_data(&self, dto: &MovieDto, result: &mut ValidationResult) {
        Validator::require_not_blank(result, &dto.czech_name, "Czech name");
        Validator::require_not_blank(result, &dto.original_name, "Original name");
        Validator::require_year(result, dto.year, "Year");
        Validator::require_present(result, &dto.language, "Language");
        Validator::require_present(result, &dto.subtitles, "Subtitles");
        Validator::require_lengths(result, &dto.media, "Media");
        if dto.media.as_ref().is_some_and(|m| m.is_empty()) {
            result.add_error("Media mustn't be empty list.");
        }
        Validator::require_present(result, &dto.csfd, "URL to ČSFD page about movie");
        Validator::require_imdb_code(result, dto.imdb_code);
        Validator::require_present(result, &dto.wiki_en, "URL to english Wikipedia page about movie");
        Validator::require_present(result, &dto.wiki_cz, "URL to czech Wikipedia page about movie");
        Validator::require_present(result, &dto.note, "Note");
        validate_picture_reference(&self.pictures, dto.picture, result).await;
        validate_genre_references(&self.genres, &dto.genres, result).await;
    }

    fn record_name(&self) -> &'static str {
        "Movie"
    }
}
