use std::sync::Arc;

use async_trait::async_trait;

use super::dto::{EpisodeDto, SeasonDto, ShowDto};
use crate::modules::genre::application::validate_genre_references;
use crate::modules::genre::domain::Genre;
use crate::modules::picture::application::validate_picture_reference;
use crate::modules::picture::domain::Picture;
use crate::shared::application::CatalogService;
use crate::shared::utils::Validator;
use crate::shared::validation::{DtoValidator, ValidationResult};

pub struct ShowValidator {
    genres: Arc<CatalogService<Genre>>,
    pictures: Arc<CatalogService<Picture>>,
}

impl ShowValidator {
    pub fn new(genres: Arc<CatalogService<Genre>>, pictures: Arc<CatalogService<Picture>>) -> Self {
        Self { genres, pictures }
    }
}

#[async_trait]
impl DtoValidator<ShowDto> for ShowValidator {
    async fn validate_data(&self, dto: &ShowDto, result: &mut ValidationResult) {
        Validator::require_not_blank(result, &dto.czech_name, "Czech name");
        Validator::require_not_blank(result, &dto.original_name, "Original name");
        Validator::require_present(result, &dto.csfd, "URL to ČSFD page about show");
        Validator::require_imdb_code(result, dto.imdb_code);
        Validator::require_present(result, &dto.wiki_en, "URL to english Wikipedia page about show");
        Validator::require_present(result, &dto.wiki_cz, "URL to czech Wikipedia page about show");
        Validator::require_present(result, &dto.note, "Note");
        validate_picture_reference(&self.pictures, dto.picture, result).await;
        validate_genre_references(&self.genres, &dto.genres, result).await;
    }

    fn record_name(&self) -> &'static str {
        "Show"
    }
}

pub struct SeasonValidator;

#[async_trait]
impl DtoValidator<SeasonDto> for SeasonValidator {
    async fn validate_data(&self, dto: &SeasonDto, result: &mut ValidationResult) {
        Validator::require_positive(result, dto.number, "Number of season");
        Validator::require_year(result, dto.starting_year, "Starting year");
        Validator::require_year(result, dto.ending_year, "Ending year");
        Validator::require_year_order(result, dto.starting_year, dto.ending_year);
        Validator::require_present(result, &dto.language, "Language");
        Validator::require_present(result, &dto.subtitles, "Subtitles");
        Validator::require_present(result, &dto.note, "Note");
    }

    fn record_name(&self) -> &'static str {
        "Season"
    }
}

pub struct EpisodeValidator;

#[async_trait]
impl DtoValidator<EpisodeDto> for EpisodeValidator {
    async fn validate_data(&self, dto: &EpisodeDto, result: &mut ValidationResult) {
        Validator::require_positive(result, dto.number, "Number of episode");
        Validator::require_not_blank(result, &dto.name, "Name");
        Validator::require_non_negative(result, dto.length, "Length of episode");
        Validator::require_present(result, &dto.note, "Note");
    }

    fn record_name(&self) -> &'static str {
        "Episode"
    }
}
