use async_trait::async_trait;

use super::dto::{MusicDto, SongDto};
use crate::shared::utils::Validator;
use crate::shared::validation::{DtoValidator, ValidationResult};

pub struct MusicValidator;

#[async_trait]
impl DtoValidator<MusicDto> for MusicValidator {
    async fn validate_data(&self, dto: &MusicDto, result: &mut ValidationResult) {
        Validator::require_not_blank(result, &dto.name, "Name");
        Validator::require_present(result, &dto.wiki_en, "URL to english Wikipedia page about music");
        Validator::require_present(result, &dto.wiki_cz, "URL to czech Wikipedia page about music");
        Validator::require_positive(result, dto.media_count, "Count of media");
        Validator::require_present(result, &dto.note, "Note");
    }

    fn record_name(&self) -> &'static str {
        "Music"
    }
}

pub struct SongValidator;

#[async_trait]
impl DtoValidator<SongDto> for SongValidator {
    async fn validate_data(&self, dto: &SongDto, result: &mut ValidationResult) {
        Validator::require_not_blank(result, &dto.name, "Name");
        Validator::require_non_negative(result, dto.length, "Length of song");
        Validator::require_present(result, &dto.note, "Note");
    }

    fn record_name(&self) -> &'static str {
        "Song"
    }
}
