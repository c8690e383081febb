use async_trait::async_trait;

use super::dto::GameDto;
use crate::shared::utils::Validator;
use crate::shared::validation::{DtoValidator, ValidationResult};

pub struct GameValidator;

#[async_trait]
impl DtoValidator<GameDto> for GameValidator {
    async fn validate_data(&self, dto: &GameDto, result: &mut ValidationResult) {
        Validator::require_not_blank(result, &dto.name, "Name");
        Validator::require_present(result, &dto.wiki_en, "URL to english Wikipedia page about game");
        Validator::require_present(result, &dto.wiki_cz, "URL to czech Wikipedia page about game");
        Validator::require_positive(result, dto.media_count, "Count of media");
        Validator::require_present(result, &dto.format, "Format");
        Validator::require_present(result, &dto.other_data, "Other data");
        Validator::require_present(result, &dto.note, "Note");
    }

    fn record_name(&self) -> &'static str {
        "Game"
    }
}
