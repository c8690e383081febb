use std::sync::Arc;

use async_trait::async_trait;

use super::dto::PictureDto;
use crate::modules::picture::domain::Picture;
use crate::shared::application::CatalogService;
use crate::shared::validation::{DtoValidator, ValidationResult};

pub struct PictureValidator;

#[async_trait]
impl DtoValidator<PictureDto> for PictureValidator {
    async fn validate_data(&self, dto: &PictureDto, result: &mut ValidationResult) {
        match &dto.content {
            None => result.add_error("Content mustn't be null."),
            Some(content) if content.is_empty() => result.add_error("Content mustn't be empty."),
            Some(_) => {}
        }
    }

    fn record_name(&self) -> &'static str {
        "Picture"
    }
}

/// An optional picture reference must point at a stored picture
pub async fn validate_picture_reference(
    pictures: &Arc<CatalogService<Picture>>,
    picture: Option<i32>,
    result: &mut ValidationResult,
) {
    let Some(id) = picture else {
        return;
    };

    match pictures.get(id).await {
        Ok(Some(_)) => {}
        Ok(None) => result.add_error("Picture doesn't exist."),
        Err(e) => result.add_error(format!("Picture {} can't be loaded: {}", id, e)),
    }
}
