use async_trait::async_trait;

use super::dto::BookDto;
use crate::shared::utils::Validator;
use crate::shared::validation::{DtoValidator, ValidationResult};

pub struct BookValidator;

#[async_trait]
impl DtoValidator<BookDto> for BookValidator {
    async fn validate_data(&self, dto: &BookDto, result: &mut ValidationResult) {
        Validator::require_not_blank(result, &dto.czech_name, "Czech name");
        Validator::require_not_blank(result, &dto.original_name, "Original name");
        match &dto.languages {
            None => result.add_error("Languages mustn't be null."),
            Some(languages) if languages.is_empty() => {
                result.add_error("Languages mustn't be empty list.")
            }
            Some(_) => {}
        }
        Validator::require_present(result, &dto.note, "Note");
    }

    fn record_name(&self) -> &'static str {
        "Book"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::Language;

    #[tokio::test]
    async fn collects_every_problem() {
        let dto = BookDto {
            czech_name: Some(" ".to_string()),
            languages: Some(Vec::new()),
            ..Default::default()
        };
        let mut result = ValidationResult::valid();
        BookValidator.validate_data(&dto, &mut result).await;

        assert_eq!(
            result.errors,
            vec![
                "Czech name mustn't be empty string.",
                "Original name mustn't be null.",
                "Languages mustn't be empty list.",
                "Note mustn't be null.",
            ]
        );
    }

    #[tokio::test]
    async fn complete_book_is_valid() {
        let dto = BookDto {
            czech_name: Some("Duna".to_string()),
            original_name: Some("Dune".to_string()),
            languages: Some(vec![Language::Cz, Language::En]),
            note: Some(String::new()),
            ..Default::default()
        };
        let mut result = ValidationResult::valid();
        BookValidator.validate_data(&dto, &mut result).await;
        assert!(result.is_valid());
    }
}
