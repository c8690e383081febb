use serde::{Deserialize, Serialize};

use crate::modules::book::domain::Book;
use crate::shared::application::UpdateFrom;
use crate::shared::domain::Language;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDto {
    pub id: Option<i32>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub languages: Option<Vec<Language>>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

crate::impl_transfer_record!(BookDto);

impl From<Book> for BookDto {
    fn from(book: Book) -> Self {
        Self {
            id: book.id,
            czech_name: Some(book.czech_name),
            original_name: Some(book.original_name),
            languages: Some(book.languages),
            note: Some(book.note),
            position: book.position,
        }
    }
}

impl From<BookDto> for Book {
    fn from(dto: BookDto) -> Self {
        Self {
            id: dto.id,
            czech_name: dto.czech_name.unwrap_or_default(),
            original_name: dto.original_name.unwrap_or_default(),
            languages: dto.languages.unwrap_or_default(),
            note: dto.note.unwrap_or_default(),
            position: dto.position,
        }
    }
}

impl UpdateFrom<BookDto> for Book {
    fn apply(&mut self, dto: BookDto) {
        self.czech_name = dto.czech_name.unwrap_or_default();
        self.original_name = dto.original_name.unwrap_or_default();
        self.languages = dto.languages.unwrap_or_default();
        self.note = dto.note.unwrap_or_default();
    }
}
