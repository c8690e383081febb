use diesel::prelude::*;

use crate::modules::book::domain::Book;
use crate::schema::books;
use crate::shared::domain::Language;
use crate::shared::errors::{AppError, AppResult};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = books)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BookRow {
    pub id: i32,
    pub czech_name: String,
    pub original_name: String,
    pub languages: Vec<String>,
    pub note: String,
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = books)]
pub struct BookChangeset {
    pub czech_name: String,
    pub original_name: String,
    pub languages: Vec<String>,
    pub note: String,
    pub position: i32,
}

impl TryFrom<BookRow> for Book {
    type Error = AppError;

    fn try_from(row: BookRow) -> AppResult<Self> {
        Ok(Self {
            id: Some(row.id),
            czech_name: row.czech_name,
            original_name: row.original_name,
            languages: Language::parse_all(&row.languages)?,
            note: row.note,
            position: Some(row.position),
        })
    }
}

impl From<&Book> for BookChangeset {
    fn from(book: &Book) -> Self {
        Self {
            czech_name: book.czech_name.clone(),
            original_name: book.original_name.clone(),
            languages: Language::codes(&book.languages),
            note: book.note.clone(),
            position: book.position.unwrap_or_default(),
        }
    }
}
