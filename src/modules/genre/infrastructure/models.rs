use diesel::prelude::*;

use crate::modules::genre::domain::Genre;
use crate::schema::genres;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = genres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GenreRow {
    pub id: i32,
    pub genre_name: String,
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = genres)]
pub struct GenreChangeset {
    pub genre_name: String,
    pub position: i32,
}

impl From<GenreRow> for Genre {
    fn from(row: GenreRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.genre_name,
            position: Some(row.position),
        }
    }
}

impl From<&Genre> for GenreChangeset {
    fn from(genre: &Genre) -> Self {
        Self {
            genre_name: genre.name.clone(),
            position: genre.position.unwrap_or_default(),
        }
    }
}
