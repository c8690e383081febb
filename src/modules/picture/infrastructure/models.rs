use diesel::prelude::*;

use crate::modules::picture::domain::Picture;
use crate::schema::pictures;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = pictures)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PictureRow {
    pub id: i32,
    pub content: Vec<u8>,
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = pictures)]
pub struct PictureChangeset {
    pub content: Vec<u8>,
    pub position: i32,
}

impl From<PictureRow> for Picture {
    fn from(row: PictureRow) -> Self {
        Self {
            id: Some(row.id),
            content: row.content,
            position: Some(row.position),
        }
    }
}

impl From<&Picture> for PictureChangeset {
    fn from(picture: &Picture) -> Self {
        Self {
            content: picture.content.clone(),
            position: picture.position.unwrap_or_default(),
        }
    }
}
