use serde::{Deserialize, Serialize};

use crate::modules::genre::domain::Genre;
use crate::shared::application::UpdateFrom;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub position: Option<i32>,
}

crate::impl_transfer_record!(GenreDto);

impl From<Genre> for GenreDto {
    fn from(genre: Genre) -> Self {
        Self {
            id: genre.id,
            name: Some(genre.name),
            position: genre.position,
        }
    }
}

impl From<GenreDto> for Genre {
    fn from(dto: GenreDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            position: dto.position,
        }
    }
}

impl UpdateFrom<GenreDto> for Genre {
    fn apply(&mut self, dto: GenreDto) {
        self.name = dto.name.unwrap_or_default();
    }
}

/// Genre references carried by movie and show records
pub(crate) fn genres_from_dto(genres: Option<Vec<GenreDto>>) -> Vec<Genre> {
    genres.unwrap_or_default().into_iter().map(Genre::from).collect()
}
