use serde::{Deserialize, Serialize};

use crate::modules::genre::application::dto::{genres_from_dto, GenreDto};
use crate::modules::movie::domain::Movie;
use crate::shared::application::UpdateFrom;
use crate::shared::domain::{Language, Time};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDto {
    pub id: Option<i32>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub year: Option<i32>,
    pub language: Option<Language>,
    pub subtitles: Option<Vec<Language>>,
    /// Medium lengths in seconds
    pub media: Option<Vec<i32>>,
    pub csfd: Option<String>,
    pub imdb_code: Option<i32>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<i32>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Option<Vec<GenreDto>>,
}

crate::impl_transfer_record!(MovieDto);

impl MovieDto {
    pub fn genre_names(&self) -> String {
        self.genres
            .iter()
            .flatten()
            .filter_map(|g| g.name.as_deref())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

fn media_from_seconds(media: Option<Vec<i32>>) -> Vec<Time> {
    media.unwrap_or_default().into_iter().map(Time::from).collect()
}

impl From<Movie> for MovieDto {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            czech_name: Some(movie.czech_name),
            original_name: Some(movie.original_name),
            year: Some(movie.year),
            language: Some(movie.language),
            subtitles: Some(movie.subtitles),
            media: Some(movie.media.iter().map(|t| t.seconds() as i32).collect()),
            csfd: Some(movie.csfd),
            imdb_code: Some(movie.imdb_code),
            wiki_en: Some(movie.wiki_en),
            wiki_cz: Some(movie.wiki_cz),
            picture: movie.picture,
            note: Some(movie.note),
            position: movie.position,
            genres: Some(movie.genres.into_iter().map(GenreDto::from).collect()),
        }
    }
}

impl From<MovieDto> for Movie {
    fn from(dto: MovieDto) -> Self {
        let mut movie = Movie {
            id: dto.id,
            czech_name: String::new(),
            original_name: String::new(),
            year: 0,
            language: Language::Cz,
            subtitles: Vec::new(),
            media: Vec::new(),
            csfd: String::new(),
            imdb_code: -1,
            wiki_en: String::new(),
            wiki_cz: String::new(),
            picture: None,
            note: String::new(),
            position: dto.position,
            genres: Vec::new(),
        };
        movie.apply(dto);
        movie
    }
}

impl UpdateFrom<MovieDto> for Movie {
    fn apply(&mut self, dto: MovieDto) {
        self.czech_name = dto.czech_name.unwrap_or_default();
        self.original_name = dto.original_name.unwrap_or_default();
        self.year = dto.year.unwrap_or_default();
        self.language = dto.language.unwrap_or(self.language);
        self.subtitles = dto.subtitles.unwrap_or_default();
        self.media = media_from_seconds(dto.media);
        self.csfd = dto.csfd.unwrap_or_default();
        self.imdb_code = dto.imdb_code.unwrap_or(-1);
        self.wiki_en = dto.wiki_en.unwrap_or_default();
        self.wiki_cz = dto.wiki_cz.unwrap_or_default();
        self.picture = dto.picture;
        self.note = dto.note.unwrap_or_default();
        self.genres = genres_from_dto(dto.genres);
    }
}
