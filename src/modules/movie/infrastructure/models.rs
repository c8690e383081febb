use std::collections::HashMap;

use diesel::prelude::*;

use crate::modules::genre::domain::Genre;
use crate::modules::genre::infrastructure::resolve_genres;
use crate::modules::movie::domain::Movie;
use crate::schema::movies;
use crate::shared::domain::{Language, Time};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MovieRow {
    pub id: i32,
    pub czech_name: String,
    pub original_name: String,
    pub movie_year: i32,
    pub movie_language: String,
    pub subtitles: Vec<String>,
    pub media: Vec<i32>,
    pub csfd: String,
    pub imdb_code: i32,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub picture: Option<i32>,
    pub note: String,
    pub position: i32,
    pub genre_ids: Vec<i32>,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = movies)]
#[diesel(treat_none_as_null = true)]
pub struct MovieChangeset {
    pub czech_name: String,
    pub original_name: String,
    pub movie_year: i32,
    pub movie_language: String,
    pub subtitles: Vec<String>,
    pub media: Vec<i32>,
    pub csfd: String,
    pub imdb_code: i32,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub picture: Option<i32>,
    pub note: String,
    pub position: i32,
    pub genre_ids: Vec<i32>,
}

impl MovieRow {
    pub fn into_movie(self, genres: &HashMap<i32, Genre>) -> AppResult<Movie> {
        Ok(Movie {
            id: Some(self.id),
            czech_name: self.czech_name,
            original_name: self.original_name,
            year: self.movie_year,
            language: self.movie_language.parse()?,
            subtitles: Language::parse_all(&self.subtitles)?,
            media: self.media.into_iter().map(Time::from).collect(),
            csfd: self.csfd,
            imdb_code: self.imdb_code,
            wiki_en: self.wiki_en,
            wiki_cz: self.wiki_cz,
            picture: self.picture,
            note: self.note,
            position: Some(self.position),
            genres: resolve_genres(&self.genre_ids, genres),
        })
    }
}

impl From<&Movie> for MovieChangeset {
    fn from(movie: &Movie) -> Self {
        Self {
            czech_name: movie.czech_name.clone(),
            original_name: movie.original_name.clone(),
            movie_year: movie.year,
            movie_language: movie.language.code().to_string(),
            subtitles: Language::codes(&movie.subtitles),
            media: movie.media.iter().map(|t| t.seconds() as i32).collect(),
            csfd: movie.csfd.clone(),
            imdb_code: movie.imdb_code,
            wiki_en: movie.wiki_en.clone(),
            wiki_cz: movie.wiki_cz.clone(),
            picture: movie.picture,
            note: movie.note.clone(),
            position: movie.position.unwrap_or_default(),
            genre_ids: movie.genres.iter().filter_map(|g| g.id).collect(),
        }
    }
}
