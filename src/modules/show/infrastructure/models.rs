use std::collections::HashMap;

use diesel::prelude::*;

use crate::modules::genre::domain::Genre;
use crate::modules::genre::infrastructure::resolve_genres;
use crate::modules::show::domain::{Episode, Season, Show};
use crate::schema::{episodes, seasons, tv_shows};
use crate::shared::domain::{Language, Time};
use crate::shared::errors::AppResult;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tv_shows)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ShowRow {
    pub id: i32,
    pub czech_name: String,
    pub original_name: String,
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
#[diesel(table_name = tv_shows)]
#[diesel(treat_none_as_null = true)]
pub struct ShowChangeset {
    pub czech_name: String,
    pub original_name: String,
    pub csfd: String,
    pub imdb_code: i32,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub picture: Option<i32>,
    pub note: String,
    pub position: i32,
    pub genre_ids: Vec<i32>,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = seasons)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SeasonRow {
    pub id: i32,
    pub tv_show_id: i32,
    pub season_number: i32,
    pub starting_year: i32,
    pub ending_year: i32,
    pub season_language: String,
    pub subtitles: Vec<String>,
    pub note: String,
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = seasons)]
pub struct SeasonChangeset {
    pub tv_show_id: i32,
    pub season_number: i32,
    pub starting_year: i32,
    pub ending_year: i32,
    pub season_language: String,
    pub subtitles: Vec<String>,
    pub note: String,
    pub position: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = episodes)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct EpisodeRow {
    pub id: i32,
    pub season_id: i32,
    pub episode_number: i32,
    pub episode_name: String,
    pub episode_length: i32,
    pub note: String,
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = episodes)]
pub struct EpisodeChangeset {
    pub season_id: i32,
    pub episode_number: i32,
    pub episode_name: String,
    pub episode_length: i32,
    pub note: String,
    pub position: i32,
}

impl ShowRow {
    pub fn into_show(self, genres: &HashMap<i32, Genre>, seasons: Vec<Season>) -> Show {
        Show {
            id: Some(self.id),
            czech_name: self.czech_name,
            original_name: self.original_name,
            csfd: self.csfd,
            imdb_code: self.imdb_code,
            wiki_en: self.wiki_en,
            wiki_cz: self.wiki_cz,
            picture: self.picture,
            note: self.note,
            position: Some(self.position),
            genres: resolve_genres(&self.genre_ids, genres),
            seasons,
        }
    }
}

impl SeasonRow {
    pub fn into_season(self, episodes: Vec<Episode>) -> AppResult<Season> {
        Ok(Season {
            id: Some(self.id),
            number: self.season_number,
            starting_year: self.starting_year,
            ending_year: self.ending_year,
            language: self.season_language.parse()?,
            subtitles: Language::parse_all(&self.subtitles)?,
            note: self.note,
            position: Some(self.position),
            episodes,
        })
    }
}

impl From<EpisodeRow> for Episode {
    fn from(row: EpisodeRow) -> Self {
        Self {
            id: Some(row.id),
            number: row.episode_number,
            name: row.episode_name,
            length: Time::from(row.episode_length),
            note: row.note,
            position: Some(row.position),
        }
    }
}

impl From<&Show> for ShowChangeset {
    fn from(show: &Show) -> Self {
        Self {
            czech_name: show.czech_name.clone(),
            original_name: show.original_name.clone(),
            csfd: show.csfd.clone(),
            imdb_code: show.imdb_code,
            wiki_en: show.wiki_en.clone(),
            wiki_cz: show.wiki_cz.clone(),
            picture: show.picture,
            note: show.note.clone(),
            position: show.position.unwrap_or_default(),
            genre_ids: show.genres.iter().filter_map(|g| g.id).collect(),
        }
    }
}

impl SeasonChangeset {
    pub fn new(tv_show_id: i32, season: &Season) -> Self {
        Self {
            tv_show_id,
            season_number: season.number,
            starting_year: season.starting_year,
            ending_year: season.ending_year,
            season_language: season.language.code().to_string(),
            subtitles: Language::codes(&season.subtitles),
            note: season.note.clone(),
            position: season.position.unwrap_or_default(),
        }
    }
}

impl EpisodeChangeset {
    pub fn new(season_id: i32, episode: &Episode) -> Self {
        Self {
            season_id,
            episode_number: episode.number,
            episode_name: episode.name.clone(),
            episode_length: episode.length.seconds() as i32,
            note: episode.note.clone(),
            position: episode.position.unwrap_or_default(),
        }
    }
}
