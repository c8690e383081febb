use diesel::prelude::*;

use crate::modules::music::domain::{Music, Song};
use crate::schema::{music, songs};
use crate::shared::domain::Time;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = music)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MusicRow {
    pub id: i32,
    pub music_name: String,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub media_count: i32,
    pub note: String,
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = music)]
pub struct MusicChangeset {
    pub music_name: String,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub media_count: i32,
    pub note: String,
    pub position: i32,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = songs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SongRow {
    pub id: i32,
    pub music_id: i32,
    pub song_name: String,
    pub song_length: i32,
    pub note: String,
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = songs)]
pub struct SongChangeset {
    pub music_id: i32,
    pub song_name: String,
    pub song_length: i32,
    pub note: String,
    pub position: i32,
}

impl MusicRow {
    pub fn into_music(self, songs: Vec<Song>) -> Music {
        Music {
            id: Some(self.id),
            name: self.music_name,
            wiki_en: self.wiki_en,
            wiki_cz: self.wiki_cz,
            media_count: self.media_count,
            note: self.note,
            position: Some(self.position),
            songs,
        }
    }
}

impl From<SongRow> for Song {
    fn from(row: SongRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.song_name,
            length: Time::from(row.song_length),
            note: row.note,
            position: Some(row.position),
        }
    }
}

impl From<&Music> for MusicChangeset {
    fn from(music: &Music) -> Self {
        Self {
            music_name: music.name.clone(),
            wiki_en: music.wiki_en.clone(),
            wiki_cz: music.wiki_cz.clone(),
            media_count: music.media_count,
            note: music.note.clone(),
            position: music.position.unwrap_or_default(),
        }
    }
}

impl SongChangeset {
    pub fn new(music_id: i32, song: &Song) -> Self {
        Self {
            music_id,
            song_name: song.name.clone(),
            song_length: song.length.seconds() as i32,
            note: song.note.clone(),
            position: song.position.unwrap_or_default(),
        }
    }
}
