use serde::{Deserialize, Serialize};

use crate::modules::music::domain::{Music, Song};
use crate::shared::application::UpdateFrom;
use crate::shared::domain::Time;

/// Music without its songs; songs are managed through the song facade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<i32>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    /// Seconds
    pub length: Option<i32>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

crate::impl_transfer_record!(MusicDto, SongDto);

impl From<Music> for MusicDto {
    fn from(music: Music) -> Self {
        Self {
            id: music.id,
            name: Some(music.name),
            wiki_en: Some(music.wiki_en),
            wiki_cz: Some(music.wiki_cz),
            media_count: Some(music.media_count),
            note: Some(music.note),
            position: music.position,
        }
    }
}

impl From<MusicDto> for Music {
    fn from(dto: MusicDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            wiki_en: dto.wiki_en.unwrap_or_default(),
            wiki_cz: dto.wiki_cz.unwrap_or_default(),
            media_count: dto.media_count.unwrap_or_default(),
            note: dto.note.unwrap_or_default(),
            position: dto.position,
            songs: Vec::new(),
        }
    }
}

impl UpdateFrom<MusicDto> for Music {
    fn apply(&mut self, dto: MusicDto) {
        self.name = dto.name.unwrap_or_default();
        self.wiki_en = dto.wiki_en.unwrap_or_default();
        self.wiki_cz = dto.wiki_cz.unwrap_or_default();
        self.media_count = dto.media_count.unwrap_or_default();
        self.note = dto.note.unwrap_or_default();
    }
}

impl From<Song> for SongDto {
    fn from(song: Song) -> Self {
        Self {
            id: song.id,
            name: Some(song.name),
            length: Some(song.length.seconds() as i32),
            note: Some(song.note),
            position: song.position,
        }
    }
}

impl From<SongDto> for Song {
    fn from(dto: SongDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name.unwrap_or_default(),
            length: dto.length.map(Time::from).unwrap_or_default(),
            note: dto.note.unwrap_or_default(),
            position: dto.position,
        }
    }
}

impl UpdateFrom<SongDto> for Song {
    fn apply(&mut self, dto: SongDto) {
        self.name = dto.name.unwrap_or_default();
        self.length = dto.length.map(Time::from).unwrap_or_default();
        self.note = dto.note.unwrap_or_default();
    }
}
