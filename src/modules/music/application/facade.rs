use super::dto::{MusicDto, SongDto};
use crate::modules::music::domain::{Music, Song};
use crate::shared::application::{CatalogFacade, ChildFacade};
use crate::shared::domain::Time;
use crate::shared::errors::AppResult;

pub type MusicFacade = CatalogFacade<Music, MusicDto>;
pub type SongFacade = ChildFacade<Music, Song, SongDto>;

impl CatalogFacade<Music, MusicDto> {
    pub async fn total_media_count(&self) -> AppResult<i32> {
        let music = self.service().get_all().await?;
        Ok(music.iter().map(|m| m.media_count).sum())
    }

    pub async fn songs_count(&self) -> AppResult<usize> {
        let music = self.service().get_all().await?;
        Ok(music.iter().map(Music::songs_count).sum())
    }

    pub async fn total_length(&self) -> AppResult<Time> {
        let music = self.service().get_all().await?;
        Ok(music.iter().map(Music::total_length).sum())
    }
}
