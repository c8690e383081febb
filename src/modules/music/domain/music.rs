use serde::{Deserialize, Serialize};

use super::song::Song;
use crate::shared::domain::{null_as_empty, positions, Movable, Owns, Time};

/// An album or other music collection with its songs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Music {
    pub id: Option<i32>,
    pub name: String,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub media_count: i32,
    pub note: String,
    pub position: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub songs: Vec<Song>,
}

impl Music {
    pub fn songs_count(&self) -> usize {
        self.songs.len()
    }

    pub fn total_length(&self) -> Time {
        self.songs.iter().map(|s| s.length).sum()
    }
}

impl Movable for Music {
    fn id(&self) -> Option<i32> {
        self.id
    }

    fn set_id(&mut self, id: Option<i32>) {
        self.id = id;
    }

    fn position(&self) -> Option<i32> {
        self.position
    }

    fn set_position(&mut self, position: Option<i32>) {
        self.position = position;
    }

    fn reindex_children(&mut self) {
        positions::sort(&mut self.songs);
        positions::reindex(&mut self.songs);
    }

    fn clear_child_ids(&mut self) {
        for song in &mut self.songs {
            song.id = None;
        }
    }
}

impl Owns<Song> for Music {
    fn children_of(&self, parent_id: i32) -> Option<&Vec<Song>> {
        (self.id == Some(parent_id)).then_some(&self.songs)
    }

    fn children_of_mut(&mut self, parent_id: i32) -> Option<&mut Vec<Song>> {
        if self.id == Some(parent_id) {
            Some(&mut self.songs)
        } else {
            None
        }
    }

    fn siblings_of_mut(&mut self, id: i32) -> Option<&mut Vec<Song>> {
        if self.songs.iter().any(|s| s.id == Some(id)) {
            Some(&mut self.songs)
        } else {
            None
        }
    }

    fn child(&self, id: i32) -> Option<&Song> {
        self.songs.iter().find(|s| s.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn song(id: i32, position: Option<i32>, length: i64) -> Song {
        Song {
            id: Some(id),
            name: format!("Song {}", id),
            length: Time::from_seconds(length),
            note: String::new(),
            position,
        }
    }

    #[test]
    fn reindex_children_places_unpositioned_songs_last() {
        let mut music = Music {
            id: Some(1),
            name: "Album".to_string(),
            wiki_en: String::new(),
            wiki_cz: String::new(),
            media_count: 1,
            note: String::new(),
            position: Some(0),
            songs: vec![song(3, None, 200), song(2, Some(4), 100), song(1, Some(1), 60)],
        };

        music.reindex_children();

        let order: Vec<_> = music.songs.iter().map(|s| (s.id, s.position)).collect();
        assert_eq!(order, vec![(Some(1), Some(0)), (Some(2), Some(1)), (Some(3), Some(2))]);
        assert_eq!(music.songs_count(), 3);
        assert_eq!(music.total_length().to_string(), "0:06:00");
    }

    #[test]
    fn null_songs_read_as_empty() {
        let json = serde_json::json!({
            "id": 1,
            "name": "Album",
            "wikiEn": "",
            "wikiCz": "",
            "mediaCount": 1,
            "note": "",
            "position": 0,
            "songs": null
        });

        let mut music: Music = serde_json::from_value(json).unwrap();
        assert!(music.songs.is_empty());

        let before = music.clone();
        music.reindex_children();
        assert_eq!(music, before);
        assert_eq!(music.total_length(), Time::default());
    }
}
