use serde::{Deserialize, Serialize};

use super::episode::Episode;
use crate::shared::domain::{null_as_empty, positions, Language, Movable, Time};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub id: Option<i32>,
    pub number: i32,
    pub starting_year: i32,
    pub ending_year: i32,
    pub language: Language,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subtitles: Vec<Language>,
    pub note: String,
    pub position: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub episodes: Vec<Episode>,
}

impl Season {
    pub fn episodes_count(&self) -> usize {
        self.episodes.len()
    }

    pub fn total_length(&self) -> Time {
        self.episodes.iter().map(|e| e.length).sum()
    }
}

impl Movable for Season {
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
        positions::sort(&mut self.episodes);
        positions::reindex_all(&mut self.episodes);
    }

    fn clear_child_ids(&mut self) {
        for episode in &mut self.episodes {
            episode.id = None;
        }
    }
}
