use serde::{Deserialize, Serialize};

use super::episode::Episode;
use super::season::Season;
use crate::modules::genre::domain::{Genre, GenreReferences};
use crate::shared::domain::{null_as_empty, positions, Movable, Owns, Time};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Show {
    pub id: Option<i32>,
    pub czech_name: String,
    pub original_name: String,
    pub csfd: String,
    pub imdb_code: i32,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub picture: Option<i32>,
    pub note: String,
    pub position: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub seasons: Vec<Season>,
}

impl Show {
    pub fn genre_names(&self) -> String {
        Genre::join_names(&self.genres)
    }

    pub fn seasons_count(&self) -> usize {
        self.seasons.len()
    }

    pub fn episodes_count(&self) -> usize {
        self.seasons.iter().map(Season::episodes_count).sum()
    }

    pub fn total_length(&self) -> Time {
        self.seasons.iter().map(Season::total_length).sum()
    }

    pub fn season(&self, id: i32) -> Option<&Season> {
        self.seasons.iter().find(|s| s.id == Some(id))
    }
}

impl Movable for Show {
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
        positions::sort(&mut self.seasons);
        positions::reindex_all(&mut self.seasons);
    }

    fn clear_child_ids(&mut self) {
        for season in &mut self.seasons {
            season.id = None;
            season.clear_child_ids();
        }
    }
}

impl GenreReferences for Show {
    fn genres_mut(&mut self) -> &mut Vec<Genre> {
        &mut self.genres
    }
}

impl Owns<Season> for Show {
    fn children_of(&self, parent_id: i32) -> Option<&Vec<Season>> {
        (self.id == Some(parent_id)).then_some(&self.seasons)
    }

    fn children_of_mut(&mut self, parent_id: i32) -> Option<&mut Vec<Season>> {
        if self.id == Some(parent_id) {
            Some(&mut self.seasons)
        } else {
            None
        }
    }

    fn siblings_of_mut(&mut self, id: i32) -> Option<&mut Vec<Season>> {
        if self.season(id).is_some() {
            Some(&mut self.seasons)
        } else {
            None
        }
    }

    fn child(&self, id: i32) -> Option<&Season> {
        self.season(id)
    }
}

impl Owns<Episode> for Show {
    fn children_of(&self, parent_id: i32) -> Option<&Vec<Episode>> {
        self.season(parent_id).map(|s| &s.episodes)
    }

    fn children_of_mut(&mut self, parent_id: i32) -> Option<&mut Vec<Episode>> {
        self.seasons
            .iter_mut()
            .find(|s| s.id == Some(parent_id))
            .map(|s| &mut s.episodes)
    }

    fn siblings_of_mut(&mut self, id: i32) -> Option<&mut Vec<Episode>> {
        self.seasons
            .iter_mut()
            .find(|s| s.episodes.iter().any(|e| e.id == Some(id)))
            .map(|s| &mut s.episodes)
    }

    fn child(&self, id: i32) -> Option<&Episode> {
        self.seasons
            .iter()
            .flat_map(|s| s.episodes.iter())
            .find(|e| e.id == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::domain::Language;

    fn episode(id: i32, position: i32, length: i64) -> Episode {
        Episode {
            id: Some(id),
            number: position + 1,
            name: format!("Episode {}", id),
            length: Time::from_seconds(length),
            note: String::new(),
            position: Some(position),
        }
    }

    fn season(id: i32, position: i32, episodes: Vec<Episode>) -> Season {
        Season {
            id: Some(id),
            number: id,
            starting_year: 2000,
            ending_year: 2001,
            language: Language::En,
            subtitles: vec![Language::Cz],
            note: String::new(),
            position: Some(position),
            episodes,
        }
    }

    fn show(seasons: Vec<Season>) -> Show {
        Show {
            id: Some(1),
            czech_name: "Přátelé".to_string(),
            original_name: "Friends".to_string(),
            csfd: String::new(),
            imdb_code: -1,
            wiki_en: String::new(),
            wiki_cz: String::new(),
            picture: None,
            note: String::new(),
            position: Some(0),
            genres: vec![Genre::new("Comedy")],
            seasons,
        }
    }

    #[test]
    fn derived_values_span_all_seasons() {
        let show = show(vec![
            season(10, 0, vec![episode(100, 0, 1200), episode(101, 1, 1300)]),
            season(11, 1, vec![episode(102, 0, 1100)]),
        ]);

        assert_eq!(show.seasons_count(), 2);
        assert_eq!(show.episodes_count(), 3);
        assert_eq!(show.total_length(), Time::from_seconds(3600));
        assert_eq!(show.genre_names(), "Comedy");
        assert_eq!(show.seasons[0].total_length().to_string(), "0:41:40");
    }

    #[test]
    fn reindex_children_orders_every_level_independently() {
        let mut show = show(vec![
            season(10, 2, vec![episode(100, 5, 1), episode(101, 3, 1)]),
            season(11, 0, vec![episode(102, 9, 1)]),
            season(12, 1, Vec::new()),
        ]);

        show.reindex_children();

        let seasons: Vec<_> = show.seasons.iter().map(|s| (s.id, s.position)).collect();
        assert_eq!(
            seasons,
            vec![(Some(11), Some(0)), (Some(12), Some(1)), (Some(10), Some(2))]
        );
        let episodes: Vec<_> = show.seasons[2]
            .episodes
            .iter()
            .map(|e| (e.id, e.position))
            .collect();
        assert_eq!(episodes, vec![(Some(101), Some(0)), (Some(100), Some(1))]);
        assert_eq!(show.seasons[0].episodes[0].position, Some(0));
    }

    #[test]
    fn duplicate_clears_identity_at_every_level() {
        let original = show(vec![season(10, 0, vec![episode(100, 0, 60)])]);
        let copy = original.duplicate();

        assert_eq!(copy.id, None);
        assert_eq!(copy.position, None);
        assert_eq!(copy.seasons[0].id, None);
        assert_eq!(copy.seasons[0].position, Some(0));
        assert_eq!(copy.seasons[0].episodes[0].id, None);
        assert_eq!(copy.czech_name, original.czech_name);
    }

    #[test]
    fn owns_locates_children_and_siblings() {
        let mut show = show(vec![
            season(10, 0, vec![episode(100, 0, 60)]),
            season(11, 1, vec![episode(101, 0, 60)]),
        ]);

        assert_eq!(Owns::<Season>::children_of(&show, 1).map(Vec::len), Some(2));
        assert!(Owns::<Season>::children_of(&show, 2).is_none());
        assert_eq!(Owns::<Episode>::child(&show, 101).map(|e| e.id), Some(Some(101)));

        let siblings = Owns::<Episode>::siblings_of_mut(&mut show, 101).unwrap();
        assert_eq!(siblings.len(), 1);
        assert_eq!(siblings[0].id, Some(101));
    }

    #[test]
    fn null_child_collections_read_as_empty() {
        let json = serde_json::json!({
            "id": 1,
            "czechName": "Přátelé",
            "originalName": "Friends",
            "csfd": "",
            "imdbCode": -1,
            "wikiEn": "",
            "wikiCz": "",
            "picture": null,
            "note": "",
            "position": 0,
            "genres": null,
            "seasons": null
        });

        let mut show: Show = serde_json::from_value(json).unwrap();
        assert!(show.seasons.is_empty());
        assert!(show.genres.is_empty());

        let before = show.clone();
        show.reindex_children();
        assert_eq!(show, before);
    }

    #[test]
    fn null_episodes_read_as_empty() {
        let json = serde_json::json!({
            "id": 10,
            "number": 1,
            "startingYear": 2000,
            "endingYear": 2001,
            "language": "EN",
            "subtitles": null,
            "note": "",
            "position": 0,
            "episodes": null
        });

        let mut season: Season = serde_json::from_value(json).unwrap();
        assert!(season.episodes.is_empty());
        assert!(season.subtitles.is_empty());

        season.reindex_children();
        assert!(season.episodes.is_empty());
        assert_eq!(season.episodes_count(), 0);
    }
}
