use serde::{Deserialize, Serialize};

use crate::modules::genre::domain::{Genre, GenreReferences};
use crate::shared::domain::{null_as_empty, Language, Time};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Option<i32>,
    pub czech_name: String,
    pub original_name: String,
    pub year: i32,
    pub language: Language,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subtitles: Vec<Language>,
    /// Length of each medium, in order
    #[serde(default, deserialize_with = "null_as_empty")]
    pub media: Vec<Time>,
    pub csfd: String,
    pub imdb_code: i32,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub picture: Option<i32>,
    pub note: String,
    pub position: Option<i32>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub genres: Vec<Genre>,
}

impl Movie {
    pub fn genre_names(&self) -> String {
        Genre::join_names(&self.genres)
    }

    pub fn media_count(&self) -> usize {
        self.media.len()
    }

    pub fn total_length(&self) -> Time {
        self.media.iter().copied().sum()
    }
}

crate::impl_movable!(Movie);

impl GenreReferences for Movie {
    fn genres_mut(&mut self) -> &mut Vec<Genre> {
        &mut self.genres
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: Some(1),
            czech_name: "Vetřelec".to_string(),
            original_name: "Alien".to_string(),
            year: 1979,
            language: Language::En,
            subtitles: vec![Language::Cz],
            media: vec![Time::from_seconds(3600), Time::from_seconds(2820)],
            csfd: "csfd".to_string(),
            imdb_code: 78748,
            wiki_en: String::new(),
            wiki_cz: String::new(),
            picture: None,
            note: String::new(),
            position: Some(0),
            genres: vec![Genre::new("Horror"), Genre::new("Sci-Fi")],
        }
    }

    #[test]
    fn derived_values() {
        let movie = movie();
        assert_eq!(movie.genre_names(), "Horror, Sci-Fi");
        assert_eq!(movie.media_count(), 2);
        assert_eq!(movie.total_length().to_string(), "1:47:00");
    }

    #[test]
    fn null_lists_deserialize_as_empty() {
        let mut json = serde_json::to_value(movie()).unwrap();
        json["genres"] = serde_json::Value::Null;
        json["media"] = serde_json::Value::Null;

        let movie: Movie = serde_json::from_value(json).unwrap();
        assert!(movie.genres.is_empty());
        assert!(movie.media.is_empty());
    }
}
