use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Genre {
    pub id: Option<i32>,
    pub name: String,
    pub position: Option<i32>,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            position: None,
        }
    }

    /// Display form of a genre list, e.g. `"Drama, Comedy"`
    pub fn join_names(genres: &[Genre]) -> String {
        genres
            .iter()
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

crate::impl_movable!(Genre);

/// Records tagged with genres
pub trait GenreReferences {
    fn genres_mut(&mut self) -> &mut Vec<Genre>;
}
