use serde::{Deserialize, Serialize};

use crate::shared::domain::{null_as_empty, Language};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: Option<i32>,
    pub czech_name: String,
    pub original_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub languages: Vec<Language>,
    pub note: String,
    pub position: Option<i32>,
}

crate::impl_movable!(Book);
