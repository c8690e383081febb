use serde::{Deserialize, Serialize};

/// Cover image referenced by movies and shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Picture {
    pub id: Option<i32>,
    pub content: Vec<u8>,
    pub position: Option<i32>,
}

impl Picture {
    pub fn new(content: Vec<u8>) -> Self {
        Self {
            id: None,
            content,
            position: None,
        }
    }
}

crate::impl_movable!(Picture);
