use serde::{Deserialize, Serialize};

use crate::shared::domain::Time;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: Option<i32>,
    pub name: String,
    pub length: Time,
    pub note: String,
    pub position: Option<i32>,
}

crate::impl_movable!(Song);
