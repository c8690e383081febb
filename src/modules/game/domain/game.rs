use serde::{Deserialize, Serialize};

use super::format::Format;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Option<i32>,
    pub name: String,
    pub wiki_en: String,
    pub wiki_cz: String,
    pub media_count: i32,
    pub format: Format,
    pub crack: bool,
    pub serial_key: bool,
    pub patch: bool,
    pub trainer: bool,
    pub trainer_data: bool,
    pub editor: bool,
    pub saves: bool,
    pub other_data: String,
    pub note: String,
    pub position: Option<i32>,
}

impl Game {
    /// Labels of the extras shipped with the game, then free-form other data
    pub fn additional_data(&self) -> Vec<String> {
        let flags = [
            (self.crack, "Crack"),
            (self.serial_key, "Serial key"),
            (self.patch, "Patch"),
            (self.trainer, "Trainer"),
            (self.trainer_data, "Data for trainer"),
            (self.editor, "Editor"),
            (self.saves, "Saves"),
        ];

        let mut data: Vec<String> = flags
            .iter()
            .filter(|(set, _)| *set)
            .map(|(_, label)| label.to_string())
            .collect();
        if !self.other_data.trim().is_empty() {
            data.push(self.other_data.clone());
        }
        data
    }
}

crate::impl_movable!(Game);
