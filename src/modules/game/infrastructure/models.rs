use diesel::prelude::*;

use crate::modules::game::domain::{Format, Game};
use crate::schema::games;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = games)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GameRow {
    pub id: i32,
    pub game_name: String,
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
    pub position: i32,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = games)]
pub struct GameChangeset {
    pub game_name: String,
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
    pub position: i32,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Self {
            id: Some(row.id),
            name: row.game_name,
            wiki_en: row.wiki_en,
            wiki_cz: row.wiki_cz,
            media_count: row.media_count,
            format: row.format,
            crack: row.crack,
            serial_key: row.serial_key,
            patch: row.patch,
            trainer: row.trainer,
            trainer_data: row.trainer_data,
            editor: row.editor,
            saves: row.saves,
            other_data: row.other_data,
            note: row.note,
            position: Some(row.position),
        }
    }
}

impl From<&Game> for GameChangeset {
    fn from(game: &Game) -> Self {
        Self {
            game_name: game.name.clone(),
            wiki_en: game.wiki_en.clone(),
            wiki_cz: game.wiki_cz.clone(),
            media_count: game.media_count,
            format: game.format,
            crack: game.crack,
            serial_key: game.serial_key,
            patch: game.patch,
            trainer: game.trainer,
            trainer_data: game.trainer_data,
            editor: game.editor,
            saves: game.saves,
            other_data: game.other_data.clone(),
            note: game.note.clone(),
            position: game.position.unwrap_or_default(),
        }
    }
}
