use serde::{Deserialize, Serialize};

use crate::modules::game::domain::{Format, Game};
use crate::shared::application::UpdateFrom;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDto {
    pub id: Option<i32>,
    pub name: Option<String>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub media_count: Option<i32>,
    pub format: Option<Format>,
    pub crack: bool,
    pub serial_key: bool,
    pub patch: bool,
    pub trainer: bool,
    pub trainer_data: bool,
    pub editor: bool,
    pub saves: bool,
    pub other_data: Option<String>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

crate::impl_transfer_record!(GameDto);

impl From<Game> for GameDto {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: Some(game.name),
            wiki_en: Some(game.wiki_en),
            wiki_cz: Some(game.wiki_cz),
            media_count: Some(game.media_count),
            format: Some(game.format),
            crack: game.crack,
            serial_key: game.serial_key,
            patch: game.patch,
            trainer: game.trainer,
            trainer_data: game.trainer_data,
            editor: game.editor,
            saves: game.saves,
            other_data: Some(game.other_data),
            note: Some(game.note),
            position: game.position,
        }
    }
}

impl From<GameDto> for Game {
    fn from(dto: GameDto) -> Self {
        let mut game = Game {
            id: dto.id,
            name: String::new(),
            wiki_en: String::new(),
            wiki_cz: String::new(),
            media_count: 0,
            format: Format::Cd,
            crack: false,
            serial_key: false,
            patch: false,
            trainer: false,
            trainer_data: false,
            editor: false,
            saves: false,
            other_data: String::new(),
            note: String::new(),
            position: dto.position,
        };
        game.apply(dto);
        game
    }
}

impl UpdateFrom<GameDto> for Game {
    fn apply(&mut self, dto: GameDto) {
        self.name = dto.name.unwrap_or_default();
        self.wiki_en = dto.wiki_en.unwrap_or_default();
        self.wiki_cz = dto.wiki_cz.unwrap_or_default();
        self.media_count = dto.media_count.unwrap_or_default();
        self.format = dto.format.unwrap_or(self.format);
        self.crack = dto.crack;
        self.serial_key = dto.serial_key;
        self.patch = dto.patch;
        self.trainer = dto.trainer;
        self.trainer_data = dto.trainer_data;
        self.editor = dto.editor;
        self.saves = dto.saves;
        self.other_data = dto.other_data.unwrap_or_default();
        self.note = dto.note.unwrap_or_default();
    }
}
