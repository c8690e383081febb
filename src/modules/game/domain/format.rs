use diesel_derive_enum::DbEnum;
use serde::{Deserialize, Serialize};

/// Distribution format of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, DbEnum)]
#[ExistingTypePath = "crate::schema::sql_types::GameFormat"]
#[serde(rename_all = "snake_case")]
pub enum Format {
    Cd,
    Dvd,
    Iso,
    Steam,
    BattleNet,
    Origin,
}

impl Format {
    pub fn as_str(&self) -> &'static str {
        match self {
            Format::Cd => "CD",
            Format::Dvd => "DVD",
            Format::Iso => "ISO",
            Format::Steam => "STEAM",
            Format::BattleNet => "BATTLE_NET",
            Format::Origin => "ORIGIN",
        }
    }

    /// Digital distribution formats have no physical media
    pub fn is_digital(&self) -> bool {
        matches!(self, Format::Steam | Format::BattleNet | Format::Origin)
    }
}
