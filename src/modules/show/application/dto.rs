use serde::{Deserialize, Serialize};

use crate::modules::genre::application::dto::{genres_from_dto, GenreDto};
use crate::modules::show::domain::{Episode, Season, Show};
use crate::shared::application::UpdateFrom;
use crate::shared::domain::{Language, Time};

/// Show without its seasons; seasons are managed through the season facade
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowDto {
    pub id: Option<i32>,
    pub czech_name: Option<String>,
    pub original_name: Option<String>,
    pub csfd: Option<String>,
    pub imdb_code: Option<i32>,
    pub wiki_en: Option<String>,
    pub wiki_cz: Option<String>,
    pub picture: Option<i32>,
    pub note: Option<String>,
    pub position: Option<i32>,
    pub genres: Option<Vec<GenreDto>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonDto {
    pub id: Option<i32>,
    pub number: Option<i32>,
    pub starting_year: Option<i32>,
    pub ending_year: Option<i32>,
    pub language: Option<Language>,
    pub subtitles: Option<Vec<Language>>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EpisodeDto {
    pub id: Option<i32>,
    pub number: Option<i32>,
    pub name: Option<String>,
    /// Seconds
    pub length: Option<i32>,
    pub note: Option<String>,
    pub position: Option<i32>,
}

crate::impl_transfer_record!(ShowDto, SeasonDto, EpisodeDto);

impl From<Show> for ShowDto {
    fn from(show: Show) -> Self {
        Self {
            id: show.id,
            czech_name: Some(show.czech_name),
            original_name: Some(show.original_name),
            csfd: Some(show.csfd),
            imdb_code: Some(show.imdb_code),
            wiki_en: Some(show.wiki_en),
            wiki_cz: Some(show.wiki_cz),
            picture: show.picture,
            note: Some(show.note),
            position: show.position,
            genres: Some(show.genres.into_iter().map(GenreDto::from).collect()),
        }
    }
}

impl From<ShowDto> for Show {
    fn from(dto: ShowDto) -> Self {
        let mut show = Show {
            id: dto.id,
            czech_name: String::new(),
            original_name: String::new(),
            csfd: String::new(),
            imdb_code: -1,
            wiki_en: String::new(),
            wiki_cz: String::new(),
            picture: None,
            note: String::new(),
            position: dto.position,
            genres: Vec::new(),
            seasons: Vec::new(),
        };
        show.apply(dto);
        show
    }
}

impl UpdateFrom<ShowDto> for Show {
    fn apply(&mut self, dto: ShowDto) {
        self.czech_name = dto.czech_name.unwrap_or_default();
        self.original_name = dto.original_name.unwrap_or_default();
        self.csfd = dto.csfd.unwrap_or_default();
        self.imdb_code = dto.imdb_code.unwrap_or(-1);
        self.wiki_en = dto.wiki_en.unwrap_or_default();
        self.wiki_cz = dto.wiki_cz.unwrap_or_default();
        self.picture = dto.picture;
        self.note = dto.note.unwrap_or_default();
        self.genres = genres_from_dto(dto.genres);
    }
}

impl From<Season> for SeasonDto {
    fn from(season: Season) -> Self {
        Self {
            id: season.id,
            number: Some(season.number),
            starting_year: Some(season.starting_year),
            ending_year: Some(season.ending_year),
            language: Some(season.language),
            subtitles: Some(season.subtitles),
            note: Some(season.note),
            position: season.position,
        }
    }
}

impl From<SeasonDto> for Season {
    fn from(dto: SeasonDto) -> Self {
        let mut season = Season {
            id: dto.id,
            number: 0,
            starting_year: 0,
            ending_year: 0,
            language: Language::Cz,
            subtitles: Vec::new(),
            note: String::new(),
            position: dto.position,
            episodes: Vec::new(),
        };
        season.apply(dto);
        season
    }
}

impl UpdateFrom<SeasonDto> for Season {
    fn apply(&mut self, dto: SeasonDto) {
        self.number = dto.number.unwrap_or_default();
        self.starting_year = dto.starting_year.unwrap_or_default();
        self.ending_year = dto.ending_year.unwrap_or_default();
        self.language = dto.language.unwrap_or(self.language);
        self.subtitles = dto.subtitles.unwrap_or_default();
        self.note = dto.note.unwrap_or_default();
    }
}

impl From<Episode> for EpisodeDto {
    fn from(episode: Episode) -> Self {
        Self {
            id: episode.id,
            number: Some(episode.number),
            name: Some(episode.name),
            length: Some(episode.length.seconds() as i32),
            note: Some(episode.note),
            position: episode.position,
        }
    }
}

impl From<EpisodeDto> for Episode {
    fn from(dto: EpisodeDto) -> Self {
        let mut episode = Episode {
            id: dto.id,
            number: 0,
            name: String::new(),
            length: Time::default(),
            note: String::new(),
            position: dto.position,
        };
        episode.apply(dto);
        episode
    }
}

impl UpdateFrom<EpisodeDto> for Episode {
    fn apply(&mut self, dto: EpisodeDto) {
        self.number = dto.number.unwrap_or_default();
        self.name = dto.name.unwrap_or_default();
        self.length = dto.length.map(Time::from).unwrap_or_default();
        self.note = dto.note.unwrap_or_default();
    }
}
