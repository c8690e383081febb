/// Transfer record factories using builder pattern
///
/// Every factory starts from a record that passes validation.
use catalog::modules::book::BookDto;
use catalog::modules::game::{Format, GameDto};
use catalog::modules::genre::GenreDto;
use catalog::modules::movie::MovieDto;
use catalog::modules::music::{MusicDto, SongDto};
use catalog::modules::picture::PictureDto;
use catalog::modules::show::{EpisodeDto, SeasonDto, ShowDto};
use catalog::shared::domain::Language;

pub fn genre(name: &str) -> GenreDto {
    GenreDto {
        name: Some(name.to_string()),
        ..Default::default()
    }
}

pub fn picture(content: &[u8]) -> PictureDto {
    PictureDto {
        content: Some(content.to_vec()),
        ..Default::default()
    }
}

pub struct MovieFactory {
    dto: MovieDto,
}

impl Default for MovieFactory {
    fn default() -> Self {
        Self {
            dto: MovieDto {
                id: None,
                czech_name: Some("Vetřelec".to_string()),
                original_name: Some("Alien".to_string()),
                year: Some(1979),
                language: Some(Language::En),
                subtitles: Some(vec![Language::Cz]),
                media: Some(vec![7020]),
                csfd: Some("8365-vetrelec".to_string()),
                imdb_code: Some(78748),
                wiki_en: Some("Alien_(film)".to_string()),
                wiki_cz: Some("Vetřelec_(film)".to_string()),
                picture: None,
                note: Some(String::new()),
                position: None,
                genres: Some(Vec::new()),
            },
        }
    }
}

impl MovieFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: &str) -> Self {
        Self::default().with_name(name)
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.dto.czech_name = Some(name.to_string());
        self.dto.original_name = Some(name.to_string());
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.dto.year = Some(year);
        self
    }

    pub fn with_media(mut self, media: Vec<i32>) -> Self {
        self.dto.media = Some(media);
        self
    }

    pub fn with_imdb_code(mut self, code: i32) -> Self {
        self.dto.imdb_code = Some(code);
        self
    }

    pub fn with_picture(mut self, picture: Option<i32>) -> Self {
        self.dto.picture = picture;
        self
    }

    pub fn with_genres(mut self, genres: Vec<GenreDto>) -> Self {
        self.dto.genres = Some(genres);
        self
    }

    pub fn build(self) -> MovieDto {
        self.dto
    }
}

pub struct ShowFactory {
    dto: ShowDto,
}

impl Default for ShowFactory {
    fn default() -> Self {
        Self {
            dto: ShowDto {
                id: None,
                czech_name: Some("Přátelé".to_string()),
                original_name: Some("Friends".to_string()),
                csfd: Some("70191-pratele".to_string()),
                imdb_code: Some(108778),
                wiki_en: Some("Friends".to_string()),
                wiki_cz: Some("Přátelé".to_string()),
                picture: None,
                note: Some(String::new()),
                position: None,
                genres: Some(Vec::new()),
            },
        }
    }
}

impl ShowFactory {
    pub fn named(name: &str) -> Self {
        let mut factory = Self::default();
        factory.dto.czech_name = Some(name.to_string());
        factory.dto.original_name = Some(name.to_string());
        factory
    }

    pub fn with_genres(mut self, genres: Vec<GenreDto>) -> Self {
        self.dto.genres = Some(genres);
        self
    }

    pub fn build(self) -> ShowDto {
        self.dto
    }
}

pub fn season(number: i32) -> SeasonDto {
    SeasonDto {
        id: None,
        number: Some(number),
        starting_year: Some(1994),
        ending_year: Some(1995),
        language: Some(Language::En),
        subtitles: Some(vec![Language::Cz, Language::En]),
        note: Some(String::new()),
        position: None,
    }
}

pub fn episode(number: i32, length: i32) -> EpisodeDto {
    EpisodeDto {
        id: None,
        number: Some(number),
        name: Some(format!("Episode {}", number)),
        length: Some(length),
        note: Some(String::new()),
        position: None,
    }
}

pub struct GameFactory {
    dto: GameDto,
}

impl GameFactory {
    pub fn named(name: &str) -> Self {
        Self {
            dto: GameDto {
                name: Some(name.to_string()),
                wiki_en: Some(String::new()),
                wiki_cz: Some(String::new()),
                media_count: Some(1),
                format: Some(Format::Cd),
                other_data: Some(String::new()),
                note: Some(String::new()),
                ..Default::default()
            },
        }
    }

    pub fn with_media_count(mut self, count: i32) -> Self {
        self.dto.media_count = Some(count);
        self
    }

    pub fn with_format(mut self, format: Format) -> Self {
        self.dto.format = Some(format);
        self
    }

    pub fn with_extras(mut self) -> Self {
        self.dto.crack = true;
        self.dto.saves = true;
        self
    }

    pub fn build(self) -> GameDto {
        self.dto
    }
}

pub fn music(name: &str, media_count: i32) -> MusicDto {
    MusicDto {
        id: None,
        name: Some(name.to_string()),
        wiki_en: Some(String::new()),
        wiki_cz: Some(String::new()),
        media_count: Some(media_count),
        note: Some(String::new()),
        position: None,
    }
}

pub fn song(name: &str, length: i32) -> SongDto {
    SongDto {
        id: None,
        name: Some(name.to_string()),
        length: Some(length),
        note: Some(String::new()),
        position: None,
    }
}

pub fn book(name: &str, languages: Vec<Language>) -> BookDto {
    BookDto {
        id: None,
        czech_name: Some(name.to_string()),
        original_name: Some(name.to_string()),
        languages: Some(languages),
        note: Some(String::new()),
        position: None,
    }
}
