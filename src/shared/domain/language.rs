use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

/// Spoken or subtitle language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Language {
    Cz,
    En,
    Fr,
    Jp,
    Sk,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Cz => "CZ",
            Language::En => "EN",
            Language::Fr => "FR",
            Language::Jp => "JP",
            Language::Sk => "SK",
        }
    }

    /// Parse stored codes, failing on the first unknown one
    pub fn parse_all(codes: &[String]) -> Result<Vec<Language>, AppError> {
        codes.iter().map(|c| c.parse()).collect()
    }

    pub fn codes(languages: &[Language]) -> Vec<String> {
        languages.iter().map(|l| l.code().to_string()).collect()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "CZ" => Ok(Language::Cz),
            "EN" => Ok(Language::En),
            "FR" => Ok(Language::Fr),
            "JP" => Ok(Language::Jp),
            "SK" => Ok(Language::Sk),
            _ => Err(AppError::InvalidInput(format!("Unknown language: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip() {
        let all = [Language::Cz, Language::En, Language::Fr, Language::Jp, Language::Sk];
        let codes = Language::codes(&all);
        assert_eq!(Language::parse_all(&codes).unwrap(), all.to_vec());
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert!("de".parse::<Language>().is_err());
    }
}
