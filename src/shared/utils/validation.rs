use chrono::Datelike;

use crate::shared::validation::ValidationResult;

/// Lowest year accepted for movies, seasons and other dated records
pub const MIN_YEAR: i32 = 1930;

/// Highest IMDB code accepted; `-1` means "no IMDB page"
pub const MAX_IMDB_CODE: i32 = 9_999_999;

pub struct Validator;

impl Validator {
    pub fn current_year() -> i32 {
        chrono::Utc::now().year()
    }

    pub fn require_present<T>(result: &mut ValidationResult, value: &Option<T>, field: &str) -> bool {
        if value.is_none() {
            result.add_error(format!("{} mustn't be null.", field));
            return false;
        }
        true
    }

    pub fn require_not_blank(result: &mut ValidationResult, value: &Option<String>, field: &str) {
        match value {
            None => result.add_error(format!("{} mustn't be null.", field)),
            Some(v) if v.trim().is_empty() => {
                result.add_error(format!("{} mustn't be empty string.", field))
            }
            Some(_) => {}
        }
    }

    pub fn require_year(result: &mut ValidationResult, value: Option<i32>, field: &str) {
        let max = Self::current_year();
        match value {
            None => result.add_error(format!("{} mustn't be null.", field)),
            Some(year) if !(MIN_YEAR..=max).contains(&year) => result.add_error(format!(
                "{} must be between {} and {}.",
                field, MIN_YEAR, max
            )),
            Some(_) => {}
        }
    }

    pub fn require_non_negative(result: &mut ValidationResult, value: Option<i32>, field: &str) {
        match value {
            None => result.add_error(format!("{} mustn't be null.", field)),
            Some(v) if v < 0 => result.add_error(format!("{} mustn't be negative number.", field)),
            Some(_) => {}
        }
    }

    pub fn require_positive(result: &mut ValidationResult, value: Option<i32>, field: &str) {
        match value {
            None => result.add_error(format!("{} mustn't be null.", field)),
            Some(v) if v <= 0 => result.add_error(format!("{} must be positive number.", field)),
            Some(_) => {}
        }
    }

    pub fn require_imdb_code(result: &mut ValidationResult, value: Option<i32>) {
        match value {
            None => result.add_error("IMDB code mustn't be null."),
            Some(-1) => {}
            Some(code) if !(1..=MAX_IMDB_CODE).contains(&code) => result.add_error(format!(
                "IMDB code must be between 1 and {} or -1.",
                MAX_IMDB_CODE
            )),
            Some(_) => {}
        }
    }

    /// Each length must be present and non-negative
    pub fn require_lengths(result: &mut ValidationResult, value: &Option<Vec<i32>>, field: &str) {
        match value {
            None => result.add_error(format!("{} mustn't be null.", field)),
            Some(lengths) => {
                if lengths.iter().any(|l| *l < 0) {
                    result.add_error(format!("{} mustn't contain negative lengths.", field));
                }
            }
        }
    }

    pub fn require_year_order(result: &mut ValidationResult, start: Option<i32>, end: Option<i32>) {
        if let (Some(start), Some(end)) = (start, end) {
            if start > end {
                result.add_error("Starting year mustn't be greater than ending year.");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_missing_strings_are_rejected() {
        let mut result = ValidationResult::valid();
        Validator::require_not_blank(&mut result, &None, "Name");
        Validator::require_not_blank(&mut result, &Some("  ".to_string()), "Name");
        Validator::require_not_blank(&mut result, &Some("Alien".to_string()), "Name");

        assert_eq!(
            result.errors,
            vec!["Name mustn't be null.", "Name mustn't be empty string."]
        );
    }

    #[test]
    fn year_range_is_enforced() {
        let mut result = ValidationResult::valid();
        Validator::require_year(&mut result, Some(MIN_YEAR - 1), "Year");
        Validator::require_year(&mut result, Some(Validator::current_year() + 1), "Year");
        Validator::require_year(&mut result, Some(2000), "Year");

        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn imdb_code_accepts_sentinel() {
        let mut result = ValidationResult::valid();
        Validator::require_imdb_code(&mut result, Some(-1));
        Validator::require_imdb_code(&mut result, Some(1_234));
        assert!(result.is_valid());

        Validator::require_imdb_code(&mut result, Some(0));
        Validator::require_imdb_code(&mut result, Some(MAX_IMDB_CODE + 1));
        assert_eq!(result.errors.len(), 2);
    }

    #[test]
    fn negative_lengths_are_rejected() {
        let mut result = ValidationResult::valid();
        Validator::require_lengths(&mut result, &Some(vec![100, -1]), "Media");
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn starting_year_after_ending_year_is_rejected() {
        let mut result = ValidationResult::valid();
        Validator::require_year_order(&mut result, Some(2001), Some(2000));
        assert!(!result.is_valid());
    }
}
