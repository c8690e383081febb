use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::errors::AppError;

static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:(\d+):)?([0-5]?\d):)?([0-5]?\d)$").expect("time pattern is valid")
});

/// A length in seconds, shown as `H:MM:SS`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Time(i64);

impl Time {
    pub fn from_seconds(seconds: i64) -> Self {
        Self(seconds)
    }

    pub fn seconds(&self) -> i64 {
        self.0
    }

    pub fn hours(&self) -> i64 {
        self.0 / 3600
    }

    pub fn minutes(&self) -> i64 {
        self.0 % 3600 / 60
    }

    pub fn secs(&self) -> i64 {
        self.0 % 60
    }
}

impl std::iter::Sum for Time {
    fn sum<I: Iterator<Item = Time>>(iter: I) -> Self {
        Time(iter.map(|t| t.0).sum())
    }
}

impl From<i32> for Time {
    fn from(seconds: i32) -> Self {
        Time(seconds as i64)
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours(), self.minutes(), self.secs())
    }
}

impl FromStr for Time {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let caps = TIME_PATTERN
            .captures(s.trim())
            .ok_or_else(|| AppError::InvalidInput(format!("Invalid time: {}", s)))?;

        let part = |i: usize| -> Result<i64, AppError> {
            match caps.get(i) {
                Some(m) => Ok(m.as_str().parse::<i64>()?),
                None => Ok(0),
            }
        };

        let rest = part(2)? * 60 + part(3)?;
        part(1)?
            .checked_mul(3600)
            .and_then(|hours| hours.checked_add(rest))
            .map(Time)
            .ok_or_else(|| AppError::InvalidInput(format!("Time out of range: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_hours_minutes_seconds() {
        assert_eq!(Time::from_seconds(0).to_string(), "0:00:00");
        assert_eq!(Time::from_seconds(5_430).to_string(), "1:30:30");
        assert_eq!(Time::from_seconds(100_000).to_string(), "27:46:40");
    }

    #[test]
    fn parses_partial_forms() {
        assert_eq!("1:30:30".parse::<Time>().unwrap().seconds(), 5_430);
        assert_eq!("3:05".parse::<Time>().unwrap().seconds(), 185);
        assert_eq!("42".parse::<Time>().unwrap().seconds(), 42);
        assert!("1:75".parse::<Time>().is_err());
        assert!("abc".parse::<Time>().is_err());
    }

    #[test]
    fn oversized_hours_are_rejected() {
        let err = "9999999999999999:00:00".parse::<Time>().unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
        assert!("99999999999999999999:00:00".parse::<Time>().is_err());
    }

    #[test]
    fn sums_lengths() {
        let total: Time = [100, 200, 300].into_iter().map(Time::from).sum();
        assert_eq!(total.seconds(), 600);
    }
}
