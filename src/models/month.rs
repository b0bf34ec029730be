use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

/// A calendar month, written `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(format!("{year:04}-{month:02}")));
        }
        Ok(Self { year, month })
    }

    pub fn of(date: &NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl FromStr for YearMonth {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        let raw = s.trim();
        let (y, m) = raw
            .split_once('-')
            .ok_or_else(|| AppError::InvalidMonth(raw.to_string()))?;

        if y.len() != 4 || m.len() != 2 {
            return Err(AppError::InvalidMonth(raw.to_string()));
        }

        let year: i32 = y
            .parse()
            .map_err(|_| AppError::InvalidMonth(raw.to_string()))?;
        let month: u32 = m
            .parse()
            .map_err(|_| AppError::InvalidMonth(raw.to_string()))?;

        Self::new(year, month).map_err(|_| AppError::InvalidMonth(raw.to_string()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_displays() {
        let ym: YearMonth = "2025-10".parse().unwrap();
        assert_eq!(ym, YearMonth { year: 2025, month: 10 });
        assert_eq!(ym.to_string(), "2025-10");
    }

    #[test]
    fn rejects_bad_input() {
        assert!("2025-13".parse::<YearMonth>().is_err());
        assert!("2025-1".parse::<YearMonth>().is_err());
        assert!("october".parse::<YearMonth>().is_err());
    }

    #[test]
    fn orders_chronologically() {
        let a: YearMonth = "2024-12".parse().unwrap();
        let b: YearMonth = "2025-01".parse().unwrap();
        assert!(a < b);
    }
}
