//! Calendar helpers shared by the domain services.
//!
//! Everything here works on calendar dates in the local timezone; time of day
//! never enters status or revenue calculations.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

use crate::backend::domain::error::DomainError;

/// Today's date in the local timezone
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse a `YYYY-MM-DD` date, naming the offending field on failure
pub fn parse_date(value: &str, field: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        DomainError::Validation(format!("Invalid {} '{}'. Use YYYY-MM-DD.", field, value))
    })
}

/// Whole calendar days from `today` until `date` (negative when in the past)
pub fn days_until(date: NaiveDate, today: NaiveDate) -> i64 {
    (date - today).num_days()
}

/// A calendar month used to attribute payments to revenue ("YYYY-MM")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ReferenceMonth {
    year: i32,
    month: u32,
}

impl ReferenceMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (0..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing `date`
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a strict `YYYY-MM` string
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let invalid =
            || DomainError::Validation(format!("Invalid reference month '{}'. Use YYYY-MM.", value));

        let value = value.trim();
        let (year_str, month_str) = value.split_once('-').ok_or_else(invalid)?;
        if year_str.len() != 4 || month_str.len() != 2 {
            return Err(invalid());
        }
        if !year_str.chars().chain(month_str.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }

        let year: i32 = year_str.parse().map_err(|_| invalid())?;
        let month: u32 = month_str.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The calendar month before this one
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { year: self.year - 1, month: 12 }
        } else {
            Self { year: self.year, month: self.month - 1 }
        }
    }

    /// The `count` months ending at this one, oldest first
    pub fn trailing(&self, count: usize) -> Vec<ReferenceMonth> {
        let mut months = Vec::with_capacity(count);
        let mut current = *self;
        for _ in 0..count {
            months.push(current);
            current = current.previous();
        }
        months.reverse();
        months
    }
}

impl fmt::Display for ReferenceMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(parse_date("2024-02-29", "due date").unwrap(), date("2024-02-29"));
        assert_eq!(parse_date(" 2024-01-05 ", "due date").unwrap(), date("2024-01-05"));

        let err = parse_date("2023-02-29", "due date").unwrap_err();
        assert!(err.to_string().contains("due date"));
        assert!(parse_date("05/01/2024", "due date").is_err());
        assert!(parse_date("", "due date").is_err());
    }

    #[test]
    fn test_days_until_uses_calendar_days() {
        let today = date("2024-03-10");
        assert_eq!(days_until(date("2024-03-09"), today), -1);
        assert_eq!(days_until(date("2024-03-10"), today), 0);
        assert_eq!(days_until(date("2024-03-17"), today), 7);
        assert_eq!(days_until(date("2024-04-10"), today), 31);
    }

    #[test]
    fn test_reference_month_parse() {
        let month = ReferenceMonth::parse("2024-07").unwrap();
        assert_eq!(month.year(), 2024);
        assert_eq!(month.month(), 7);
        assert_eq!(month.to_string(), "2024-07");

        ReferenceMonth::parse("2024-13").unwrap_err();
        ReferenceMonth::parse("2024-00").unwrap_err();
        ReferenceMonth::parse("2024-7").unwrap_err();
        ReferenceMonth::parse("24-07").unwrap_err();
        ReferenceMonth::parse("2024/07").unwrap_err();
        ReferenceMonth::parse("2024-07-01").unwrap_err();
        ReferenceMonth::parse("+024-07").unwrap_err();
    }

    #[test]
    fn test_reference_month_previous_crosses_year() {
        let january = ReferenceMonth::parse("2024-01").unwrap();
        assert_eq!(january.previous().to_string(), "2023-12");
        assert_eq!(ReferenceMonth::from_date(date("2024-03-31")).to_string(), "2024-03");
    }

    #[test]
    fn test_trailing_months_oldest_first() {
        let march = ReferenceMonth::parse("2024-03").unwrap();
        let labels: Vec<String> = march.trailing(6).iter().map(|m| m.to_string()).collect();
        assert_eq!(
            labels,
            vec!["2023-10", "2023-11", "2023-12", "2024-01", "2024-02", "2024-03"]
        );
    }
}
