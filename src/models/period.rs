//! Requested calendar month, validated from MMYYYY user input

use std::fmt;

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from parsing a period string
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PeriodError {
    #[error("period must be exactly 6 digits (MMYYYY), got '{0}'")]
    BadFormat(String),
    #[error("month must be between 01 and 12, got {0:02}")]
    InvalidMonth(u32),
}

/// A calendar month, with its first and last day resolved up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub year: i32,
    pub month: u32,
    first_day: NaiveDate,
    last_day: NaiveDate,
}

impl Period {
    /// Parse a 6-digit MMYYYY string such as "072016".
    ///
    /// The last day of the month accounts for month length and leap years.
    pub fn parse(input: &str) -> Result<Self, PeriodError> {
        if input.len() != 6 || !input.chars().all(|c| c.is_ascii_digit()) {
            return Err(PeriodError::BadFormat(input.to_string()));
        }

        let month: u32 = input[..2]
            .parse()
            .map_err(|_| PeriodError::BadFormat(input.to_string()))?;
        let year: i32 = input[2..]
            .parse()
            .map_err(|_| PeriodError::BadFormat(input.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(PeriodError::InvalidMonth(month));
        }

        let first_day = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or(PeriodError::InvalidMonth(month))?;
        let (next_year, next_month) = if month == 12 {
            (year + 1, 1)
        } else {
            (year, month + 1)
        };
        let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|d| d.pred_opt())
            .ok_or(PeriodError::InvalidMonth(month))?;

        Ok(Self {
            year,
            month,
            first_day,
            last_day,
        })
    }

    /// First calendar day of the month
    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    /// Last calendar day of the month
    pub fn last_day(&self) -> NaiveDate {
        self.last_day
    }

    /// Compact MMYYYY form used in output file names
    pub fn compact(&self) -> String {
        format!("{:02}{:04}", self.month, self.year)
    }

    /// English month name, e.g. "February"
    pub fn month_name(&self) -> String {
        self.first_day.format("%B").to_string()
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_leap_february() {
        let period = Period::parse("022019").expect("parse");
        assert_eq!(period.year, 2019);
        assert_eq!(period.month, 2);
        assert_eq!(period.first_day(), NaiveDate::from_ymd_opt(2019, 2, 1).unwrap());
        assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2019, 2, 28).unwrap());
    }

    #[test]
    fn test_leap_february() {
        let period = Period::parse("022020").expect("parse");
        assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2020, 2, 29).unwrap());
    }

    #[test]
    fn test_december_rolls_into_next_year() {
        let period = Period::parse("122019").expect("parse");
        assert_eq!(period.last_day(), NaiveDate::from_ymd_opt(2019, 12, 31).unwrap());
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert_eq!(
            Period::parse("02201"),
            Err(PeriodError::BadFormat("02201".to_string()))
        );
        assert_eq!(
            Period::parse("0220199"),
            Err(PeriodError::BadFormat("0220199".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_digit_input() {
        assert_eq!(
            Period::parse("13 019"),
            Err(PeriodError::BadFormat("13 019".to_string()))
        );
        assert_eq!(
            Period::parse("ab2019"),
            Err(PeriodError::BadFormat("ab2019".to_string()))
        );
    }

    #[test]
    fn test_rejects_invalid_month() {
        assert_eq!(Period::parse("132019"), Err(PeriodError::InvalidMonth(13)));
        assert_eq!(Period::parse("002019"), Err(PeriodError::InvalidMonth(0)));
    }

    #[test]
    fn test_display_and_compact() {
        let period = Period::parse("022019").expect("parse");
        assert_eq!(period.to_string(), "02/2019");
        assert_eq!(period.compact(), "022019");
        assert_eq!(period.month_name(), "February");
    }
}
