use std::fmt;

use chrono::{Datelike, NaiveDate};

use crate::error::{Error, Result};

/// A calendar date stored as an INTEGER `YYYYMMDD` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse exactly eight ASCII digits forming a real `YYYYMMDD` date.
    pub fn parse(input: &str) -> Result<Self> {
        if input.len() != 8 {
            return Err(invalid(input, "expected 8 digits (YYYYMMDD)"));
        }
        if !input.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid(input, "only digits are allowed"));
        }

        let year: i32 = input[0..4].parse().map_err(|_| invalid(input, "bad year"))?;
        let month: u32 = input[4..6].parse().map_err(|_| invalid(input, "bad month"))?;
        let day: u32 = input[6..8].parse().map_err(|_| invalid(input, "bad day"))?;

        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| invalid(input, "not a calendar date"))
    }

    /// Decode the integer column representation.
    pub fn from_storage(value: i64) -> Result<Self> {
        Self::parse(&format!("{:08}", value))
    }

    pub fn to_storage(self) -> i64 {
        let d = self.0;
        i64::from(d.year()) * 10_000 + i64::from(d.month()) * 100 + i64::from(d.day())
    }

    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d"))
    }
}

fn invalid(input: &str, reason: &'static str) -> Error {
    Error::InvalidDate {
        input: input.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let date = CalendarDate::parse("19900101").unwrap();
        assert_eq!(date.date(), NaiveDate::from_ymd_opt(1990, 1, 1).unwrap());
        assert_eq!(date.to_string(), "19900101");
        assert_eq!(date.to_storage(), 19_900_101);
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(CalendarDate::parse("20000229").is_ok());
        assert!(CalendarDate::parse("19000229").is_err());
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!(matches!(
            CalendarDate::parse("1990011"),
            Err(Error::InvalidDate { .. })
        ));
        assert!(CalendarDate::parse("199001011").is_err());
        assert!(CalendarDate::parse("").is_err());
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert!(CalendarDate::parse("1990-1-1").is_err());
        assert!(CalendarDate::parse("+1990101").is_err());
        assert!(CalendarDate::parse("199O0101").is_err());
    }

    #[test]
    fn test_parse_rejects_impossible_dates() {
        assert!(CalendarDate::parse("19901301").is_err());
        assert!(CalendarDate::parse("19900431").is_err());
        assert!(CalendarDate::parse("19900100").is_err());
    }

    #[test]
    fn test_storage_roundtrip_keeps_leading_zero_years() {
        let date = CalendarDate::parse("00991231").unwrap();
        assert_eq!(date.to_storage(), 991_231);
        assert_eq!(CalendarDate::from_storage(991_231).unwrap(), date);
    }

    #[test]
    fn test_from_storage_rejects_garbage() {
        assert!(CalendarDate::from_storage(20241340).is_err());
        assert!(CalendarDate::from_storage(-1).is_err());
    }
}
