//! Date reference parsing for calendar lookups

use crate::error::{MoodError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use regex::Regex;
use std::sync::OnceLock;

fn days_ago_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^(\d{1,4})\s+days?\s+ago$").unwrap())
}

/// A user-supplied reference to a calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateReference {
    Today,
    Yesterday,
    /// N days before today
    DaysAgo(u32),
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    Specific(NaiveDate),
}

impl DateReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => return Ok(DateReference::Today),
            "yesterday" => return Ok(DateReference::Yesterday),
            _ => {}
        }

        if let Some(caps) = days_ago_regex().captures(&normalized) {
            let days = caps[1]
                .parse()
                .map_err(|_| MoodError::InvalidDateReference(input.to_string()))?;
            return Ok(DateReference::DaysAgo(days));
        }

        if let Ok(weekday) = normalized.parse::<Weekday>() {
            return Ok(DateReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(&normalized, "%d-%m-%Y"))
            .map(DateReference::Specific)
            .map_err(|_| MoodError::InvalidDateReference(input.to_string()))
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::Yesterday => today - Duration::days(1),
            DateReference::DaysAgo(days) => today - Duration::days(*days as i64),
            DateReference::Weekday(target) => {
                let days_back = (today.weekday().num_days_from_monday() + 7
                    - target.num_days_from_monday())
                    % 7;
                today - Duration::days(days_back as i64)
            }
            DateReference::Specific(date) => *date,
        }
    }
}

/// Parse `YYYY-MM` into (year, month)
pub fn parse_month(input: &str) -> Result<(i32, u32)> {
    let date = NaiveDate::parse_from_str(&format!("{}-01", input.trim()), "%Y-%m-%d")
        .map_err(|_| MoodError::Config(format!("Invalid month: '{}'", input)))?;
    Ok((date.year(), date.month()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(DateReference::parse("Today").unwrap(), DateReference::Today);
        assert_eq!(DateReference::parse("now").unwrap(), DateReference::Today);
        assert_eq!(
            DateReference::parse(" yesterday ").unwrap(),
            DateReference::Yesterday
        );
    }

    #[test]
    fn test_parse_days_ago() {
        assert_eq!(
            DateReference::parse("3 days ago").unwrap(),
            DateReference::DaysAgo(3)
        );
        assert_eq!(
            DateReference::parse("1 day ago").unwrap(),
            DateReference::DaysAgo(1)
        );
    }

    #[test]
    fn test_parse_weekday_and_dates() {
        assert_eq!(
            DateReference::parse("monday").unwrap(),
            DateReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            DateReference::parse("2025-01-17").unwrap(),
            DateReference::Specific(date(2025, 1, 17))
        );
        assert_eq!(
            DateReference::parse("17-01-2025").unwrap(),
            DateReference::Specific(date(2025, 1, 17))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(DateReference::parse("someday").is_err());
        assert!(DateReference::parse("2025-13-01").is_err());
        assert!(DateReference::parse("days ago").is_err());
    }

    #[test]
    fn test_resolve() {
        // Friday
        let today = date(2025, 1, 17);
        assert_eq!(DateReference::Today.resolve(today), today);
        assert_eq!(DateReference::Yesterday.resolve(today), date(2025, 1, 16));
        assert_eq!(DateReference::DaysAgo(17).resolve(today), date(2024, 12, 31));
        assert_eq!(
            DateReference::Weekday(Weekday::Fri).resolve(today),
            today
        );
        assert_eq!(
            DateReference::Weekday(Weekday::Sat).resolve(today),
            date(2025, 1, 11)
        );
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(parse_month("2025-01").unwrap(), (2025, 1));
        assert!(parse_month("2025-1x").is_err());
        assert!(parse_month("january").is_err());
    }
}
