//! # Report Periods
//!
//! Calendar windows used by the booking sheets. A booking belongs to a
//! period when its check-in (in UTC) falls inside it.
//!
//! Each period renders to a key that matches SQLite's `strftime` output for
//! the same granularity:
//!
//! | Period | Key          | strftime pattern |
//! |--------|--------------|------------------|
//! | Day    | `2026-03-01` | `%Y-%m-%d`       |
//! | Month  | `2026-03`    | `%Y-%m`          |
//! | Year   | `2026`       | `%Y`             |

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;
use crate::validation::ValidationResult;

/// A day, month or year window for booking sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum ReportPeriod {
    Day { date: NaiveDate },
    Month { year: i32, month: u32 },
    Year { year: i32 },
}

impl ReportPeriod {
    pub fn day(date: NaiveDate) -> Self {
        ReportPeriod::Day { date }
    }

    /// Creates a month window. `month` is 1-based.
    pub fn month(year: i32, month: u32) -> ValidationResult<Self> {
        validate_year(year)?;
        if !(1..=12).contains(&month) {
            return Err(ValidationError::OutOfRange {
                field: "month".to_string(),
                min: 1,
                max: 12,
            });
        }
        Ok(ReportPeriod::Month { year, month })
    }

    pub fn year(year: i32) -> ValidationResult<Self> {
        validate_year(year)?;
        Ok(ReportPeriod::Year { year })
    }

    /// Parses a `YYYY-MM-DD` day.
    pub fn parse_day(s: &str) -> ValidationResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(ReportPeriod::day)
            .map_err(|e| ValidationError::InvalidFormat {
                field: "date".to_string(),
                reason: e.to_string(),
            })
    }

    /// Key compared against `strftime(<pattern>, check_in)`.
    pub fn key(&self) -> String {
        match self {
            ReportPeriod::Day { date } => date.format("%Y-%m-%d").to_string(),
            ReportPeriod::Month { year, month } => format!("{:04}-{:02}", year, month),
            ReportPeriod::Year { year } => format!("{:04}", year),
        }
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}

fn validate_year(year: i32) -> ValidationResult<()> {
    if !(1..=9999).contains(&year) {
        return Err(ValidationError::OutOfRange {
            field: "year".to_string(),
            min: 1,
            max: 9999,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_strftime_layout() {
        let day = ReportPeriod::day(NaiveDate::from_ymd_opt(2026, 3, 7).unwrap());
        assert_eq!(day.key(), "2026-03-07");
        assert_eq!(ReportPeriod::month(2026, 3).unwrap().key(), "2026-03");
        assert_eq!(ReportPeriod::year(2026).unwrap().key(), "2026");
        assert_eq!(ReportPeriod::year(987).unwrap().key(), "0987");
    }

    #[test]
    fn test_month_bounds() {
        assert!(ReportPeriod::month(2026, 1).is_ok());
        assert!(ReportPeriod::month(2026, 12).is_ok());
        assert!(ReportPeriod::month(2026, 0).is_err());
        assert!(ReportPeriod::month(2026, 13).is_err());
        assert!(ReportPeriod::month(0, 5).is_err());
    }

    #[test]
    fn test_parse_day() {
        assert_eq!(
            ReportPeriod::parse_day(" 2026-02-28 ").unwrap().key(),
            "2026-02-28"
        );
        assert!(ReportPeriod::parse_day("2026-02-30").is_err());
        assert!(ReportPeriod::parse_day("28/02/2026").is_err());
    }
}
