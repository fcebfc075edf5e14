//! Calendar date validation for three fixed textual formats

use crate::error::{Outcome, ValidationError};
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static ISO_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{4})-([0-9]{2})-([0-9]{2})$").unwrap()
});

static SLASH_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").unwrap()
});

/// Supported date layouts
///
/// Both `/` layouts share one shape; which field is the month is decided
/// only by the declared format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[serde(rename = "YYYY-MM-DD")]
    YearMonthDay,
    #[serde(rename = "MM/DD/YYYY")]
    MonthDayYear,
    #[serde(rename = "DD/MM/YYYY")]
    DayMonthYear,
}

impl DateFormat {
    pub fn token(&self) -> &'static str {
        match self {
            DateFormat::YearMonthDay => "YYYY-MM-DD",
            DateFormat::MonthDayYear => "MM/DD/YYYY",
            DateFormat::DayMonthYear => "DD/MM/YYYY",
        }
    }

    fn shape(&self) -> &'static Regex {
        match self {
            DateFormat::YearMonthDay => &*ISO_SHAPE,
            DateFormat::MonthDayYear | DateFormat::DayMonthYear => &*SLASH_SHAPE,
        }
    }

    /// Capture-group positions of (year, month, day)
    fn field_order(&self) -> (usize, usize, usize) {
        match self {
            DateFormat::YearMonthDay => (1, 2, 3),
            DateFormat::MonthDayYear => (3, 1, 2),
            DateFormat::DayMonthYear => (3, 2, 1),
        }
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for DateFormat {
    type Err = ValidationError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "YYYY-MM-DD" => Ok(DateFormat::YearMonthDay),
            "MM/DD/YYYY" => Ok(DateFormat::MonthDayYear),
            "DD/MM/YYYY" => Ok(DateFormat::DayMonthYear),
            other => Err(ValidationError::unsupported(format!(
                "unsupported date format '{}'",
                other
            ))),
        }
    }
}

/// Validates a date written in the layout named by `format`
///
/// `format` must be one of `YYYY-MM-DD`, `MM/DD/YYYY` or `DD/MM/YYYY`.
/// The original string is returned unchanged.
///
/// # Examples
/// ```
/// use rusty_validators::validate_date;
///
/// assert_eq!(validate_date("01/12/2024", "MM/DD/YYYY").unwrap(), "01/12/2024");
/// assert!(validate_date("01-12-2024", "MM/DD/YYYY").is_err());
/// assert!(validate_date("2023-02-29", "YYYY-MM-DD").is_err());
/// ```
pub fn validate_date(date: &str, format: &str) -> Outcome<String> {
    let result = format
        .parse::<DateFormat>()
        .and_then(|format| check_date(date, format));
    log_result(&result);
    result
}

/// Same as [`validate_date`] with an already-parsed format
pub fn validate_date_with(date: &str, format: DateFormat) -> Outcome<String> {
    let result = check_date(date, format);
    log_result(&result);
    result
}

fn log_result(result: &Outcome<String>) {
    match result {
        Ok(_) => tracing::trace!("date accepted"),
        Err(e) => tracing::debug!("date rejected: {}", e),
    }
}

fn check_date(date: &str, format: DateFormat) -> Outcome<String> {
    let caps = format.shape().captures(date).ok_or_else(|| {
        ValidationError::format(format!("date must be in {} format", format))
    })?;

    let (y, m, d) = format.field_order();
    // The shape guarantees ASCII digits of bounded width
    let field = |i: usize| caps[i].parse::<u32>().unwrap_or(0);
    let (year, month, day) = (field(y) as i32, field(m), field(d));

    if !(1..=12).contains(&month) {
        return Err(ValidationError::range(format!(
            "month must be between 1 and 12 (got {})",
            month
        )));
    }

    let max_day = days_in_month(year, month);
    if day < 1 || day > max_day {
        return Err(ValidationError::range(format!(
            "day must be between 1 and {} (got {})",
            max_day, day
        )));
    }

    Ok(date.to_string())
}

/// Number of days in `month` of `year` in the proleptic Gregorian calendar
///
/// `month` must be in 1..=12.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_formats() {
        assert_eq!(validate_date("2024-12-01", "YYYY-MM-DD").unwrap(), "2024-12-01");
        assert_eq!(validate_date("12/01/2024", "MM/DD/YYYY").unwrap(), "12/01/2024");
        assert_eq!(validate_date("01/12/2024", "DD/MM/YYYY").unwrap(), "01/12/2024");
    }

    #[test]
    fn test_field_order_follows_declared_format() {
        assert!(validate_date("13/01/2024", "DD/MM/YYYY").is_ok());
        assert_eq!(
            validate_date("13/01/2024", "MM/DD/YYYY").unwrap_err().kind(),
            ErrorKind::Range
        );
    }

    #[test]
    fn test_shape_mismatch() {
        for (date, format) in [
            ("01-12-2024", "MM/DD/YYYY"),
            ("2024/12/01", "YYYY-MM-DD"),
            ("1/12/2024", "DD/MM/YYYY"),
            ("2024-12-01 ", "YYYY-MM-DD"),
            ("", "YYYY-MM-DD"),
        ] {
            assert_eq!(validate_date(date, format).unwrap_err().kind(), ErrorKind::Format);
        }
    }

    #[test]
    fn test_unsupported_format() {
        assert_eq!(
            validate_date("2024-12-01", "YYYY/MM/DD").unwrap_err(),
            ValidationError::Unsupported("unsupported date format 'YYYY/MM/DD'".to_string())
        );
    }

    #[test]
    fn test_month_and_day_ranges() {
        assert_eq!(validate_date("2024-00-10", "YYYY-MM-DD").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(validate_date("2024-13-10", "YYYY-MM-DD").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(validate_date("2024-01-00", "YYYY-MM-DD").unwrap_err().kind(), ErrorKind::Range);
        assert_eq!(validate_date("2024-04-31", "YYYY-MM-DD").unwrap_err().kind(), ErrorKind::Range);
        assert!(validate_date("2024-01-31", "YYYY-MM-DD").is_ok());
    }

    #[test]
    fn test_leap_years() {
        assert!(validate_date("2024-02-29", "YYYY-MM-DD").is_ok());
        assert!(validate_date("2023-02-29", "YYYY-MM-DD").is_err());
        assert!(validate_date("2000-02-29", "YYYY-MM-DD").is_ok());
        assert!(validate_date("1900-02-29", "YYYY-MM-DD").is_err());
        assert!(validate_date("29/02/2024", "DD/MM/YYYY").is_ok());
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 11), 30);
        assert_eq!(days_in_month(0, 2), 29);
    }

    #[test]
    fn test_typed_entry_point() {
        assert!(validate_date_with("2024-02-29", DateFormat::YearMonthDay).is_ok());
        assert_eq!("DD/MM/YYYY".parse::<DateFormat>(), Ok(DateFormat::DayMonthYear));
        assert_eq!(DateFormat::MonthDayYear.to_string(), "MM/DD/YYYY");
    }
}
