//! Calendar date helpers for book metadata.
//!
//! # Responsibility
//! - Parse `dd/MM/yyyy` literals into calendar dates.
//! - Render the display year used by list rows.
//!
//! # Invariants
//! - Parsing is strict: exactly two-digit day, two-digit month, four-digit year.
//! - Impossible calendar dates are rejected, never normalized into the next month.
//! - Dates carry no time or zone. They behave as UTC calendar dates, so the
//!   rendered year never depends on the host's local timezone.

use chrono::{Datelike, NaiveDate};
use log::warn;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static DAY_MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{2})/([0-9]{2})/([0-9]{4})$").expect("valid day/month/year regex")
});

/// Why a date literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidDateReason {
    /// Input does not have the `dd/MM/yyyy` shape.
    Malformed,
    /// Shape is valid but the day does not exist in that month/year.
    OutOfRange,
}

/// Error returned when a date literal cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidDateFormat {
    /// Rejected input, verbatim.
    pub input: String,
    pub reason: InvalidDateReason,
}

impl InvalidDateFormat {
    fn new(input: &str, reason: InvalidDateReason) -> Self {
        Self {
            input: input.to_string(),
            reason,
        }
    }
}

impl Display for InvalidDateFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            InvalidDateReason::Malformed => {
                write!(f, "invalid date `{}`: expected dd/MM/yyyy", self.input)
            }
            InvalidDateReason::OutOfRange => {
                write!(f, "invalid date `{}`: no such calendar day", self.input)
            }
        }
    }
}

impl Error for InvalidDateFormat {}

/// Parses a `dd/MM/yyyy` date string, e.g. `"04/06/2015"`.
///
/// # Errors
/// - `InvalidDateReason::Malformed` when the shape does not match exactly
///   (surrounding whitespace included).
/// - `InvalidDateReason::OutOfRange` for impossible days such as `31/02/2016`.
pub fn parse_date(value: &str) -> Result<NaiveDate, InvalidDateFormat> {
    let Some(captures) = DAY_MONTH_YEAR_RE.captures(value) else {
        warn!("event=date_parse module=date status=error reason=malformed");
        return Err(InvalidDateFormat::new(value, InvalidDateReason::Malformed));
    };

    // Captures are ASCII digits of fixed width, so these cannot overflow.
    let day: u32 = captures[1].parse().unwrap_or(0);
    let month: u32 = captures[2].parse().unwrap_or(0);
    let year: i32 = captures[3].parse().unwrap_or(0);

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        warn!("event=date_parse module=date status=error reason=out_of_range");
        InvalidDateFormat::new(value, InvalidDateReason::OutOfRange)
    })
}

/// Returns the four-digit calendar year of `date`.
pub fn year(date: &NaiveDate) -> String {
    format!("{:04}", date.year())
}
