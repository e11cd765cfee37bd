//! Server-side date input parsing and display formatting.
//!
//! The accepted input shapes are the same ones the browser script accepts,
//! so both sides reach the same verdict for the same raw text. chrono alone
//! is more lenient than that (leap seconds, a `+` sign on the year, padding
//! inside the value), so input is matched against [`INPUT_SHAPE`] first.

use std::sync::LazyLock;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

use crate::types::DateValue;

/// Format used when redisplaying a date in the form (`MM/dd/yyyy`).
pub const SHORT_DATE_FORMAT: &str = "%m/%d/%Y";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", SHORT_DATE_FORMAT];

/// Digits and separators only: `yyyy-MM-dd[( |T)HH:mm[:ss]]` or
/// `MM/dd/yyyy[ HH:mm[:ss]]`.
const INPUT_SHAPE: &str = concat!(
    r"^(?:[0-9]{1,4}-[0-9]{1,2}-[0-9]{1,2}(?:[T ][0-9]{1,2}:[0-9]{1,2}(?::[0-9]{1,2})?)?",
    r"|[0-9]{1,2}/[0-9]{1,2}/[0-9]{1,4}(?: [0-9]{1,2}:[0-9]{1,2}(?::[0-9]{1,2})?)?)$",
);

static INPUT_SHAPE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(INPUT_SHAPE).expect("valid regex"));

/// Parse raw user input into a date.
///
/// Returns `None` for empty or unparsable input. Date-only input is midnight.
pub fn parse_date_input(raw: &str) -> Option<DateValue> {
    let raw = raw.trim();
    if raw.is_empty() || !INPUT_SHAPE_RE.is_match(raw) {
        return None;
    }

    DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        // chrono reads `:60` as a leap second.
        .filter(|value| value.nanosecond() < 1_000_000_000)
}

/// Render a date for redisplay in the form.
///
/// Midnight values render as `MM/dd/yyyy`; anything else keeps `HH:MM`.
pub fn format_short_date(value: &DateValue) -> String {
    if value.time() == NaiveTime::MIN {
        value.format(SHORT_DATE_FORMAT).to_string()
    } else if value.second() == 0 {
        value.format("%m/%d/%Y %H:%M").to_string()
    } else {
        value.format("%m/%d/%Y %H:%M:%S").to_string()
    }
}
