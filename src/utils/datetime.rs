//! Date normalization helpers for date input fields
//!
//! Date fields store their value as a string: either an ISO-8601 timestamp at
//! midnight UTC (`2025-01-15T00:00:00.000Z`) or the [`INVALID_DATE`] sentinel.
//! Malformed input never produces an error; it normalizes to the sentinel so
//! that form validation can report it like any other field problem.

use chrono::{DateTime, Datelike, NaiveDate, SecondsFormat, TimeZone, Utc};

/// Format accepted when typing a date into a date field
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Placeholder shown in an empty date field
pub const INPUT_DATE_FORMAT_HINT: &str = "YYYY-MM-DD";

/// Normalized value of any date that could not be understood
pub const INVALID_DATE: &str = "Invalid Date";

/// Years that fit the four-digit ISO form
const ISO_YEARS: std::ops::RangeInclusive<i32> = 0..=9999;

fn in_iso_range(date: NaiveDate) -> bool {
    ISO_YEARS.contains(&date.year())
}

/// Parse a date string in YYYY-MM-DD format to NaiveDate
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, INPUT_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(INPUT_DATE_FORMAT).to_string()
}

/// Convert an optional calendar date to its normalized string form.
///
/// `None`, or a year outside 0000-9999, yields [`INVALID_DATE`].
pub fn to_iso_string(date: Option<NaiveDate>) -> String {
    let Some(midnight) = date.filter(|d| in_iso_range(*d)).and_then(|d| d.and_hms_opt(0, 0, 0)) else {
        return INVALID_DATE.to_string();
    };
    Utc.from_utc_datetime(&midnight)
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Convert a normalized (or plain `YYYY-MM-DD`) string back to a calendar date.
///
/// Returns `None` for blank input, the sentinel, or anything unparsable.
pub fn from_iso_string(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() || value == INVALID_DATE {
        return None;
    }

    let date = match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc).date_naive(),
        Err(_) => parse_date(value).ok()?,
    };
    in_iso_range(date).then_some(date)
}

/// Normalize what the user typed into a date field.
///
/// Blank input clears the field (empty string) so `required` rules can report
/// it; anything else becomes either an ISO timestamp or [`INVALID_DATE`].
pub fn normalize_date_input(input: &str) -> String {
    let input = input.trim();
    if input.is_empty() {
        return String::new();
    }
    to_iso_string(parse_date(input).ok())
}

/// Check whether a stored date value holds a real calendar date
pub fn is_valid_date_value(value: &str) -> bool {
    from_iso_string(value).is_some()
}

/// Render a stored date value back into the editable `YYYY-MM-DD` form
pub fn display_date_value(value: &str) -> String {
    match from_iso_string(value) {
        Some(date) => format_ymd(date),
        None => value.to_string(),
    }
}
