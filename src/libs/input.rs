//! Parsing of raw roster input into typed values.
//!
//! Everything a user can type (the employee list, dates, weekday names, edit
//! type, shift times) passes through here before a
//! [`ScheduleRequest`](super::schedule::ScheduleRequest) is built. Parsing is
//! deliberately shallow: shift times that do not look like `HH:MM` are passed
//! through untouched, and an empty employee list is valid.

use super::shift::EditType;
use chrono::{Local, NaiveDate, NaiveTime, Weekday};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum InputParseError {
    #[error("Invalid date '{0}', expected YYYY-MM-DD, D/M/YYYY or 'today'")]
    InvalidDate(String),

    #[error("End date {end} is before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("Malformed employee ID '{id}' on line {line}")]
    MalformedEmployeeId { line: usize, id: String },

    #[error("Unknown weekday '{0}'")]
    UnknownWeekday(String),

    #[error("Unknown edit type '{0}', expected ADD or DELETE")]
    UnknownEditType(String),
}

/// Splits newline-separated text into employee IDs.
///
/// Lines are trimmed and blank lines dropped; order and duplicates are kept.
pub fn parse_employee_ids(text: &str) -> Result<Vec<String>, InputParseError> {
    let mut ids = vec![];
    for (index, line) in text.lines().enumerate() {
        let id = line.trim();
        if id.is_empty() {
            continue;
        }
        // Anything here would break a comma-separated import row
        if id.chars().any(|c| c == ',' || c == '"' || c.is_control()) {
            return Err(InputParseError::MalformedEmployeeId {
                line: index + 1,
                id: id.to_string(),
            });
        }
        ids.push(id.to_string());
    }
    Ok(ids)
}

pub fn parse_date(text: &str) -> Result<NaiveDate, InputParseError> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("today") {
        return Ok(Local::now().date_naive());
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%d/%m/%Y"))
        .map_err(|_| InputParseError::InvalidDate(text.to_string()))
}

pub fn parse_range(start: &str, end: &str) -> Result<(NaiveDate, NaiveDate), InputParseError> {
    let start = parse_date(start)?;
    let end = parse_date(end)?;
    if end < start {
        return Err(InputParseError::InvalidRange { start, end });
    }
    Ok((start, end))
}

/// Accepts full English names and three-letter abbreviations, any case.
pub fn parse_weekday(text: &str) -> Result<Weekday, InputParseError> {
    let text = text.trim();
    text.parse::<Weekday>().map_err(|_| InputParseError::UnknownWeekday(text.to_string()))
}

/// Parses a comma-separated weekday list such as `sat,sun`.
pub fn parse_weekdays<S: AsRef<str>>(items: &[S]) -> Result<HashSet<Weekday>, InputParseError> {
    let mut days = HashSet::new();
    for item in items {
        for part in item.as_ref().split(',').filter(|p| !p.trim().is_empty()) {
            days.insert(parse_weekday(part)?);
        }
    }
    Ok(days)
}

pub fn parse_edit_type(text: &str) -> Result<EditType, InputParseError> {
    match text.trim().to_ascii_uppercase().as_str() {
        "ADD" => Ok(EditType::Add),
        "DELETE" => Ok(EditType::Delete),
        _ => Err(InputParseError::UnknownEditType(text.trim().to_string())),
    }
}

/// Renders `H:MM` / `HH:MM` as zero-padded `HH:MM`.
///
/// Returns `None` when the text is not a 24-hour time; callers keep the raw
/// value in that case.
pub fn normalize_time(text: &str) -> Option<String> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M").ok().map(|time| time.format("%H:%M").to_string())
}
