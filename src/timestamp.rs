//! Parsing date strings and pulling timestamps and clock times out of dates.

use std::fmt;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use tracing::trace;

use crate::{
    CalendarDate, ParseError,
    consts::{DATE_FORMATS, DATE_TIME_FORMATS, UTC_SUFFIXES},
};

/// Parses a date string into a UTC instant.
///
/// Accepts RFC 3339 (`2024-02-01T15:00:00.000Z`), zone-less or `UTC`/`GMT`
/// suffixed layouts such as `01 Jan 1970 00:00:00 UTC` or `2024-02-01`, and
/// finally RFC 2822. Strings without an explicit offset are read as UTC.
///
/// # Errors
/// Returns `ParseError::EmptyInput` for blank input and
/// `ParseError::InvalidFormat` when no layout matches.
pub fn parse_date(input: &str) -> Result<CalendarDate, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    let naive = strip_utc_suffix(trimmed);
    if let Some(dt) = parse_naive(naive) {
        return Ok(dt.and_utc());
    }

    if let Ok(dt) = DateTime::parse_from_rfc2822(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    trace!(input = trimmed, "no known date layout matched");
    Err(ParseError::InvalidFormat(trimmed.to_owned()))
}

/// Milliseconds since the Unix epoch for a date string.
///
/// # Errors
/// Propagates any `ParseError` from [`parse_date`].
pub fn date_to_timestamp(input: &str) -> Result<i64, ParseError> {
    Ok(parse_date(input)?.timestamp_millis())
}

/// Zero-padded 24-hour `HH:MM:SS` in the zone carried by `date`.
pub fn get_time<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    date.format("%H:%M:%S").to_string()
}

/// `HH:MM:SS` of `date` on the host's local clock.
pub fn get_local_time(date: &CalendarDate) -> String {
    get_time(&date.with_timezone(&Local))
}

fn strip_utc_suffix(s: &str) -> &str {
    UTC_SUFFIXES
        .iter()
        .find_map(|suffix| s.strip_suffix(suffix))
        .map_or(s, str::trim_end)
}

fn parse_naive(s: &str) -> Option<NaiveDateTime> {
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}
