//! US-style 12-hour rendering of instants.

use chrono::{Datelike, Timelike};

use crate::{CalendarDate, ParseError, parse_date, prelude::*};

const NOON: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
enum Meridiem {
    #[display(fmt = "AM")]
    Am,
    #[display(fmt = "PM")]
    Pm,
}

/// Renders an ISO 8601 string as `M/D/YYYY, h:mm:ss AM|PM` in UTC.
///
/// # Errors
/// Propagates any `ParseError` from [`parse_date`].
pub fn format_date(input: &str) -> Result<String, ParseError> {
    Ok(format_date_time(&parse_date(input)?))
}

/// Renders `date` as `M/D/YYYY, h:mm:ss AM|PM` in UTC.
///
/// Only afternoon hours are folded onto the 12-hour dial: the midnight hour
/// prints as `0`, noon as `12`. Month, day and hour are not padded.
pub fn format_date_time(date: &CalendarDate) -> String {
    let (hour, meridiem) = match date.hour() {
        h if h < NOON => (h, Meridiem::Am),
        NOON => (NOON, Meridiem::Pm),
        h => (h - NOON, Meridiem::Pm),
    };

    format!(
        "{}/{}/{}, {}:{:02}:{:02} {}",
        date.month(),
        date.day(),
        date.year(),
        hour,
        date.minute(),
        date.second(),
        meridiem
    )
}
