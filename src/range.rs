use std::str::FromStr;

use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::{
    CalendarDate, ParseError, PERIOD_SEPARATOR,
    consts::{MIN_PERIOD_DAYS, MS_PER_DAY},
    parse_date,
    prelude::*,
};

/// Represents a period between two instants (inclusive at both ends).
/// The start must be less than or equal to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(
    fmt = "{}/{}",
    "start.to_rfc3339_opts(SecondsFormat::AutoSi, true)",
    "end.to_rfc3339_opts(SecondsFormat::AutoSi, true)"
)]
pub struct DatePeriod {
    start: CalendarDate,
    end:   CalendarDate,
}

/// Error type for date period operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start is after end.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDate, end: CalendarDate },

    /// Error parsing one of the endpoints.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// Invalid period format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DatePeriod {
    /// Creates a new period with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDate, end: CalendarDate) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the start of the period
    pub const fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the end of the period
    pub const fn end(&self) -> CalendarDate {
        self.end
    }

    /// Returns both ends as a tuple
    pub const fn dates(&self) -> (CalendarDate, CalendarDate) {
        (self.start, self.end)
    }

    /// Checks if `date` lies within the period, boundaries included
    pub fn contains(&self, date: &CalendarDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Inclusive day count: whole days between the ends plus one.
    ///
    /// Any period of one day or less counts as 2, so a zero-length period
    /// and a period of exactly one day report the same value.
    pub fn count_days(&self) -> i64 {
        let elapsed = (self.end - self.start).num_milliseconds();
        if elapsed <= MS_PER_DAY {
            return MIN_PERIOD_DAYS;
        }
        elapsed / MS_PER_DAY + 1
    }
}

/// Inclusive day count between `start` and `end`; see [`DatePeriod::count_days`].
///
/// # Errors
/// Returns `RangeError::InvalidRange` if `end` precedes `start`.
pub fn get_count_days_on_period(start: CalendarDate, end: CalendarDate) -> Result<i64, RangeError> {
    Ok(DatePeriod::new(start, end)?.count_days())
}

/// Whether `date` falls inside `period`, both boundaries included.
pub fn is_date_in_period(date: &CalendarDate, period: &DatePeriod) -> bool {
    period.contains(date)
}

impl FromStr for DatePeriod {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval: START/END
        let separator_count = trimmed.matches(PERIOD_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No period separator found (expected '{PERIOD_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(PERIOD_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!(
                        "Separator '{PERIOD_SEPARATOR}' not found despite count == 1"
                    ))
                })?;

                let start = parse_date(start_str)?;
                let end = parse_date(end_str)?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{PERIOD_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DatePeriod {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DatePeriod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
