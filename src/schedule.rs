//! Rotating work/off shift schedules over `DD-MM-YYYY` dates.

use std::{fmt, num::NonZeroU32, str::FromStr};

use chrono::{Days, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    CalendarDate, DatePeriod, ParseError, RangeError,
    consts::SCHEDULE_SEPARATOR,
    prelude::*,
    types::Month,
};

/// A calendar day written day-first as `DD-MM-YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deref, From, Into)]
pub struct ScheduleDate(NaiveDate);

/// Error type for schedule generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    /// A boundary date could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The end date precedes the start date.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The shift pattern cannot produce any working day.
    #[error("Invalid shift pattern: {0}")]
    InvalidPattern(String),

    /// Stepping forward left the representable calendar.
    #[error("Date arithmetic out of range after {0}")]
    OutOfRange(ScheduleDate),
}

impl ScheduleDate {
    /// Creates a schedule date from numeric components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` or `ParseError::InvalidDay` when the
    /// components do not name a real calendar day.
    pub fn from_dmy(day: u32, month: u32, year: i32) -> Result<Self, ParseError> {
        let month_u8 = u8::try_from(month).map_err(|_| ParseError::InvalidMonth(u8::MAX))?;
        Month::new(month_u8)?;
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or(ParseError::InvalidDay { day, month, year })
    }

    /// Midnight UTC at the start of this day
    pub fn start_of_day(self) -> CalendarDate {
        self.0.and_time(NaiveTime::MIN).and_utc()
    }

    fn checked_add(self, days: u32) -> Result<Self, ScheduleError> {
        self.0
            .checked_add_days(Days::new(days.into()))
            .map(Self)
            .ok_or(ScheduleError::OutOfRange(self))
    }

    fn parse_u32(s: &str) -> Result<u32, ParseError> {
        s.parse::<u32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }

    fn parse_i32(s: &str) -> Result<i32, ParseError> {
        s.parse::<i32>()
            .map_err(|_| ParseError::InvalidFormat(s.to_owned()))
    }
}

impl fmt::Display for ScheduleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d-%m-%Y"))
    }
}

impl FromStr for ScheduleDate {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(SCHEDULE_SEPARATOR).map(str::trim).collect();
        let [day, month, year] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(format!(
                "Expected DD{SCHEDULE_SEPARATOR}MM{SCHEDULE_SEPARATOR}YYYY, found {} part(s): {trimmed}",
                parts.len()
            )));
        };

        Self::from_dmy(
            Self::parse_u32(day)?,
            Self::parse_u32(month)?,
            Self::parse_i32(year)?,
        )
    }
}

impl Serialize for ScheduleDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ScheduleDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A repeating cycle of `work_days` on followed by `off_days` off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftPattern {
    work_days: NonZeroU32,
    off_days:  u32,
}

impl ShiftPattern {
    /// Creates a pattern, validating that at least one day is worked per cycle.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidPattern` if `work_days` is 0.
    pub fn new(work_days: u32, off_days: u32) -> Result<Self, ScheduleError> {
        let work_days = NonZeroU32::new(work_days).ok_or_else(|| {
            ScheduleError::InvalidPattern("work_days must be at least 1".to_owned())
        })?;
        Ok(Self {
            work_days,
            off_days,
        })
    }

    /// Days worked per cycle
    pub const fn work_days(&self) -> u32 {
        self.work_days.get()
    }

    /// Days off per cycle
    pub const fn off_days(&self) -> u32 {
        self.off_days
    }

    /// Every working day from `start` through `end` inclusive.
    ///
    /// # Errors
    /// Returns `ScheduleError::Range` if `end` precedes `start`, or
    /// `ScheduleError::OutOfRange` if stepping leaves chrono's calendar.
    pub fn working_days(
        &self,
        start: ScheduleDate,
        end: ScheduleDate,
    ) -> Result<Vec<ScheduleDate>, ScheduleError> {
        DatePeriod::new(start.start_of_day(), end.start_of_day())?;

        let mut days = Vec::new();
        let mut current = start;
        let mut worked = 0;

        while current <= end {
            if worked < self.work_days() {
                days.push(current);
                worked += 1;
                current = current.checked_add(1)?;
            } else {
                trace!(%current, off_days = self.off_days, "cycle complete, skipping off days");
                current = current.checked_add(self.off_days)?;
                worked = 0;
            }
        }

        Ok(days)
    }
}

/// Working days between two `DD-MM-YYYY` dates, formatted `DD-MM-YYYY`.
///
/// Starting on `start`, `work_days` consecutive days are emitted, then
/// `off_days` are skipped, repeating until the cursor passes `end`.
///
/// # Errors
/// Returns `ScheduleError` if either date is malformed, `end` precedes
/// `start`, or the pattern is invalid.
pub fn get_work_schedule(
    start: &str,
    end: &str,
    work_days: u32,
    off_days: u32,
) -> Result<Vec<String>, ScheduleError> {
    let pattern = ShiftPattern::new(work_days, off_days)?;
    let start: ScheduleDate = start.parse()?;
    let end: ScheduleDate = end.parse()?;

    Ok(pattern
        .working_days(start, end)?
        .iter()
        .map(ToString::to_string)
        .collect())
}
