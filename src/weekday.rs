//! Day-of-week lookups.

use chrono::{Datelike, NaiveDate, TimeDelta};
use tracing::trace;

use crate::{
    CalendarDate, ParseError,
    consts::{MIN_DAY, NEXT_FRIDAY_OFFSETS},
    parse_date,
    types::{DayName, Month},
};

/// Weekday name of the UTC instant described by `input`.
///
/// # Errors
/// Propagates any `ParseError` from [`parse_date`].
pub fn get_day_name(input: &str) -> Result<DayName, ParseError> {
    Ok(day_name_of(&parse_date(input)?))
}

/// Weekday name of `date` (UTC).
pub fn day_name_of(date: &CalendarDate) -> DayName {
    date.weekday().into()
}

/// The first Friday strictly after `date`, keeping its time of day.
///
/// A Friday input moves a full week ahead. The input is left untouched.
/// Returns `None` when that Friday is past the last representable instant.
pub fn get_next_friday(date: &CalendarDate) -> Option<CalendarDate> {
    let offset = NEXT_FRIDAY_OFFSETS[date.weekday().num_days_from_sunday() as usize];
    date.checked_add_signed(TimeDelta::days(offset))
}

/// Number of Saturdays and Sundays in `month` (1..=12) of `year`.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if `month` is outside 1..=12, or
/// `ParseError::InvalidDay` if `year` is outside chrono's calendar.
#[allow(clippy::cast_possible_truncation)]
pub fn get_count_weekends_in_month(month: u8, year: i32) -> Result<u32, ParseError> {
    let month = Month::new(month)?;
    let first = NaiveDate::from_ymd_opt(year, month.get().into(), MIN_DAY.into())
        .ok_or_else(|| {
            trace!(year, %month, "month start is not representable");
            ParseError::InvalidDay {
                day: MIN_DAY.into(),
                month: month.get().into(),
                year,
            }
        })?;

    let count = first
        .iter_days()
        .take(month.days_in(year).into())
        .filter(|date| DayName::from(date.weekday()).is_weekend())
        .count();
    // at most 31 days in a month
    Ok(count as u32)
}
