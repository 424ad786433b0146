//! Week numbering anchored on January 4th.

use chrono::{Datelike, NaiveDate};
use tracing::warn;

use crate::{
    CalendarDate,
    consts::{DAYS_PER_WEEK, JANUARY, PATCHED_WEEK, WEEK_ONE_ANCHOR_DAY, WEEK_ONE_OFFSETS},
};

/// Week number of `date` within its UTC year.
///
/// Week one opens on the Monday on or before January 4th. Weeks are counted
/// in 7-day steps from there while the step start is not after `date`, so
/// instants before that Monday report week 0 and late December can report 53.
/// A count of exactly 33 is reported as 34.
///
/// Steps start at midnight, so they are counted on day numbers and never
/// leave chrono's range.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn get_week_number_by_date(date: &CalendarDate) -> u32 {
    let Some(anchor) =
        NaiveDate::from_ymd_opt(date.year(), JANUARY.into(), WEEK_ONE_ANCHOR_DAY)
    else {
        warn!(year = date.year(), "January 4th is outside the representable range");
        return 0;
    };

    let shift = WEEK_ONE_OFFSETS[anchor.weekday().num_days_from_sunday() as usize];
    let week_one = i64::from(anchor.num_days_from_ce()) + shift;
    let elapsed = i64::from(date.num_days_from_ce()) - week_one;
    if elapsed < 0 {
        return 0;
    }

    // at most 54 steps fit in one year
    let week = (elapsed / DAYS_PER_WEEK + 1) as u32;
    if week == PATCHED_WEEK { week + 1 } else { week }
}
