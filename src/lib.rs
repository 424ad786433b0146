//! Pure calendar arithmetic helpers.
//!
//! Every function takes a date (or a pair of dates) and returns a small derived
//! value: a timestamp, a weekday name, a week number, a list of shift days. Nothing
//! here keeps state between calls.
//!
//! Instants are [`CalendarDate`] values (`chrono::DateTime<Utc>`); strings are
//! accepted wherever callers usually hold text, and parsed with [`parse_date`].

mod consts;
mod prelude;
mod types;

pub mod config;
pub mod format;
pub mod friday13;
pub mod month;
pub mod range;
pub mod schedule;
pub mod timestamp;
pub mod week;
pub mod weekday;

pub use config::ScanConfig;
pub use consts::*;
pub use format::{format_date, format_date_time};
pub use friday13::{get_next_friday_the_13th, get_next_friday_the_13th_with};
pub use month::{get_count_days_in_month, get_quarter, is_leap_year};
pub use range::{DatePeriod, RangeError, get_count_days_on_period, is_date_in_period};
pub use schedule::{ScheduleDate, ScheduleError, ShiftPattern, get_work_schedule};
pub use timestamp::{date_to_timestamp, get_local_time, get_time, parse_date};
pub use types::{DayName, Month, is_leap};
pub use week::get_week_number_by_date;
pub use weekday::{day_name_of, get_count_weekends_in_month, get_day_name, get_next_friday};

use crate::prelude::*;
use chrono::{DateTime, Utc};

/// A point in time, always held in UTC.
pub type CalendarDate = DateTime<Utc>;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0}")]
    InvalidFormat(String),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { day: u32, month: u32, year: i32 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
