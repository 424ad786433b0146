//! Month-level questions: length, quarter, leap year.

use chrono::Datelike;

use crate::{CalendarDate, ParseError, consts::MONTHS_PER_QUARTER, types};

/// Number of days (28..=31) in `month` (1..=12) of `year`.
///
/// # Errors
/// Returns `ParseError::InvalidMonth` if `month` is outside 1..=12.
pub fn get_count_days_in_month(month: u8, year: i32) -> Result<u8, ParseError> {
    Ok(types::Month::new(month)?.days_in(year))
}

/// Calendar quarter (1..=4) of the UTC month of `date`.
#[allow(clippy::cast_possible_truncation)]
pub fn get_quarter(date: &CalendarDate) -> u8 {
    // month0 is at most 11
    (date.month0() / MONTHS_PER_QUARTER + 1) as u8
}

/// Whether the UTC year of `date` is a leap year.
pub fn is_leap_year(date: &CalendarDate) -> bool {
    types::is_leap(date.year())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn first_of(year: i32, month: u32) -> CalendarDate {
        Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_get_count_days_in_month() {
        assert_eq!(get_count_days_in_month(2, 2024).unwrap(), 29);
        assert_eq!(get_count_days_in_month(2, 2023).unwrap(), 28);
        assert_eq!(get_count_days_in_month(1, 2024).unwrap(), 31);
        assert_eq!(get_count_days_in_month(4, 2024).unwrap(), 30);
        assert_eq!(get_count_days_in_month(2, 1900).unwrap(), 28);
        assert_eq!(get_count_days_in_month(2, 2000).unwrap(), 29);
    }

    #[test]
    fn test_get_count_days_in_month_rejects_bad_month() {
        assert!(matches!(
            get_count_days_in_month(0, 2024),
            Err(ParseError::InvalidMonth(0))
        ));
        assert!(matches!(
            get_count_days_in_month(13, 2024),
            Err(ParseError::InvalidMonth(13))
        ));
    }

    #[test]
    fn test_get_quarter_partitions_year() {
        let quarters: Vec<u8> = (1..=12).map(|m| get_quarter(&first_of(2024, m))).collect();
        assert_eq!(quarters, [1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4]);
    }

    #[test]
    fn test_get_quarter_uses_utc_month() {
        let last_instant_of_march = Utc.with_ymd_and_hms(2024, 3, 31, 23, 59, 59).unwrap();
        assert_eq!(get_quarter(&last_instant_of_march), 1);
        assert_eq!(get_quarter(&first_of(2024, 4)), 2);
    }

    #[test]
    fn test_is_leap_year() {
        assert!(is_leap_year(&first_of(2024, 6)));
        assert!(is_leap_year(&first_of(2000, 6)));
        assert!(!is_leap_year(&first_of(1900, 6)));
        assert!(!is_leap_year(&first_of(2023, 6)));
    }
}
