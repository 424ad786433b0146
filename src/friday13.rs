//! Search for the next Friday that falls on the 13th.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use tracing::debug;

use crate::{
    CalendarDate, ScanConfig,
    consts::{DECEMBER, JANUARY, UNLUCKY_DAY},
};

/// Next Friday the 13th, scanning up to year 2200.
///
/// See [`get_next_friday_the_13th_with`].
pub fn get_next_friday_the_13th(date: &CalendarDate) -> CalendarDate {
    get_next_friday_the_13th_with(date, &ScanConfig::default())
}

/// Next Friday the 13th, scanning no further than `config.max_year()`.
///
/// The scan starts with the month of `date`, or the month after it when
/// `date` is itself on the 13th, and walks forward one month at a time. The
/// match is returned at midnight UTC. When no month up to the bound
/// qualifies, or the scan runs off the representable calendar, `date` is
/// returned unchanged.
pub fn get_next_friday_the_13th_with(date: &CalendarDate, config: &ScanConfig) -> CalendarDate {
    let (mut year, mut month) = (date.year(), date.month());
    if date.day() == UNLUCKY_DAY {
        (year, month) = next_month(year, month);
    }

    while year <= config.max_year() {
        // only fails once the scan walks past chrono's last year
        let Some(thirteenth) = NaiveDate::from_ymd_opt(year, month, UNLUCKY_DAY) else {
            break;
        };
        if thirteenth.weekday() == Weekday::Fri {
            return thirteenth.and_time(NaiveTime::MIN).and_utc();
        }
        (year, month) = next_month(year, month);
    }

    debug!(
        %date,
        max_year = config.max_year(),
        "no Friday the 13th before scan bound, returning input"
    );
    *date
}

fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == u32::from(DECEMBER) {
        (year + 1, u32::from(JANUARY))
    } else {
        (year, month + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};

    fn at(y: i32, m: u32, d: u32) -> CalendarDate {
        Utc.with_ymd_and_hms(y, m, d, 8, 30, 0).unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> CalendarDate {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_next_friday_the_13th_cases() {
        struct TestCase {
            from:        CalendarDate,
            expected:    CalendarDate,
            description: &'static str,
        }

        let cases = [
            TestCase {
                from:        at(2024, 1, 5),
                expected:    midnight(2024, 9, 13),
                description: "skips months whose 13th is not a Friday",
            },
            TestCase {
                from:        at(2026, 10, 18),
                expected:    midnight(2026, 11, 13),
                description: "next month",
            },
            TestCase {
                from:        at(2024, 10, 1),
                expected:    midnight(2024, 12, 13),
                description: "same year, later month",
            },
            TestCase {
                from:        at(2026, 2, 13),
                expected:    midnight(2026, 3, 13),
                description: "a Friday the 13th moves on to the next one",
            },
            TestCase {
                from:        at(2020, 12, 13),
                expected:    midnight(2021, 8, 13),
                description: "December wraps into the next year",
            },
            TestCase {
                from:        at(2026, 2, 1),
                expected:    midnight(2026, 2, 13),
                description: "13th later in the same month",
            },
        ];

        for case in &cases {
            assert_eq!(
                get_next_friday_the_13th(&case.from),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_result_is_a_friday_the_13th() {
        let found = get_next_friday_the_13th(&at(2031, 4, 2));
        assert_eq!(found.day(), 13);
        assert_eq!(found.weekday(), Weekday::Fri);
    }

    #[test]
    fn test_scan_bound_returns_input() {
        // 2026 has Friday 13ths only in February, March and November
        let from = at(2026, 12, 1);
        let config = ScanConfig::new().with_max_year(2026);
        assert_eq!(get_next_friday_the_13th_with(&from, &config), from);

        let config = ScanConfig::new().with_max_year(2027);
        assert_eq!(
            get_next_friday_the_13th_with(&from, &config),
            midnight(2027, 8, 13)
        );
    }

    #[test]
    fn test_input_past_scan_bound() {
        let from = at(2300, 1, 1);
        assert_eq!(get_next_friday_the_13th(&from), from);
    }

    #[test]
    fn test_unbounded_scan_stops_at_calendar_end() {
        let last = DateTime::<Utc>::MAX_UTC;
        let config = ScanConfig::new().with_max_year(i32::MAX);
        let found = get_next_friday_the_13th_with(&last, &config);
        assert!(found == last || (found.day() == 13 && found.year() == last.year()));
    }

    #[test]
    fn test_next_month_wraps() {
        assert_eq!(next_month(2024, 11), (2024, 12));
        assert_eq!(next_month(2024, 12), (2025, 1));
    }
}
