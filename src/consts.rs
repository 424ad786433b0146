/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub(crate) const MIN_DAY: u8 = 1;

/// Month number for January
pub(crate) const JANUARY: u8 = 1;
/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;
/// Month number for December
pub(crate) const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Milliseconds in one calendar day
pub const MS_PER_DAY: i64 = 86_400_000;

/// Day count reported for any period no longer than one day
pub const MIN_PERIOD_DAYS: i64 = 2;

/// Months in a quarter
pub const MONTHS_PER_QUARTER: u32 = 3;

/// Days to add to reach the following Friday, indexed by days since Sunday.
/// A Friday always advances a full week.
pub(crate) const NEXT_FRIDAY_OFFSETS: [i64; 7] = [
    5, // Sunday
    4, // Monday
    3, // Tuesday
    2, // Wednesday
    1, // Thursday
    7, // Friday
    6, // Saturday
];

/// Days in one week step
pub(crate) const DAYS_PER_WEEK: i64 = 7;

/// January 4th always falls in week one
pub(crate) const WEEK_ONE_ANCHOR_DAY: u32 = 4;

/// Days from January 4th back to the Monday that opens week one,
/// indexed by the weekday of January 4th (days since Sunday).
pub(crate) const WEEK_ONE_OFFSETS: [i64; 7] = [
    -6, // Sunday
    0,  // Monday
    -1, // Tuesday
    -2, // Wednesday
    -3, // Thursday
    -4, // Friday
    -5, // Saturday
];

/// Week count that is bumped by one before being reported
pub(crate) const PATCHED_WEEK: u32 = 33;

/// Day of month searched for by the Friday-the-13th scan
pub const UNLUCKY_DAY: u32 = 13;

/// Default inclusive upper year for the Friday-the-13th scan
pub const DEFAULT_SCAN_MAX_YEAR: i32 = 2200;

/// Separator between day, month and year in schedule dates (`DD-MM-YYYY`)
pub const SCHEDULE_SEPARATOR: char = '-';

/// Period separator (ISO 8601 interval format)
pub const PERIOD_SEPARATOR: char = '/';

/// Zone suffixes that mean UTC in loosely formatted date strings
pub(crate) const UTC_SUFFIXES: [&str; 3] = [" UTC", " GMT", "Z"];

/// Date-time layouts tried after RFC 3339, all read as UTC
pub(crate) const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%d %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M:%S",
];

/// Date-only layouts, read as midnight UTC
pub(crate) const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%d %b %Y"];
