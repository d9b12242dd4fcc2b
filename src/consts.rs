/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Days in a calendar week; every month grid is a multiple of this
pub const DAYS_IN_WEEK: u8 = 7;

/// Weekday numbering runs Monday = 1 through Sunday = 7
pub const MONDAY: u8 = 1;
/// See [`MONDAY`]
pub const SUNDAY: u8 = 7;

/// Week start used when the host does not supply one
pub const DEFAULT_WEEK_START: u8 = MONDAY;

/// Years offered on either side of the current year in the year picker
pub const YEAR_SPAN: i32 = 100;

/// Hours in a day (exclusive upper bound of the hour list)
pub const HOURS_PER_DAY: u32 = 24;
/// Minutes in an hour (exclusive upper bound of the minute list)
pub const MINUTES_PER_HOUR: u32 = 60;
/// First hour of the afternoon half in 12-hour mode
pub const NOON: u32 = 12;

/// Hour/minute separator for `HH:mm` strings
pub const TIME_SEPARATOR: char = ':';

/// Name accepted for the UTC zone in configuration
pub const UTC_ZONE: &str = "UTC";
