use crate::ParseError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_IN_WEEK, DEFAULT_WEEK_START, FEBRUARY, FEBRUARY_DAYS_LEAP,
    GREGORIAN_CYCLE, HOURS_PER_DAY, LEAP_YEAR_CYCLE, MAX_MONTH, MINUTES_PER_HOUR, SUNDAY,
    TIME_SEPARATOR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::str::FromStr;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    pub const JANUARY: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ParseError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(ParseError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Iterates January through December
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(|m| Self::new(m).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// First column of the calendar grid, `1..=7` with Monday = 1 and Sunday = 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct WeekStart(NonZeroU8);

impl WeekStart {
    /// # Errors
    /// Returns `ParseError::InvalidWeekStart` if the value is 0 or > 7.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        let non_zero = NonZeroU8::new(value).ok_or(ParseError::InvalidWeekStart(value))?;
        if value > SUNDAY {
            return Err(ParseError::InvalidWeekStart(value));
        }
        Ok(Self(non_zero))
    }

    /// Maps the 0 = Sunday convention used by locale tables onto `1..=7`.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidWeekStart` if the value is > 6.
    pub fn from_sunday_zero(value: u8) -> Result<Self, ParseError> {
        match value {
            0 => Self::new(SUNDAY),
            v if v < DAYS_IN_WEEK => Self::new(v),
            v => Err(ParseError::InvalidWeekStart(v)),
        }
    }

    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based offset from Monday (Monday = 0, Sunday = 6)
    #[inline]
    pub const fn offset_from_monday(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl Default for WeekStart {
    fn default() -> Self {
        Self(NonZeroU8::MIN.saturating_add(DEFAULT_WEEK_START - 1))
    }
}

impl TryFrom<u8> for WeekStart {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<WeekStart> for u8 {
    fn from(week_start: WeekStart) -> Self {
        week_start.get()
    }
}

/// Distance between neighbouring entries of the hour or minute list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Interval(NonZeroU8);

impl Interval {
    /// Every hour / every minute.
    pub const ONE: Self = Self(NonZeroU8::MIN);

    /// # Errors
    /// Returns `ParseError::InvalidInterval` if the value is 0.
    pub fn new(value: u8) -> Result<Self, ParseError> {
        NonZeroU8::new(value)
            .map(Self)
            .ok_or(ParseError::InvalidInterval(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get() as u32
    }
}

impl Default for Interval {
    fn default() -> Self {
        Self::ONE
    }
}

impl TryFrom<u8> for Interval {
    type Error = ParseError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Interval> for u8 {
    fn from(interval: Interval) -> Self {
        interval.0.get()
    }
}

/// Wall-clock `HH:mm` without a date, as used for per-day time limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    hour:   u32,
    minute: u32,
}

impl TimeOfDay {
    /// # Errors
    /// Returns `ParseError::InvalidTime` if hour >= 24 or minute >= 60.
    pub fn new(hour: u32, minute: u32) -> Result<Self, ParseError> {
        if hour >= HOURS_PER_DAY || minute >= MINUTES_PER_HOUR {
            return Err(ParseError::InvalidTime(format!("{hour:02}{TIME_SEPARATOR}{minute:02}")));
        }
        Ok(Self { hour, minute })
    }

    pub const fn hour(self) -> u32 {
        self.hour
    }

    pub const fn minute(self) -> u32 {
        self.minute
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (hour, minute) = trimmed
            .split_once(TIME_SEPARATOR)
            .ok_or_else(|| ParseError::InvalidTime(trimmed.to_owned()))?;
        let hour = hour
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidTime(trimmed.to_owned()))?;
        let minute = minute
            .parse::<u32>()
            .map_err(|_| ParseError::InvalidTime(trimmed.to_owned()))?;
        Self::new(hour, minute)
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}{TIME_SEPARATOR}{:02}", self.hour, self.minute)
    }
}

// Helper functions

pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
