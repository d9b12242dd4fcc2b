//! Zone-aware instants and the clock they are read from.
//!
//! [`DateTimeValue`] is a thin, immutable wrapper over a chrono instant plus
//! the [`Zone`] it is read in, exposing just the operations the picker needs:
//! field accessors, field replacement, month/hour arithmetic and ISO
//! conversion. Every "mutation" returns a new value. Wall-clock edits are
//! resolved in the zone, so named zones follow their daylight-saving rules.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use chrono::{
    DateTime, Datelike, FixedOffset, Months, NaiveDate, NaiveDateTime, NaiveTime, Offset,
    SecondsFormat, TimeDelta, TimeZone, Timelike, Utc,
};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::{ParseError, UTC_ZONE, types::days_in_month};

/// Naive ISO layouts accepted after RFC 3339; read as UTC.
const NAIVE_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const NAIVE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Where a value is displayed or emitted: a fixed UTC offset or an IANA zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Zone {
    Fixed(FixedOffset),
    Named(Tz),
}

impl Zone {
    pub fn utc() -> Self {
        Self::Fixed(Utc.fix())
    }

    /// # Errors
    /// Returns `ParseError::InvalidZone` if the offset is a day or more.
    pub fn east_seconds(seconds: i32) -> Result<Self, ParseError> {
        FixedOffset::east_opt(seconds)
            .map(Self::Fixed)
            .ok_or_else(|| ParseError::InvalidZone(seconds.to_string()))
    }

    pub fn is_utc(self) -> bool {
        matches!(self, Self::Fixed(offset) if offset.local_minus_utc() == 0)
    }

    /// Offset in effect at `instant`.
    pub fn offset_at(self, instant: &DateTime<Utc>) -> FixedOffset {
        match self {
            Self::Fixed(offset) => offset,
            Self::Named(tz) => tz.offset_from_utc_datetime(&instant.naive_utc()).fix(),
        }
    }

    fn read(self, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
        instant.with_timezone(&self.offset_at(&instant))
    }

    /// Instant for a wall-clock time in this zone.
    ///
    /// An ambiguous time (clocks turned back) takes the earlier instant. A
    /// skipped time (clocks turned forward) moves forward by an hour.
    fn resolve(self, local: NaiveDateTime) -> Option<DateTime<FixedOffset>> {
        match self {
            Self::Fixed(offset) => local.and_local_timezone(offset).single(),
            Self::Named(tz) => tz
                .from_local_datetime(&local)
                .earliest()
                .or_else(|| {
                    let shifted = local.checked_add_signed(TimeDelta::hours(1))?;
                    tz.from_local_datetime(&shifted).earliest()
                })
                .map(|dt| dt.fixed_offset()),
        }
    }
}

impl Default for Zone {
    fn default() -> Self {
        Self::utc()
    }
}

impl FromStr for Zone {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(UTC_ZONE) || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Self::utc());
        }
        trimmed
            .parse::<FixedOffset>()
            .map(Self::Fixed)
            .or_else(|_| trimmed.parse::<Tz>().map(Self::Named))
            .map_err(|_| ParseError::InvalidZone(trimmed.to_owned()))
    }
}

impl TryFrom<String> for Zone {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Zone> for String {
    fn from(zone: Zone) -> Self {
        zone.to_string()
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(_) if self.is_utc() => f.write_str(UTC_ZONE),
            Self::Fixed(offset) => write!(f, "{offset}"),
            Self::Named(tz) => f.write_str(tz.name()),
        }
    }
}

/// Source of "now" for seeding a picker that has no value yet.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Field overrides for [`DateTimeValue::set`]. `None` keeps the current field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldSet {
    pub year:   Option<i32>,
    pub month:  Option<u8>,
    pub day:    Option<u8>,
    pub hour:   Option<u32>,
    pub minute: Option<u32>,
}

/// An immutable instant carrying the zone it is read in.
///
/// Equality, ordering and hashing compare the instant, not the zone or the
/// wall-clock fields.
#[derive(Debug, Clone, Copy)]
pub struct DateTimeValue {
    at:   DateTime<FixedOffset>,
    zone: Zone,
}

impl DateTimeValue {
    pub fn new(at: DateTime<FixedOffset>) -> Self {
        Self {
            at,
            zone: Zone::Fixed(*at.offset()),
        }
    }

    /// Parses an ISO-8601 string. Anything unparseable is `None`, never an error.
    ///
    /// Strings without an offset are read as UTC.
    pub fn from_iso(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return None;
        }
        if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
            return Some(Self::new(parsed));
        }
        NAIVE_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(trimmed, NAIVE_DATE_FORMAT)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
            .map(|naive| Self::new(naive.and_utc().fixed_offset()))
    }

    /// Builds a value from wall-clock fields in `zone`.
    pub fn from_fields(
        year: i32,
        month: u8,
        day: u8,
        hour: u32,
        minute: u32,
        zone: Zone,
    ) -> Option<Self> {
        let local = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))?
            .and_hms_opt(hour, minute, 0)?;
        zone.resolve(local).map(|at| Self { at, zone })
    }

    /// Current instant from `clock`, expressed in `zone`.
    pub fn now(clock: &impl Clock, zone: Zone) -> Self {
        Self {
            at: zone.read(clock.now()),
            zone,
        }
    }

    /// ISO-8601 with millisecond precision; UTC renders as `Z`.
    pub fn to_iso(&self) -> String {
        self.at.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    pub fn to_utc(self) -> Self {
        self.set_zone(Zone::utc())
    }

    /// Same instant, read in another zone.
    pub fn set_zone(self, zone: Zone) -> Self {
        Self {
            at: zone.read(self.at.with_timezone(&Utc)),
            zone,
        }
    }

    pub const fn zone(&self) -> Zone {
        self.zone
    }

    pub const fn inner(&self) -> DateTime<FixedOffset> {
        self.at
    }

    pub fn year(&self) -> i32 {
        self.at.year()
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn month(&self) -> u8 {
        // chrono keeps the month in 1..=12
        self.at.month() as u8
    }

    #[allow(clippy::cast_possible_truncation)]
    pub fn day(&self) -> u8 {
        self.at.day() as u8
    }

    pub fn hour(&self) -> u32 {
        self.at.hour()
    }

    pub fn minute(&self) -> u32 {
        self.at.minute()
    }

    /// Calendar date in this value's own zone.
    pub fn date(&self) -> NaiveDate {
        self.at.date_naive()
    }

    fn with_local(self, local: NaiveDateTime) -> Option<Self> {
        self.zone.resolve(local).map(|at| Self { at, ..self })
    }

    /// Replaces the given fields, keeping the zone, seconds and sub-seconds.
    ///
    /// When `day` is not among the fields, the current day is clamped into the
    /// target month (January 31 with month set to 2 lands on the last day of
    /// February). Returns `None` if the result is not a valid date or time.
    pub fn set(self, fields: FieldSet) -> Option<Self> {
        let year = fields.year.unwrap_or_else(|| self.year());
        let month = fields.month.unwrap_or_else(|| self.month());
        crate::Month::new(month).ok()?;
        let day = fields
            .day
            .unwrap_or_else(|| self.day().min(days_in_month(year, month)));
        let time = NaiveTime::from_hms_nano_opt(
            fields.hour.unwrap_or_else(|| self.hour()),
            fields.minute.unwrap_or_else(|| self.minute()),
            self.at.second(),
            self.at.nanosecond(),
        )?;

        let local = NaiveDate::from_ymd_opt(year, u32::from(month), u32::from(day))?.and_time(time);
        self.with_local(local)
    }

    /// Clears seconds and sub-seconds.
    pub fn truncate_to_minute(self) -> Self {
        self.at
            .with_second(0)
            .and_then(|dt| dt.with_nanosecond(0))
            .map_or(self, |at| Self { at, ..self })
    }

    /// First instant of the same calendar day in this value's zone.
    pub fn start_of_day(self) -> Self {
        self.at
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|midnight| self.with_local(midnight))
            .unwrap_or(self)
    }

    /// Calendar months on the wall clock; the day clamps into shorter months.
    pub fn plus_months(self, months: u32) -> Option<Self> {
        let local = self.at.naive_local().checked_add_months(Months::new(months))?;
        self.with_local(local)
    }

    pub fn minus_months(self, months: u32) -> Option<Self> {
        let local = self.at.naive_local().checked_sub_months(Months::new(months))?;
        self.with_local(local)
    }

    /// Elapsed hours; the wall clock follows any offset change on the way.
    pub fn plus_hours(self, hours: i64) -> Option<Self> {
        let at = self.at.checked_add_signed(TimeDelta::try_hours(hours)?)?;
        Some(Self {
            at: self.zone.read(at.with_timezone(&Utc)),
            ..self
        })
    }
}

impl PartialEq for DateTimeValue {
    fn eq(&self, other: &Self) -> bool {
        self.at == other.at
    }
}

impl Eq for DateTimeValue {}

impl PartialOrd for DateTimeValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateTimeValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.at.cmp(&other.at)
    }
}

impl Hash for DateTimeValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.at.hash(state);
    }
}

impl From<DateTime<FixedOffset>> for DateTimeValue {
    fn from(at: DateTime<FixedOffset>) -> Self {
        Self::new(at)
    }
}

impl From<DateTime<Utc>> for DateTimeValue {
    fn from(at: DateTime<Utc>) -> Self {
        Self::new(at.fixed_offset())
    }
}

impl fmt::Display for DateTimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl FromStr for DateTimeValue {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_iso(s).ok_or_else(|| ParseError::InvalidDateTime(s.trim().to_owned()))
    }
}

impl Serialize for DateTimeValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for DateTimeValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
