use chrono::NaiveDate;

use crate::{DateTimeValue, MIN_DAY, Month, TimeOfDay, Zone, types::days_in_month};

/// Inclusive `[min, max]` limits on what may be picked. A missing end does
/// not constrain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bounds {
    min: Option<DateTimeValue>,
    max: Option<DateTimeValue>,
}

impl Bounds {
    pub const fn new(min: Option<DateTimeValue>, max: Option<DateTimeValue>) -> Self {
        Self { min, max }
    }

    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    pub const fn min(&self) -> Option<DateTimeValue> {
        self.min
    }

    pub const fn max(&self) -> Option<DateTimeValue> {
        self.max
    }

    /// Both ends read in `zone`.
    pub fn set_zone(self, zone: Zone) -> Self {
        Self {
            min: self.min.map(|dt| dt.set_zone(zone)),
            max: self.max.map(|dt| dt.set_zone(zone)),
        }
    }

    /// Pulls `value` up to `min`, then down to `max`.
    pub fn clamp(&self, value: DateTimeValue) -> DateTimeValue {
        let value = match self.min {
            Some(min) if value < min => min,
            _ => value,
        };
        match self.max {
            Some(max) if value > max => max,
            _ => value,
        }
    }
}

/// True if the day lies before `min`'s calendar day or after `max`'s.
///
/// Bounds are compared by calendar date in their own offset; the time of day
/// is ignored, so the bound's own day is always selectable. A day that does
/// not exist in the month is disabled.
pub fn day_disabled(bounds: &Bounds, year: i32, month: Month, day: u8) -> bool {
    let Some(date) = NaiveDate::from_ymd_opt(year, u32::from(month.get()), u32::from(day)) else {
        return true;
    };
    bounds.min.is_some_and(|min| date < min.date()) || bounds.max.is_some_and(|max| date > max.date())
}

/// True if the whole month lies before `min`'s day or after `max`'s day.
pub fn month_disabled(bounds: &Bounds, year: i32, month: Month) -> bool {
    let first = NaiveDate::from_ymd_opt(year, u32::from(month.get()), u32::from(MIN_DAY));
    let last = NaiveDate::from_ymd_opt(
        year,
        u32::from(month.get()),
        u32::from(days_in_month(year, month.get())),
    );
    let (Some(first), Some(last)) = (first, last) else {
        return true;
    };
    bounds.min.is_some_and(|min| last < min.date()) || bounds.max.is_some_and(|max| first > max.date())
}

pub fn year_disabled(bounds: &Bounds, year: i32) -> bool {
    bounds.min.is_some_and(|min| year < min.year()) || bounds.max.is_some_and(|max| year > max.year())
}

/// Plain integer range check; `None` ends do not constrain.
pub fn time_component_disabled(min: Option<u32>, max: Option<u32>, value: u32) -> bool {
    min.is_some_and(|min| value < min) || max.is_some_and(|max| value > max)
}

/// Time-of-day limits that apply to one particular calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeBounds {
    min: Option<TimeOfDay>,
    max: Option<TimeOfDay>,
}

impl TimeBounds {
    pub const fn new(min: Option<TimeOfDay>, max: Option<TimeOfDay>) -> Self {
        Self { min, max }
    }

    /// Narrows datetime bounds to the day `working` falls on.
    ///
    /// A bound only constrains the time when its calendar date equals the
    /// working date; both are read in their own offsets.
    pub fn for_date(bounds: &Bounds, working: &DateTimeValue) -> Self {
        let on_same_day = |bound: DateTimeValue| {
            (bound.date() == working.date())
                .then(|| TimeOfDay::new(bound.hour(), bound.minute()).ok())
                .flatten()
        };
        Self {
            min: bounds.min.and_then(on_same_day),
            max: bounds.max.and_then(on_same_day),
        }
    }

    pub const fn min(&self) -> Option<TimeOfDay> {
        self.min
    }

    pub const fn max(&self) -> Option<TimeOfDay> {
        self.max
    }

    pub fn min_hour(&self) -> Option<u32> {
        self.min.map(TimeOfDay::hour)
    }

    pub fn max_hour(&self) -> Option<u32> {
        self.max.map(TimeOfDay::hour)
    }

    /// Minute limit from `min`, only while the selected hour is `min`'s hour.
    pub fn min_minute(&self, hour: u32) -> Option<u32> {
        self.min.filter(|min| min.hour() == hour).map(TimeOfDay::minute)
    }

    /// Minute limit from `max`, only while the selected hour is `max`'s hour.
    pub fn max_minute(&self, hour: u32) -> Option<u32> {
        self.max.filter(|max| max.hour() == hour).map(TimeOfDay::minute)
    }

    pub fn hour_disabled(&self, hour: u32) -> bool {
        time_component_disabled(self.min_hour(), self.max_hour(), hour)
    }

    pub fn minute_disabled(&self, hour: u32, minute: u32) -> bool {
        time_component_disabled(self.min_minute(hour), self.max_minute(hour), minute)
    }
}
