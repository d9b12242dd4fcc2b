use chrono::{Datelike, NaiveDate, Weekday};

use crate::bounds::{Bounds, TimeBounds, day_disabled, month_disabled, year_disabled};
use crate::{
    DAYS_IN_WEEK, HOURS_PER_DAY, Interval, MIN_DAY, MINUTES_PER_HOUR, Month, NOON, WeekStart, YEAR_SPAN,
    types::days_in_month,
};

/// One selectable unit of a grid: a day, hour, minute, month or year.
///
/// `value == None` marks calendar padding, which is always disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell<T> {
    pub value:    Option<T>,
    pub selected: bool,
    pub disabled: bool,
}

impl<T> Cell<T> {
    pub const fn padding() -> Self {
        Self {
            value:    None,
            selected: false,
            disabled: true,
        }
    }

    pub const fn is_padding(&self) -> bool {
        self.value.is_none()
    }
}

/// Locale data the grids label themselves with.
pub trait CalendarInfo {
    /// Short weekday names, Monday first.
    fn weekdays_short(&self) -> [String; 7];

    /// Month names, January first.
    fn month_names(&self) -> [String; 12];

    fn week_start(&self) -> WeekStart {
        WeekStart::default()
    }
}

/// English names from chrono, weeks starting on Monday.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishCalendar;

impl CalendarInfo for EnglishCalendar {
    fn weekdays_short(&self) -> [String; 7] {
        let mut day = Weekday::Mon;
        std::array::from_fn(|_| {
            let name = day.to_string();
            day = day.succ();
            name
        })
    }

    fn month_names(&self) -> [String; 12] {
        let mut month = chrono::Month::January;
        std::array::from_fn(|_| {
            let name = month.name().to_owned();
            month = month.succ();
            name
        })
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Day numbers of a month laid out in week rows starting at `week_start`.
///
/// Leading and trailing `None`s pad the first and last rows, so the length is
/// always a multiple of 7. Years chrono cannot represent yield an empty grid.
pub fn month_grid(year: i32, month: Month, week_start: WeekStart) -> Vec<Option<u8>> {
    let Some(first) = NaiveDate::from_ymd_opt(year, u32::from(month.get()), u32::from(MIN_DAY)) else {
        return Vec::new();
    };
    let week = i64::from(DAYS_IN_WEEK);
    let weekday = i64::from(first.weekday().number_from_monday());
    let start = i64::from(week_start.get());
    let days = days_in_month(year, month.get());

    let pad = |n: i64| usize::try_from(n.rem_euclid(week)).unwrap_or_default();
    let leading = pad(weekday - start);
    let trailing = pad(start - weekday - i64::from(days));

    std::iter::repeat_n(None, leading)
        .chain((MIN_DAY..=days).map(Some))
        .chain(std::iter::repeat_n(None, trailing))
        .collect()
}

/// `0, step, 2 * step, …` below 24.
pub fn hour_list(step: Interval) -> Vec<u32> {
    (0..HOURS_PER_DAY).step_by(usize::from(u8::from(step))).collect()
}

/// `0, step, 2 * step, …` below 60.
pub fn minute_list(step: Interval) -> Vec<u32> {
    (0..MINUTES_PER_HOUR).step_by(usize::from(u8::from(step))).collect()
}

/// The 201 years from `current - 100` through `current + 100`, cut short at
/// the ends of `i32`.
pub fn year_range(current: i32) -> Vec<i32> {
    (current.saturating_sub(YEAR_SPAN)..=current.saturating_add(YEAR_SPAN)).collect()
}

pub fn month_names(info: &impl CalendarInfo) -> Vec<String> {
    info.month_names().iter().map(|name| capitalize(name)).collect()
}

/// Short weekday names rotated so the first column is `week_start`.
pub fn weekday_labels(info: &impl CalendarInfo, week_start: WeekStart) -> Vec<String> {
    let mut labels: Vec<String> = info.weekdays_short().iter().map(|name| capitalize(name)).collect();
    labels.rotate_left(week_start.offset_from_monday());
    labels
}

/// Hour as shown on a 12-hour dial: 0 reads 12, afternoon hours drop 12.
pub const fn format_hour(hour: u32, use_12_hour: bool) -> u32 {
    if !use_12_hour {
        return hour;
    }
    match hour {
        0 => NOON,
        h if h > NOON => h - NOON,
        h => h,
    }
}

/// Calendar page for `year`/`month`, marking `selected` and out-of-bounds days.
pub fn calendar_cells(
    year: i32,
    month: Month,
    week_start: WeekStart,
    selected: Option<NaiveDate>,
    bounds: &Bounds,
) -> Vec<Cell<u8>> {
    month_grid(year, month, week_start)
        .into_iter()
        .map(|day| match day {
            None => Cell::padding(),
            Some(day) => Cell {
                value:    Some(day),
                selected: selected.is_some_and(|date| {
                    date.year() == year && date.month() == u32::from(month.get()) && date.day() == u32::from(day)
                }),
                disabled: day_disabled(bounds, year, month, day),
            },
        })
        .collect()
}

/// Hours for the dial. In 12-hour mode only the half of the day `selected`
/// falls in is listed.
pub fn hour_cells(step: Interval, selected: u32, use_12_hour: bool, limits: &TimeBounds) -> Vec<Cell<u32>> {
    hour_list(step)
        .into_iter()
        .filter(|hour| !use_12_hour || (*hour < NOON) == (selected < NOON))
        .map(|hour| Cell {
            value:    Some(hour),
            selected: hour == selected,
            disabled: limits.hour_disabled(hour),
        })
        .collect()
}

/// Minutes for the dial; limits apply only while `hour` is a bound's hour.
pub fn minute_cells(step: Interval, hour: u32, selected: u32, limits: &TimeBounds) -> Vec<Cell<u32>> {
    minute_list(step)
        .into_iter()
        .map(|minute| Cell {
            value:    Some(minute),
            selected: minute == selected,
            disabled: limits.minute_disabled(hour, minute),
        })
        .collect()
}

pub fn year_cells(current: i32, bounds: &Bounds) -> Vec<Cell<i32>> {
    year_range(current)
        .into_iter()
        .map(|year| Cell {
            value:    Some(year),
            selected: year == current,
            disabled: year_disabled(bounds, year),
        })
        .collect()
}

pub fn month_cells(year: i32, selected: Month, bounds: &Bounds) -> Vec<Cell<Month>> {
    Month::all()
        .map(|month| Cell {
            value:    Some(month),
            selected: month == selected,
            disabled: month_disabled(bounds, year, month),
        })
        .collect()
}
