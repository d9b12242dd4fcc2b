mod bounds;
mod config;
mod consts;
mod datetime;
mod flow;
mod grid;
mod input;
mod prelude;
mod session;
mod types;

pub use bounds::{Bounds, TimeBounds, day_disabled, month_disabled, time_component_disabled, year_disabled};
pub use config::PickerConfig;
pub use consts::*;
pub use datetime::{Clock, DateTimeValue, FieldSet, FixedClock, SystemClock, Zone};
pub use flow::{FlowManager, SelectionKind, Step};
pub use grid::{
    CalendarInfo, Cell, EnglishCalendar, calendar_cells, format_hour, hour_cells, hour_list, minute_cells,
    minute_list, month_cells, month_grid, month_names, weekday_labels, year_cells, year_range,
};
pub use input::DatetimeInput;
pub use session::{CalendarPage, Key, Outcome, Session, SessionOptions, Suffix, TimeChange, TouchedParts, View};
pub use types::{Interval, Month, TimeOfDay, WeekStart, days_in_month, is_leap_year};

use crate::prelude::*;

/// Field-level validation failures for the values a picker is configured with.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid week start: {} (must be {}-{})", "_0", MONDAY, SUNDAY)]
    InvalidWeekStart(u8),
    #[display(fmt = "Invalid step interval: {_0} (must be at least 1)")]
    InvalidInterval(u8),
    #[display(fmt = "Invalid time of day: {_0} (expected HH{}mm)", TIME_SEPARATOR)]
    InvalidTime(String),
    #[display(fmt = "Invalid date/time: {_0}")]
    InvalidDateTime(String),
    #[display(fmt = "Invalid zone: {_0}")]
    InvalidZone(String),
    #[display(fmt = "Unknown step: {_0}")]
    UnknownStep(String),
    #[display(fmt = "Unknown selection type: {_0}")]
    UnknownKind(String),
    #[display(fmt = "Unknown suffix: {_0}")]
    UnknownSuffix(String),
}

impl std::error::Error for ParseError {}

/// Error type for building a picker from host configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// A field failed validation.
    #[error(transparent)]
    ParseError(#[from] ParseError),

    /// A min/max bound is not an ISO-8601 date/time.
    #[error("Invalid {which} bound: {value}")]
    InvalidBound { which: &'static str, value: String },

    /// The min bound lies after the max bound.
    #[error("Invalid bounds: min ({min}) is after max ({max})")]
    InvertedBounds { min: String, max: String },

    /// A custom flow was given but has no steps.
    #[error("Custom flow must contain at least one step")]
    EmptyFlow,

    /// The terminal step was listed inside a flow.
    #[error("The '{}' step is terminal and cannot appear in a flow", Step::End)]
    EndInFlow,

    /// The configuration document could not be decoded.
    #[error("Invalid configuration: {0}")]
    Json(String),
}
