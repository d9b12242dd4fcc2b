use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::bounds::{Bounds, TimeBounds};
use crate::grid::{Cell, calendar_cells, hour_cells, minute_cells, month_cells, year_cells};
use crate::{DateTimeValue, FieldSet, FlowManager, Interval, MAX_MONTH, Month, NOON, ParseError, Step, WeekStart, prelude::*};

/// Half of the day on a 12-hour dial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suffix {
    #[display(fmt = "am")]
    Am,
    #[display(fmt = "pm")]
    Pm,
}

impl Suffix {
    pub const fn of_hour(hour: u32) -> Self {
        if hour < NOON { Self::Am } else { Self::Pm }
    }
}

impl FromStr for Suffix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "am" => Ok(Self::Am),
            "pm" => Ok(Self::Pm),
            other => Err(ParseError::UnknownSuffix(other.to_owned())),
        }
    }
}

/// Which parts of the time step the user has picked since entering it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TouchedParts {
    pub hour:   bool,
    pub minute: bool,
    pub suffix: bool,
}

impl TouchedParts {
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Hour and minute picked, and the half of day too when it matters.
    pub const fn complete(&self, use_12_hour: bool) -> bool {
        self.hour && self.minute && (self.suffix || !use_12_hour)
    }
}

/// A change reported by the time dial.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeChange {
    pub hour:           Option<u32>,
    pub minute:         Option<u32>,
    pub suffix_touched: bool,
}

impl TimeChange {
    pub const fn hour(hour: u32) -> Self {
        Self {
            hour:           Some(hour),
            minute:         None,
            suffix_touched: false,
        }
    }

    pub const fn minute(minute: u32) -> Self {
        Self {
            hour:           None,
            minute:         Some(minute),
            suffix_touched: false,
        }
    }
}

/// Keys the picker reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Escape,
    Tab,
    Enter,
    Other,
}

/// Where a session stands after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Still open on this step.
    Pending(Step),
    /// Flow exhausted; the value is final and the session is closed.
    Confirmed(DateTimeValue),
    /// Closed without a value.
    Cancelled,
}

/// Behaviour switches fixed for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    pub auto:        bool,
    pub use_12_hour: bool,
    pub hour_step:   Interval,
    pub minute_step: Interval,
    pub bounds:      Bounds,
    pub week_start:  WeekStart,
}

/// Month shown by the calendar; paged independently of the working value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarPage {
    pub year:  i32,
    pub month: Month,
}

impl CalendarPage {
    /// Page holding `value`.
    pub fn of(value: &DateTimeValue) -> Self {
        Self {
            year:  value.year(),
            month: Month::new(value.month()).unwrap_or(Month::JANUARY),
        }
    }

    pub fn previous(self) -> Self {
        self.shifted(-1)
    }

    pub fn next(self) -> Self {
        self.shifted(1)
    }

    fn shifted(self, delta: i32) -> Self {
        let months = i32::from(MAX_MONTH);
        let index = self.year * months + i32::from(self.month.get()) - 1 + delta;
        let month = u8::try_from(index.rem_euclid(months) + 1)
            .ok()
            .and_then(|m| Month::new(m).ok())
            .unwrap_or(self.month);
        Self {
            year: index.div_euclid(months),
            month,
        }
    }
}

/// What the rendering layer should show for the active step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Calendar {
        page:  CalendarPage,
        cells: Vec<Cell<u8>>,
    },
    Time {
        hours:   Vec<Cell<u32>>,
        minutes: Vec<Cell<u32>>,
        suffix:  Option<Suffix>,
    },
    Year(Vec<Cell<i32>>),
    Month(Vec<Cell<Month>>),
    Closed,
}

/// One open picker: the working value and the step flow walking over it.
///
/// Every event handler returns the [`Outcome`] after handling it. Once a
/// session confirms or cancels it is closed and ignores further events,
/// answering each with the outcome it closed with.
#[derive(Debug, Clone)]
pub struct Session {
    working: DateTimeValue,
    flow:    FlowManager,
    step:    Step,
    touched: TouchedParts,
    page:    CalendarPage,
    options: SessionOptions,
    closed:  Option<Outcome>,
}

impl Session {
    pub fn new(working: DateTimeValue, flow: FlowManager, options: SessionOptions) -> Self {
        let step = flow.first();
        let page = CalendarPage::of(&working);
        debug!(%step, working = %working, "picker opened");
        Self {
            working,
            flow,
            step,
            touched: TouchedParts::default(),
            page,
            options,
            closed: None,
        }
    }

    pub const fn working(&self) -> DateTimeValue {
        self.working
    }

    pub const fn step(&self) -> Step {
        self.step
    }

    pub const fn touched(&self) -> TouchedParts {
        self.touched
    }

    pub const fn page(&self) -> CalendarPage {
        self.page
    }

    pub const fn options(&self) -> &SessionOptions {
        &self.options
    }

    pub const fn flow(&self) -> &FlowManager {
        &self.flow
    }

    pub const fn is_open(&self) -> bool {
        self.closed.is_none()
    }

    fn outcome(&self) -> Outcome {
        self.closed.unwrap_or(Outcome::Pending(self.step))
    }

    /// Half of the day, shown only in 12-hour mode.
    pub fn suffix(&self) -> Option<Suffix> {
        self.options.use_12_hour.then(|| Suffix::of_hour(self.working.hour()))
    }

    /// Hour/minute limits for the working day.
    pub fn time_bounds(&self) -> TimeBounds {
        TimeBounds::for_date(&self.options.bounds, &self.working)
    }

    fn apply(&mut self, fields: FieldSet) -> bool {
        match self.working.set(fields) {
            Some(next) => {
                self.working = next;
                true
            },
            None => {
                trace!(?fields, "change does not form a valid date, ignored");
                false
            },
        }
    }

    fn after_change(&mut self) -> Outcome {
        if self.options.auto {
            self.advance()
        } else {
            self.outcome()
        }
    }

    pub fn on_change_date(&mut self, year: i32, month: Month, day: u8) -> Outcome {
        if !self.is_open() {
            return self.outcome();
        }
        let fields = FieldSet {
            year: Some(year),
            month: Some(month.get()),
            day: Some(day),
            ..FieldSet::default()
        };
        if !self.apply(fields) {
            return self.outcome();
        }
        self.after_change()
    }

    pub fn on_change_month(&mut self, month: Month) -> Outcome {
        if !self.is_open() {
            return self.outcome();
        }
        let fields = FieldSet {
            month: Some(month.get()),
            ..FieldSet::default()
        };
        if !self.apply(fields) {
            return self.outcome();
        }
        self.after_change()
    }

    pub fn on_change_year(&mut self, year: i32) -> Outcome {
        if !self.is_open() {
            return self.outcome();
        }
        let fields = FieldSet {
            year: Some(year),
            ..FieldSet::default()
        };
        if !self.apply(fields) {
            return self.outcome();
        }
        self.after_change()
    }

    /// Applies the hour and/or minute and marks them touched. Auto mode
    /// advances once hour and minute (and, on a 12-hour dial, the suffix) are
    /// all touched.
    pub fn on_change_time(&mut self, change: TimeChange) -> Outcome {
        if !self.is_open() {
            return self.outcome();
        }
        if change.suffix_touched {
            self.touched.suffix = true;
        }
        if let Some(hour) = change.hour {
            if self.apply(FieldSet {
                hour: Some(hour),
                ..FieldSet::default()
            }) {
                self.touched.hour = true;
            }
        }
        if let Some(minute) = change.minute {
            if self.apply(FieldSet {
                minute: Some(minute),
                ..FieldSet::default()
            }) {
                self.touched.minute = true;
            }
        }

        if self.options.auto && self.touched.complete(self.options.use_12_hour) {
            return self.advance();
        }
        self.outcome()
    }

    /// Moves the working hour into the requested half of the day.
    pub fn select_suffix(&mut self, suffix: Suffix) -> Outcome {
        let hour = self.working.hour();
        let target = match suffix {
            Suffix::Am if hour >= NOON => hour - NOON,
            Suffix::Pm if hour < NOON => hour + NOON,
            _ => return self.outcome(),
        };
        self.on_change_time(TimeChange {
            hour:           Some(target),
            minute:         None,
            suffix_touched: true,
        })
    }

    /// Moves to the next step of the flow; past the last step the working
    /// value is confirmed and the session closes.
    pub fn advance(&mut self) -> Outcome {
        if !self.is_open() {
            return self.outcome();
        }
        let next = self.flow.next(self.step);
        self.touched.reset();

        if next == Step::End {
            debug!(value = %self.working, "selection confirmed");
            self.step = next;
            self.closed = Some(Outcome::Confirmed(self.working));
            return self.outcome();
        }

        debug!(from = %self.step, to = %next, "step advanced");
        self.enter(next);
        self.outcome()
    }

    fn enter(&mut self, step: Step) {
        if step == Step::Date {
            self.page = CalendarPage::of(&self.working);
        }
        self.step = step;
    }

    /// Detour to the year list; the next advance comes back to the calendar.
    pub fn show_year(&mut self) -> Outcome {
        self.detour(Step::Year)
    }

    /// Detour to the month list; the next advance comes back to the calendar.
    pub fn show_month(&mut self) -> Outcome {
        self.detour(Step::Month)
    }

    fn detour(&mut self, step: Step) -> Outcome {
        if !self.is_open() {
            return self.outcome();
        }
        debug!(from = %self.step, to = %step, "detour");
        self.step = step;
        self.flow.diversion(Step::Date);
        self.outcome()
    }

    pub fn cancel(&mut self) -> Outcome {
        if !self.is_open() {
            return self.outcome();
        }
        debug!(step = %self.step, "selection cancelled");
        self.closed = Some(Outcome::Cancelled);
        Outcome::Cancelled
    }

    /// Escape and Tab cancel, Enter confirms the active step.
    pub fn on_key(&mut self, key: Key) -> Outcome {
        match key {
            Key::Escape | Key::Tab => self.cancel(),
            Key::Enter => self.advance(),
            Key::Other => self.outcome(),
        }
    }

    /// Picks a day of the displayed calendar page. Padding and disabled cells
    /// are ignored.
    pub fn select_day(&mut self, cell: &Cell<u8>) -> Outcome {
        match selectable(cell) {
            Some(day) => self.on_change_date(self.page.year, self.page.month, day),
            None => self.outcome(),
        }
    }

    pub fn select_month(&mut self, cell: &Cell<Month>) -> Outcome {
        match selectable(cell) {
            Some(month) => self.on_change_month(month),
            None => self.outcome(),
        }
    }

    pub fn select_year(&mut self, cell: &Cell<i32>) -> Outcome {
        match selectable(cell) {
            Some(year) => self.on_change_year(year),
            None => self.outcome(),
        }
    }

    pub fn select_hour(&mut self, cell: &Cell<u32>) -> Outcome {
        match selectable(cell) {
            Some(hour) => self.on_change_time(TimeChange::hour(hour)),
            None => self.outcome(),
        }
    }

    pub fn select_minute(&mut self, cell: &Cell<u32>) -> Outcome {
        match selectable(cell) {
            Some(minute) => self.on_change_time(TimeChange::minute(minute)),
            None => self.outcome(),
        }
    }

    pub fn previous_month(&mut self) {
        self.page = self.page.previous();
    }

    pub fn next_month(&mut self) {
        self.page = self.page.next();
    }

    /// Grid for the active step.
    pub fn view(&self) -> View {
        if !self.is_open() {
            return View::Closed;
        }
        let bounds = &self.options.bounds;
        match self.step {
            Step::Date => View::Calendar {
                page:  self.page,
                cells: calendar_cells(
                    self.page.year,
                    self.page.month,
                    self.options.week_start,
                    Some(self.working.date()),
                    bounds,
                ),
            },
            Step::Time => {
                let limits = self.time_bounds();
                let hour = self.working.hour();
                View::Time {
                    hours:   hour_cells(self.options.hour_step, hour, self.options.use_12_hour, &limits),
                    minutes: minute_cells(self.options.minute_step, hour, self.working.minute(), &limits),
                    suffix:  self.suffix(),
                }
            },
            Step::Year => View::Year(year_cells(self.working.year(), bounds)),
            Step::Month => View::Month(
                Month::new(self.working.month())
                    .map(|month| month_cells(self.working.year(), month, bounds))
                    .unwrap_or_default(),
            ),
            Step::End => View::Closed,
        }
    }
}

fn selectable<T: Copy>(cell: &Cell<T>) -> Option<T> {
    if cell.disabled {
        trace!("disabled cell ignored");
        return None;
    }
    cell.value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SelectionKind, TimeOfDay};
    use pretty_assertions::assert_eq;

    fn dt(s: &str) -> DateTimeValue {
        DateTimeValue::from_iso(s).unwrap()
    }

    fn month(m: u8) -> Month {
        Month::new(m).unwrap()
    }

    fn session(kind: SelectionKind, options: SessionOptions) -> Session {
        Session::new(dt("2021-06-15T10:20:00Z"), FlowManager::from_kind(kind), options)
    }

    fn auto(use_12_hour: bool) -> SessionOptions {
        SessionOptions {
            auto: true,
            use_12_hour,
            ..SessionOptions::default()
        }
    }

    #[test]
    fn test_starts_on_first_step() {
        let s = session(SelectionKind::DateTime, SessionOptions::default());
        assert_eq!(s.step(), Step::Date);
        assert!(s.is_open());
        assert_eq!(s.page(), CalendarPage { year: 2021, month: month(6) });
    }

    #[test]
    fn test_manual_mode_does_not_advance() {
        let mut s = session(SelectionKind::Date, SessionOptions::default());
        assert_eq!(s.on_change_date(2021, month(6), 20), Outcome::Pending(Step::Date));
        assert_eq!(s.working().day(), 20);

        let outcome = s.advance();
        assert_eq!(outcome, Outcome::Confirmed(dt("2021-06-20T10:20:00Z")));
        assert!(!s.is_open());
    }

    #[test]
    fn test_date_only_flow_confirms_on_day_pick() {
        let mut s = session(SelectionKind::Date, auto(false));
        let View::Calendar { cells, .. } = s.view() else {
            panic!("expected calendar");
        };
        let fifteenth = cells.iter().find(|cell| cell.value == Some(15)).unwrap();

        let Outcome::Confirmed(value) = s.select_day(fifteenth) else {
            panic!("expected confirmation");
        };
        assert_eq!((value.year(), value.month(), value.day()), (2021, 6, 15));
    }

    #[test]
    fn test_day_pick_uses_displayed_page() {
        let mut s = session(SelectionKind::Date, auto(false));
        s.next_month();
        s.next_month();
        let cell = Cell {
            value:    Some(3),
            selected: false,
            disabled: false,
        };
        let Outcome::Confirmed(value) = s.select_day(&cell) else {
            panic!("expected confirmation");
        };
        assert_eq!((value.year(), value.month(), value.day()), (2021, 8, 3));
    }

    #[test]
    fn test_auto_24_hour_advances_after_hour_and_minute() {
        let mut s = session(SelectionKind::Time, auto(false));
        assert_eq!(s.on_change_time(TimeChange::hour(5)), Outcome::Pending(Step::Time));
        assert!(s.touched().hour);
        assert!(!s.touched().minute);

        let Outcome::Confirmed(value) = s.on_change_time(TimeChange::minute(30)) else {
            panic!("expected confirmation after both parts");
        };
        assert_eq!((value.hour(), value.minute()), (5, 30));
    }

    #[test]
    fn test_auto_advances_exactly_once() {
        let mut s = session(SelectionKind::DateTime, auto(false));
        s.on_change_date(2021, month(6), 16);
        assert_eq!(s.step(), Step::Time);

        assert_eq!(s.on_change_time(TimeChange::hour(5)), Outcome::Pending(Step::Time));
        assert!(matches!(s.on_change_time(TimeChange::minute(30)), Outcome::Confirmed(_)));
        assert!(matches!(s.on_change_time(TimeChange::minute(45)), Outcome::Confirmed(_)));
        assert_eq!(s.working().minute(), 30, "closed session ignores changes");
    }

    #[test]
    fn test_auto_12_hour_waits_for_suffix() {
        let mut s = session(SelectionKind::Time, auto(true));
        s.on_change_time(TimeChange::hour(5));
        assert_eq!(s.on_change_time(TimeChange::minute(30)), Outcome::Pending(Step::Time));

        let Outcome::Confirmed(value) = s.select_suffix(Suffix::Pm) else {
            panic!("suffix should complete the time");
        };
        assert_eq!((value.hour(), value.minute()), (17, 30));
    }

    #[test]
    fn test_suffix_in_current_half_is_noop() {
        let mut s = session(SelectionKind::Time, auto(true));
        s.on_change_time(TimeChange::hour(5));
        s.on_change_time(TimeChange::minute(30));
        assert_eq!(s.select_suffix(Suffix::Am), Outcome::Pending(Step::Time));
        assert!(!s.touched().suffix);
        assert_eq!(s.working().hour(), 5);
    }

    #[test]
    fn test_select_suffix_am_subtracts_twelve() {
        let mut s = Session::new(
            dt("2021-06-15T18:00:00Z"),
            FlowManager::from_kind(SelectionKind::Time),
            SessionOptions {
                use_12_hour: true,
                ..SessionOptions::default()
            },
        );
        assert_eq!(s.suffix(), Some(Suffix::Pm));
        s.select_suffix(Suffix::Am);
        assert_eq!(s.working().hour(), 6);
        assert!(s.touched().suffix);
        assert_eq!(s.suffix(), Some(Suffix::Am));
    }

    #[test]
    fn test_touched_parts_reset_on_step_change() {
        let mut s = session(SelectionKind::DateTime, SessionOptions::default());
        s.advance();
        s.on_change_time(TimeChange::hour(8));
        assert!(s.touched().hour);
        s.show_year();
        s.advance();
        assert_eq!(s.touched(), TouchedParts::default());
    }

    #[test]
    fn test_show_year_returns_to_date() {
        let mut s = session(SelectionKind::DateTime, auto(false));
        assert_eq!(s.show_year(), Outcome::Pending(Step::Year));

        assert_eq!(s.on_change_year(2030), Outcome::Pending(Step::Date));
        assert_eq!(s.page().year, 2030);
        assert_eq!(s.on_change_date(2030, month(6), 1), Outcome::Pending(Step::Time));
    }

    #[test]
    fn test_show_month_returns_to_date() {
        let mut s = session(SelectionKind::Date, auto(false));
        assert_eq!(s.show_month(), Outcome::Pending(Step::Month));
        assert_eq!(s.on_change_month(month(2)), Outcome::Pending(Step::Date));
        assert_eq!(s.page().month, month(2));
        assert_eq!(s.working().month(), 2);
    }

    #[test]
    fn test_disabled_cells_are_ignored() {
        let bounds = Bounds::new(Some(dt("2021-06-10T00:00:00Z")), Some(dt("2021-06-20T00:00:00Z")));
        let mut s = session(
            SelectionKind::Date,
            SessionOptions {
                auto: true,
                bounds,
                ..SessionOptions::default()
            },
        );
        let View::Calendar { cells, .. } = s.view() else {
            panic!("expected calendar");
        };

        let ninth = cells.iter().find(|cell| cell.value == Some(9)).unwrap();
        assert!(ninth.disabled);
        assert_eq!(s.select_day(ninth), Outcome::Pending(Step::Date));
        assert_eq!(s.select_day(&cells[0]), Outcome::Pending(Step::Date), "padding");
        assert_eq!(s.working(), dt("2021-06-15T10:20:00Z"));
    }

    #[test]
    fn test_keyboard_contract() {
        let mut s = session(SelectionKind::DateTime, SessionOptions::default());
        assert_eq!(s.on_key(Key::Other), Outcome::Pending(Step::Date));
        assert_eq!(s.on_key(Key::Enter), Outcome::Pending(Step::Time));
        assert!(matches!(s.on_key(Key::Enter), Outcome::Confirmed(_)));

        for key in [Key::Escape, Key::Tab] {
            let mut s = session(SelectionKind::DateTime, SessionOptions::default());
            assert_eq!(s.on_key(key), Outcome::Cancelled);
            assert!(!s.is_open());
            assert_eq!(s.on_key(Key::Enter), Outcome::Cancelled, "closed stays closed");
            assert_eq!(s.view(), View::Closed);
        }
    }

    #[test]
    fn test_custom_flow_year_month_date() {
        let flow = FlowManager::new(vec![Step::Year, Step::Month, Step::Date]).unwrap();
        let mut s = Session::new(dt("2021-01-31T00:00:00Z"), flow, auto(false));
        assert_eq!(s.step(), Step::Year);
        assert_eq!(s.on_change_year(2024), Outcome::Pending(Step::Month));
        assert_eq!(s.on_change_month(month(2)), Outcome::Pending(Step::Date));
        assert_eq!(s.working().day(), 29, "day clamped into february");

        let Outcome::Confirmed(value) = s.on_change_date(2024, month(2), 14) else {
            panic!("expected confirmation");
        };
        assert_eq!(value, dt("2024-02-14T00:00:00Z"));
    }

    #[test]
    fn test_calendar_paging() {
        let mut s = session(SelectionKind::Date, SessionOptions::default());
        for _ in 0..6 {
            s.previous_month();
        }
        assert_eq!(s.page(), CalendarPage { year: 2020, month: month(12) });
        s.next_month();
        assert_eq!(s.page(), CalendarPage { year: 2021, month: month(1) });
        assert_eq!(s.working().month(), 6, "paging leaves the value alone");
    }

    #[test]
    fn test_time_view_respects_bounds_on_bound_day() {
        let bounds = Bounds::new(Some(dt("2021-06-15T09:30:00Z")), None);
        let mut s = session(
            SelectionKind::Time,
            SessionOptions {
                bounds,
                minute_step: Interval::new(15).unwrap(),
                ..SessionOptions::default()
            },
        );
        assert_eq!(s.time_bounds().min(), Some(TimeOfDay::new(9, 30).unwrap()));

        s.on_change_time(TimeChange::hour(9));
        let View::Time { hours, minutes, suffix } = s.view() else {
            panic!("expected time view");
        };
        assert!(hours[8].disabled);
        assert!(!hours[9].disabled);
        assert!(hours[9].selected);
        let disabled: Vec<bool> = minutes.iter().map(|cell| cell.disabled).collect();
        assert_eq!(disabled, vec![true, true, false, false]);
        assert_eq!(suffix, None);

        assert_eq!(s.select_hour(&hours[8]), Outcome::Pending(Step::Time));
        assert_eq!(s.working().hour(), 9);
    }

    #[test]
    fn test_year_and_month_views() {
        let mut s = session(SelectionKind::Date, SessionOptions::default());
        s.show_year();
        let View::Year(years) = s.view() else {
            panic!("expected year view");
        };
        assert_eq!(years.len(), 201);
        assert_eq!(s.select_year(&years[101]), Outcome::Pending(Step::Year));
        assert_eq!(s.working().year(), 2022);

        s.show_month();
        let View::Month(months) = s.view() else {
            panic!("expected month view");
        };
        assert!(months[5].selected);
        s.select_month(&months[0]);
        assert_eq!(s.working().month(), 1);
    }

    #[test]
    fn test_empty_flow_confirms_on_enter() {
        let flow = FlowManager::new(Vec::new()).unwrap();
        let mut s = Session::new(dt("2021-06-15T10:20:00Z"), flow, SessionOptions::default());
        assert_eq!(s.step(), Step::End);
        assert_eq!(s.view(), View::Closed);
        assert!(matches!(s.on_key(Key::Enter), Outcome::Confirmed(_)));
    }

    #[test]
    fn test_suffix_parse() {
        assert_eq!("pm".parse::<Suffix>().unwrap(), Suffix::Pm);
        assert!("noon".parse::<Suffix>().is_err());
        assert_eq!(Suffix::of_hour(0), Suffix::Am);
        assert_eq!(Suffix::of_hour(12), Suffix::Pm);
    }

    #[test]
    fn test_calendar_page_wraps_years() {
        let page = CalendarPage { year: 2021, month: month(1) };
        assert_eq!(page.previous(), CalendarPage { year: 2020, month: month(12) });
        assert_eq!(page.previous().next(), page);
        let december = CalendarPage { year: 2021, month: month(12) };
        assert_eq!(december.next(), CalendarPage { year: 2022, month: month(1) });
    }
}
