use tracing::debug;

use crate::{
    Clock, ConfigError, DateTimeValue, FieldSet, FlowManager, MINUTES_PER_HOUR, Outcome, PickerConfig, SelectionKind,
    Session, SessionOptions,
};

/// The host side of a picker: holds the committed value and at most one open
/// [`Session`].
///
/// The committed value is kept in UTC. It is shown in `zone` while picking and
/// written out in `value_zone`.
#[derive(Debug, Clone)]
pub struct DatetimeInput {
    config:  PickerConfig,
    options: SessionOptions,
    flow:    FlowManager,
    value:   Option<DateTimeValue>,
    session: Option<Session>,
}

impl DatetimeInput {
    /// # Errors
    /// Returns the first validation failure of `config`.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let options = config.session_options()?;
        let flow = config.flow_manager()?;
        Ok(Self {
            config,
            options,
            flow,
            value: None,
            session: None,
        })
    }

    #[must_use]
    pub fn with_value(mut self, iso: &str) -> Self {
        self.set_value(iso);
        self
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Replaces the committed value and returns what the input now shows.
    /// Unparseable strings clear it.
    pub fn set_value(&mut self, iso: &str) -> String {
        self.value = DateTimeValue::from_iso(iso).map(DateTimeValue::to_utc);
        self.input_value()
    }

    pub const fn value(&self) -> Option<DateTimeValue> {
        self.value
    }

    /// ISO-8601 text for the committed value in `value_zone`, or `""`.
    ///
    /// Date pickers emit the start of the day.
    pub fn input_value(&self) -> String {
        self.value.map_or_else(String::new, |value| {
            let value = value.set_zone(self.config.value_zone);
            match self.config.kind {
                SelectionKind::Date => value.start_of_day(),
                SelectionKind::Time | SelectionKind::DateTime => value,
            }
            .to_iso()
        })
    }

    pub const fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Opens a fresh session, replacing any open one.
    pub fn open(&mut self, clock: &impl Clock) -> &mut Session {
        let working = self
            .value
            .map_or_else(|| self.seed(clock), |value| value.set_zone(self.config.zone));
        debug!(working = %working, "opening picker");
        self.session
            .insert(Session::new(working, self.flow.clone(), self.options))
    }

    /// Starting point when there is no value: now, clamped into the bounds and
    /// rounded to the minute step.
    fn seed(&self, clock: &impl Clock) -> DateTimeValue {
        let now = DateTimeValue::now(clock, self.config.zone);
        let clamped = self.options.bounds.clamp(now).truncate_to_minute();
        let step = self.config.minute_step.get();
        if step == 1 {
            return clamped;
        }

        let rounded = (2 * clamped.minute() + step) / (2 * step) * step;
        let seeded = if rounded >= MINUTES_PER_HOUR {
            clamped.plus_hours(1).and_then(|next| next.set(minute(0)))
        } else {
            clamped.set(minute(rounded))
        };
        seeded.unwrap_or(clamped)
    }

    /// Feeds one event to the open session.
    ///
    /// Returns the emitted text when the event confirms. Confirming or
    /// cancelling closes the session; without one this does nothing.
    pub fn dispatch(&mut self, event: impl FnOnce(&mut Session) -> Outcome) -> Option<String> {
        let session = self.session.as_mut()?;
        match event(session) {
            Outcome::Pending(_) => None,
            Outcome::Cancelled => {
                self.session = None;
                None
            },
            Outcome::Confirmed(value) => {
                self.session = None;
                self.value = Some(value.to_utc());
                let emitted = self.input_value();
                debug!(value = %emitted, "value emitted");
                Some(emitted)
            },
        }
    }

    pub fn cancel(&mut self) {
        self.dispatch(Session::cancel);
    }
}

const fn minute(minute: u32) -> FieldSet {
    FieldSet {
        year:   None,
        month:  None,
        day:    None,
        hour:   None,
        minute: Some(minute),
    }
}
