use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::{ConfigError, ParseError, prelude::*};

/// One granularity stage of the picker, or the terminal `End`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
    /// Flow exhausted; the selection is confirmed.
    #[display(fmt = "end")]
    End,
}

impl FromStr for Step {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "end" => Ok(Self::End),
            other => Err(ParseError::UnknownStep(other.to_owned())),
        }
    }
}

/// What the picker selects; decides the default flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKind {
    #[default]
    #[display(fmt = "date")]
    Date,
    #[display(fmt = "time")]
    Time,
    #[display(fmt = "datetime")]
    DateTime,
}

impl SelectionKind {
    pub fn default_flow(self) -> Vec<Step> {
        match self {
            Self::Date => vec![Step::Date],
            Self::Time => vec![Step::Time],
            Self::DateTime => vec![Step::Date, Step::Time],
        }
    }
}

impl FromStr for SelectionKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "date" => Ok(Self::Date),
            "time" => Ok(Self::Time),
            "datetime" => Ok(Self::DateTime),
            other => Err(ParseError::UnknownKind(other.to_owned())),
        }
    }
}

/// Walks an ordered list of steps, with a one-shot override of the next step.
///
/// The override ("diversion") is consumed by the very next call to
/// [`FlowManager::next`], whichever step that call is made from, and is
/// cleared even when it was installed for a different step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowManager {
    flow:           Vec<Step>,
    end_status:     Step,
    diversion_next: Option<Step>,
}

impl FlowManager {
    /// Creates a manager over an explicit flow.
    ///
    /// # Errors
    /// Returns `ConfigError::EndInFlow` if the terminal step is part of `flow`.
    pub fn new(flow: Vec<Step>) -> Result<Self, ConfigError> {
        if flow.contains(&Step::End) {
            return Err(ConfigError::EndInFlow);
        }
        Ok(Self {
            flow,
            end_status: Step::End,
            diversion_next: None,
        })
    }

    pub fn from_kind(kind: SelectionKind) -> Self {
        Self {
            flow:           kind.default_flow(),
            end_status:     Step::End,
            diversion_next: None,
        }
    }

    pub fn flow(&self) -> &[Step] {
        &self.flow
    }

    pub const fn pending_diversion(&self) -> Option<Step> {
        self.diversion_next
    }

    /// Step at `index`, or `End` past the last one.
    pub fn step(&self, index: usize) -> Step {
        self.flow.get(index).copied().unwrap_or(self.end_status)
    }

    pub fn first(&self) -> Step {
        self.step(0)
    }

    /// Step following `current`.
    ///
    /// A pending diversion wins and is cleared. A `current` that is not part of
    /// the flow restarts it from the first step.
    pub fn next(&mut self, current: Step) -> Step {
        if let Some(next) = self.diversion_next.take() {
            debug!(from = %current, to = %next, "flow diverted");
            return next;
        }

        let index = match self.flow.iter().position(|step| *step == current) {
            Some(position) => position + 1,
            None => {
                warn!(step = %current, "step is not part of the flow, restarting from the first step");
                0
            },
        };
        self.step(index)
    }

    /// Makes the next call to [`FlowManager::next`] return `next`.
    pub fn diversion(&mut self, next: Step) {
        self.diversion_next = Some(next);
    }
}
