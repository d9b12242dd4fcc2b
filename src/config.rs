use serde::{Deserialize, Serialize};

use crate::{
    Bounds, ConfigError, DateTimeValue, FlowManager, Interval, SelectionKind, SessionOptions, Step, WeekStart, Zone,
};

/// Host-facing picker configuration.
///
/// Every field has a default, so `{}` is a valid document: a 24-hour date
/// picker with unit steps, no bounds and UTC zones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    #[serde(rename = "type")]
    pub kind:         SelectionKind,
    /// Replaces the flow implied by `kind`.
    pub flow:         Option<Vec<Step>>,
    pub use_12_hour:  bool,
    pub hour_step:    Interval,
    pub minute_step:  Interval,
    /// ISO-8601 lower bound.
    pub min_datetime: Option<String>,
    /// ISO-8601 upper bound.
    pub max_datetime: Option<String>,
    /// Advance as soon as a step is complete.
    pub auto:         bool,
    pub week_start:   WeekStart,
    /// Zone the picker displays and edits in.
    pub zone:         Zone,
    /// Zone the emitted value is written in.
    pub value_zone:   Zone,
}

impl PickerConfig {
    /// Decodes a JSON document.
    ///
    /// # Errors
    /// Returns `ConfigError::Json` if the document is malformed or a field fails
    /// its own validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json).map_err(|e| ConfigError::Json(e.to_string()))
    }

    /// # Errors
    /// Returns the first problem found in the flow or the bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.flow_manager()?;
        self.bounds()?;
        Ok(())
    }

    /// # Errors
    /// Returns `ConfigError::EmptyFlow` or `ConfigError::EndInFlow` for a bad
    /// custom flow.
    pub fn flow_manager(&self) -> Result<FlowManager, ConfigError> {
        match &self.flow {
            None => Ok(FlowManager::from_kind(self.kind)),
            Some(flow) if flow.is_empty() => Err(ConfigError::EmptyFlow),
            Some(flow) => FlowManager::new(flow.clone()),
        }
    }

    /// Parsed bounds, read in the display zone.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBound` for an unparseable bound and
    /// `ConfigError::InvertedBounds` when min lies after max.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        let min = parse_bound("min", self.min_datetime.as_deref())?;
        let max = parse_bound("max", self.max_datetime.as_deref())?;
        if let (Some(min), Some(max)) = (min, max) {
            if min > max {
                return Err(ConfigError::InvertedBounds {
                    min: min.to_iso(),
                    max: max.to_iso(),
                });
            }
        }
        Ok(Bounds::new(min, max).set_zone(self.zone))
    }

    /// # Errors
    /// Same as [`PickerConfig::bounds`].
    pub fn session_options(&self) -> Result<SessionOptions, ConfigError> {
        Ok(SessionOptions {
            auto:        self.auto,
            use_12_hour: self.use_12_hour,
            hour_step:   self.hour_step,
            minute_step: self.minute_step,
            bounds:      self.bounds()?,
            week_start:  self.week_start,
        })
    }
}

fn parse_bound(which: &'static str, raw: Option<&str>) -> Result<Option<DateTimeValue>, ConfigError> {
    raw.map(|value| {
        DateTimeValue::from_iso(value).ok_or_else(|| ConfigError::InvalidBound {
            which,
            value: value.to_owned(),
        })
    })
    .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = PickerConfig::from_json("{}").unwrap();
        assert_eq!(config, PickerConfig::default());
        assert_eq!(config.kind, SelectionKind::Date);
        assert_eq!(config.week_start.get(), 1);
        assert_eq!(config.minute_step.get(), 1);
        assert!(config.zone.is_utc());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_full_document() {
        let config = PickerConfig::from_json(
            r#"{
                "type": "datetime",
                "flow": ["year", "date", "time"],
                "use12Hour": true,
                "hourStep": 2,
                "minuteStep": 15,
                "minDatetime": "2021-01-01T00:00:00Z",
                "maxDatetime": "2021-12-31T23:59:00Z",
                "auto": true,
                "weekStart": 7,
                "zone": "+09:00",
                "valueZone": "UTC"
            }"#,
        )
        .unwrap();

        assert_eq!(config.kind, SelectionKind::DateTime);
        assert_eq!(config.flow_manager().unwrap().flow(), &[Step::Year, Step::Date, Step::Time]);
        assert!(config.use_12_hour);
        assert_eq!(config.hour_step.get(), 2);
        assert_eq!(config.week_start.get(), 7);
        assert_eq!(config.zone.to_string(), "+09:00");

        let options = config.session_options().unwrap();
        assert!(options.auto);
        assert_eq!(options.bounds.min().unwrap().zone(), config.zone);
        assert_eq!(options.bounds.min().unwrap().hour(), 9);
    }

    #[test]
    fn test_kind_decides_default_flow() {
        let config = PickerConfig::from_json(r#"{"type": "time"}"#).unwrap();
        assert_eq!(config.flow_manager().unwrap().flow(), &[Step::Time]);
    }

    #[test]
    fn test_invalid_documents() {
        struct TestCase {
            json:        &'static str,
            description: &'static str,
        }

        let cases = [
            TestCase {
                json:        r#"{"minuteStep": 0}"#,
                description: "zero step",
            },
            TestCase {
                json:        r#"{"weekStart": 8}"#,
                description: "week start out of range",
            },
            TestCase {
                json:        r#"{"type": "week"}"#,
                description: "unknown kind",
            },
            TestCase {
                json:        r#"{"flow": ["date", "hour"]}"#,
                description: "unknown step",
            },
            TestCase {
                json:        r#"{"zone": "Mars/Olympus"}"#,
                description: "unknown zone",
            },
            TestCase {
                json:        "{",
                description: "truncated document",
            },
        ];

        for case in &cases {
            assert!(
                matches!(PickerConfig::from_json(case.json), Err(ConfigError::Json(_))),
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_validate_flow() {
        let empty = PickerConfig {
            flow: Some(Vec::new()),
            ..PickerConfig::default()
        };
        assert_eq!(empty.validate(), Err(ConfigError::EmptyFlow));

        let with_end = PickerConfig {
            flow: Some(vec![Step::Date, Step::End]),
            ..PickerConfig::default()
        };
        assert_eq!(with_end.validate(), Err(ConfigError::EndInFlow));
    }

    #[test]
    fn test_validate_bounds() {
        let malformed = PickerConfig {
            max_datetime: Some("tomorrow".to_owned()),
            ..PickerConfig::default()
        };
        assert_eq!(
            malformed.validate(),
            Err(ConfigError::InvalidBound {
                which: "max",
                value: "tomorrow".to_owned(),
            })
        );

        let inverted = PickerConfig {
            min_datetime: Some("2022-01-01T00:00:00Z".to_owned()),
            max_datetime: Some("2021-01-01T00:00:00Z".to_owned()),
            ..PickerConfig::default()
        };
        assert!(matches!(inverted.validate(), Err(ConfigError::InvertedBounds { .. })));

        let equal = PickerConfig {
            min_datetime: Some("2021-01-01T00:00:00Z".to_owned()),
            max_datetime: Some("2021-01-01T00:00:00Z".to_owned()),
            ..PickerConfig::default()
        };
        assert!(equal.validate().is_ok());
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let json = serde_json::to_value(PickerConfig::default()).unwrap();
        assert_eq!(json["type"], "date");
        assert_eq!(json["use12Hour"], false);
        assert_eq!(json["weekStart"], 1);
        assert_eq!(json["valueZone"], "UTC");
    }
}
