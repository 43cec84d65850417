//! User settings and display preferences
//!
//! `CycleSettings` holds the three raw inputs exactly as the user entered
//! them; it is converted to [`CycleInputs`] only when a projection is needed.

use crate::cycle::{CycleInputs, ParseError, from_iso, to_iso};
use crate::i18n::Locale;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::warn;

/// Cycle length pre-filled when nothing is configured yet
pub const DEFAULT_CYCLE_LENGTH: i64 = 28;

/// Period length pre-filled when nothing is configured yet
pub const DEFAULT_PERIOD_LENGTH: i64 = 5;

/// Longest cycle or period length accepted from the user
pub const MAX_LENGTH_DAYS: i64 = 366;

/// The persisted prediction inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleSettings {
    /// Start of the last period (format: YYYY-MM-DD)
    pub last_period: String,
    /// Average cycle length in days
    pub cycle_length: i64,
    /// Average period length in days
    pub period_length: i64,
}

impl CycleSettings {
    pub fn new(last_period: NaiveDate, cycle_length: i64, period_length: i64) -> Self {
        Self {
            last_period: to_iso(last_period),
            cycle_length,
            period_length,
        }
    }

    /// Parse the stored last period date.
    pub fn last_period_date(&self) -> Result<NaiveDate, ParseError> {
        from_iso(&self.last_period)
    }

    /// Convert to projector inputs.
    ///
    /// Fails only if the stored date is malformed; non-positive lengths are
    /// passed through and produce an empty projection downstream.
    pub fn to_inputs(&self) -> Result<CycleInputs, ParseError> {
        Ok(CycleInputs {
            anchor_date: Some(self.last_period_date()?),
            cycle_length_days: self.cycle_length,
            period_length_days: self.period_length,
        })
    }
}

/// Colour scheme for the rendered calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!(
                "Invalid theme '{}'. Valid options are: light, dark",
                s
            )),
        }
    }
}

/// Display preferences, persisted independently of the cycle settings.
///
/// Each field is read on its own: a missing or unknown value falls back to
/// the default without affecting the other one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, deserialize_with = "lenient_preference")]
    pub theme: Theme,
    #[serde(default, deserialize_with = "lenient_preference")]
    pub lang: Locale,
}

fn lenient_preference<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr<Err = String> + Default,
{
    let value = toml::Value::deserialize(deserializer)?;
    let parsed = match value.as_str() {
        Some(text) => text.parse::<T>(),
        None => Err(format!("expected a string, found {}", value.type_str())),
    };
    Ok(parsed.unwrap_or_else(|e| {
        warn!(error = %e, "ignoring stored preference");
        T::default()
    }))
}
