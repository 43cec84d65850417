use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::settings::{CycleSettings, Preferences};

/// Everything that is persisted, read and written as a whole.
///
/// The preferences sit at the top level of the file and the cycle settings
/// under the `menstrual_cycle_settings_v1` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredState {
    #[serde(flatten)]
    pub preferences: Preferences,
    #[serde(
        rename = "menstrual_cycle_settings_v1",
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_settings"
    )]
    pub settings: Option<CycleSettings>,
}

/// A settings record that cannot be used is dropped, not reported.
fn lenient_settings<'de, D>(deserializer: D) -> Result<Option<CycleSettings>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    let settings: CycleSettings = match value.try_into() {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "discarding malformed cycle settings");
            return Ok(None);
        }
    };

    // A stored date that no longer parses makes the whole record unusable
    if let Err(e) = settings.last_period_date() {
        warn!(error = %e, "discarding cycle settings with a corrupt date");
        return Ok(None);
    }
    Ok(Some(settings))
}

/// TOML file persistence for settings and preferences.
///
/// A missing file is an empty state. Records that cannot be understood are
/// logged and dropped, never returned as errors; only I/O failures are.
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<StoredState> {
        if !self.file_path.exists() {
            debug!(path = %self.file_path.display(), "settings file not found, using defaults");
            return Ok(StoredState::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read {}", self.file_path.display()))?;

        match toml::from_str(&content) {
            Ok(state) => Ok(state),
            Err(e) => {
                warn!(path = %self.file_path.display(), error = %e, "discarding unreadable settings file");
                Ok(StoredState::default())
            }
        }
    }

    pub fn save(&self, state: &StoredState) -> Result<()> {
        let content = toml::to_string_pretty(state).context("Failed to encode settings")?;
        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write {}", self.file_path.display()))?;
        debug!(path = %self.file_path.display(), "settings saved");
        Ok(())
    }
}
