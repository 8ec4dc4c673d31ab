pub mod models;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive, EnumString};

use crate::config::models::{BirthdayWindowConfigItem, ConfigItem, FileLoggingConfigItem};
use crate::errors::{Error, Result};

/// Upper bound for the birthday window; no anniversary is further away than this.
pub const MAX_WINDOW_DAYS: u32 = 366;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIterDerive, EnumString, Display, AsRefStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfigKey {
    BirthdayWindowDays,
    FileLoggingEnabled,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub birthday_window_days: BirthdayWindowConfigItem,
    #[serde(default)]
    pub file_logging_enabled: FileLoggingConfigItem,
}

/// Settings loaded from the optional JSON config file.
#[derive(Debug, Clone, Default)]
pub struct Config {
    source: Option<PathBuf>,
    data: ConfigFile,
}

#[derive(Debug, Clone)]
pub struct ConfigRows(Vec<(String, String, String)>);

impl ConfigRows {
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = &(String, String, String)> {
        self.0.iter()
    }
}

impl Config {
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(Error::config(format!(
                "Configuration file '{}' not found.",
                path.display()
            )));
        }
        let text = fs::read_to_string(&path)?;
        let data: ConfigFile = serde_json::from_str(&text)?;
        let window = *data.birthday_window_days.get_value();
        if window > MAX_WINDOW_DAYS {
            return Err(Error::config(format!(
                "{} in '{}' must be at most {MAX_WINDOW_DAYS}, got {window}.",
                ConfigKey::BirthdayWindowDays,
                path.display()
            )));
        }
        Ok(Self {
            source: Some(path),
            data,
        })
    }

    /// Loads `path` when it exists, otherwise falls back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        if path.as_ref().exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    /// File the settings were read from, `None` when running on defaults.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn birthday_window_days(&self) -> u32 {
        *self.data.birthday_window_days.get_value()
    }
    pub fn file_logging_enabled(&self) -> bool {
        *self.data.file_logging_enabled.get_value()
    }

    pub fn rows(&self) -> ConfigRows {
        let rows = ConfigKey::iter()
            .map(|key| match key {
                ConfigKey::BirthdayWindowDays => (
                    key.to_string(),
                    self.data.birthday_window_days.description().to_string(),
                    self.birthday_window_days().to_string(),
                ),
                ConfigKey::FileLoggingEnabled => (
                    key.to_string(),
                    self.data.file_logging_enabled.description().to_string(),
                    self.file_logging_enabled().to_string(),
                ),
            })
            .collect();
        ConfigRows(rows)
    }
}
