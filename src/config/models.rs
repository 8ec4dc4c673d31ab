use crate::core::address_book::DEFAULT_UPCOMING_DAYS;
use serde::{Deserialize, Serialize};

pub trait ConfigItem<T> {
    fn get_value(&self) -> &T;
    fn description(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BirthdayWindowConfigItem {
    pub value: u32,
    #[serde(default)]
    pub description: String,
}

impl Default for BirthdayWindowConfigItem {
    fn default() -> Self {
        Self {
            value: DEFAULT_UPCOMING_DAYS,
            description: "Days ahead covered by 'birthdays' without an argument.".into(),
        }
    }
}

impl ConfigItem<u32> for BirthdayWindowConfigItem {
    fn get_value(&self) -> &u32 {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileLoggingConfigItem {
    pub value: bool,
    #[serde(default)]
    pub description: String,
}

impl Default for FileLoggingConfigItem {
    fn default() -> Self {
        Self {
            value: false,
            description: "Enable writing log messages to file.".into(),
        }
    }
}

impl ConfigItem<bool> for FileLoggingConfigItem {
    fn get_value(&self) -> &bool {
        &self.value
    }
    fn description(&self) -> &str {
        &self.description
    }
}
