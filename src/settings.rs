use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;

pub const SETTINGS_FILE_NAME: &str = "settings.toml";
pub const DEFAULT_LOG_FILE_NAME: &str = "mongo-pager.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub const fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Default for LogLevel {
    fn default() -> Self {
        LogLevel::Info
    }
}

/// Ambient preferences from `settings.toml`. The MongoDB URI is not part of
/// this file; it comes from the `MONGO_URI` environment variable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    pub logging_enabled: bool,
    pub logging_level: LogLevel,
    pub logging_path: String,
    pub expand_first_result: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            logging_enabled: false,
            logging_level: LogLevel::Info,
            logging_path: DEFAULT_LOG_FILE_NAME.to_string(),
            expand_first_result: true,
        }
    }
}

impl AppSettings {
    pub fn normalize_logging(&mut self) {
        if self.logging_path.trim().is_empty() {
            self.logging_path = DEFAULT_LOG_FILE_NAME.to_string();
        }
    }
}

#[derive(Debug)]
pub enum SettingsLoadError {
    Io(io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for SettingsLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsLoadError::Io(error) => write!(f, "I/O error: {}", error),
            SettingsLoadError::Parse(error) => write!(f, "Parse error: {}", error),
        }
    }
}

impl std::error::Error for SettingsLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsLoadError::Io(error) => Some(error),
            SettingsLoadError::Parse(error) => Some(error),
        }
    }
}

pub fn settings_path() -> PathBuf {
    PathBuf::from(SETTINGS_FILE_NAME)
}

/// A missing file means defaults; a present but unreadable or malformed file
/// is an error the caller reports once at startup.
pub fn load_from_disk() -> Result<AppSettings, SettingsLoadError> {
    match fs::read_to_string(settings_path()) {
        Ok(contents) => toml::from_str::<AppSettings>(&contents)
            .map(|mut settings| {
                settings.normalize_logging();
                settings
            })
            .map_err(SettingsLoadError::Parse),
        Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(AppSettings::default()),
        Err(error) => Err(SettingsLoadError::Io(error)),
    }
}
