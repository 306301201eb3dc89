//! Runtime configuration for the study desk.
//!
//! Values are layered: built-in defaults, then `STUDY_DESK_*` environment
//! variables, then whatever the host applies on top (CLI flags).

use crate::canvas::grid::GridSpec;
use crate::logging::{default_log_level, normalize_level, normalize_log_dir, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub const DEFAULT_DB_FILE_NAME: &str = "study_data.db";
pub const ENV_DB_PATH: &str = "STUDY_DESK_DB_PATH";
pub const ENV_LOG_LEVEL: &str = "STUDY_DESK_LOG_LEVEL";
pub const ENV_LOG_DIR: &str = "STUDY_DESK_LOG_DIR";
pub const ENV_SNAP: &str = "STUDY_DESK_SNAP";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    EmptyDbPath,
    InvalidSnapFlag(String),
    Logging(LoggingError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyDbPath => write!(f, "database path cannot be empty"),
            Self::InvalidSnapFlag(value) => write!(
                f,
                "unsupported snap flag `{value}`; expected on/off, true/false, yes/no or 1/0"
            ),
            Self::Logging(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyDbPath | Self::InvalidSnapFlag(_) => None,
            Self::Logging(err) => Some(err),
        }
    }
}

impl From<LoggingError> for ConfigError {
    fn from(value: LoggingError) -> Self {
        Self::Logging(value)
    }
}

/// Effective settings shared by the store, the canvas and logging.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyConfig {
    pub db_path: PathBuf,
    /// Initial value of the canvas snap toggle.
    pub snap_enabled: bool,
    pub grid: GridSpec,
    pub log_level: &'static str,
    /// File logging is disabled when `None`.
    pub log_dir: Option<PathBuf>,
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_FILE_NAME),
            snap_enabled: true,
            grid: GridSpec::default(),
            log_level: default_log_level(),
            log_dir: None,
        }
    }
}

impl StudyConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by `lookup`; blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let non_blank = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        if let Some(path) = non_blank(ENV_DB_PATH) {
            config.db_path = PathBuf::from(path);
        }
        if let Some(level) = non_blank(ENV_LOG_LEVEL) {
            config.log_level = normalize_level(&level)?;
        }
        if let Some(dir) = non_blank(ENV_LOG_DIR) {
            config.log_dir = Some(normalize_log_dir(&PathBuf::from(dir))?);
        }
        if let Some(flag) = non_blank(ENV_SNAP) {
            config.snap_enabled = parse_snap_flag(&flag)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_db_path(mut self, db_path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        self.db_path = db_path.into();
        self.validate()?;
        Ok(self)
    }

    pub fn with_snap_enabled(mut self, snap_enabled: bool) -> Self {
        self.snap_enabled = snap_enabled;
        self
    }

    pub fn with_log_level(mut self, level: &str) -> Result<Self, ConfigError> {
        self.log_level = normalize_level(level)?;
        Ok(self)
    }

    pub fn with_log_dir(mut self, log_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let log_dir: PathBuf = log_dir.into();
        self.log_dir = Some(normalize_log_dir(&log_dir)?);
        Ok(self)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.db_path.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDbPath);
        }
        Ok(())
    }
}

fn parse_snap_flag(raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Ok(true),
        "0" | "false" | "off" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidSnapFlag(raw.to_string())),
    }
}
