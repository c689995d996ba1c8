use serde::{Deserialize, Serialize};

use super::database::DatabaseConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::retention::RetentionConfig;
use crate::schedule::SweepSchedule;

const LOCAL_CONFIG: &str = "guesswin-sweeper.toml";
const SYSTEM_CONFIG: &str = "/etc/guesswin/sweeper.toml";

/// Main configuration structure for the retention sweeper
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub retention: RetentionConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. guesswin-sweeper.toml in current directory
    /// 3. /etc/guesswin/sweeper.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new(LOCAL_CONFIG).exists() {
            Self::from_file(LOCAL_CONFIG)?
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Self::from_file(SYSTEM_CONFIG)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(db) = overrides.database_path {
            self.database.path = db;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(schedule) = overrides.schedule {
            self.retention.schedule = schedule;
        }
        if let Some(tz) = overrides.timezone {
            self.retention.timezone = tz;
        }
    }

    /// Validate configuration
    ///
    /// Unknown collection names are not rejected here: the sweep reports
    /// them per collection and keeps going.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retention.collections.is_empty() {
            return Err(ConfigError::Validation(
                "No collections configured for retention".to_string(),
            ));
        }

        if self.retention.operation_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "operation_timeout_secs cannot be 0".to_string(),
            ));
        }

        if self.retention.cycle_timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "cycle_timeout_secs cannot be 0".to_string(),
            ));
        }

        if self.database.max_connections == 0 {
            return Err(ConfigError::Validation(
                "max_connections cannot be 0".to_string(),
            ));
        }

        self.sweep_schedule()?;
        Ok(())
    }

    pub fn sweep_schedule(&self) -> Result<SweepSchedule, ConfigError> {
        SweepSchedule::parse(&self.retention.schedule, &self.retention.timezone)
            .map_err(|e| ConfigError::Validation(e.to_string()))
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub database_path: Option<String>,
    pub log_level: Option<String>,
    pub schedule: Option<String>,
    pub timezone: Option<String>,
}
