//! Config management use case

use crate::domain::StatsPeriod;
use crate::error::{MoodError, Result};
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use std::str::FromStr;

/// Service for managing journal configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "insight_delay_ms" => Ok(config.insight_delay_ms.to_string()),
            "default_period" => Ok(config.default_period.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MoodError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: insight_delay_ms, default_period, created",
                key
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "insight_delay_ms" => {
                config.insight_delay_ms = value.trim().parse().map_err(|_| {
                    MoodError::Config(format!(
                        "insight_delay_ms must be a whole number of milliseconds, got '{}'",
                        value
                    ))
                })?;
            }
            "default_period" => {
                config.default_period = StatsPeriod::from_str(value).map_err(MoodError::Config)?;
            }
            "created" => {
                return Err(MoodError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MoodError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: insight_delay_ms, default_period",
                    key
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
