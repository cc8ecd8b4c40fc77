//! Configuration management

use crate::domain::StatsPeriod;
use crate::error::{MoodError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_INSIGHT_DELAY_MS: u64 = 1500;

fn default_insight_delay_ms() -> u64 {
    DEFAULT_INSIGHT_DELAY_MS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Artificial wait before insight text appears
    #[serde(default = "default_insight_delay_ms")]
    pub insight_delay_ms: u64,
    /// Window used by `stats` when no `--period` is given
    #[serde(default)]
    pub default_period: StatsPeriod,
    pub created: DateTime<Utc>,
}

impl Default for Config {
    fn default() -> Self {
        Config::new()
    }
}

impl Config {
    /// Create a new config with default values
    pub fn new() -> Self {
        Config {
            insight_delay_ms: DEFAULT_INSIGHT_DELAY_MS,
            default_period: StatsPeriod::default(),
            created: Utc::now(),
        }
    }

    /// Load config from .moodjour/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".moodjour").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodError::NotMoodDirectory(path.to_path_buf())
            } else {
                MoodError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MoodError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .moodjour/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let mood_dir = path.join(".moodjour");
        let config_path = mood_dir.join("config.toml");

        if !mood_dir.exists() {
            fs::create_dir(&mood_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Insight delay, with MOODJOUR_INSIGHT_DELAY_MS taking precedence
    pub fn insight_delay(&self) -> Duration {
        let millis = std::env::var("MOODJOUR_INSIGHT_DELAY_MS")
            .ok()
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(self.insight_delay_ms);
        Duration::from_millis(millis)
    }
}
