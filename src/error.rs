//! Error types for moodjour

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the moodjour application
#[derive(Debug, Error)]
pub enum MoodError {
    #[error("Not a moodjour directory: {0}")]
    NotMoodDirectory(PathBuf),

    #[error("Invalid date reference: {0}")]
    InvalidDateReference(String),

    #[error("Unknown emotion: {0}")]
    UnknownEmotion(String),

    #[error("Select at least one emotion before continuing")]
    NoEmotionSelected,

    #[error("Record can only be saved from the insight step (currently on step {0})")]
    WizardIncomplete(u8),

    #[error("Record store is corrupt: {0}")]
    CorruptStore(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl MoodError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MoodError::NotMoodDirectory(_) => 2,
            MoodError::InvalidDateReference(_) => 3,
            MoodError::UnknownEmotion(_) | MoodError::NoEmotionSelected => 4,
            MoodError::CorruptStore(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MoodError::NotMoodDirectory(path) => {
                format!(
                    "Not a moodjour directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'moodjour init' in this directory to start a journal\n\
                    • Navigate to an existing moodjour directory\n\
                    • Set MOODJOUR_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MoodError::InvalidDateReference(ref_str) => {
                format!(
                    "Invalid date reference: '{}'\n\n\
                    Valid date references:\n\
                    • today, yesterday\n\
                    • 3 days ago\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • Specific dates: YYYY-MM-DD or DD-MM-YYYY\n\n\
                    Examples:\n\
                    moodjour day yesterday\n\
                    moodjour day 2025-01-15",
                    ref_str
                )
            }
            MoodError::UnknownEmotion(name) => {
                format!(
                    "Unknown emotion: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'moodjour emotions' to see the catalog\n\
                    • Emotion names are case-insensitive (e.g., Joy, joy)",
                    name
                )
            }
            MoodError::NoEmotionSelected => {
                format!(
                    "{}\n\n\
                    Example: moodjour record --emotion joy --emotion calm",
                    self
                )
            }
            MoodError::CorruptStore(msg) => {
                format!(
                    "Record store is corrupt: {}\n\n\
                    The file .moodjour/emotionRecords.json could not be parsed.\n\
                    It has been left untouched; fix or move it aside and retry.",
                    msg
                )
            }
            MoodError::Config(msg) => {
                if msg.contains("Invalid period") {
                    format!(
                        "{}\n\n\
                        Valid periods: two-weeks, six-weeks\n\
                        Example: moodjour config default_period six-weeks",
                        msg
                    )
                } else if msg.contains("month") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM\n\
                        Example: moodjour calendar --month 2025-01",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MoodError
pub type Result<T> = std::result::Result<T, MoodError>;
