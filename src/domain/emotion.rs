//! Emotion catalog and polarity classification

use crate::error::{MoodError, Result};
use serde::{Deserialize, Serialize};

/// Names of the emotions counted as positive in statistics and insights
pub const POSITIVE_EMOTIONS: [&str; 6] =
    ["joy", "happiness", "love", "calm", "gratitude", "excitement"];

/// A selectable emotion as stored on a record: name, emoji and color class
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmotionTag {
    pub name: String,
    pub emoji: String,
    pub color: String,
}

impl EmotionTag {
    /// Whether this tag belongs to the positive set
    pub fn is_positive(&self) -> bool {
        is_positive(&self.name)
    }
}

/// Catalog entry with static data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Emotion {
    pub name: &'static str,
    pub emoji: &'static str,
    pub color: &'static str,
}

impl Emotion {
    /// Build the owned tag persisted on records
    pub fn tag(&self) -> EmotionTag {
        EmotionTag {
            name: self.name.to_string(),
            emoji: self.emoji.to_string(),
            color: self.color.to_string(),
        }
    }

    pub fn is_positive(&self) -> bool {
        is_positive(self.name)
    }

    /// CSS variable used for chart slices, e.g. `var(--yellow-600)`
    pub fn chart_color(&self) -> String {
        chart_color(self.color)
    }
}

/// The fixed catalog, in display order
pub const CATALOG: [Emotion; 12] = [
    Emotion {
        name: "joy",
        emoji: "😊",
        color: "text-yellow-600",
    },
    Emotion {
        name: "happiness",
        emoji: "😄",
        color: "text-orange-600",
    },
    Emotion {
        name: "love",
        emoji: "❤️",
        color: "text-red-600",
    },
    Emotion {
        name: "calm",
        emoji: "😌",
        color: "text-blue-600",
    },
    Emotion {
        name: "gratitude",
        emoji: "🙏",
        color: "text-green-600",
    },
    Emotion {
        name: "excitement",
        emoji: "🤩",
        color: "text-purple-600",
    },
    Emotion {
        name: "sadness",
        emoji: "😢",
        color: "text-blue-500",
    },
    Emotion {
        name: "anger",
        emoji: "😠",
        color: "text-red-500",
    },
    Emotion {
        name: "worry",
        emoji: "😰",
        color: "text-yellow-500",
    },
    Emotion {
        name: "tiredness",
        emoji: "😴",
        color: "text-gray-500",
    },
    Emotion {
        name: "stress",
        emoji: "😣",
        color: "text-orange-500",
    },
    Emotion {
        name: "loneliness",
        emoji: "😔",
        color: "text-indigo-500",
    },
];

/// Exact-name catalog lookup
pub fn find(name: &str) -> Option<&'static Emotion> {
    CATALOG.iter().find(|e| e.name == name)
}

/// Resolve user input (case-insensitive, trimmed) to a catalog entry
pub fn lookup(input: &str) -> Result<&'static Emotion> {
    let normalized = input.trim().to_lowercase();
    find(&normalized).ok_or_else(|| MoodError::UnknownEmotion(input.to_string()))
}

/// Static positive-set membership check. Anything else is negative.
pub fn is_positive(name: &str) -> bool {
    POSITIVE_EMOTIONS.contains(&name)
}

fn chart_color(color_class: &str) -> String {
    format!("{})", color_class.replacen("text-", "var(--", 1))
}
