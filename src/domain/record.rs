//! Journal record model

use crate::domain::emotion::EmotionTag;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Guided self-reflection answers
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reflection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mistake: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub systemic_issue: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub responsibility: Option<String>,
}

impl Reflection {
    /// Trim every field and collapse to `None` when nothing is left
    pub fn normalized(&self) -> Option<Reflection> {
        let reflection = Reflection {
            mistake: clean(self.mistake.as_deref()),
            systemic_issue: clean(self.systemic_issue.as_deref()),
            responsibility: clean(self.responsibility.as_deref()),
        };
        (!reflection.is_empty()).then_some(reflection)
    }

    pub fn is_empty(&self) -> bool {
        self.mistake.is_none() && self.systemic_issue.is_none() && self.responsibility.is_none()
    }
}

/// Templated insight attached to a record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comfort: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commitment: Option<String>,
}

impl Insight {
    /// Trim every field and collapse to `None` when nothing is left
    pub fn normalized(&self) -> Option<Insight> {
        let insight = Insight {
            analysis: clean(self.analysis.as_deref()),
            comfort: clean(self.comfort.as_deref()),
            commitment: clean(self.commitment.as_deref()),
        };
        (!insight.is_empty()).then_some(insight)
    }

    pub fn is_empty(&self) -> bool {
        self.analysis.is_none() && self.comfort.is_none() && self.commitment.is_none()
    }
}

/// A single persisted journal entry. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: String,
    pub emotions: Vec<EmotionTag>,
    #[serde(default)]
    pub note: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub situation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reflection: Option<Reflection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insight: Option<Insight>,
}

impl Record {
    /// Number of emotion tags carried by this record
    pub fn emotion_count(&self) -> usize {
        self.emotions.len()
    }

    pub fn has_emotion(&self, name: &str) -> bool {
        self.emotions.iter().any(|e| e.name == name)
    }

    pub fn has_positive_emotion(&self) -> bool {
        self.emotions.iter().any(EmotionTag::is_positive)
    }
}

/// Trimmed text, or `None` when empty
pub fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Time-derived record id: epoch milliseconds, bumped until it is not in `taken`
pub fn generate_id<'a, I>(timestamp: DateTime<Utc>, taken: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let taken: Vec<&str> = taken.into_iter().collect();
    let mut millis = timestamp.timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !taken.contains(&candidate.as_str()) {
            return candidate;
        }
        millis += 1;
    }
}
