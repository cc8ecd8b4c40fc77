//! Four-step record entry wizard
//!
//! emotions + note -> location + situation -> reflection -> insight review.
//! Leaving the first step requires at least one selected emotion; entering
//! the last step generates the insight draft.

use crate::domain::emotion::{Emotion, EmotionTag};
use crate::domain::insight::{InsightContext, InsightGenerator};
use crate::domain::record::{clean, generate_id, Insight, Record, Reflection};
use crate::error::{MoodError, Result};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum FormStep {
    #[default]
    Emotions,
    Context,
    Reflection,
    Insight,
}

impl FormStep {
    /// 1-based step number
    pub fn number(&self) -> u8 {
        match self {
            FormStep::Emotions => 1,
            FormStep::Context => 2,
            FormStep::Reflection => 3,
            FormStep::Insight => 4,
        }
    }

    fn next(self) -> Self {
        match self {
            FormStep::Emotions => FormStep::Context,
            FormStep::Context => FormStep::Reflection,
            FormStep::Reflection | FormStep::Insight => FormStep::Insight,
        }
    }

    fn previous(self) -> Self {
        match self {
            FormStep::Emotions | FormStep::Context => FormStep::Emotions,
            FormStep::Reflection => FormStep::Context,
            FormStep::Insight => FormStep::Reflection,
        }
    }
}

/// In-progress form state
#[derive(Debug, Clone, Default)]
pub struct RecordWizard {
    step: FormStep,
    emotions: Vec<EmotionTag>,
    pub note: String,
    pub location: String,
    pub situation: String,
    pub reflection: Reflection,
    pub insight: Insight,
}

impl RecordWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> FormStep {
        self.step
    }

    pub fn selected_emotions(&self) -> &[EmotionTag] {
        &self.emotions
    }

    /// Add the emotion, or remove it when already selected (matched by name)
    pub fn toggle_emotion(&mut self, emotion: &Emotion) {
        if let Some(pos) = self.emotions.iter().position(|e| e.name == emotion.name) {
            self.emotions.remove(pos);
        } else {
            self.emotions.push(emotion.tag());
        }
    }

    /// Select the emotion unless it already is
    pub fn select_emotion(&mut self, emotion: &Emotion) {
        if !self.emotions.iter().any(|e| e.name == emotion.name) {
            self.emotions.push(emotion.tag());
        }
    }

    pub fn can_advance(&self) -> bool {
        self.step != FormStep::Emotions || !self.emotions.is_empty()
    }

    /// Move forward one step. Entering the insight step fills the insight draft.
    pub fn next(&mut self, generator: &InsightGenerator) -> Result<FormStep> {
        if !self.can_advance() {
            return Err(MoodError::NoEmotionSelected);
        }
        if self.step == FormStep::Reflection {
            self.insight = generator.generate(InsightContext {
                emotions: &self.emotions,
                location: Some(self.location.as_str()),
                situation: Some(self.situation.as_str()),
                reflection: &self.reflection,
            });
        }
        self.step = self.step.next();
        Ok(self.step)
    }

    pub fn back(&mut self) -> FormStep {
        self.step = self.step.previous();
        self.step
    }

    /// Build the record from the final step and reset the form.
    pub fn submit<'a, I>(&mut self, now: DateTime<Utc>, taken_ids: I) -> Result<Record>
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.emotions.is_empty() {
            return Err(MoodError::NoEmotionSelected);
        }
        if self.step != FormStep::Insight {
            return Err(MoodError::WizardIncomplete(self.step.number()));
        }

        let record = Record {
            id: generate_id(now, taken_ids),
            emotions: self.emotions.clone(),
            note: self.note.trim().to_string(),
            timestamp: now,
            location: clean(Some(self.location.as_str())),
            situation: clean(Some(self.situation.as_str())),
            reflection: self.reflection.normalized(),
            insight: self.insight.normalized(),
        };

        *self = RecordWizard::default();
        Ok(record)
    }
}
