//! Canned insight text.
//!
//! A fixed rule table over the selected emotions, the context and the
//! reflection answers. The generator sleeps for a configured delay before
//! answering to stand in for a slow external call; it never fails.

use crate::domain::answers::{
    MISTAKE_MINE, MISTAKE_OTHERS, RESPONSIBILITY_MINE, SYSTEMIC_DEFINITE, SYSTEMIC_PARTIAL,
};
use crate::domain::emotion::EmotionTag;
use crate::domain::record::{Insight, Reflection};
use std::thread;
use std::time::Duration;

/// Everything the rules look at
#[derive(Debug, Clone, Copy)]
pub struct InsightContext<'a> {
    pub emotions: &'a [EmotionTag],
    pub location: Option<&'a str>,
    pub situation: Option<&'a str>,
    pub reflection: &'a Reflection,
}

/// Produces insight text after a fixed artificial delay
#[derive(Debug, Clone)]
pub struct InsightGenerator {
    delay: Duration,
}

impl InsightGenerator {
    pub fn new(delay: Duration) -> Self {
        InsightGenerator { delay }
    }

    /// Generator without the artificial delay
    pub fn immediate() -> Self {
        InsightGenerator::new(Duration::ZERO)
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn generate(&self, context: InsightContext<'_>) -> Insight {
        if !self.delay.is_zero() {
            log::debug!("waiting {:?} before producing insight", self.delay);
            thread::sleep(self.delay);
        }
        let insight = compose(context);
        log::info!(
            "generated insight for {} emotion(s)",
            context.emotions.len()
        );
        insight
    }
}

/// Apply the rule table
pub fn compose(context: InsightContext<'_>) -> Insight {
    let description = describe(context.emotions);
    let is_positive = context.emotions.iter().any(EmotionTag::is_positive);
    let reflection = context.reflection;
    let mistake = reflection.mistake.as_deref().map(str::trim);
    let systemic = reflection.systemic_issue.as_deref().map(str::trim);
    let responsibility = reflection
        .responsibility
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());

    let situation = context.situation.map(str::trim).filter(|s| !s.is_empty());
    let location = context.location.map(str::trim).filter(|l| !l.is_empty());

    let analysis = if situation.is_some() {
        let place = match location {
            Some(location) => format!("at {}", location),
            None => "in this situation".to_string(),
        };
        let mut sentences = vec![format!("You are feeling {} {}.", description, place)];
        if mistake == Some(MISTAKE_MINE) {
            sentences.push("You recognize a mistake of your own.".to_string());
        } else if mistake == Some(MISTAKE_OTHERS) {
            sentences.push(
                "You are dealing with the effects of someone else's mistake.".to_string(),
            );
        }
        if systemic == Some(SYSTEMIC_DEFINITE) || systemic == Some(SYSTEMIC_PARTIAL) {
            sentences.push("Structural problems played a part in what happened.".to_string());
        }
        sentences.push(format!(
            "Responsibility appears to come down to: {}.",
            responsibility.unwrap_or("a combination of several factors")
        ));
        sentences.join(" ")
    } else {
        format!(
            "You are feeling {}. Emotions like this are a natural part of life, \
            and noticing and naming them is the first step in managing them.",
            description
        )
    };

    let comfort = if is_positive {
        format!(
            "Feeling {} is a genuinely good experience. Take time to savour it and be \
            grateful for it; moments like this give energy to the days ahead.",
            description
        )
    } else {
        let mut text = format!(
            "Feeling {} can be hard, but every emotion is temporary and this one will \
            pass too. Give yourself the space and time you need, and if you can, talk \
            it through with someone you trust.",
            description
        );
        if mistake == Some(MISTAKE_MINE) {
            text.push_str(" Everyone makes mistakes, and this one can become a chance to grow.");
        }
        text
    };

    let commitment = if is_positive {
        format!(
            "I will deliberately make room for situations where I feel {}, and keep \
            expressing gratitude for them.",
            description
        )
    } else if systemic == Some(SYSTEMIC_DEFINITE) {
        "I will start with the small changes I can make about this structural problem, \
        and ask for help when I need it."
            .to_string()
    } else if responsibility == Some(RESPONSIBILITY_MINE) {
        "I will take this experience as a lesson so that I can make better choices in \
        similar situations."
            .to_string()
    } else {
        "I will acknowledge and accept this feeling, and look for ways to find balance \
        without being overwhelmed by it."
            .to_string()
    };

    Insight {
        analysis: Some(analysis),
        comfort: Some(comfort),
        commitment: Some(commitment),
    }
}

/// Single emotion name, or "a mix of a, b" for several
fn describe(emotions: &[EmotionTag]) -> String {
    let names: Vec<&str> = emotions.iter().map(|e| e.name.as_str()).collect();
    match names.as_slice() {
        [] => "this emotion".to_string(),
        [single] => single.to_string(),
        many => format!("a mix of {}", many.join(", ")),
    }
}
