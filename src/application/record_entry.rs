//! Record entry use case
//!
//! Drives the wizard through all four steps from a filled-in request and
//! stores the resulting record.

use crate::domain::answers::{self, LOCATIONS, MISTAKES, RESPONSIBILITIES, SYSTEMIC_ISSUES};
use crate::domain::{emotion, FormStep, Insight, InsightGenerator, Record, RecordWizard};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, Utc};

/// Everything the user can fill in across the wizard steps
#[derive(Debug, Clone, Default)]
pub struct RecordRequest {
    pub emotions: Vec<String>,
    pub note: Option<String>,
    pub location: Option<String>,
    pub situation: Option<String>,
    pub mistake: Option<String>,
    pub systemic_issue: Option<String>,
    pub responsibility: Option<String>,
    /// Replacements for the generated insight fields
    pub analysis: Option<String>,
    pub comfort: Option<String>,
    pub commitment: Option<String>,
    /// Drop the generated insight entirely
    pub skip_insight: bool,
}

/// Outcome of a successful entry
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub record: Record,
    pub evicted: usize,
    pub total: usize,
}

/// Service for adding records
pub struct RecordService {
    repository: FileSystemRepository,
}

impl RecordService {
    pub fn new(repository: FileSystemRepository) -> Self {
        RecordService { repository }
    }

    /// Fill the wizard from `request`, walk it to the insight step and submit.
    pub fn execute(&self, request: RecordRequest, now: DateTime<Utc>) -> Result<RecordOutcome> {
        let config = self.repository.load_config()?;
        let generator = InsightGenerator::new(config.insight_delay());
        let mut store = self.repository.open_records()?;

        let mut wizard = RecordWizard::new();
        fill_emotions(&mut wizard, &request)?;
        wizard.note = request.note.clone().unwrap_or_default();
        wizard.next(&generator)?;

        wizard.location = request
            .location
            .as_deref()
            .map(|l| answers::canonical(&LOCATIONS, l))
            .unwrap_or_default();
        wizard.situation = request.situation.clone().unwrap_or_default();
        wizard.next(&generator)?;

        wizard.reflection.mistake = request
            .mistake
            .as_deref()
            .map(|m| answers::canonical(&MISTAKES, m));
        wizard.reflection.systemic_issue = request
            .systemic_issue
            .as_deref()
            .map(|s| answers::canonical(&SYSTEMIC_ISSUES, s));
        wizard.reflection.responsibility = request
            .responsibility
            .as_deref()
            .map(|r| answers::canonical(&RESPONSIBILITIES, r));

        let step = if request.skip_insight {
            wizard.next(&InsightGenerator::immediate())?
        } else {
            wizard.next(&generator)?
        };
        debug_assert_eq!(step, FormStep::Insight);

        if request.skip_insight {
            wizard.insight = Insight::default();
        }
        if let Some(analysis) = request.analysis {
            wizard.insight.analysis = Some(analysis);
        }
        if let Some(comfort) = request.comfort {
            wizard.insight.comfort = Some(comfort);
        }
        if let Some(commitment) = request.commitment {
            wizard.insight.commitment = Some(commitment);
        }

        let record = wizard.submit(now, store.ids())?;
        let evicted = store.add(record.clone())?.len();

        Ok(RecordOutcome {
            record,
            evicted,
            total: store.len(),
        })
    }
}

fn fill_emotions(wizard: &mut RecordWizard, request: &RecordRequest) -> Result<()> {
    for name in &request.emotions {
        wizard.select_emotion(emotion::lookup(name)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::init::InitService;
    use crate::error::MoodError;
    use crate::infrastructure::Config;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileSystemRepository) {
        let temp = TempDir::new().unwrap();
        let repo = InitService::execute(temp.path()).unwrap();
        let mut config = Config::new();
        config.insight_delay_ms = 0;
        repo.save_config(&config).unwrap();
        (temp, repo)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 17, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_record_with_generated_insight() {
        let (_temp, repo) = setup();
        let service = RecordService::new(repo.clone());

        let outcome = service
            .execute(
                RecordRequest {
                    emotions: vec!["Joy".to_string(), "joy".to_string(), "sadness".to_string()],
                    note: Some("  mixed day ".to_string()),
                    location: Some("Work".to_string()),
                    situation: Some("review meeting".to_string()),
                    mistake: Some("MY MISTAKE".to_string()),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();

        let record = outcome.record;
        assert_eq!(record.emotions.len(), 2);
        assert_eq!(record.note, "mixed day");
        assert_eq!(record.location.as_deref(), Some("work"));
        assert_eq!(
            record.reflection.as_ref().unwrap().mistake.as_deref(),
            Some("my mistake")
        );
        let insight = record.insight.unwrap();
        assert!(insight.analysis.unwrap().starts_with("You are feeling a mix of joy, sadness at work."));
        assert_eq!(outcome.total, 1);

        let stored = repo.open_records().unwrap();
        assert_eq!(stored.len(), 1);
    }

    #[test]
    fn test_record_without_insight() {
        let (_temp, repo) = setup();
        let service = RecordService::new(repo);
        let outcome = service
            .execute(
                RecordRequest {
                    emotions: vec!["calm".to_string()],
                    skip_insight: true,
                    ..Default::default()
                },
                now(),
            )
            .unwrap();
        assert_eq!(outcome.record.insight, None);
        assert_eq!(outcome.record.reflection, None);
    }

    #[test]
    fn test_insight_overrides() {
        let (_temp, repo) = setup();
        let service = RecordService::new(repo);
        let outcome = service
            .execute(
                RecordRequest {
                    emotions: vec!["stress".to_string()],
                    skip_insight: true,
                    commitment: Some("Sleep earlier".to_string()),
                    ..Default::default()
                },
                now(),
            )
            .unwrap();
        let insight = outcome.record.insight.unwrap();
        assert_eq!(insight.commitment.as_deref(), Some("Sleep earlier"));
        assert_eq!(insight.analysis, None);
    }

    #[test]
    fn test_record_requires_emotion() {
        let (_temp, repo) = setup();
        let service = RecordService::new(repo);
        assert!(matches!(
            service.execute(RecordRequest::default(), now()),
            Err(MoodError::NoEmotionSelected)
        ));
    }

    #[test]
    fn test_unknown_emotion_is_rejected() {
        let (_temp, repo) = setup();
        let service = RecordService::new(repo.clone());
        let request = RecordRequest {
            emotions: vec!["meh".to_string()],
            ..Default::default()
        };
        assert!(matches!(
            service.execute(request, now()),
            Err(MoodError::UnknownEmotion(_))
        ));
        assert!(repo.open_records().unwrap().is_empty());
    }

    #[test]
    fn test_same_millisecond_records_get_distinct_ids() {
        let (_temp, repo) = setup();
        let service = RecordService::new(repo);
        let request = RecordRequest {
            emotions: vec!["joy".to_string()],
            skip_insight: true,
            ..Default::default()
        };
        let first = service.execute(request.clone(), now()).unwrap();
        let second = service.execute(request, now()).unwrap();
        assert_ne!(first.record.id, second.record.id);
        assert_eq!(second.total, 2);
    }
}
