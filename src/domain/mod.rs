//! Domain layer - Business logic and domain models

pub mod answers;
pub mod calendar;
pub mod date_ref;
pub mod emotion;
pub mod insight;
pub mod record;
pub mod stats;
pub mod wizard;

pub use date_ref::DateReference;
pub use emotion::{Emotion, EmotionTag, CATALOG};
pub use insight::InsightGenerator;
pub use record::{Insight, Record, Reflection};
pub use stats::StatsPeriod;
pub use wizard::{FormStep, RecordWizard};
