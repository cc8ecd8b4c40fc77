//! Application layer - Use cases and orchestration

pub mod history;
pub mod init;
pub mod manage_config;
pub mod record_entry;
pub mod statistics;

pub use history::{DayView, HistoryService, MonthView};
pub use init::InitService;
pub use manage_config::ConfigService;
pub use record_entry::{RecordOutcome, RecordRequest, RecordService};
pub use statistics::{Buckets, StatisticsService, StatsReport};
