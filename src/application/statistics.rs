//! Statistics use case

use crate::domain::stats::{self, DaySummary, EmotionCount, StatsSummary, WeekSummary};
use crate::domain::{Record, StatsPeriod};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, JournalRepository};
use chrono::{DateTime, TimeZone};

/// Buckets for the selected window
#[derive(Debug, Clone)]
pub enum Buckets {
    Daily(Vec<DaySummary>),
    Weekly(Vec<WeekSummary>),
}

/// Everything the statistics view shows
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub period: StatsPeriod,
    pub buckets: Buckets,
    pub frequencies: Vec<EmotionCount>,
    pub summary: StatsSummary,
}

impl StatsReport {
    /// Aggregate `records` for `period` as seen from `now`
    pub fn build<Tz: TimeZone>(
        records: &[Record],
        period: StatsPeriod,
        now: &DateTime<Tz>,
    ) -> Self {
        let buckets = match period {
            StatsPeriod::TwoWeeks => Buckets::Daily(stats::daily_buckets(records, now)),
            StatsPeriod::SixWeeks => Buckets::Weekly(stats::weekly_buckets(records, now)),
        };
        StatsReport {
            period,
            buckets,
            frequencies: stats::emotion_frequencies(records),
            summary: stats::summarize(records),
        }
    }
}

/// Service for computing statistics
pub struct StatisticsService {
    repository: FileSystemRepository,
}

impl StatisticsService {
    pub fn new(repository: FileSystemRepository) -> Self {
        StatisticsService { repository }
    }

    /// Compute the report; `period` falls back to the configured default
    pub fn execute<Tz: TimeZone>(
        &self,
        period: Option<StatsPeriod>,
        now: &DateTime<Tz>,
    ) -> Result<StatsReport> {
        let period = match period {
            Some(period) => period,
            None => self.repository.load_config()?.default_period,
        };
        let store = self.repository.open_records()?;
        log::debug!(
            "computing {} statistics over {} record(s)",
            period,
            store.len()
        );
        Ok(StatsReport::build(store.records(), period, now))
    }
}
