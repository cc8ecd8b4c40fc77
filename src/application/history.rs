//! Browsing past records: recent list, a single day, a month calendar

use crate::domain::calendar::{self, DayOverview};
use crate::domain::{DateReference, Record};
use crate::error::{MoodError, Result};
use crate::infrastructure::FileSystemRepository;
use chrono::{Datelike, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Records of one calendar date
#[derive(Debug, Clone)]
pub struct DayView {
    pub date: NaiveDate,
    pub records: Vec<Record>,
}

/// A month grid with per-day overviews
#[derive(Debug, Clone)]
pub struct MonthView {
    pub year: i32,
    pub month: u32,
    pub rows: Vec<[Option<NaiveDate>; 7]>,
    pub days: BTreeMap<NaiveDate, DayOverview>,
}

/// Service for reading history
pub struct HistoryService {
    repository: FileSystemRepository,
}

impl HistoryService {
    pub fn new(repository: FileSystemRepository) -> Self {
        HistoryService { repository }
    }

    /// Newest records, at most `limit`
    pub fn recent(&self, limit: usize) -> Result<Vec<Record>> {
        let store = self.repository.open_records()?;
        Ok(store.recent(limit).to_vec())
    }

    /// Records on the date `date_ref` resolves to, relative to `today`
    pub fn day<Tz: TimeZone>(&self, date_ref: &str, today: NaiveDate, tz: &Tz) -> Result<DayView> {
        let date = DateReference::parse(date_ref)?.resolve(today);
        let store = self.repository.open_records()?;
        let records = calendar::records_on(store.records(), date, tz)
            .into_iter()
            .cloned()
            .collect();
        Ok(DayView { date, records })
    }

    /// Calendar overview for one month
    pub fn month<Tz: TimeZone>(&self, year: i32, month: u32, tz: &Tz) -> Result<MonthView> {
        let rows = calendar::month_grid(year, month)
            .ok_or_else(|| MoodError::Config(format!("Invalid month: {}-{:02}", year, month)))?;
        let store = self.repository.open_records()?;
        let days = calendar::overviews(store.records(), tz)
            .into_iter()
            .filter(|(date, _)| date.year() == year && date.month() == month)
            .collect();
        Ok(MonthView {
            year,
            month,
            rows,
            days,
        })
    }
}
