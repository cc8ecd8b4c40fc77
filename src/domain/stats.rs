//! Statistics aggregation
//!
//! Pure functions turning the record list into calendar-aligned buckets and
//! a ranked emotion distribution. Everything is recomputed on each call;
//! nothing here is stored. Bucketing happens in the timezone of `now`.

use crate::domain::emotion;
use crate::domain::record::Record;
use chrono::{DateTime, Datelike, Duration, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

const DAILY_WINDOW_DAYS: i64 = 14;
const WEEKLY_WINDOW_WEEKS: i64 = 6;

/// Window selector for the bucketed charts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StatsPeriod {
    /// Daily buckets, Monday of last week through Sunday of this week
    #[default]
    TwoWeeks,
    /// Weekly buckets, the current week and the five before it
    SixWeeks,
}

impl FromStr for StatsPeriod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "two-weeks" | "2w" | "week" => Ok(StatsPeriod::TwoWeeks),
            "six-weeks" | "6w" | "month" => Ok(StatsPeriod::SixWeeks),
            _ => Err(format!(
                "Invalid period: '{}'. Valid periods are: two-weeks, six-weeks",
                s
            )),
        }
    }
}

impl fmt::Display for StatsPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatsPeriod::TwoWeeks => write!(f, "two-weeks"),
            StatsPeriod::SixWeeks => write!(f, "six-weeks"),
        }
    }
}

/// Positive/negative emotion tallies for one bucket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub positive: usize,
    pub negative: usize,
}

impl Tally {
    pub fn total(&self) -> usize {
        self.positive + self.negative
    }

    fn add_record(&mut self, record: &Record) {
        for tag in &record.emotions {
            if tag.is_positive() {
                self.positive += 1;
            } else {
                self.negative += 1;
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySummary {
    pub date: NaiveDate,
    /// e.g. `01/17 (Fri)`
    pub label: String,
    pub tally: Tally,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekSummary {
    /// Monday
    pub start: NaiveDate,
    /// Sunday, inclusive
    pub end: NaiveDate,
    /// Sunday-start week number of the anchor date, see [`week_of_year`]
    pub week_number: u32,
    /// e.g. `W03`
    pub label: String,
    pub tally: Tally,
}

/// One row of the emotion distribution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmotionCount {
    pub name: String,
    pub count: usize,
    /// Absent for names outside the catalog
    pub emoji: Option<String>,
    pub color: Option<String>,
}

/// Headline numbers for the statistics view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    pub total_records: usize,
    pub happiness_records: usize,
    pub positive_ratio_percent: u32,
    pub top_emotion: Option<String>,
}

/// Monday of the week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Week number with weeks starting on Sunday, week 1 being the week that
/// contains January 1st. Late December days in that week belong to week 1
/// of the next year.
pub fn week_of_year(date: NaiveDate) -> u32 {
    let sunday = date - Duration::days(date.weekday().num_days_from_sunday() as i64);
    let saturday = sunday + Duration::days(6);
    if saturday.year() > date.year() {
        return 1;
    }

    let jan_first = NaiveDate::from_ymd_opt(date.year(), 1, 1).unwrap_or(date);
    let first_sunday =
        jan_first - Duration::days(jan_first.weekday().num_days_from_sunday() as i64);
    ((sunday - first_sunday).num_days() / 7 + 1) as u32
}

/// Records paired with their calendar date in `tz`
fn dated<'a, Tz: TimeZone>(records: &'a [Record], tz: &Tz) -> Vec<(NaiveDate, &'a Record)> {
    records
        .iter()
        .map(|r| (r.timestamp.with_timezone(tz).date_naive(), r))
        .collect()
}

fn tally_between(dated: &[(NaiveDate, &Record)], start: NaiveDate, end: NaiveDate) -> Tally {
    let mut tally = Tally::default();
    for (date, record) in dated {
        if *date >= start && *date <= end {
            tally.add_record(record);
        }
    }
    tally
}

/// 14 daily buckets from the Monday of the previous week to the Sunday of
/// the current week. Days without records are present with zero counts.
pub fn daily_buckets<Tz: TimeZone>(records: &[Record], now: &DateTime<Tz>) -> Vec<DaySummary> {
    let dated = dated(records, &now.timezone());
    let first = week_start(now.date_naive()) - Duration::days(7);

    (0..DAILY_WINDOW_DAYS)
        .map(|offset| {
            let date = first + Duration::days(offset);
            DaySummary {
                date,
                label: date.format("%m/%d (%a)").to_string(),
                tally: tally_between(&dated, date, date),
            }
        })
        .collect()
}

/// 6 weekly buckets; bucket `i` is the Monday-Sunday week containing
/// `now - (5 - i)` weeks. The label numbers that anchor date.
pub fn weekly_buckets<Tz: TimeZone>(records: &[Record], now: &DateTime<Tz>) -> Vec<WeekSummary> {
    let dated = dated(records, &now.timezone());
    let today = now.date_naive();

    (0..WEEKLY_WINDOW_WEEKS)
        .map(|i| {
            let anchor = today - Duration::weeks(WEEKLY_WINDOW_WEEKS - 1 - i);
            let start = week_start(anchor);
            let end = start + Duration::days(6);
            let week_number = week_of_year(anchor);
            WeekSummary {
                start,
                end,
                week_number,
                label: format!("W{:02}", week_number),
                tally: tally_between(&dated, start, end),
            }
        })
        .collect()
}

/// Occurrences per emotion name across all records, most frequent first.
/// Ties keep first-seen order.
pub fn emotion_frequencies(records: &[Record]) -> Vec<EmotionCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<EmotionCount> = Vec::new();

    for tag in records.iter().flat_map(|r| r.emotions.iter()) {
        match index.get(tag.name.as_str()) {
            Some(&pos) => counts[pos].count += 1,
            None => {
                index.insert(tag.name.as_str(), counts.len());
                let known = emotion::find(&tag.name);
                counts.push(EmotionCount {
                    name: tag.name.clone(),
                    count: 1,
                    emoji: known.map(|e| e.emoji.to_string()),
                    color: known.map(|e| e.chart_color()),
                });
            }
        }
    }

    // sort_by is stable
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

pub fn summarize(records: &[Record]) -> StatsSummary {
    let total_records = records.len();
    let happiness_records = records.iter().filter(|r| r.has_emotion("happiness")).count();
    let positive_records = records.iter().filter(|r| r.has_positive_emotion()).count();
    let positive_ratio_percent = if total_records == 0 {
        0
    } else {
        (positive_records as f64 / total_records as f64 * 100.0).round() as u32
    };

    StatsSummary {
        total_records,
        happiness_records,
        positive_ratio_percent,
        top_emotion: emotion_frequencies(records).into_iter().next().map(|c| c.name),
    }
}
