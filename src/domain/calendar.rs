//! Calendar grouping of records

use crate::domain::record::Record;
use chrono::{Datelike, Duration, NaiveDate, TimeZone};
use std::collections::BTreeMap;

/// Emojis shown per calendar cell
pub const PREVIEW_EMOJIS: usize = 3;

/// What a calendar cell shows for one date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayOverview {
    pub date: NaiveDate,
    pub emojis: Vec<String>,
    pub count: usize,
}

/// Records grouped by their calendar date in `tz`, keeping store order
pub fn records_by_date<'a, Tz: TimeZone>(
    records: &'a [Record],
    tz: &Tz,
) -> BTreeMap<NaiveDate, Vec<&'a Record>> {
    let mut grouped: BTreeMap<NaiveDate, Vec<&Record>> = BTreeMap::new();
    for record in records {
        let date = record.timestamp.with_timezone(tz).date_naive();
        grouped.entry(date).or_default().push(record);
    }
    grouped
}

/// Records written on `date`
pub fn records_on<'a, Tz: TimeZone>(
    records: &'a [Record],
    date: NaiveDate,
    tz: &Tz,
) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| r.timestamp.with_timezone(tz).date_naive() == date)
        .collect()
}

/// Per-date emoji preview and record count
pub fn overviews<Tz: TimeZone>(records: &[Record], tz: &Tz) -> BTreeMap<NaiveDate, DayOverview> {
    records_by_date(records, tz)
        .into_iter()
        .map(|(date, day_records)| {
            let emojis = day_records
                .iter()
                .flat_map(|r| r.emotions.iter().map(|e| e.emoji.clone()))
                .take(PREVIEW_EMOJIS)
                .collect();
            let overview = DayOverview {
                date,
                emojis,
                count: day_records.len(),
            };
            (date, overview)
        })
        .collect()
}

/// Every date of the given month
pub fn month_days(year: i32, month: u32) -> Option<Vec<NaiveDate>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect();
    Some(days)
}

/// Rows of a Monday-first month grid; `None` pads cells outside the month
pub fn month_grid(year: i32, month: u32) -> Option<Vec<[Option<NaiveDate>; 7]>> {
    let days = month_days(year, month)?;
    let first = *days.first()?;
    let mut cursor = first - Duration::days(first.weekday().num_days_from_monday() as i64);

    let mut rows = Vec::new();
    loop {
        let mut row = [None; 7];
        for cell in row.iter_mut() {
            if cursor.month() == month && cursor.year() == year {
                *cell = Some(cursor);
            }
            cursor += Duration::days(1);
        }
        rows.push(row);
        if cursor.month() != month || cursor.year() != year {
            break;
        }
    }
    Some(rows)
}
