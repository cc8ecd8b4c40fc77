//! Output formatting utilities

use crate::application::{Buckets, DayView, MonthView, StatsReport};
use crate::domain::stats::{EmotionCount, StatsSummary, Tally};
use crate::domain::{Record, CATALOG};
use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use std::fmt::Display;
use std::str::FromStr;

/// Entries listed under "Top emotions" in the pie view
const TOP_EMOTIONS: usize = 5;

/// How statistics are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartView {
    Bar,
    Pie,
}

impl FromStr for ChartView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartView::Bar),
            "pie" => Ok(ChartView::Pie),
            _ => Err(format!("Invalid view: '{}'. Valid views are: bar, pie", s)),
        }
    }
}

/// "just now", "5 min ago", ... falling back to a short date after a week
pub fn format_relative<Tz>(timestamp: DateTime<Utc>, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let diff = now.clone().with_timezone(&Utc) - timestamp;
    let minutes = diff.num_minutes();
    let hours = diff.num_hours();
    let days = diff.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        format!("{} min ago", minutes)
    } else if hours < 24 {
        format!("{} h ago", hours)
    } else if days < 7 {
        format!("{} days ago", days)
    } else {
        timestamp
            .with_timezone(&now.timezone())
            .format("%b %d, %H:%M")
            .to_string()
    }
}

fn emojis(record: &Record) -> String {
    record.emotions.iter().map(|e| e.emoji.as_str()).collect()
}

fn names(record: &Record) -> String {
    record
        .emotions
        .iter()
        .map(|e| e.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_details(output: &mut String, record: &Record) {
    if let Some(location) = &record.location {
        output.push_str(&format!("  Location: {}\n", location));
    }
    if let Some(situation) = &record.situation {
        output.push_str(&format!("  Situation: {}\n", situation));
    }
    if !record.note.is_empty() {
        output.push_str(&format!("  Note: {}\n", record.note));
    }
    if let Some(reflection) = &record.reflection {
        output.push_str("  Reflection\n");
        if let Some(mistake) = &reflection.mistake {
            output.push_str(&format!("    Mistake: {}\n", mistake));
        }
        if let Some(issue) = &reflection.systemic_issue {
            output.push_str(&format!("    Systemic issue: {}\n", issue));
        }
        if let Some(responsibility) = &reflection.responsibility {
            output.push_str(&format!("    Responsibility: {}\n", responsibility));
        }
    }
    if let Some(insight) = &record.insight {
        output.push_str("  Insight\n");
        if let Some(analysis) = &insight.analysis {
            output.push_str(&format!("    Analysis: {}\n", analysis));
        }
        if let Some(comfort) = &insight.comfort {
            output.push_str(&format!("    Comfort: {}\n", comfort));
        }
        if let Some(commitment) = &insight.commitment {
            output.push_str(&format!("    Commitment: {}\n", commitment));
        }
    }
}

/// One record with all of its details
pub fn format_record<Tz>(record: &Record, now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut output = format!(
        "{} {}  ({})\n",
        emojis(record),
        names(record),
        format_relative(record.timestamp, now)
    );
    push_details(&mut output, record);
    output
}

/// Recent records, newest first
pub fn format_recent<Tz>(records: &[Record], now: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if records.is_empty() {
        return "No records yet".to_string();
    }

    records
        .iter()
        .map(|r| format_record(r, now))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Records of one day with their local time of day
pub fn format_day<Tz: TimeZone>(view: &DayView, tz: &Tz) -> String
where
    Tz::Offset: Display,
{
    let heading = view.date.format("%B %d, %Y");
    if view.records.is_empty() {
        return format!("No records on {}", heading);
    }

    let mut output = format!("{}: {} record(s)\n\n", heading, view.records.len());
    for record in &view.records {
        output.push_str(&format!(
            "{}  {} {}\n",
            record.timestamp.with_timezone(tz).format("%H:%M"),
            emojis(record),
            names(record)
        ));
        push_details(&mut output, record);
    }
    output
}

/// Monday-first month grid; each day shows up to three emojis and a `*`
/// when several records were written that day
pub fn format_month(view: &MonthView, today: NaiveDate) -> String {
    let first = NaiveDate::from_ymd_opt(view.year, view.month, 1);
    let mut output = match first {
        Some(first) => format!("{}\n", first.format("%B %Y")),
        None => String::new(),
    };
    output.push_str("Mon      Tue      Wed      Thu      Fri      Sat      Sun\n");

    for row in &view.rows {
        let cells: Vec<String> = row
            .iter()
            .map(|cell| match cell {
                None => String::new(),
                Some(date) => {
                    let marker = if *date == today { ">" } else { "" };
                    let day = date.format("%d").to_string();
                    match view.days.get(date) {
                        Some(overview) => {
                            let many = if overview.count > 1 { "*" } else { "" };
                            format!("{}{}{}{}", marker, day, overview.emojis.concat(), many)
                        }
                        None => format!("{}{}", marker, day),
                    }
                }
            })
            .collect();
        let line: String = cells.iter().map(|c| pad(c, 9)).collect();
        output.push_str(&format!("{}\n", line.trim_end()));
    }

    let recorded: usize = view.days.values().map(|d| d.count).sum();
    output.push_str(&format!("\n{} record(s) this month", recorded));
    output
}

/// Pad by character count; emoji are treated as one column each
fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        format!("{} ", text)
    } else {
        format!("{}{}", text, " ".repeat(width - len))
    }
}

fn tally_bar(tally: &Tally) -> String {
    format!("{}{}", "+".repeat(tally.positive), "-".repeat(tally.negative))
}

fn format_summary(summary: &StatsSummary) -> String {
    format!(
        "Total records:     {}\n\
        Happiness records: {}\n\
        Positive ratio:    {}%\n\
        Most frequent:     {}\n",
        summary.total_records,
        summary.happiness_records,
        summary.positive_ratio_percent,
        summary.top_emotion.as_deref().unwrap_or("-")
    )
}

fn format_distribution(frequencies: &[EmotionCount]) -> String {
    let total: usize = frequencies.iter().map(|c| c.count).sum();
    let mut output = String::from("Emotion distribution\n");
    for count in frequencies {
        let percent = if total == 0 {
            0
        } else {
            (count.count as f64 / total as f64 * 100.0).round() as u32
        };
        output.push_str(&format!(
            "  {} {:<12} {:>3}x {:>3}%\n",
            count.emoji.as_deref().unwrap_or("?"),
            count.name,
            count.count,
            percent
        ));
    }

    output.push_str("\nTop emotions\n");
    for (idx, count) in frequencies.iter().take(TOP_EMOTIONS).enumerate() {
        output.push_str(&format!(
            "  {}. {} {} ({})\n",
            idx + 1,
            count.emoji.as_deref().unwrap_or("?"),
            count.name,
            count.count
        ));
    }
    output
}

/// Statistics view: buckets (bar) or distribution (pie), then the summary
pub fn format_stats(report: &StatsReport, view: ChartView) -> String {
    if report.summary.total_records == 0 {
        return "No records yet. Start with 'moodjour record'.".to_string();
    }

    let mut output = String::new();
    match view {
        ChartView::Bar => {
            output.push_str(&format!(
                "Positive (+) / negative (-) emotions, {}\n",
                report.period
            ));
            let rows: Vec<(&str, &Tally)> = match &report.buckets {
                Buckets::Daily(days) => days.iter().map(|d| (d.label.as_str(), &d.tally)).collect(),
                Buckets::Weekly(weeks) => {
                    weeks.iter().map(|w| (w.label.as_str(), &w.tally)).collect()
                }
            };
            for (label, tally) in rows {
                output.push_str(&format!(
                    "  {:<12} {:>3} {:>3}  {}\n",
                    label,
                    tally.positive,
                    tally.negative,
                    tally_bar(tally)
                ));
            }
        }
        ChartView::Pie => output.push_str(&format_distribution(&report.frequencies)),
    }

    output.push('\n');
    output.push_str(&format_summary(&report.summary));
    output
}

/// The emotion catalog with polarity
pub fn format_catalog() -> String {
    let mut output = String::new();
    for emotion in CATALOG.iter() {
        let polarity = if emotion.is_positive() {
            "positive"
        } else {
            "negative"
        };
        output.push_str(&format!(
            "{} {:<12} {}\n",
            emotion.emoji, emotion.name, polarity
        ));
    }
    output
}
