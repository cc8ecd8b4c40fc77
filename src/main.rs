use chrono::{Datelike, Local, Utc};
use clap::Parser;
use moodjour::application::{
    ConfigService, HistoryService, InitService, RecordRequest, RecordService, StatisticsService,
};
use moodjour::cli::{
    format_catalog, format_day, format_month, format_recent, format_record, format_stats,
    ChartView, Cli, Commands,
};
use moodjour::domain::date_ref::parse_month;
use moodjour::domain::StatsPeriod;
use moodjour::error::MoodError;
use moodjour::infrastructure::{FileSystemRepository, MAX_RECORDS};
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodError> {
    match cli.command {
        Some(Commands::Init { path }) => {
            let repo = InitService::execute(&path)?;
            println!("Initialized mood journal in {}", repo.root.display());
            Ok(())
        }
        Some(Commands::Record {
            emotions,
            note,
            location,
            situation,
            mistake,
            systemic_issue,
            responsibility,
            analysis,
            comfort,
            commitment,
            no_insight,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let service = RecordService::new(repo);

            let request = RecordRequest {
                emotions,
                note,
                location,
                situation,
                mistake,
                systemic_issue,
                responsibility,
                analysis,
                comfort,
                commitment,
                skip_insight: no_insight,
            };
            let outcome = service.execute(request, Utc::now())?;

            print!("{}", format_record(&outcome.record, &Local::now()));
            println!(
                "Saved. {} of {} record(s) kept.",
                outcome.total, MAX_RECORDS
            );
            if outcome.evicted > 0 {
                println!("Dropped {} oldest record(s).", outcome.evicted);
            }
            Ok(())
        }
        Some(Commands::Recent { limit }) => {
            let repo = FileSystemRepository::discover()?;
            let records = HistoryService::new(repo).recent(limit)?;
            println!("{}", format_recent(&records, &Local::now()));
            Ok(())
        }
        Some(Commands::Day { date_ref }) => {
            let repo = FileSystemRepository::discover()?;
            let today = Local::now().date_naive();
            let view = HistoryService::new(repo).day(&date_ref.join(" "), today, &Local)?;
            print!("{}", format_day(&view, &Local));
            if view.records.is_empty() {
                println!();
            }
            Ok(())
        }
        Some(Commands::Calendar { month }) => {
            let repo = FileSystemRepository::discover()?;
            let today = Local::now().date_naive();
            let (year, month) = match month {
                Some(m) => parse_month(&m)?,
                None => (today.year(), today.month()),
            };
            let view = HistoryService::new(repo).month(year, month, &Local)?;
            println!("{}", format_month(&view, today));
            Ok(())
        }
        Some(Commands::Stats { period, view }) => {
            let period = period
                .as_deref()
                .map(StatsPeriod::from_str)
                .transpose()
                .map_err(MoodError::Config)?;
            let view = ChartView::from_str(&view).map_err(MoodError::Config)?;

            let repo = FileSystemRepository::discover()?;
            let report = StatisticsService::new(repo).execute(period, &Local::now())?;
            println!("{}", format_stats(&report, view).trim_end());
            Ok(())
        }
        Some(Commands::Emotions) => {
            print!("{}", format_catalog());
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("insight_delay_ms = {}", config.insight_delay_ms);
                println!("default_period = {}", config.default_period);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodjour config [--list | <key> [<value>]]");
                println!("Valid keys: insight_delay_ms, default_period, created");
                Ok(())
            }
        }
        None => {
            println!("moodjour - Terminal mood journal");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
