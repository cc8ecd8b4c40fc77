//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands};
pub use output::{
    format_catalog, format_day, format_month, format_recent, format_record, format_stats,
    ChartView,
};
