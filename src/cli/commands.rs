//! CLI command definitions

use crate::infrastructure::DEFAULT_RECENT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodjour")]
#[command(about = "Terminal mood journal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Record how you feel
    Record {
        /// Emotion to record (repeatable, see `moodjour emotions`)
        #[arg(short, long = "emotion", value_name = "EMOTION")]
        emotions: Vec<String>,

        /// Short note about the emotion
        #[arg(short, long)]
        note: Option<String>,

        /// Where it happened (work, home, school, public place, social gathering, nature, other)
        #[arg(short, long)]
        location: Option<String>,

        /// What happened
        #[arg(short, long)]
        situation: Option<String>,

        /// Was there a mistake? (my mistake, someone else's mistake, no mistake, not sure)
        #[arg(long)]
        mistake: Option<String>,

        /// Was there a systemic issue? (yes, definitely / partially / no systemic issue / not applicable)
        #[arg(long)]
        systemic_issue: Option<String>,

        /// Who is responsible? (mostly mine, mostly others, shared equally, external factors)
        #[arg(long)]
        responsibility: Option<String>,

        /// Replace the generated analysis
        #[arg(long)]
        analysis: Option<String>,

        /// Replace the generated comfort text
        #[arg(long)]
        comfort: Option<String>,

        /// Replace the generated commitment
        #[arg(long)]
        commitment: Option<String>,

        /// Do not generate an insight
        #[arg(long)]
        no_insight: bool,
    },

    /// Show the most recent records
    Recent {
        /// Number of records to show
        #[arg(short = 'n', long, default_value_t = DEFAULT_RECENT)]
        limit: usize,
    },

    /// Show the records of one day
    Day {
        /// Date reference (e.g., today, yesterday, 3 days ago, monday, 2025-01-17)
        #[arg(value_name = "DATE_REF", num_args = 0.., default_value = "today")]
        date_ref: Vec<String>,
    },

    /// Show a month calendar with the emotions of each day
    Calendar {
        /// Month to show as YYYY-MM (default: current month)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show emotion statistics
    Stats {
        /// Window: two-weeks (daily) or six-weeks (weekly)
        #[arg(short, long)]
        period: Option<String>,

        /// Chart style: bar (positive/negative per bucket) or pie (distribution)
        #[arg(short, long, default_value = "bar")]
        view: String,
    },

    /// List the emotion catalog
    Emotions,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
