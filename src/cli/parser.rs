use crate::models::log_type::LogType;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rFitLogger
/// CLI application to follow the training programs and log daily results with SQLite
#[derive(Parser)]
#[command(
    name = "rfitlogger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small fitness log CLI: 28-day kettlebell cycle, pull-up and push-up ladders, daily results in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// Pin "today" to a fixed date (YYYY-MM-DD)
    #[arg(global = true, long = "today", hide = true)]
    pub today: Option<String>,

    /// Enable debug logging on stderr
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a result (workout, steps, weight, pull-up or push-up sets)
    Add {
        /// What is being logged
        #[arg(value_enum)]
        kind: LogType,

        /// Value: step count, body weight, or a set list for pull-ups/push-ups
        value: Option<String>,

        /// Date of the entry (YYYY-MM-DD, default: today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Completed rounds (workouts only)
        #[arg(long = "rounds")]
        rounds: Option<i32>,

        /// Comma-separated reps per set (pull-ups/push-ups), e.g. 5,4,3
        #[arg(long = "sets")]
        sets: Option<String>,

        /// Free-text note
        #[arg(long = "note")]
        note: Option<String>,
    },

    /// Delete a log entry by id
    Del {
        /// Entry id (see `day <date>`)
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// Show today's plan, ladders and status
    Today {
        #[arg(long, help = "Print the day view as JSON")]
        json: bool,
    },

    /// Show the plan, ladders, logs and status of one date
    Day {
        /// Date (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Print the day view as JSON")]
        json: bool,
    },

    /// Show the Monday-to-Sunday week containing a date
    Week {
        #[arg(long = "date", help = "Any date in the week (default: today)")]
        date: Option<String>,

        #[arg(long, help = "Print the week as JSON")]
        json: bool,
    },

    /// Show a calendar month
    Month {
        #[arg(long = "month", help = "Month to show (YYYY-MM, default: current)")]
        month: Option<String>,

        #[arg(long, help = "Print the month as JSON")]
        json: bool,
    },

    /// Show lifetime progress metrics
    Stats {
        #[arg(long, help = "Print the metrics as JSON")]
        json: bool,
    },

    /// Print the program tables
    Plan {
        #[arg(long = "cycle-day", help = "Show one day (1-28) of the main cycle")]
        cycle_day: Option<u32>,

        #[arg(long = "pullup-day", help = "Show one day of the pull-up ladder")]
        pullup_day: Option<u32>,

        #[arg(long = "pushup-day", help = "Show one day of the push-up ladder")]
        pushup_day: Option<u32>,
    },
}
