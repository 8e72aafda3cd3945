//! rFitLogger library root.
//! Exposes the CLI parser, the high-level run() function, the pure program
//! logic (`core`) and the storage layer (`db`).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use chrono::NaiveDate;
use clap::Parser;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calendar::ProgramCalendar;
use crate::errors::{AppError, AppResult};
use tracing_subscriber::EnvFilter;

/// Everything a command needs besides its own arguments.
pub struct Session {
    pub cfg: Config,
    pub calendar: ProgramCalendar,
    /// Civil "today" in the product timezone (or the `--today` override).
    pub today: NaiveDate,
}

impl Session {
    pub fn new(cfg: Config, today_override: Option<&str>) -> AppResult<Self> {
        let calendar = ProgramCalendar::from_config(&cfg)?;
        let today = match today_override {
            Some(s) => utils::date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.into()))?,
            None => calendar.today(),
        };
        Ok(Self {
            cfg,
            calendar,
            today,
        })
    }
}

/// Central command dispatcher
pub fn dispatch(cli: &Cli, session: &Session) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli, &session.cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, &session.cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, &session.cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, session),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, session),
        Commands::Today { .. } | Commands::Day { .. } => {
            cli::commands::day::handle(&cli.command, session)
        }
        Commands::Week { .. } => cli::commands::week::handle(&cli.command, session),
        Commands::Month { .. } => cli::commands::month::handle(&cli.command, session),
        Commands::Stats { .. } => cli::commands::stats::handle(&cli.command, session),
        Commands::Plan { .. } => cli::commands::plan::handle(&cli.command),
    }
}

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // load config once
    let mut cfg = Config::load()?;

    // --db overrides the configured database
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    let session = Session::new(cfg, cli.today.as_deref())?;
    tracing::debug!(today = %session.today, database = %session.cfg.database, "session ready");

    dispatch(&cli, &session)
}
