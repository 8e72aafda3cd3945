use crate::Session;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_logs_by_date;
use crate::errors::{AppError, AppResult};
use crate::ui::render;
use crate::utils::date;

/// Handles both `today` and `day <date>`.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    let (d, json) = match cmd {
        Commands::Today { json } => (session.today, *json),
        Commands::Day { date: s, json } => (
            date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            *json,
        ),
        _ => return Ok(()),
    };

    let mut pool = DbPool::open_initialized(&session.cfg.database)?;
    let logs = load_logs_by_date(&mut pool, &d)?;
    let view = Core::build_day_view(&session.calendar, d, session.today, &logs);

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        render::print_day(&view);
    }

    Ok(())
}
