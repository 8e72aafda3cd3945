use crate::Session;
use crate::cli::parser::Commands;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_logs_between;
use crate::errors::{AppError, AppResult};
use crate::ui::render;
use crate::utils::date;
use chrono::Datelike;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Month { month, json } = cmd {
        let (year, m) = match month {
            Some(s) => date::parse_month(s).ok_or_else(|| AppError::InvalidMonth(s.clone()))?,
            None => (session.today.year(), session.today.month()),
        };

        let views = {
            let mut pool = DbPool::open_initialized(&session.cfg.database)?;
            let dates = crate::core::calendar::month_dates(year, m);
            let (Some(first), Some(last)) = (dates.first(), dates.last()) else {
                return Err(AppError::InvalidMonth(format!("{year}-{m:02}")));
            };
            let logs = load_logs_between(&mut pool, first, last)?;
            Core::build_month_view(&session.calendar, year, m, session.today, &logs)
        };

        if *json {
            println!("{}", serde_json::to_string_pretty(&views)?);
        } else {
            render::print_month(&views);
        }
    }

    Ok(())
}
