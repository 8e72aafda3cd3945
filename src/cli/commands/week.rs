use crate::Session;
use crate::cli::parser::Commands;
use crate::core::calendar;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_logs_between;
use crate::errors::{AppError, AppResult};
use crate::ui::render;
use crate::utils::date;
use chrono::Duration;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Week { date: date_arg, json } = cmd {
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => session.today,
        };

        let start = calendar::week_start(d);
        let end = start + Duration::days(6);

        let mut pool = DbPool::open_initialized(&session.cfg.database)?;
        let logs = load_logs_between(&mut pool, &start, &end)?;
        let views = Core::build_week_view(&session.calendar, d, session.today, &logs);

        if *json {
            println!("{}", serde_json::to_string_pretty(&views)?);
        } else {
            render::print_week(&views);
        }
    }

    Ok(())
}
