use crate::Session;
use crate::cli::parser::Commands;
use crate::core::add::{AddLogic, AddRequest};
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_logs_by_date;
use crate::errors::{AppError, AppResult};
use crate::models::log_type::LogType;
use crate::models::status::Metric;
use crate::ui::messages::{success, warning};
use crate::ui::render::{metric_line, rounds_hint};
use crate::utils::date;

fn metric_for(kind: LogType) -> Metric {
    match kind {
        LogType::Workout => Metric::Workout,
        LogType::Steps => Metric::Steps,
        LogType::Weight => Metric::Weight,
        LogType::Pullup => Metric::Pullups,
        LogType::Pushup => Metric::Pushups,
    }
}

/// Log one result.
pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Add {
        kind,
        value,
        date: date_arg,
        rounds,
        sets,
        note,
    } = cmd
    {
        //
        // 1. Resolve date (default = today in the product timezone)
        //
        let d = match date_arg {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => session.today,
        };

        if rounds.is_some() && *kind != LogType::Workout {
            warning("--rounds only applies to workouts; ignored.");
        }
        if sets.is_some() && !kind.has_sets() {
            warning("--sets only applies to pull-ups and push-ups; ignored.");
        }

        //
        // 2. Validate and build the entry
        //
        let entry = AddLogic::build_entry(&AddRequest {
            date: d,
            kind: *kind,
            value: value.clone(),
            rounds: *rounds,
            sets: sets.clone(),
            note: note.clone(),
        })?;

        //
        // 3. Store
        //
        let mut pool = DbPool::open_initialized(&session.cfg.database)?;
        let id = AddLogic::apply(&mut pool, &entry)?;

        success(format!(
            "Logged {} {} for {} (id {})",
            kind.label(),
            entry.value,
            d,
            id
        ));

        //
        // 4. Feedback against the day's prescription
        //
        let day_logs = load_logs_by_date(&mut pool, &d)?;
        let view = Core::build_day_view(&session.calendar, d, session.today, &day_logs);
        let metric = metric_for(*kind);
        println!("{}", metric_line(metric, view.status.get(metric)));

        if let Some(r) = entry.rounds
            && let Some(hint) = rounds_hint(view.plan, r.unsigned_abs())
        {
            warning(hint);
        }
    }

    Ok(())
}
