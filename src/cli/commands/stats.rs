use crate::Session;
use crate::cli::parser::Commands;
use crate::core::metrics::compute_metrics;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_logs;
use crate::errors::AppResult;
use crate::ui::render;

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Stats { json } = cmd {
        let mut pool = DbPool::open_initialized(&session.cfg.database)?;
        let logs = load_all_logs(&mut pool)?;
        let metrics = compute_metrics(&logs, session.today, session.cfg.weight_goal);

        if *json {
            println!("{}", serde_json::to_string_pretty(&metrics)?);
        } else {
            render::print_metrics(&metrics, session.cfg.weight_goal);
        }
    }

    Ok(())
}
