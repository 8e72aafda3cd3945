use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_log, load_log_by_id};
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Removes the entry with `id` and returns it.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<LogEntry> {
        let entry = load_log_by_id(pool, id)?.ok_or(AppError::LogNotFound(id))?;

        delete_log(pool, id)?;

        if let Err(e) = audit(
            &pool.conn,
            "del",
            &format!("{} {}", entry.kind.to_db_str(), entry.date_str()),
            &format!("id={} value={}", id, entry.value),
        ) {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        Ok(entry)
    }
}
