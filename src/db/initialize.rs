use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;
use std::fs;
use std::path::Path;

/// Creates the directory that will hold the SQLite file.
pub fn prepare_db_file(path: &Path) -> AppResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent)?;
        tracing::debug!(dir = %parent.display(), "created database directory");
    }
    Ok(())
}

/// Brings a connection up to the current schema.
///
/// Tables are owned by the migrations; this runs them and reports how many
/// entries the database holds.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;

    let entries: i64 = conn.query_row("SELECT COUNT(*) FROM fitness_logs", [], |r| r.get(0))?;
    tracing::debug!(entries, "fitness_logs ready");
    Ok(())
}
