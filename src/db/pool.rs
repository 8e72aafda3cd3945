//! SQLite connection wrapper (lightweight for CLI usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Opens `path` and applies any pending migration.
    pub fn open_initialized(path: &str) -> crate::errors::AppResult<Self> {
        crate::db::initialize::prepare_db_file(Path::new(path))?;
        let pool = Self::new(path)?;
        crate::db::initialize::init_db(&pool.conn)?;
        Ok(pool)
    }

    /// In-memory database, migrated; used by tests.
    pub fn in_memory() -> crate::errors::AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        crate::db::initialize::init_db(&conn)?;
        Ok(Self { conn })
    }
}
