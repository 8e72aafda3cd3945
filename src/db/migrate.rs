use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check if the `fitness_logs` table exists.
fn fitness_logs_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='fitness_logs'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if the `fitness_logs` table has the given column.
fn fitness_logs_has_column(conn: &Connection, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare("PRAGMA table_info('fitness_logs')")?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `fitness_logs` table with the current schema.
fn create_fitness_logs_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS fitness_logs (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at   TEXT NOT NULL,
            date         TEXT NOT NULL,
            type         TEXT NOT NULL CHECK(type IN ('WORKOUT','STEPS','WEIGHT','PULLUP','PUSHUP')),
            value        TEXT NOT NULL,
            rounds       INTEGER,
            pullup_sets  TEXT,
            pushup_sets  TEXT,
            note         TEXT
        );

        CREATE INDEX IF NOT EXISTS idx_fitness_logs_date ON fitness_logs(date);
        CREATE INDEX IF NOT EXISTS idx_fitness_logs_date_type ON fitness_logs(date, type);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Older tables were created before the ladder programs existed and have no
/// set columns.
fn migrate_add_set_columns(conn: &Connection) -> Result<()> {
    let version = "20260210_0002_add_ladder_sets";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    for column in ["pullup_sets", "pushup_sets"] {
        if !fitness_logs_has_column(conn, column)? {
            conn.execute(
                &format!("ALTER TABLE fitness_logs ADD COLUMN {column} TEXT"),
                [],
            )?;
            tracing::info!(column, "added column to fitness_logs");
        }
    }

    mark_applied(conn, version, "Added pullup_sets/pushup_sets to fitness_logs")?;

    tracing::info!(version, "migration applied");
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !fitness_logs_table_exists(conn)? {
        create_fitness_logs_table(conn)?;
        tracing::info!("created fitness_logs table");
    }

    migrate_add_set_columns(conn)?;

    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_fitness_logs_date ON fitness_logs(date);
        CREATE INDEX IF NOT EXISTS idx_fitness_logs_date_type ON fitness_logs(date, type);
        "#,
    )?;

    Ok(())
}
