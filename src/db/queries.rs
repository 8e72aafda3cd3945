use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::LogEntry;
use crate::models::log_type::LogType;
use chrono::NaiveDate;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_LOGS: &str = "SELECT id, created_at, date, type, value, rounds, pullup_sets, pushup_sets, note
     FROM fitness_logs";

fn date_str(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn map_row(row: &Row) -> Result<LogEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("type")?;
    let kind = LogType::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidLogType(kind_str.clone())),
        )
    })?;

    Ok(LogEntry {
        id: row.get("id")?,
        created_at: row.get("created_at")?,
        date,
        kind,
        value: row.get("value")?,
        rounds: row.get("rounds")?,
        pullup_sets: row.get("pullup_sets")?,
        pushup_sets: row.get("pushup_sets")?,
        note: row.get("note")?,
    })
}

/// Inserts `entry` and returns the id assigned by SQLite.
pub fn insert_log(conn: &Connection, entry: &LogEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO fitness_logs (created_at, date, type, value, rounds, pullup_sets, pushup_sets, note)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            entry.created_at,
            date_str(&entry.date),
            entry.kind.to_db_str(),
            entry.value,
            entry.rounds,
            entry.pullup_sets,
            entry.pushup_sets,
            entry.note,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn collect(
    pool: &mut DbPool,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<LogEntry>> {
    let mut stmt = pool.conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Every entry, oldest first.
pub fn load_all_logs(pool: &mut DbPool) -> AppResult<Vec<LogEntry>> {
    let sql = format!("{SELECT_LOGS} ORDER BY date ASC, created_at ASC, id ASC");
    collect(pool, &sql, &[])
}

pub fn load_logs_by_date(pool: &mut DbPool, date: &NaiveDate) -> AppResult<Vec<LogEntry>> {
    let sql = format!("{SELECT_LOGS} WHERE date = ?1 ORDER BY created_at ASC, id ASC");
    collect(pool, &sql, &[&date_str(date)])
}

/// Entries dated between `start` and `end`, both included.
pub fn load_logs_between(
    pool: &mut DbPool,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<LogEntry>> {
    let sql = format!(
        "{SELECT_LOGS} WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC, created_at ASC, id ASC"
    );
    collect(pool, &sql, &[&date_str(start), &date_str(end)])
}

pub fn load_log_by_id(pool: &mut DbPool, id: i64) -> AppResult<Option<LogEntry>> {
    let sql = format!("{SELECT_LOGS} WHERE id = ?1");
    let entry = pool.conn.query_row(&sql, [id], map_row).optional()?;
    Ok(entry)
}

pub fn delete_log(pool: &mut DbPool, id: i64) -> AppResult<usize> {
    let n = pool
        .conn
        .execute("DELETE FROM fitness_logs WHERE id = ?1", [id])?;
    Ok(n)
}
