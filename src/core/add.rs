use crate::core::calculator::matching::MAX_REPS_PER_SET;
use crate::core::calculator::try_parse_sets;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::insert_log;
use crate::errors::{AppError, AppResult};
use crate::models::log_entry::{COMPLETED, LogEntry};
use crate::models::log_type::LogType;
use chrono::NaiveDate;

/// Raw user input for one log entry.
#[derive(Debug, Clone)]
pub struct AddRequest {
    pub date: NaiveDate,
    pub kind: LogType,
    pub value: Option<String>,
    pub rounds: Option<i32>,
    pub sets: Option<String>,
    pub note: Option<String>,
}

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validates `req` and turns it into an entry ready to be stored.
    ///
    /// Only the field matching the entry type is kept: rounds for workouts,
    /// sets for pull-ups / push-ups.
    pub fn build_entry(req: &AddRequest) -> AppResult<LogEntry> {
        let value = req.value.as_deref().map(str::trim).filter(|v| !v.is_empty());

        let mut entry = match req.kind {
            LogType::Workout => {
                let mut e = LogEntry::new(req.date, LogType::Workout, value.unwrap_or(COMPLETED));
                if let Some(r) = req.rounds {
                    if r < 0 {
                        return Err(AppError::InvalidValue(format!(
                            "rounds must be zero or more, got {r}"
                        )));
                    }
                    e = e.with_rounds(r);
                }
                e
            }
            LogType::Steps => {
                let v = value.ok_or_else(|| AppError::MissingValue("step count".into()))?;
                let steps: u32 = v
                    .replace([',', '_'], "")
                    .parse()
                    .map_err(|_| AppError::InvalidValue(format!("invalid step count '{v}'")))?;
                LogEntry::new(req.date, LogType::Steps, steps.to_string())
            }
            LogType::Weight => {
                let v = value.ok_or_else(|| AppError::MissingValue("body weight".into()))?;
                let weight: f64 = v
                    .parse()
                    .ok()
                    .filter(|w: &f64| w.is_finite() && *w > 0.0)
                    .ok_or_else(|| AppError::InvalidValue(format!("invalid weight '{v}'")))?;
                LogEntry::new(req.date, LogType::Weight, weight.to_string())
            }
            LogType::Pullup | LogType::Pushup => {
                let raw = req
                    .sets
                    .as_deref()
                    .or(value)
                    .ok_or_else(|| AppError::MissingValue("set list (e.g. --sets 5,4,3)".into()))?;
                let sets = try_parse_sets(raw)
                    .filter(|s| !s.is_empty() && s.iter().all(|r| *r <= MAX_REPS_PER_SET))
                    .ok_or_else(|| AppError::InvalidSets(raw.to_string()))?;
                let normalized = sets
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                LogEntry::new(req.date, req.kind, normalized.clone()).with_sets(normalized)
            }
        };

        if let Some(note) = req.note.as_deref().map(str::trim).filter(|n| !n.is_empty()) {
            entry = entry.with_note(note);
        }

        Ok(entry)
    }

    /// Stores a validated entry and records it in the audit log.
    pub fn apply(pool: &mut DbPool, entry: &LogEntry) -> AppResult<i64> {
        let id = insert_log(&pool.conn, entry)?;

        if let Err(e) = audit(
            &pool.conn,
            "add",
            &format!("{} {}", entry.kind.to_db_str(), entry.date_str()),
            &format!("id={} value={}", id, entry.value),
        ) {
            tracing::warn!(error = %e, "failed to write audit log");
        }

        tracing::debug!(id, kind = entry.kind.to_db_str(), date = %entry.date, "log entry stored");
        Ok(id)
    }
}
