use super::log_type::LogType;
use chrono::{Local, NaiveDate};
use serde::Serialize;

/// Value written for a finished workout.
pub const COMPLETED: &str = "COMPLETED";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LogEntry {
    pub id: i64,
    pub created_at: String, // ⇔ fitness_logs.created_at (TEXT, ISO8601)
    pub date: NaiveDate,    // ⇔ fitness_logs.date (TEXT "YYYY-MM-DD")
    #[serde(rename = "type")]
    pub kind: LogType, // ⇔ fitness_logs.type
    pub value: String,
    pub rounds: Option<i32>,
    pub pullup_sets: Option<String>,
    pub pushup_sets: Option<String>,
    pub note: Option<String>,
}

impl LogEntry {
    /// Builds an entry that has not been stored yet.
    /// - `id = 0` (assigned by the database)
    /// - `created_at = now() in ISO8601`
    /// - no rounds, sets or note
    pub fn new(date: NaiveDate, kind: LogType, value: impl Into<String>) -> Self {
        Self {
            id: 0,
            created_at: Local::now().to_rfc3339(),
            date,
            kind,
            value: value.into(),
            rounds: None,
            pullup_sets: None,
            pushup_sets: None,
            note: None,
        }
    }

    pub fn with_rounds(mut self, rounds: i32) -> Self {
        self.rounds = Some(rounds);
        self
    }

    /// Stores `sets` in the column matching this entry's type.
    /// Ignored for types that do not carry sets.
    pub fn with_sets(mut self, sets: impl Into<String>) -> Self {
        match self.kind {
            LogType::Pullup => self.pullup_sets = Some(sets.into()),
            LogType::Pushup => self.pushup_sets = Some(sets.into()),
            _ => {}
        }
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_created_at(mut self, created_at: impl Into<String>) -> Self {
        self.created_at = created_at.into();
        self
    }

    /// The raw set string relevant for this entry's type, if any.
    pub fn sets_raw(&self) -> Option<&str> {
        match self.kind {
            LogType::Pullup => self.pullup_sets.as_deref(),
            LogType::Pushup => self.pushup_sets.as_deref(),
            _ => None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn is_completed_workout(&self) -> bool {
        self.kind == LogType::Workout && self.value == COMPLETED
    }
}
