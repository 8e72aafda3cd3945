use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Closed set of things a user can log for a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogType {
    Workout,
    Steps,
    Weight,
    Pullup,
    Pushup,
}

impl LogType {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LogType::Workout => "WORKOUT",
            LogType::Steps => "STEPS",
            LogType::Weight => "WEIGHT",
            LogType::Pullup => "PULLUP",
            LogType::Pushup => "PUSHUP",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "WORKOUT" => Some(LogType::Workout),
            "STEPS" => Some(LogType::Steps),
            "WEIGHT" => Some(LogType::Weight),
            "PULLUP" => Some(LogType::Pullup),
            "PUSHUP" => Some(LogType::Pushup),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LogType::Workout => "Workout",
            LogType::Steps => "Steps",
            LogType::Weight => "Weight",
            LogType::Pullup => "Pull-ups",
            LogType::Pushup => "Push-ups",
        }
    }

    /// Whether entries of this type carry a comma-separated set list.
    pub fn has_sets(&self) -> bool {
        matches!(self, LogType::Pullup | LogType::Pushup)
    }
}
