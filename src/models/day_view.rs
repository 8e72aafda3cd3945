use super::day_plan::DayPlan;
use super::ladder::RepLadderDay;
use super::log_entry::LogEntry;
use super::status::DayStatus;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeSet;

/// Logged sets for one ladder, merged across every entry of the day.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SetProgress {
    pub logged: Vec<u32>,
    /// Indices of prescribed sets matched by a logged set.
    pub completed: BTreeSet<usize>,
}

impl SetProgress {
    pub fn total(&self) -> u64 {
        self.logged.iter().map(|r| u64::from(*r)).sum()
    }
}

/// Everything the presentation layer needs for one calendar date.
#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    pub cycle_day: u32,
    pub cycle_week: u32,
    pub plan: &'static DayPlan,
    pub pullup_day: RepLadderDay,
    pub pushup_day: RepLadderDay,
    pub logs: Vec<LogEntry>,
    pub pullups: SetProgress,
    pub pushups: SetProgress,
    pub status: DayStatus,
    pub is_future: bool,
    pub is_today: bool,
    pub is_program_active: bool,
}
