use crate::core::calculator::matching::{logged_sets, tristate_status};
use crate::models::day_plan::DayPlan;
use crate::models::ladder::RepLadderDay;
use crate::models::log_entry::LogEntry;
use crate::models::log_type::LogType;
use crate::models::status::{DayStatus, Status};

fn presence(day_logs: &[LogEntry], kind: LogType) -> Status {
    if day_logs.iter().any(|l| l.kind == kind) {
        Status::Done
    } else {
        Status::None
    }
}

/// Per-metric status of one day.
///
/// `day_logs` must already be restricted to the day being evaluated.
pub fn compute_day_status(
    day_logs: &[LogEntry],
    plan: &DayPlan,
    pullup_day: &RepLadderDay,
    pushup_day: &RepLadderDay,
) -> DayStatus {
    let workout = if plan.is_recovery() {
        Status::Done
    } else {
        presence(day_logs, LogType::Workout)
    };

    DayStatus {
        workout,
        steps: presence(day_logs, LogType::Steps),
        pullups: tristate_status(
            pullup_day.sets,
            &logged_sets(day_logs, LogType::Pullup),
            pullup_day.rest,
        ),
        pushups: tristate_status(
            pushup_day.sets,
            &logged_sets(day_logs, LogType::Pushup),
            pushup_day.rest,
        ),
        weight: presence(day_logs, LogType::Weight),
    }
}

/// Single status for a compact calendar cell.
pub fn overall_status(status: &DayStatus) -> Status {
    let statuses: Vec<Status> = status.iter().map(|(_, s)| s).collect();

    if statuses.iter().all(|s| s.is_done()) {
        Status::Done
    } else if statuses.iter().any(|s| *s != Status::None) {
        Status::Partial
    } else {
        Status::None
    }
}
