//! Reconciles prescribed rep sets against logged rep sets.
//!
//! Logged sets are an unordered multiset: each logged value can satisfy at
//! most one prescribed set, so a prescription of `[5, 5]` needs two logged 5s.

use crate::models::log_entry::LogEntry;
use crate::models::log_type::LogType;
use crate::models::status::Status;
use std::collections::BTreeSet;

/// Upper bound accepted for a single logged set.
pub const MAX_REPS_PER_SET: u32 = 500;

/// Indices of `prescribed` satisfied by a logged value.
///
/// Walks `prescribed` in order and consumes one matching value from the
/// remaining logged values for each hit.
pub fn match_completed_indices(prescribed: &[u32], logged: &[u32]) -> BTreeSet<usize> {
    let mut remaining = logged.to_vec();
    let mut completed = BTreeSet::new();

    for (i, target) in prescribed.iter().enumerate() {
        if let Some(pos) = remaining.iter().position(|v| v == target) {
            remaining.swap_remove(pos);
            completed.insert(i);
        }
    }

    completed
}

/// Tri-state completion of a set prescription.
///
/// - rest day or nothing prescribed → `Done`
/// - nothing logged → `None`
/// - every prescribed set consumed → `Done`, otherwise `Partial`
pub fn tristate_status(prescribed: &[u32], logged: &[u32], is_rest_day: bool) -> Status {
    if is_rest_day || prescribed.is_empty() {
        return Status::Done;
    }
    if logged.is_empty() {
        return Status::None;
    }

    let mut outstanding = prescribed.to_vec();
    for value in logged {
        if let Some(pos) = outstanding.iter().position(|v| v == value) {
            outstanding.swap_remove(pos);
        }
    }

    if outstanding.is_empty() {
        Status::Done
    } else {
        Status::Partial
    }
}

/// Parses a comma-separated rep list ("5, 4,3").
///
/// Returns `None` when any token is not a non-negative integer. Empty tokens
/// (a trailing comma, a blank string) are skipped.
pub fn try_parse_sets(raw: &str) -> Option<Vec<u32>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u32>().ok())
        .collect()
}

/// Lenient variant of [`try_parse_sets`] used on stored entries: a corrupt
/// entry contributes no sets instead of failing the whole day.
pub fn parse_sets(raw: &str) -> Vec<u32> {
    try_parse_sets(raw).unwrap_or_else(|| {
        tracing::warn!(raw, "ignoring malformed set list");
        Vec::new()
    })
}

/// All sets of `kind` logged in `logs`, in log order.
pub fn logged_sets(logs: &[LogEntry], kind: LogType) -> Vec<u32> {
    logs.iter()
        .filter(|l| l.kind == kind)
        .filter_map(|l| l.sets_raw())
        .flat_map(parse_sets)
        .collect()
}
