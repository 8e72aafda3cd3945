//! Lifetime progress metrics computed over the whole log history.

use crate::core::calculator::matching::logged_sets;
use crate::models::log_entry::LogEntry;
use crate::models::log_type::LogType;
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::HashSet;

/// Rounds at or above this count are the full prescription.
pub const PRESCRIBED_ROUNDS: i32 = 5;

/// Number of recent round counts kept for the trend.
pub const RECENT_ROUNDS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProgressMetrics {
    pub total_workouts: usize,
    pub average_rounds: f64,
    pub prescribed_pct: u32,
    pub latest_weight: Option<f64>,
    pub start_weight: Option<f64>,
    pub weight_change: Option<f64>,
    pub to_goal: Option<f64>,
    pub streak: u32,
    /// Oldest first.
    pub recent_rounds: Vec<(NaiveDate, i32)>,
    pub lifetime_pullups: u64,
    pub lifetime_pushups: u64,
}

fn lifetime_reps(logs: &[LogEntry], kind: LogType) -> u64 {
    logged_sets(logs, kind).into_iter().map(u64::from).sum()
}

pub fn compute_metrics(logs: &[LogEntry], today: NaiveDate, weight_goal: f64) -> ProgressMetrics {
    let mut ordered: Vec<&LogEntry> = logs.iter().collect();
    ordered.sort_by(|a, b| (a.date, &a.created_at).cmp(&(b.date, &b.created_at)));

    let completed: Vec<&LogEntry> = ordered
        .iter()
        .copied()
        .filter(|l| l.is_completed_workout())
        .collect();

    let with_rounds: Vec<(NaiveDate, i32)> = ordered
        .iter()
        .filter(|l| l.kind == LogType::Workout)
        .filter_map(|l| l.rounds.filter(|r| *r > 0).map(|r| (l.date, r)))
        .collect();

    let average_rounds = if with_rounds.is_empty() {
        0.0
    } else {
        with_rounds.iter().map(|(_, r)| f64::from(*r)).sum::<f64>() / with_rounds.len() as f64
    };

    let prescribed = with_rounds
        .iter()
        .filter(|(_, r)| *r >= PRESCRIBED_ROUNDS)
        .count();
    let prescribed_pct = if with_rounds.is_empty() {
        0
    } else {
        (prescribed as f64 * 100.0 / with_rounds.len() as f64).round() as u32
    };

    let weights: Vec<f64> = ordered
        .iter()
        .filter(|l| l.kind == LogType::Weight)
        .filter_map(|l| l.value.trim().parse::<f64>().ok())
        .collect();
    let start_weight = weights.first().copied();
    let latest_weight = weights.last().copied();
    let weight_change = start_weight.zip(latest_weight).map(|(s, l)| l - s);

    let workout_days: HashSet<NaiveDate> = completed.iter().map(|l| l.date).collect();
    let mut streak = 0;
    let mut day = today;
    while workout_days.contains(&day) {
        streak += 1;
        day -= Duration::days(1);
    }

    let recent_rounds = with_rounds[with_rounds.len().saturating_sub(RECENT_ROUNDS)..].to_vec();

    ProgressMetrics {
        total_workouts: completed.len(),
        average_rounds,
        prescribed_pct,
        latest_weight,
        start_weight,
        weight_change,
        to_goal: latest_weight.map(|w| w - weight_goal),
        streak,
        recent_rounds,
        lifetime_pullups: lifetime_reps(logs, LogType::Pullup),
        lifetime_pushups: lifetime_reps(logs, LogType::Pushup),
    }
}
