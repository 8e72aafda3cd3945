use rfitlogger::core::calculator::{
    compute_day_status, match_completed_indices, overall_status, parse_sets, try_parse_sets,
    tristate_status,
};
use rfitlogger::core::logic::Core;
use rfitlogger::core::program::{
    plan_for_cycle_day, pullup_plan_for_program_day, pushup_plan_for_program_day,
};
use rfitlogger::models::log_entry::LogEntry;
use rfitlogger::models::log_type::LogType;
use rfitlogger::models::status::{DayStatus, Metric, Status};
use std::collections::BTreeSet;

mod common;
use common::{d, default_calendar, pullups, pushups, steps, weight, workout};

fn set(indices: &[usize]) -> BTreeSet<usize> {
    indices.iter().copied().collect()
}

// ---------------------------------------------------------------------------
// set matching
// ---------------------------------------------------------------------------

#[test]
fn test_match_skips_unmatched_prescribed_sets() {
    assert_eq!(
        match_completed_indices(&[5, 4, 3, 2, 1], &[3, 5, 1]),
        set(&[0, 2, 4])
    );
}

#[test]
fn test_match_consumes_each_logged_value_once() {
    assert_eq!(match_completed_indices(&[5, 5, 4], &[5]), set(&[0]));
    assert_eq!(match_completed_indices(&[5, 5, 4], &[5, 5]), set(&[0, 1]));
}

#[test]
fn test_match_ignores_surplus_and_off_target_values() {
    assert_eq!(match_completed_indices(&[3, 2], &[3, 3, 3, 7]), set(&[0]));
    assert!(match_completed_indices(&[], &[1, 2]).is_empty());
    assert!(match_completed_indices(&[1, 2], &[]).is_empty());
}

#[test]
fn test_tristate_basic_cases() {
    assert_eq!(tristate_status(&[], &[], false), Status::Done);
    assert_eq!(tristate_status(&[3, 2, 1], &[], false), Status::None);
    assert_eq!(tristate_status(&[3, 2, 1], &[3, 1], false), Status::Partial);
    assert_eq!(tristate_status(&[3, 2, 1], &[1, 2, 3], false), Status::Done);
}

#[test]
fn test_tristate_rest_day_is_done() {
    assert_eq!(tristate_status(&[3, 2, 1], &[], true), Status::Done);
    assert_eq!(tristate_status(&[], &[9], true), Status::Done);
}

#[test]
fn test_tristate_needs_duplicates_logged_twice() {
    assert_eq!(tristate_status(&[2, 2], &[2], false), Status::Partial);
    assert_eq!(tristate_status(&[2, 2], &[2, 2], false), Status::Done);
    // extra work does not hurt
    assert_eq!(tristate_status(&[2, 2], &[2, 5, 2, 1], false), Status::Done);
}

#[test]
fn test_tristate_agrees_with_index_matching() {
    let prescribed = [9, 8, 7, 7, 6];
    for logged in [
        vec![],
        vec![9],
        vec![7, 7],
        vec![6, 7, 8, 9, 7],
        vec![1, 2, 3],
    ] {
        let matched = match_completed_indices(&prescribed, &logged);
        let expected = if logged.is_empty() {
            Status::None
        } else if matched.len() == prescribed.len() {
            Status::Done
        } else {
            Status::Partial
        };
        assert_eq!(tristate_status(&prescribed, &logged, false), expected, "{logged:?}");
    }
}

#[test]
fn test_parse_sets() {
    assert_eq!(try_parse_sets("5,4,3"), Some(vec![5, 4, 3]));
    assert_eq!(try_parse_sets(" 5, 4 ,3, "), Some(vec![5, 4, 3]));
    assert_eq!(try_parse_sets(""), Some(vec![]));
    assert_eq!(try_parse_sets("5,x,3"), None);
    assert_eq!(try_parse_sets("-1"), None);

    assert_eq!(parse_sets("5,x,3"), Vec::<u32>::new());
    assert_eq!(parse_sets("2,2"), vec![2, 2]);
}

// ---------------------------------------------------------------------------
// day status
// ---------------------------------------------------------------------------

#[test]
fn test_day_status_merges_entries_of_the_same_type() {
    let date = d(2026, 2, 12);
    let logs = vec![
        pullups(date, "3,2"),
        pullups(date, "2,1"),
        pushups(date, "15,12"),
        workout(date),
        steps(date, 10_500),
    ];

    let status = compute_day_status(
        &logs,
        plan_for_cycle_day(4),
        &pullup_plan_for_program_day(3),
        &pushup_plan_for_program_day(3),
    );

    assert_eq!(status.workout, Status::Done);
    assert_eq!(status.steps, Status::Done);
    assert_eq!(status.pullups, Status::Done);
    assert_eq!(status.pushups, Status::Partial);
    assert_eq!(status.weight, Status::None);
}

#[test]
fn test_recovery_day_counts_workout_as_done() {
    let status = compute_day_status(
        &[],
        plan_for_cycle_day(6),
        &pullup_plan_for_program_day(1),
        &pushup_plan_for_program_day(1),
    );

    assert_eq!(status.workout, Status::Done);
    assert_eq!(status.pullups, Status::None);
    assert_eq!(status.steps, Status::None);
}

#[test]
fn test_malformed_entry_does_not_blank_the_day() {
    let date = d(2026, 2, 10);
    let corrupt = LogEntry::new(date, LogType::Pullup, "oops").with_sets("3,two,1");
    let logs = vec![corrupt, pullups(date, "3,2,1,1")];

    let status = compute_day_status(
        &logs,
        plan_for_cycle_day(2),
        &pullup_plan_for_program_day(1),
        &pushup_plan_for_program_day(1),
    );

    assert_eq!(status.pullups, Status::Done);
}

#[test]
fn test_overall_status() {
    assert_eq!(overall_status(&DayStatus::uniform(Status::Done)), Status::Done);
    assert_eq!(overall_status(&DayStatus::uniform(Status::None)), Status::None);

    let mixed = DayStatus {
        steps: Status::Done,
        ..DayStatus::uniform(Status::None)
    };
    assert_eq!(mixed.get(Metric::Steps), Status::Done);
    assert_eq!(overall_status(&mixed), Status::Partial);
}

// ---------------------------------------------------------------------------
// day / week / month views
// ---------------------------------------------------------------------------

#[test]
fn test_day_view_filters_logs_and_tracks_sets() {
    let cal = default_calendar();
    let date = d(2026, 2, 12);
    let logs = vec![
        pullups(date, "3,2"),
        pullups(d(2026, 2, 11), "3,2,2,1"),
        weight(date, "201.4"),
    ];

    let view = Core::build_day_view(&cal, date, date, &logs);

    assert_eq!(view.cycle_day, 4);
    assert_eq!(view.cycle_week, 1);
    assert_eq!(view.pullup_day.sets, &[3, 2, 2, 1]);
    assert_eq!(view.logs.len(), 2);
    assert_eq!(view.pullups.logged, vec![3, 2]);
    assert_eq!(view.pullups.completed, set(&[0, 1]));
    assert_eq!(view.pullups.total(), 5);
    assert_eq!(view.status.pullups, Status::Partial);
    assert_eq!(view.status.weight, Status::Done);
    assert!(view.is_today);
    assert!(!view.is_future);
    assert!(view.is_program_active);
}

#[test]
fn test_day_view_totals_do_not_overflow_on_huge_stored_sets() {
    let cal = default_calendar();
    let date = d(2026, 2, 12);
    let logs = vec![pullups(date, "4294967295,1")];

    let view = Core::build_day_view(&cal, date, date, &logs);

    assert_eq!(view.pullups.total(), 4_294_967_296);
    assert_eq!(view.status.pullups, Status::Partial);
}

#[test]
fn test_future_day_reports_nothing() {
    let cal = default_calendar();
    let today = d(2026, 2, 12);
    let future = d(2026, 2, 14);
    let logs = vec![workout(future), steps(future, 12_000)];

    let view = Core::build_day_view(&cal, future, today, &logs);

    assert!(view.is_future);
    assert_eq!(view.status, DayStatus::uniform(Status::None));
    assert_eq!(view.logs.len(), 2);
}

#[test]
fn test_day_before_program_start_is_inactive() {
    let cal = default_calendar();
    let view = Core::build_day_view(&cal, d(2026, 2, 9), d(2026, 2, 12), &[]);

    assert!(!view.is_program_active);
    assert_eq!(view.cycle_day, 1);
}

#[test]
fn test_week_view_covers_monday_to_sunday() {
    let cal = default_calendar();
    let today = d(2026, 2, 12);
    let logs = vec![workout(d(2026, 2, 10)), workout(d(2026, 2, 17))];

    let week = Core::build_week_view(&cal, today, today, &logs);

    assert_eq!(week.len(), 7);
    assert_eq!(week[0].date, d(2026, 2, 9));
    assert_eq!(week[6].date, d(2026, 2, 15));
    assert_eq!(week[1].status.workout, Status::Done);
    assert_eq!(week[0].status.workout, Status::None);
    assert!(week[3].is_today);
    assert!(week[4].is_future);
    // recovery weekend, but in the future
    assert_eq!(week[5].status.workout, Status::None);
}

#[test]
fn test_month_view() {
    let cal = default_calendar();
    let month = Core::build_month_view(&cal, 2026, 2, d(2026, 3, 1), &[]);

    assert_eq!(month.len(), 28);
    assert_eq!(month[0].date, d(2026, 2, 1));
    assert!(month.iter().all(|v| !v.is_future));
    // weekends of the cycle are recovery days
    assert!(
        month
            .iter()
            .filter(|v| v.plan.is_recovery())
            .all(|v| v.status.workout == Status::Done)
    );

    assert!(Core::build_month_view(&cal, 2026, 13, d(2026, 3, 1), &[]).is_empty());
}
