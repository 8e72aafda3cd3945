use rfitlogger::core::add::{AddLogic, AddRequest};
use rfitlogger::core::calculator::matching::MAX_REPS_PER_SET;
use rfitlogger::core::del::DeleteLogic;
use rfitlogger::db::log::load_audit;
use rfitlogger::db::migrate::run_pending_migrations;
use rfitlogger::db::pool::DbPool;
use rfitlogger::db::queries::{load_all_logs, load_log_by_id, load_logs_between, load_logs_by_date};
use rfitlogger::errors::AppError;
use rfitlogger::models::log_entry::COMPLETED;
use rfitlogger::models::log_type::LogType;

mod common;
use common::d;

fn request(kind: LogType) -> AddRequest {
    AddRequest {
        date: d(2026, 2, 12),
        kind,
        value: None,
        rounds: None,
        sets: None,
        note: None,
    }
}

// ---------------------------------------------------------------------------
// validation
// ---------------------------------------------------------------------------

#[test]
fn test_workout_defaults_to_completed() {
    let entry = AddLogic::build_entry(&AddRequest {
        rounds: Some(4),
        note: Some("  felt strong ".into()),
        ..request(LogType::Workout)
    })
    .unwrap();

    assert_eq!(entry.value, COMPLETED);
    assert_eq!(entry.rounds, Some(4));
    assert_eq!(entry.note.as_deref(), Some("felt strong"));
    assert!(entry.is_completed_workout());
}

#[test]
fn test_negative_rounds_rejected() {
    let res = AddLogic::build_entry(&AddRequest {
        rounds: Some(-1),
        ..request(LogType::Workout)
    });
    assert!(res.is_err());
}

#[test]
fn test_steps_accept_separators() {
    let entry = AddLogic::build_entry(&AddRequest {
        value: Some("10,250".into()),
        ..request(LogType::Steps)
    })
    .unwrap();
    assert_eq!(entry.value, "10250");

    assert!(AddLogic::build_entry(&request(LogType::Steps)).is_err());
    assert!(
        AddLogic::build_entry(&AddRequest {
            value: Some("lots".into()),
            ..request(LogType::Steps)
        })
        .is_err()
    );
}

#[test]
fn test_weight_must_be_positive() {
    let entry = AddLogic::build_entry(&AddRequest {
        value: Some("201.4".into()),
        ..request(LogType::Weight)
    })
    .unwrap();
    assert_eq!(entry.value, "201.4");

    for bad in ["0", "-5", "abc", "NaN"] {
        let res = AddLogic::build_entry(&AddRequest {
            value: Some(bad.into()),
            ..request(LogType::Weight)
        });
        assert!(res.is_err(), "{bad} accepted");
    }
}

#[test]
fn test_sets_are_normalized_into_the_matching_column() {
    let entry = AddLogic::build_entry(&AddRequest {
        sets: Some(" 5, 4,3 ".into()),
        ..request(LogType::Pullup)
    })
    .unwrap();
    assert_eq!(entry.value, "5,4,3");
    assert_eq!(entry.pullup_sets.as_deref(), Some("5,4,3"));
    assert_eq!(entry.pushup_sets, None);

    // positional value works too
    let entry = AddLogic::build_entry(&AddRequest {
        value: Some("20,18".into()),
        ..request(LogType::Pushup)
    })
    .unwrap();
    assert_eq!(entry.pushup_sets.as_deref(), Some("20,18"));
    assert_eq!(entry.pullup_sets, None);
}

#[test]
fn test_oversized_sets_rejected() {
    let res = AddLogic::build_entry(&AddRequest {
        sets: Some("4294967295,1".into()),
        ..request(LogType::Pullup)
    });
    assert!(matches!(res, Err(AppError::InvalidSets(_))));

    let res = AddLogic::build_entry(&AddRequest {
        value: Some(format!("{},1", MAX_REPS_PER_SET + 1)),
        ..request(LogType::Pushup)
    });
    assert!(matches!(res, Err(AppError::InvalidSets(_))));

    let entry = AddLogic::build_entry(&AddRequest {
        sets: Some(format!("{MAX_REPS_PER_SET}")),
        ..request(LogType::Pushup)
    })
    .unwrap();
    assert_eq!(entry.pushup_sets, Some(MAX_REPS_PER_SET.to_string()));
}

#[test]
fn test_present_but_invalid_values_are_not_missing() {
    let res = AddLogic::build_entry(&AddRequest {
        rounds: Some(-2),
        ..request(LogType::Workout)
    });
    assert!(matches!(res, Err(AppError::InvalidValue(_))));

    let res = AddLogic::build_entry(&AddRequest {
        value: Some("lots".into()),
        ..request(LogType::Steps)
    });
    assert!(matches!(res, Err(AppError::InvalidValue(_))));

    let res = AddLogic::build_entry(&AddRequest {
        value: Some("-5".into()),
        ..request(LogType::Weight)
    });
    assert!(matches!(res, Err(AppError::InvalidValue(_))));

    let res = AddLogic::build_entry(&request(LogType::Weight));
    assert!(matches!(res, Err(AppError::MissingValue(_))));
}

#[test]
fn test_bad_sets_rejected() {
    let res = AddLogic::build_entry(&AddRequest {
        sets: Some("5,x".into()),
        ..request(LogType::Pullup)
    });
    assert!(matches!(res, Err(AppError::InvalidSets(_))));

    let res = AddLogic::build_entry(&AddRequest {
        sets: Some(",".into()),
        ..request(LogType::Pushup)
    });
    assert!(matches!(res, Err(AppError::InvalidSets(_))));

    assert!(AddLogic::build_entry(&request(LogType::Pullup)).is_err());
}

// ---------------------------------------------------------------------------
// storage
// ---------------------------------------------------------------------------

#[test]
fn test_add_load_and_delete() {
    let mut pool = DbPool::in_memory().unwrap();

    let pull = AddLogic::build_entry(&AddRequest {
        sets: Some("3,2".into()),
        ..request(LogType::Pullup)
    })
    .unwrap();
    let id = AddLogic::apply(&mut pool, &pull).unwrap();

    let other_day = AddLogic::build_entry(&AddRequest {
        date: d(2026, 2, 20),
        ..request(LogType::Workout)
    })
    .unwrap();
    AddLogic::apply(&mut pool, &other_day).unwrap();

    let stored = load_log_by_id(&mut pool, id).unwrap().unwrap();
    assert_eq!(stored.kind, LogType::Pullup);
    assert_eq!(stored.pullup_sets.as_deref(), Some("3,2"));
    assert_eq!(stored.date, d(2026, 2, 12));

    assert_eq!(load_all_logs(&mut pool).unwrap().len(), 2);
    assert_eq!(load_logs_by_date(&mut pool, &d(2026, 2, 12)).unwrap().len(), 1);
    assert_eq!(
        load_logs_between(&mut pool, &d(2026, 2, 9), &d(2026, 2, 15))
            .unwrap()
            .len(),
        1
    );

    let removed = DeleteLogic::apply(&mut pool, id).unwrap();
    assert_eq!(removed.id, id);
    assert!(load_log_by_id(&mut pool, id).unwrap().is_none());

    let ops: Vec<String> = load_audit(&pool.conn)
        .unwrap()
        .into_iter()
        .map(|(_, _, op, _, _)| op)
        .collect();
    assert!(ops.contains(&"add".to_string()));
    assert!(ops.contains(&"del".to_string()));
}

#[test]
fn test_delete_missing_entry() {
    let mut pool = DbPool::in_memory().unwrap();
    let res = DeleteLogic::apply(&mut pool, 42);
    assert!(matches!(res, Err(AppError::LogNotFound(42))));
}

#[test]
fn test_migrations_are_idempotent() {
    let pool = DbPool::in_memory().unwrap();
    run_pending_migrations(&pool.conn).unwrap();
    run_pending_migrations(&pool.conn).unwrap();
}
