use rfitlogger::core::program::{
    PULLUP_PROGRAM, PUSHUP_PROGRAM, plan_for_cycle_day, program, pullup_plan_for_program_day,
    pushup_plan_for_program_day,
};
use rfitlogger::models::day_plan::{RoundsAssessment, WorkoutType};

#[test]
fn test_program_has_28_numbered_days() {
    let plans = program();

    assert_eq!(plans.len(), 28);
    for (i, p) in plans.iter().enumerate() {
        assert_eq!(p.day_number as usize, i + 1);
    }
}

#[test]
fn test_weekends_are_recovery_days() {
    for week in 0..4 {
        assert!(plan_for_cycle_day(week * 7 + 6).is_recovery());
        assert!(plan_for_cycle_day(week * 7 + 7).is_recovery());
        assert!(!plan_for_cycle_day(week * 7 + 1).is_recovery());
    }
}

#[test]
fn test_fourth_week_introduces_press_days() {
    assert!(
        program()[..21]
            .iter()
            .all(|p| p.kind != WorkoutType::HypertrophyPress)
    );
    assert!(
        program()[21..]
            .iter()
            .any(|p| p.kind == WorkoutType::HypertrophyPress)
    );
}

#[test]
fn test_plan_for_cycle_day_clamps() {
    assert_eq!(plan_for_cycle_day(0).day_number, 1);
    assert_eq!(plan_for_cycle_day(29).day_number, 28);
    assert_eq!(plan_for_cycle_day(u32::MAX).day_number, 28);
}

#[test]
fn test_rounds_assessment() {
    let day1 = plan_for_cycle_day(1);
    assert_eq!(day1.rounds_range, Some((3, 5)));
    assert_eq!(day1.assess_rounds(2), RoundsAssessment::Below);
    assert_eq!(day1.assess_rounds(4), RoundsAssessment::Within);
    assert_eq!(day1.assess_rounds(6), RoundsAssessment::Above);

    let walk = plan_for_cycle_day(2);
    assert_eq!(walk.assess_rounds(10), RoundsAssessment::Unguided);
}

#[test]
fn test_pullup_phase_boundary() {
    let day12 = pullup_plan_for_program_day(12);
    assert!(day12.rest);
    assert_eq!(day12.program, "3RM");

    let day13 = pullup_plan_for_program_day(13);
    assert_eq!(day13.program, "5RM");
    assert_eq!(day13.day, 1);
    assert_eq!(day13.program_day, 13);
    assert!(!day13.rest);
}

#[test]
fn test_pullup_first_day() {
    let day1 = pullup_plan_for_program_day(1);
    assert_eq!(day1.program, "3RM");
    assert_eq!(day1.sets, &[3, 2, 1, 1]);
    assert_eq!(day1.total_reps(), 7);
    // day 0 is read as day 1
    assert_eq!(pullup_plan_for_program_day(0), day1);
}

#[test]
fn test_pullup_retest_is_terminal() {
    let last = pullup_plan_for_program_day(42);
    assert_eq!(last.program, "5RM");

    for n in [43, 60, 365] {
        let day = pullup_plan_for_program_day(n);
        assert_eq!(day.program, "RETEST");
        assert!(day.rest);
        assert!(day.sets.is_empty());
    }
}

#[test]
fn test_pushup_phases_and_maintenance() {
    assert_eq!(pushup_plan_for_program_day(12).program, "Phase 1");
    assert_eq!(pushup_plan_for_program_day(13).program, "Phase 2");
    assert_eq!(pushup_plan_for_program_day(30).program, "Phase 2");

    let maintain = pushup_plan_for_program_day(31);
    assert_eq!(maintain.program, "MAINTAIN");
    assert!(!maintain.rest);
    assert_eq!(maintain.sets, &[25, 22, 20, 18, 15]);
    assert_eq!(pushup_plan_for_program_day(1000).sets, maintain.sets);
}

#[test]
fn test_ladder_phase_lengths() {
    assert_eq!(PULLUP_PROGRAM.phase_days(), 42);
    assert_eq!(PUSHUP_PROGRAM.phase_days(), 30);
}

#[test]
fn test_rest_days_have_no_sets() {
    for n in 1..=PULLUP_PROGRAM.phase_days() {
        let day = PULLUP_PROGRAM.day(n);
        assert_eq!(day.rest, day.sets.is_empty(), "pull-up day {n}");
    }
    for n in 1..=PUSHUP_PROGRAM.phase_days() {
        let day = PUSHUP_PROGRAM.day(n);
        assert_eq!(day.rest, day.sets.is_empty(), "push-up day {n}");
    }
}
