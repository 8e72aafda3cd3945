//! The 28-day kettlebell cycle.
//!
//! Weeks 1-3 repeat the base template; week 4 switches to the hypertrophy
//! template.

use crate::core::calendar::{CYCLE_LENGTH, WEEK_LENGTH};
use crate::models::day_plan::{CarryType, DayPlan, Exercise, WorkoutType};
use std::sync::LazyLock;

const DAILY_STEPS: u32 = 10_000;

const STANDARD_WARMUP: &[&str] = &["Hang from bar", "Deep squat sit", "Short brisk walk"];

const STANDARD_COOLDOWN: &[&str] = &["Cool down walk: 15–30 minutes"];

const AB_COMPLEX: &[Exercise] = &[
    Exercise {
        name: "Double KB Clean",
        reps: "2",
        notes: None,
    },
    Exercise {
        name: "Double KB Press",
        reps: "1",
        notes: None,
    },
    Exercise {
        name: "Front Squat",
        reps: "3",
        notes: None,
    },
];

const PRESS_LADDER_X3: &[Exercise] = &[Exercise {
    name: "Double KB Press Ladder",
    reps: "2–3–5–10",
    notes: Some(
        "Repeat up to 3 times. Feel free to adjust presses, dropping the 10s or changing loads, as appropriate.",
    ),
}];

const PRESS_LADDER_X5: &[Exercise] = &[Exercise {
    name: "Double KB Press Ladder",
    reps: "2–3–5–10",
    notes: Some("Repeat up to 5 times."),
}];

const FARMER_CARRIES: &str = "Farmer Carries: 3 x 40 yards";
const SUITCASE_CARRIES: &str = "Suitcase Carries: Down with one hand; back with the other, 2–4 rounds";
const RACKED_CARRIES: &str = "Racked Carries: 3 x 40 yards";

const AB_TITLE: &str = "Armor Building Complex + Carries";
const WALK_TITLE: &str = "Walk + Movement Only";
const RUCK_TITLE: &str = "Optional Ruck";
const REBUILD_TITLE: &str = "Rebuild + Reflection";
const PRESS_TITLE: &str = "High Rep Pressing + Carries";

const BASE_REBUILD_NOTES: &str = "Active recovery or Total Off Day but still get those steps in! Reflect: Did I walk? Did I train? Did I eat like an adult? This is designed, originally, for someone who has very busy Monday mornings. Feel free to add more rounds each week, but strive to keep the calories in check and the steps before chasing gains in the weight room.";

const WEEK4_REBUILD_NOTES: &str = "Active recovery or total off day, but still hit your step count. Reflect: Did I walk? Did I train? Did I eat like an adult? Strive to dial in daily calories, the walking, and the lifting program. If you feel the need to \"add more,\" first see if you are actually eating your calorie numbers and getting in the steps. You can NOT out train bad choices in food consumption!";

const fn training_day(
    kind: WorkoutType,
    title: &'static str,
    exercises: &'static [Exercise],
    carries: &'static str,
    carry_type: CarryType,
    notes: &'static str,
    rounds_range: (u32, u32),
) -> DayPlan {
    DayPlan {
        day_number: 0,
        kind,
        title,
        exercises,
        carries: Some(carries),
        carry_type: Some(carry_type),
        steps_goal: DAILY_STEPS,
        notes,
        rounds_range: Some(rounds_range),
        warmup: STANDARD_WARMUP,
        cooldown: STANDARD_COOLDOWN,
    }
}

const fn movement_day(kind: WorkoutType, title: &'static str, notes: &'static str) -> DayPlan {
    DayPlan {
        day_number: 0,
        kind,
        title,
        exercises: &[],
        carries: None,
        carry_type: None,
        steps_goal: DAILY_STEPS,
        notes,
        rounds_range: None,
        warmup: &[],
        cooldown: &[],
    }
}

const WEEK_BASE: [DayPlan; 7] = [
    training_day(
        WorkoutType::AbComplex,
        AB_TITLE,
        AB_COMPLEX,
        FARMER_CARRIES,
        CarryType::Farmer,
        "Strive for 10,000 steps a day.",
        (3, 5),
    ),
    movement_day(
        WorkoutType::WalkMovement,
        WALK_TITLE,
        "Walk: 45–60 minutes, ideally fasted. Mobility: Original Strength, foam rolling, floor work. Optional: Light swings or band work. Strive for 10,000 steps a day. This is the daily total, strive to get 3,000 to 5,000 in that morning walk.",
    ),
    training_day(
        WorkoutType::AbComplex,
        AB_TITLE,
        AB_COMPLEX,
        SUITCASE_CARRIES,
        CarryType::Suitcase,
        "Strive for 10,000 steps a day.",
        (5, 10),
    ),
    movement_day(
        WorkoutType::Ruck,
        RUCK_TITLE,
        "Walk for 30–45 minutes, focus on posture and breathing. Strive for 10,000 steps a day.",
    ),
    training_day(
        WorkoutType::AbComplex,
        AB_TITLE,
        AB_COMPLEX,
        RACKED_CARRIES,
        CarryType::Racked,
        "Strive for 10,000 steps a day.",
        (5, 10),
    ),
    movement_day(WorkoutType::Recovery, REBUILD_TITLE, BASE_REBUILD_NOTES),
    movement_day(WorkoutType::Recovery, REBUILD_TITLE, BASE_REBUILD_NOTES),
];

const WEEK4_TEMPLATE: [DayPlan; 7] = [
    training_day(
        WorkoutType::HypertrophyPress,
        PRESS_TITLE,
        PRESS_LADDER_X3,
        FARMER_CARRIES,
        CarryType::Farmer,
        "Daily goal: 10,000 steps.",
        (1, 3),
    ),
    movement_day(
        WorkoutType::WalkMovement,
        WALK_TITLE,
        "Walk: 45–60 minutes, ideally fasted. Mobility: Original Strength, foam rolling, floor work. Optional: Light swings or band work. Daily goal: 10,000 steps.",
    ),
    training_day(
        WorkoutType::AbComplex,
        AB_TITLE,
        AB_COMPLEX,
        RACKED_CARRIES,
        CarryType::Racked,
        "Repeat 10–30 rounds as appropriate. Daily goal: 10,000 steps.",
        (10, 30),
    ),
    movement_day(
        WorkoutType::Ruck,
        RUCK_TITLE,
        "Light pack (20–30 lbs). Walk: 30–45 minutes, focus on posture and breathing. Daily goal: 10,000 steps.",
    ),
    training_day(
        WorkoutType::HypertrophyPress,
        PRESS_TITLE,
        PRESS_LADDER_X5,
        SUITCASE_CARRIES,
        CarryType::Suitcase,
        "Daily goal: 10,000 steps.",
        (1, 5),
    ),
    movement_day(WorkoutType::Recovery, REBUILD_TITLE, WEEK4_REBUILD_NOTES),
    movement_day(WorkoutType::Recovery, REBUILD_TITLE, WEEK4_REBUILD_NOTES),
];

static PROGRAM: LazyLock<Vec<DayPlan>> = LazyLock::new(|| {
    (0..CYCLE_LENGTH / WEEK_LENGTH)
        .flat_map(|week| {
            let template = if week < 3 { &WEEK_BASE } else { &WEEK4_TEMPLATE };
            template.iter().enumerate().map(move |(d, day)| DayPlan {
                day_number: week * WEEK_LENGTH + d as u32 + 1,
                ..day.clone()
            })
        })
        .collect()
});

/// The full 28-day table, ordered by day number.
pub fn program() -> &'static [DayPlan] {
    &PROGRAM
}

/// Plan for a main cycle day; out-of-range days are clamped to 1..=28.
pub fn plan_for_cycle_day(cycle_day: u32) -> &'static DayPlan {
    let idx = cycle_day.clamp(1, CYCLE_LENGTH) - 1;
    &PROGRAM[idx as usize]
}
