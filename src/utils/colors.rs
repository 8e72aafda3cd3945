/// ANSI color helper utilities for terminal output.
use crate::models::day_plan::WorkoutType;
use crate::models::status::Status;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";

/// done → green, partial → yellow, none → grey
pub fn color_for_status(status: Status) -> &'static str {
    match status {
        Status::Done => GREEN,
        Status::Partial => YELLOW,
        Status::None => GREY,
    }
}

pub fn color_for_workout(kind: WorkoutType) -> &'static str {
    match kind {
        WorkoutType::AbComplex => BLUE,
        WorkoutType::WalkMovement => YELLOW,
        WorkoutType::HypertrophyPress => MAGENTA,
        WorkoutType::Ruck => GREEN,
        WorkoutType::Recovery => GREY,
    }
}

/// Weight delta colour: losing is green, gaining red.
pub fn color_for_weight_change(delta: f64) -> &'static str {
    if delta < 0.0 {
        GREEN
    } else if delta > 0.0 {
        RED
    } else {
        RESET
    }
}

pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
