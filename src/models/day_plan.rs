use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkoutType {
    AbComplex,
    WalkMovement,
    Ruck,
    HypertrophyPress,
    Recovery,
}

impl WorkoutType {
    /// Short label used in calendar cells.
    pub fn short_label(&self) -> &'static str {
        match self {
            WorkoutType::AbComplex => "AB",
            WorkoutType::WalkMovement => "Walk",
            WorkoutType::Ruck => "Ruck",
            WorkoutType::HypertrophyPress => "Press",
            WorkoutType::Recovery => "Rest",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CarryType {
    Farmer,
    Suitcase,
    Racked,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Exercise {
    pub name: &'static str,
    pub reps: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'static str>,
}

/// Prescribed workout for one position (1–28) of the main cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayPlan {
    pub day_number: u32,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    pub title: &'static str,
    pub exercises: &'static [Exercise],
    pub carries: Option<&'static str>,
    pub carry_type: Option<CarryType>,
    pub steps_goal: u32,
    pub notes: &'static str,
    pub rounds_range: Option<(u32, u32)>,
    pub warmup: &'static [&'static str],
    pub cooldown: &'static [&'static str],
}

/// How a logged round count compares to a plan's rounds range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundsAssessment {
    Below,
    Within,
    Above,
    /// The plan has no rounds range (walk, ruck, recovery days).
    Unguided,
}

impl DayPlan {
    pub fn is_recovery(&self) -> bool {
        self.kind == WorkoutType::Recovery
    }

    pub fn assess_rounds(&self, rounds: u32) -> RoundsAssessment {
        match self.rounds_range {
            None => RoundsAssessment::Unguided,
            Some((min, _)) if rounds < min => RoundsAssessment::Below,
            Some((_, max)) if rounds > max => RoundsAssessment::Above,
            Some(_) => RoundsAssessment::Within,
        }
    }
}
