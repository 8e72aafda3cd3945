use serde::Serialize;

/// One day's prescription in a pull-up or push-up ladder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepLadderDay {
    /// Phase tag ("3RM", "5RM", "RETEST", "Phase 1", "Phase 2", "MAINTAIN").
    pub program: &'static str,
    /// Day within the active phase; the overall program day once every phase is done.
    pub day: u32,
    /// Day since the ladder's start date (start date = 1).
    pub program_day: u32,
    pub sets: &'static [u32],
    pub rest: bool,
}

impl RepLadderDay {
    pub fn total_reps(&self) -> u64 {
        self.sets.iter().map(|r| u64::from(*r)).sum()
    }
}
