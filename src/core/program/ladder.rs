//! Rep ladder programs (pull-ups and push-ups).
//!
//! A ladder is a sequence of phases followed by a final state. The active
//! phase is never stored: it is recomputed from the program day every time.

use crate::models::ladder::RepLadderDay;

/// One day of a phase table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderStep {
    pub sets: &'static [u32],
    pub rest: bool,
}

const fn work(sets: &'static [u32]) -> LadderStep {
    LadderStep { sets, rest: false }
}

const REST: LadderStep = LadderStep {
    sets: &[],
    rest: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderPhase {
    pub tag: &'static str,
    pub steps: &'static [LadderStep],
}

/// What follows the last phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterPhases {
    /// Stop and wait for the start date to be reset.
    Retest { tag: &'static str },
    /// Keep prescribing the same sets indefinitely.
    Maintain {
        tag: &'static str,
        sets: &'static [u32],
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LadderProgram {
    pub name: &'static str,
    pub phases: &'static [LadderPhase],
    pub after: AfterPhases,
}

impl LadderProgram {
    /// Total number of days covered by the phase tables.
    pub fn phase_days(&self) -> u32 {
        self.phases.iter().map(|p| p.steps.len() as u32).sum()
    }

    /// Prescription for a 1-indexed program day (0 is read as day 1).
    pub fn day(&self, program_day: u32) -> RepLadderDay {
        let program_day = program_day.max(1);
        let mut day_in_phase = program_day;

        for phase in self.phases {
            let len = phase.steps.len() as u32;
            if day_in_phase <= len {
                let step = phase.steps[(day_in_phase - 1) as usize];
                return RepLadderDay {
                    program: phase.tag,
                    day: day_in_phase,
                    program_day,
                    sets: step.sets,
                    rest: step.rest,
                };
            }
            day_in_phase -= len;
        }

        match self.after {
            AfterPhases::Retest { tag } => RepLadderDay {
                program: tag,
                day: program_day,
                program_day,
                sets: &[],
                rest: true,
            },
            AfterPhases::Maintain { tag, sets } => RepLadderDay {
                program: tag,
                day: program_day,
                program_day,
                sets,
                rest: false,
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Fighter pull-up program
// ---------------------------------------------------------------------------

const FIGHTER_3RM: &[LadderStep] = &[
    work(&[3, 2, 1, 1]),
    work(&[3, 2, 1, 1]),
    work(&[3, 2, 2, 1]),
    work(&[3, 3, 2, 1]),
    work(&[4, 3, 2, 1]),
    REST,
    work(&[4, 3, 2, 1, 1]),
    work(&[4, 3, 2, 2, 1]),
    work(&[4, 3, 3, 2, 1]),
    work(&[4, 4, 3, 2, 1]),
    work(&[5, 4, 3, 2, 1]),
    REST,
];

const FIGHTER_5RM: &[LadderStep] = &[
    work(&[5, 4, 3, 2, 1]),
    work(&[5, 4, 3, 2, 2]),
    work(&[5, 4, 3, 3, 2]),
    work(&[5, 4, 4, 3, 2]),
    work(&[5, 5, 4, 3, 2]),
    REST,
    work(&[6, 5, 4, 3, 2]),
    work(&[6, 5, 4, 3, 3]),
    work(&[6, 5, 4, 4, 3]),
    work(&[6, 5, 5, 4, 3]),
    work(&[6, 6, 5, 4, 3]),
    REST,
    work(&[7, 6, 5, 4, 3]),
    work(&[7, 6, 5, 4, 4]),
    work(&[7, 6, 5, 5, 4]),
    work(&[7, 6, 6, 5, 4]),
    work(&[7, 7, 6, 5, 4]),
    REST,
    work(&[8, 7, 6, 5, 4]),
    work(&[8, 7, 6, 5, 5]),
    work(&[8, 7, 6, 6, 5]),
    work(&[8, 7, 7, 6, 5]),
    work(&[8, 8, 7, 6, 5]),
    REST,
    work(&[9, 8, 7, 6, 5]),
    work(&[9, 8, 7, 6, 6]),
    work(&[9, 8, 7, 7, 6]),
    work(&[9, 8, 8, 7, 6]),
    work(&[9, 9, 8, 7, 6]),
    REST,
];

pub const PULLUP_PROGRAM: LadderProgram = LadderProgram {
    name: "Fighter Pull-up",
    phases: &[
        LadderPhase {
            tag: "3RM",
            steps: FIGHTER_3RM,
        },
        LadderPhase {
            tag: "5RM",
            steps: FIGHTER_5RM,
        },
    ],
    after: AfterPhases::Retest { tag: "RETEST" },
};

// ---------------------------------------------------------------------------
// Push-up grease-the-groove program
// ---------------------------------------------------------------------------

const PUSHUP_PHASE1: &[LadderStep] = &[
    work(&[15, 12, 10, 8]),
    work(&[15, 12, 10, 10]),
    work(&[15, 13, 12, 10]),
    work(&[16, 14, 12, 10]),
    work(&[18, 15, 12, 10]),
    REST,
    work(&[18, 15, 12, 10, 8]),
    work(&[18, 15, 13, 10, 8]),
    work(&[18, 16, 14, 12, 8]),
    work(&[20, 16, 14, 12, 10]),
    work(&[20, 18, 15, 12, 10]),
    REST,
];

const PUSHUP_PHASE2: &[LadderStep] = &[
    work(&[20, 18, 15, 12, 10]),
    work(&[20, 18, 15, 12, 12]),
    work(&[20, 18, 16, 14, 12]),
    work(&[22, 20, 16, 14, 12]),
    work(&[22, 20, 18, 15, 12]),
    REST,
    work(&[24, 20, 18, 15, 12]),
    work(&[24, 22, 18, 15, 12]),
    work(&[24, 22, 20, 16, 14]),
    work(&[25, 22, 20, 18, 14]),
    work(&[25, 22, 20, 18, 15]),
    REST,
    work(&[25, 22, 20, 18, 16]),
    work(&[25, 24, 20, 18, 16]),
    work(&[25, 24, 22, 20, 16]),
    work(&[28, 24, 22, 20, 16]),
    work(&[28, 25, 22, 20, 18]),
    REST,
];

pub const PUSHUP_PROGRAM: LadderProgram = LadderProgram {
    name: "Fighter Push-up",
    phases: &[
        LadderPhase {
            tag: "Phase 1",
            steps: PUSHUP_PHASE1,
        },
        LadderPhase {
            tag: "Phase 2",
            steps: PUSHUP_PHASE2,
        },
    ],
    after: AfterPhases::Maintain {
        tag: "MAINTAIN",
        sets: &[25, 22, 20, 18, 15],
    },
};

pub fn pullup_plan_for_program_day(program_day: u32) -> RepLadderDay {
    PULLUP_PROGRAM.day(program_day)
}

pub fn pushup_plan_for_program_day(program_day: u32) -> RepLadderDay {
    PUSHUP_PROGRAM.day(program_day)
}
