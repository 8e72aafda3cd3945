//! Static program tables.

pub mod ladder;
pub mod main_cycle;

pub use ladder::{
    PULLUP_PROGRAM, PUSHUP_PROGRAM, pullup_plan_for_program_day, pushup_plan_for_program_day,
};
pub use main_cycle::{plan_for_cycle_day, program};
