//! Program logic.
//!
//! `calendar`, `program`, `calculator`, `logic` and `metrics` are pure:
//! they never touch the database, the terminal or the clock (apart from
//! `calendar::civil_today`). `add`, `del` and `log` are the command-level
//! operations that combine them with storage.

pub mod add;
pub mod calculator;
pub mod calendar;
pub mod del;
pub mod log;
pub mod logic;
pub mod metrics;
pub mod program;
