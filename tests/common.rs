#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use rfitlogger::config::Config;
use rfitlogger::core::calendar::ProgramCalendar;
use rfitlogger::models::log_entry::LogEntry;
use rfitlogger::models::log_type::LogType;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with HOME pointed at an empty temp dir so no user
/// configuration leaks into the run.
pub fn rfl(name: &str) -> Command {
    let mut home: PathBuf = env::temp_dir();
    home.push(format!("{}_rfitlogger_home", name));
    fs::create_dir_all(&home).ok();

    let mut cmd = cargo_bin_cmd!("rfitlogger");
    cmd.env("HOME", &home).env_remove("RUST_LOG");
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rfitlogger.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Initialize DB through the CLI (no config file written)
pub fn init_db(name: &str, db_path: &str) {
    rfl(name)
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// Calendar built from the default configuration.
pub fn default_calendar() -> ProgramCalendar {
    ProgramCalendar::from_config(&Config::default()).expect("default config is valid")
}

pub fn workout(date: NaiveDate) -> LogEntry {
    LogEntry::new(date, LogType::Workout, "COMPLETED")
}

pub fn pullups(date: NaiveDate, sets: &str) -> LogEntry {
    LogEntry::new(date, LogType::Pullup, sets).with_sets(sets)
}

pub fn pushups(date: NaiveDate, sets: &str) -> LogEntry {
    LogEntry::new(date, LogType::Pushup, sets).with_sets(sets)
}

pub fn steps(date: NaiveDate, count: u32) -> LogEntry {
    LogEntry::new(date, LogType::Steps, count.to_string())
}

pub fn weight(date: NaiveDate, w: &str) -> LogEntry {
    LogEntry::new(date, LogType::Weight, w)
}
