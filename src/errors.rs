//! Unified application error type.
//! The core (calendar, program tables, status engine) is total and never
//! returns errors; AppError covers the boundary: parsing user input,
//! SQLite storage, configuration and output serialization.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid month format (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid set list (expected comma-separated reps, e.g. 5,4,3): {0}")]
    InvalidSets(String),

    #[error("Invalid log type: {0}")]
    InvalidLogType(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("Missing value: {0}")]
    MissingValue(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No log entry with id {0}")]
    LogNotFound(i64),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Output errors
    // ---------------------------
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;
