use crate::errors::{AppError, AppResult};
use crate::utils::path::{expand_tilde, resolve_db_path};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Program anchors and storage location.
///
/// Every field has a default so an older or hand-trimmed config file still
/// loads; missing keys take the values below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    /// Fixed product timezone, as whole hours east of UTC.
    pub utc_offset_hours: i32,
    /// Days before this date are shown as "program inactive".
    pub program_start: NaiveDate,
    /// Day 1 of the 28-day cycle (a Monday keeps weeks aligned Mon-Sun).
    pub cycle_start: NaiveDate,
    pub pullup_start: NaiveDate,
    pub pushup_start: NaiveDate,
    pub weight_goal: f64,
}

fn default_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 10).unwrap_or_default()
}

fn default_cycle_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, 9).unwrap_or_default()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            utc_offset_hours: -6,
            program_start: default_start(),
            cycle_start: default_cycle_start(),
            pullup_start: default_start(),
            pushup_start: default_start(),
            weight_goal: 190.0,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rfitlogger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rfitlogger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rfitlogger.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rfitlogger.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let mut cfg: Config = serde_yaml::from_str(&content)?;
        cfg.database = expand_tilde(&cfg.database).to_string_lossy().to_string();
        cfg.validate()?;

        tracing::debug!(path = %path.display(), "configuration loaded");
        Ok(cfg)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(-12..=14).contains(&self.utc_offset_hours) {
            return Err(AppError::Config(format!(
                "utc_offset_hours must be between -12 and 14, got {}",
                self.utc_offset_hours
            )));
        }
        if !self.weight_goal.is_finite() || self.weight_goal <= 0.0 {
            return Err(AppError::Config(format!(
                "weight_goal must be a positive number, got {}",
                self.weight_goal
            )));
        }
        Ok(())
    }

    /// Initialize configuration and database files.
    /// Returns the database path that was configured.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = match custom_name {
            Some(name) => resolve_db_path(&name, &dir),
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            tracing::info!(path = %Self::config_file().display(), "config file written");
        }

        Ok(db_path)
    }
}
