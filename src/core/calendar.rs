//! Calendar and cycle math.
//!
//! Translates civil dates into positions inside the three periodic programs:
//! the 28-day main cycle and the pull-up / push-up rep ladders.
//! All "today" logic is anchored to one fixed UTC offset, never to the
//! timezone of the machine running the binary.
//!
//! Day differences use the *absolute* number of whole days between two
//! dates. A date N days before a start date therefore lands on the same
//! position as the date N days after it.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Utc};

/// Length of the main program cycle in days.
pub const CYCLE_LENGTH: u32 = 28;

/// Days in a program week.
pub const WEEK_LENGTH: u32 = 7;

/// Civil date of `instant` seen from `offset`.
pub fn civil_date_at<Tz: TimeZone>(instant: &DateTime<Tz>, offset: FixedOffset) -> NaiveDate {
    instant.with_timezone(&offset).date_naive()
}

/// Today's civil date in the product timezone.
pub fn civil_today(offset: FixedOffset) -> NaiveDate {
    civil_date_at(&Utc::now(), offset)
}

/// Whole days between two dates, ignoring direction.
pub fn whole_days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    a.signed_duration_since(b).num_days().unsigned_abs()
}

/// Position (1..=28) of `date` in the main cycle started on `cycle_start`.
pub fn main_cycle_day(date: NaiveDate, cycle_start: NaiveDate) -> u32 {
    (whole_days_between(date, cycle_start) % u64::from(CYCLE_LENGTH)) as u32 + 1
}

/// Week (1..=4) of a main cycle day.
pub fn cycle_week(main_cycle_day: u32) -> u32 {
    main_cycle_day.div_ceil(WEEK_LENGTH)
}

/// 1-indexed day of a ladder program; the start date itself is day 1.
pub fn ladder_program_day(start: NaiveDate, target: NaiveDate) -> u32 {
    let days = whole_days_between(target, start).saturating_add(1);
    u32::try_from(days).unwrap_or(u32::MAX)
}

/// Monday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.weekday().num_days_from_monday()))
}

/// The seven dates from `week_start` to the following Sunday.
pub fn week_dates(week_start: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| week_start + Duration::days(i as i64))
}

/// Every date of a calendar month; empty for an invalid month.
pub fn month_dates(year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    first
        .iter_days()
        .take_while(|d| d.month() == month)
        .collect()
}

/// Program anchors injected from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramCalendar {
    pub offset: FixedOffset,
    /// First day counted as "program active".
    pub program_start: NaiveDate,
    /// Day 1 of the 28-day cycle.
    pub cycle_start: NaiveDate,
    pub pullup_start: NaiveDate,
    pub pushup_start: NaiveDate,
}

impl ProgramCalendar {
    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        let offset = FixedOffset::east_opt(cfg.utc_offset_hours * 3600).ok_or_else(|| {
            AppError::Config(format!(
                "utc_offset_hours out of range: {}",
                cfg.utc_offset_hours
            ))
        })?;

        Ok(Self {
            offset,
            program_start: cfg.program_start,
            cycle_start: cfg.cycle_start,
            pullup_start: cfg.pullup_start,
            pushup_start: cfg.pushup_start,
        })
    }

    pub fn today(&self) -> NaiveDate {
        civil_today(self.offset)
    }

    pub fn cycle_day(&self, date: NaiveDate) -> u32 {
        main_cycle_day(date, self.cycle_start)
    }

    pub fn pullup_day(&self, date: NaiveDate) -> u32 {
        ladder_program_day(self.pullup_start, date)
    }

    pub fn pushup_day(&self, date: NaiveDate) -> u32 {
        ladder_program_day(self.pushup_start, date)
    }

    pub fn is_program_active(&self, date: NaiveDate) -> bool {
        date >= self.program_start
    }
}
