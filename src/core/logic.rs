use crate::core::calculator::{compute_day_status, matching};
use crate::core::calendar::{self, ProgramCalendar};
use crate::core::program;
use crate::models::day_view::{DayView, SetProgress};
use crate::models::ladder::RepLadderDay;
use crate::models::log_entry::LogEntry;
use crate::models::log_type::LogType;
use crate::models::status::{DayStatus, Status};
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Assembles the read-only view of `date`.
    ///
    /// `logs` may hold entries of any date; only those of `date` are used.
    pub fn build_day_view(
        cal: &ProgramCalendar,
        date: NaiveDate,
        today: NaiveDate,
        logs: &[LogEntry],
    ) -> DayView {
        let cycle_day = cal.cycle_day(date);
        let plan = program::plan_for_cycle_day(cycle_day);
        let pullup_day = program::pullup_plan_for_program_day(cal.pullup_day(date));
        let pushup_day = program::pushup_plan_for_program_day(cal.pushup_day(date));

        let day_logs: Vec<LogEntry> = logs.iter().filter(|l| l.date == date).cloned().collect();

        let is_future = date > today;
        let status = if is_future {
            DayStatus::uniform(Status::None)
        } else {
            compute_day_status(&day_logs, plan, &pullup_day, &pushup_day)
        };

        let pullups = set_progress(&day_logs, LogType::Pullup, &pullup_day);
        let pushups = set_progress(&day_logs, LogType::Pushup, &pushup_day);

        tracing::debug!(
            %date,
            cycle_day,
            pullup = pullup_day.program,
            pushup = pushup_day.program,
            "built day view"
        );

        DayView {
            date,
            cycle_day,
            cycle_week: calendar::cycle_week(cycle_day),
            plan,
            pullup_day,
            pushup_day,
            logs: day_logs,
            pullups,
            pushups,
            status,
            is_future,
            is_today: date == today,
            is_program_active: cal.is_program_active(date),
        }
    }

    /// Monday-to-Sunday views of the week containing `date`.
    pub fn build_week_view(
        cal: &ProgramCalendar,
        date: NaiveDate,
        today: NaiveDate,
        logs: &[LogEntry],
    ) -> Vec<DayView> {
        calendar::week_dates(calendar::week_start(date))
            .into_iter()
            .map(|d| Self::build_day_view(cal, d, today, logs))
            .collect()
    }

    /// Views of every day of a month; empty for an invalid month.
    pub fn build_month_view(
        cal: &ProgramCalendar,
        year: i32,
        month: u32,
        today: NaiveDate,
        logs: &[LogEntry],
    ) -> Vec<DayView> {
        calendar::month_dates(year, month)
            .into_iter()
            .map(|d| Self::build_day_view(cal, d, today, logs))
            .collect()
    }
}

fn set_progress(day_logs: &[LogEntry], kind: LogType, ladder: &RepLadderDay) -> SetProgress {
    let logged = matching::logged_sets(day_logs, kind);
    let completed = matching::match_completed_indices(ladder.sets, &logged);
    SetProgress { logged, completed }
}
