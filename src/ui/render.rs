//! Human-readable rendering of day views, calendars, metrics and tables.

use crate::core::calculator::overall_status;
use crate::core::metrics::ProgressMetrics;
use crate::core::program::ladder::LadderProgram;
use crate::models::day_plan::{DayPlan, RoundsAssessment};
use crate::models::day_view::{DayView, SetProgress};
use crate::models::ladder::RepLadderDay;
use crate::models::log_type::LogType;
use crate::models::status::{Metric, Status};
use crate::ui::messages::header;
use crate::utils::colors::{GREY, color_for_weight_change, color_for_workout, paint};
use crate::utils::date::week_label;
use crate::utils::formatting::{bold, italic, render_sets, status_glyph, thousands};
use crate::utils::table::{Column, Table};
use chrono::Datelike;

const WRAP_WIDTH: usize = 78;

const WEEKDAYS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

fn wrapped(text: &str, indent: &str) -> String {
    let opts = textwrap::Options::new(WRAP_WIDTH)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, opts)
}

pub fn print_plan(plan: &DayPlan) {
    println!(
        "{} {}",
        paint(color_for_workout(plan.kind), &format!("[{}]", plan.kind.short_label())),
        bold(plan.title)
    );

    if !plan.warmup.is_empty() {
        println!("  Warm-up: {}", plan.warmup.join(", "));
    }
    for ex in plan.exercises {
        println!("  • {} × {}", ex.name, ex.reps);
        if let Some(notes) = ex.notes {
            println!("{}", wrapped(notes, "      "));
        }
    }
    if let Some(carries) = plan.carries {
        println!("  • {}", carries);
    }
    if let Some((min, max)) = plan.rounds_range {
        println!("  Rounds: {}–{}", min, max);
    }
    if !plan.cooldown.is_empty() {
        println!("  Cool-down: {}", plan.cooldown.join(", "));
    }
    println!("  Steps goal: {}", thousands(u64::from(plan.steps_goal)));
    println!("{}", italic(&wrapped(plan.notes, "  ")));
}

fn print_ladder(label: &str, ladder: &RepLadderDay, progress: &SetProgress) {
    let head = format!(
        "{label}: {} day {} (program day {})",
        ladder.program, ladder.day, ladder.program_day
    );
    if ladder.rest {
        println!("{head} — {}", paint(GREY, "rest"));
        return;
    }

    println!(
        "{head} — sets {} ({} reps)",
        render_sets(ladder.sets, &progress.completed),
        ladder.total_reps()
    );
    if !progress.logged.is_empty() {
        let logged: Vec<String> = progress.logged.iter().map(u32::to_string).collect();
        println!("  logged: {} ({} reps)", logged.join(" "), progress.total());
    }
}

pub fn print_day(view: &DayView) {
    let mut title = format!(
        "{} ({}) — cycle day {}, week {}",
        view.date,
        view.date.format("%a"),
        view.cycle_day,
        view.cycle_week
    );
    if view.is_today {
        title.push_str(" — today");
    }
    header(&title);

    if !view.is_program_active {
        println!("{}", paint(GREY, "Program not started yet."));
    }

    println!();
    print_plan(view.plan);
    println!();
    print_ladder("Pull-ups", &view.pullup_day, &view.pullups);
    print_ladder("Push-ups", &view.pushup_day, &view.pushups);
    println!();

    let status_line: Vec<String> = view
        .status
        .iter()
        .map(|(m, s)| format!("{} {}", status_glyph(s), m.label()))
        .collect();
    println!("Status: {}", status_line.join("  "));

    if view.logs.is_empty() {
        println!("{}", paint(GREY, "No entries."));
        return;
    }

    println!("\nEntries:");
    for log in &view.logs {
        let mut line = format!("  #{:<4} {:<8} {}", log.id, log.kind.to_db_str(), log.value);
        if log.kind == LogType::Workout
            && let Some(r) = log.rounds
        {
            line.push_str(&format!(" ({} rounds)", r));
        }
        if let Some(note) = &log.note {
            line.push_str(&format!(" — {}", italic(note)));
        }
        println!("{line}");
    }
}

pub fn print_week(views: &[DayView]) {
    let (Some(first), Some(last)) = (views.first(), views.last()) else {
        return;
    };
    println!("{}\n", bold(&week_label(first.date, last.date)));

    let mut columns = vec![
        Column::new("Date", 10),
        Column::new("Day", 3),
        Column::new("Cyc", 3),
        Column::new("Plan", 5),
    ];
    columns.extend(Metric::ALL.iter().map(|m| Column::new(m.label(), 5)));
    columns.push(Column::new("All", 3));

    let mut table = Table::new(columns);
    for v in views {
        let mut date = v.date.to_string();
        if v.is_today {
            date = bold(&date);
        }
        let mut row = vec![
            date,
            v.date.format("%a").to_string(),
            v.cycle_day.to_string(),
            paint(color_for_workout(v.plan.kind), v.plan.kind.short_label()),
        ];
        if v.is_future {
            row.extend(Metric::ALL.iter().map(|_| paint(GREY, "-")));
            row.push(paint(GREY, "-"));
        } else {
            row.extend(v.status.iter().map(|(_, s)| status_glyph(s)));
            row.push(status_glyph(overall_status(&v.status)));
        }
        table.add_row(row);
    }

    print!("{}", table.render());
}

pub fn print_month(views: &[DayView]) {
    let Some(first) = views.first() else {
        return;
    };
    println!("{}\n", bold(&first.date.format("%B %Y").to_string()));
    println!("{}", WEEKDAYS.map(|d| format!("{d:<6}")).concat());

    let lead = first.date.weekday().num_days_from_monday() as usize;
    let mut cells: Vec<String> = vec![" ".repeat(6); lead];
    cells.extend(views.iter().map(month_cell));

    for week in cells.chunks(7) {
        println!("{}", week.concat());
    }
}

fn month_cell(v: &DayView) -> String {
    let glyph = if v.is_future || !v.is_program_active {
        paint(GREY, "·")
    } else {
        status_glyph(overall_status(&v.status))
    };
    let day = format!("{:>2}", v.date.day());
    let day = if v.is_today { bold(&day) } else { day };
    format!("{day} {glyph}  ")
}

pub fn print_metrics(m: &ProgressMetrics, weight_goal: f64) {
    println!("{}", bold("Progress"));
    println!("  Workouts completed : {}", m.total_workouts);
    println!("  Current streak     : {} day(s)", m.streak);
    println!("  Average rounds     : {:.1}", m.average_rounds);
    println!("  At prescription    : {}%", m.prescribed_pct);
    println!("  Lifetime pull-ups  : {}", m.lifetime_pullups);
    println!("  Lifetime push-ups  : {}", m.lifetime_pushups);

    match (m.latest_weight, m.weight_change) {
        (Some(latest), Some(change)) => {
            println!(
                "  Weight             : {:.1} ({} since start)",
                latest,
                paint(color_for_weight_change(change), &format!("{:+.1}", change))
            );
            if let Some(to_goal) = m.to_goal {
                println!("  To goal ({:.0})     : {:+.1}", weight_goal, to_goal);
            }
        }
        _ => println!("  Weight             : {}", paint(GREY, "no entries")),
    }

    if !m.recent_rounds.is_empty() {
        let trend: Vec<String> = m.recent_rounds.iter().map(|(_, r)| r.to_string()).collect();
        println!("  Recent rounds      : {}", trend.join(" "));
    }
}

pub fn print_program(plans: &[DayPlan]) {
    let mut table = Table::new(vec![
        Column::new("Day", 3),
        Column::new("Week", 4),
        Column::new("Type", 5),
        Column::new("Title", 34),
        Column::new("Rounds", 6),
    ]);
    for p in plans {
        table.add_row(vec![
            p.day_number.to_string(),
            p.day_number.div_ceil(7).to_string(),
            paint(color_for_workout(p.kind), p.kind.short_label()),
            p.title.to_string(),
            p.rounds_range
                .map(|(a, b)| format!("{a}–{b}"))
                .unwrap_or_else(|| "-".into()),
        ]);
    }
    print!("{}", table.render());
}

pub fn print_ladder_program(program: &LadderProgram) {
    println!("{}", bold(program.name));
    let mut offset = 0;
    for phase in program.phases {
        println!("  {}:", phase.tag);
        for (i, step) in phase.steps.iter().enumerate() {
            let sets = if step.rest {
                paint(GREY, "rest")
            } else {
                step.sets
                    .iter()
                    .map(u32::to_string)
                    .collect::<Vec<_>>()
                    .join(" ")
            };
            println!("    day {:>2} (#{:>2})  {}", i + 1, offset + i + 1, sets);
        }
        offset += phase.steps.len();
    }
    let after = program.day(program.phase_days() + 1);
    let tail = if after.rest {
        "rest until the start date is reset".to_string()
    } else {
        format!("{} every day", render_sets(after.sets, &Default::default()))
    };
    println!("  then {}: {}", after.program, tail);
}

pub fn print_ladder_day(label: &str, day: &RepLadderDay) {
    print_ladder(label, day, &SetProgress::default());
}

/// Guidance printed after logging a workout with rounds.
pub fn rounds_hint(plan: &DayPlan, rounds: u32) -> Option<String> {
    let (min, max) = plan.rounds_range?;
    match plan.assess_rounds(rounds) {
        RoundsAssessment::Below => Some(format!(
            "{rounds} rounds is below today's range ({min}–{max})."
        )),
        RoundsAssessment::Above => Some(format!(
            "{rounds} rounds is above today's range ({min}–{max}); keep an eye on recovery."
        )),
        RoundsAssessment::Within | RoundsAssessment::Unguided => None,
    }
}

/// Status of a single metric, for one-line confirmations.
pub fn metric_line(metric: Metric, status: Status) -> String {
    format!("{} {}", status_glyph(status), metric.label())
}

