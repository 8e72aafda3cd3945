use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Parses `YYYY-MM` into (year, month).
pub fn parse_month(s: &str) -> Option<(i32, u32)> {
    let first = NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()?;
    Some((first.year(), first.month()))
}

/// "Feb 9–15, 2026" or "Feb 23 – Mar 1, 2026".
pub fn week_label(first: NaiveDate, last: NaiveDate) -> String {
    if first.month() == last.month() {
        format!(
            "{} {}\u{2013}{}, {}",
            first.format("%b"),
            first.day(),
            last.day(),
            first.year()
        )
    } else {
        format!(
            "{} {} \u{2013} {} {}, {}",
            first.format("%b"),
            first.day(),
            last.format("%b"),
            last.day(),
            last.year()
        )
    }
}
