//! Formatting utilities used for CLI outputs.

use crate::models::status::Status;
use crate::utils::colors::{color_for_status, paint};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn italic(s: &str) -> String {
    format!("\x1b[3m{}\x1b[0m", s)
}

/// ✓ / ◐ / · coloured by status.
pub fn status_glyph(status: Status) -> String {
    let glyph = match status {
        Status::Done => "✓",
        Status::Partial => "◐",
        Status::None => "·",
    };
    paint(color_for_status(status), glyph)
}

/// "5 4 3 2 1" with completed sets highlighted; "rest" for an empty list.
pub fn render_sets(sets: &[u32], completed: &std::collections::BTreeSet<usize>) -> String {
    if sets.is_empty() {
        return "rest".to_string();
    }
    sets.iter()
        .enumerate()
        .map(|(i, s)| {
            if completed.contains(&i) {
                paint(color_for_status(Status::Done), &s.to_string())
            } else {
                s.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Thousands separator for step counts: 10000 → "10,000".
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
