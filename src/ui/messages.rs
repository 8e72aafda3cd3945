//! User-facing status lines printed by the CLI commands.
//! Diagnostics go through `tracing`; these are for the person at the terminal.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line(color: &str, icon: &str, msg: impl Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info(msg: impl Display) {
    println!("{}", line(FG_BLUE, ICON_INFO, msg));
}

pub fn success(msg: impl Display) {
    println!("{}", line(FG_GREEN, ICON_OK, msg));
}

pub fn warning(msg: impl Display) {
    println!("{}", line(FG_YELLOW, ICON_WARN, msg));
}

pub fn error(msg: impl Display) {
    eprintln!("{}", line(FG_RED, ICON_ERR, msg));
}

/// Section header, e.g. the date of a day view.
pub fn header(msg: impl Display) {
    println!("{FG_BLUE}{BOLD}=== {msg} ==={RESET}");
}
