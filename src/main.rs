//! rFitLogger main entrypoint.

use rfitlogger::run;
use rfitlogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
