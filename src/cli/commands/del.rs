use crate::Session;
use crate::cli::parser::Commands;
use crate::core::del::DeleteLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, session: &Session) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let prompt = format!("Delete log entry #{}? This action is irreversible.", id);

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut pool = DbPool::open_initialized(&session.cfg.database)?;
        let entry = DeleteLogic::apply(&mut pool, *id)?;

        success(format!(
            "Deleted #{} ({} {} on {}).",
            id,
            entry.kind.label(),
            entry.value,
            entry.date
        ));
    }

    Ok(())
}
