//! Path helpers for the configured database location.

use std::path::{Path, PathBuf};

/// Expands a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~"
        && let Some(home) = dirs::home_dir()
    {
        return home;
    }
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// A database name given on the command line: absolute (after `~`
/// expansion) paths are kept, bare names land in `config_dir`.
pub fn resolve_db_path(name: &str, config_dir: &Path) -> PathBuf {
    let p = expand_tilde(name);
    if p.is_absolute() { p } else { config_dir.join(p) }
}
