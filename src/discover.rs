//! Location of the per-user settings file.

use std::path::{Path, PathBuf};

/// File stem of the settings file under the configuration directory.
pub const SETTINGS_FILE_STEM: &str = "xasyconf";

/// Extension search order. Earlier entries win even when a later one is
/// more recently modified.
const SEARCH_ORDER: [&str; 4] = [".cson", ".yaml", ".json", ""];

/// The per-user configuration directory, `~/.asy/`.
pub fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".asy")
}

/// The first existing settings file under `dir`, respecting the extension
/// priority order; `None` when no candidate exists.
pub fn settings_file_location(dir: &Path) -> Option<PathBuf> {
    SEARCH_ORDER
        .iter()
        .map(|ext| dir.join(format!("{SETTINGS_FILE_STEM}{ext}")))
        .find(|candidate| candidate.is_file())
}
