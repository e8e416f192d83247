//! Error taxonomy for the settings store.

use crate::value::OptionKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures surfaced by the settings store.
///
/// Recoverable load failures (missing file, unreadable file, handler not
/// compiled in, malformed content) never appear here: the store logs a
/// warning and falls back to the compiled-in defaults so the application
/// always starts with a usable configuration.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The configuration directory path is occupied by a non-directory.
    #[error("configuration path {} does not point to a folder", .0.display())]
    ConfigPath(PathBuf),

    /// The configuration directory could not be created.
    #[error("could not create configuration directory")]
    Io(#[from] io::Error),

    /// A value's kind disagrees with the schema. Raised during load (never
    /// silently coerced; a wrong-typed setting would corrupt downstream
    /// behavior) and by the typed accessors.
    #[error("option `{key}` should be a {expected}, found a {found}")]
    TypeMismatch {
        key: String,
        expected: OptionKind,
        found: OptionKind,
    },

    /// Lookup of an option name the store does not hold.
    #[error("unknown option `{0}`")]
    KeyNotFound(String),
}
