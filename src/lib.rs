//! User-preferences store for the xasy drawing application.
//!
//! Preferences live in `~/.asy/xasyconf` in one of several interchangeable
//! formats: CSON, YAML, JSON, or an extensionless JSON file. The store
//! loads whichever exists (earlier formats win), validates the values
//! against the compiled-in option schema, fills gaps from the defaults, and
//! falls back wholesale to the defaults on any recoverable failure so the
//! application always starts with a usable configuration.
//!
//! ```no_run
//! use xasy_settings::SettingsStore;
//!
//! let store = SettingsStore::open()?;
//! if store.bool_for("defaultShowAxes")? {
//!     // draw the axes
//! }
//! # Ok::<(), xasy_settings::SettingsError>(())
//! ```

#[cfg(feature = "cson")]
mod cson;
mod discover;
mod error;
mod format;
mod schema;
mod store;
mod value;

pub use discover::{SETTINGS_FILE_STEM, config_dir, settings_file_location};
pub use error::SettingsError;
pub use format::Format;
pub use schema::{ASY_PATH_PLACEHOLDER, OptionSpec, SCHEMA, default_options, spec_for};
pub use store::SettingsStore;
pub use value::{OptionKind, OptionValue, OptionsMap};
