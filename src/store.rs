//! The settings store: construction-time load, reconciliation and access.

use crate::discover::{config_dir, settings_file_location};
use crate::error::SettingsError;
use crate::format::{Format, ParseError};
use crate::schema;
use crate::value::{OptionKind, OptionValue, OptionsMap};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info, warn};

/// In-memory view of the user's preferences.
///
/// The load protocol runs once during construction; afterwards the store is
/// ready in either the loaded or the defaulted state. Every schema key is
/// then present with a value of its declared kind.
#[derive(Debug, Clone, PartialEq)]
pub struct SettingsStore {
    options: OptionsMap,
}

impl SettingsStore {
    /// Open the store rooted at the per-user configuration directory,
    /// `~/.asy/`.
    pub fn open() -> Result<Self, SettingsError> {
        Self::open_at(&config_dir())
    }

    /// Open the store rooted at an explicit configuration directory.
    pub fn open_at(dir: &Path) -> Result<Self, SettingsError> {
        let mut store = SettingsStore {
            options: schema::default_options(),
        };
        store.load(dir)?;
        Ok(store)
    }

    fn load(&mut self, dir: &Path) -> Result<(), SettingsError> {
        let Some(path) = settings_file_location(dir) else {
            if dir.exists() && !dir.is_dir() {
                return Err(SettingsError::ConfigPath(dir.to_path_buf()));
            }
            fs::create_dir_all(dir)?;
            debug!(dir = %dir.display(), "No settings file; using defaults");
            self.set_defaults();
            return Ok(());
        };

        let contents = match fs::read_to_string(&path) {
            Ok(data) => data,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    "Falling back to default settings: {err}"
                );
                self.set_defaults();
                return Ok(());
            }
        };

        let format = Format::from_path(&path);
        let parsed = match format.parse(&contents) {
            Ok(parsed) => {
                debug!(path = %path.display(), %format, "Parsed settings file");
                parsed
            }
            Err(err @ ParseError::Unavailable(_)) => {
                warn!(path = %path.display(), "Using default settings: {err}");
                self.set_defaults();
                return Ok(());
            }
            Err(ParseError::Malformed(err)) => {
                warn!(path = %path.display(), "Invalid settings file: {err}");
                self.set_defaults();
                return Ok(());
            }
        };

        // A kind mismatch is fatal on purpose: silently coercing or
        // defaulting a wrong-typed setting would corrupt behavior downstream.
        self.options = reconcile(parsed)?;
        info!(path = %path.display(), %format, "Loaded user settings");
        Ok(())
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Result<&OptionValue, SettingsError> {
        self.options
            .get(key)
            .ok_or_else(|| SettingsError::KeyNotFound(key.to_string()))
    }

    /// Insert or overwrite `key` unconditionally. Writes are not checked
    /// against the schema; the typed accessors catch a wrong-typed value at
    /// its first typed read.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<OptionValue>) {
        self.options.insert(key.into(), value.into());
    }

    pub fn bool_for(&self, key: &str) -> Result<bool, SettingsError> {
        let value = self.get(key)?;
        value.as_bool().ok_or_else(|| SettingsError::TypeMismatch {
            key: key.to_string(),
            expected: OptionKind::Bool,
            found: value.kind(),
        })
    }

    pub fn int_for(&self, key: &str) -> Result<i64, SettingsError> {
        let value = self.get(key)?;
        value.as_int().ok_or_else(|| SettingsError::TypeMismatch {
            key: key.to_string(),
            expected: OptionKind::Int,
            found: value.kind(),
        })
    }

    pub fn float_for(&self, key: &str) -> Result<f64, SettingsError> {
        let value = self.get(key)?;
        value.as_float().ok_or_else(|| SettingsError::TypeMismatch {
            key: key.to_string(),
            expected: OptionKind::Float,
            found: value.kind(),
        })
    }

    pub fn str_for(&self, key: &str) -> Result<&str, SettingsError> {
        let value = self.get(key)?;
        value.as_str().ok_or_else(|| SettingsError::TypeMismatch {
            key: key.to_string(),
            expected: OptionKind::Str,
            found: value.kind(),
        })
    }

    /// The whole mapping, for callers that iterate the options.
    pub fn options(&self) -> &OptionsMap {
        &self.options
    }

    /// Replace the mapping with a fresh copy of the defaults.
    pub fn set_defaults(&mut self) {
        self.options = schema::default_options();
        // On Windows, autodetection of the Asymptote install path via the
        // registry would hook in here; it is not implemented.
    }

    /// Reserved write-back hook. Settings are currently never persisted
    /// from the store; the user edits the file directly.
    pub fn save(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Merge a parsed mapping with the schema: keys the schema knows must carry
/// the declared kind, keys the file omits get the default copied in, and
/// keys the schema does not know pass through verbatim.
fn reconcile(mut parsed: OptionsMap) -> Result<OptionsMap, SettingsError> {
    for spec in schema::SCHEMA {
        match parsed.get(spec.name) {
            Some(value) if value.kind() != spec.kind => {
                return Err(SettingsError::TypeMismatch {
                    key: spec.name.to_string(),
                    expected: spec.kind,
                    found: value.kind(),
                });
            }
            Some(_) => {}
            None => {
                parsed.insert(spec.name.to_string(), spec.default_value());
            }
        }
    }
    Ok(parsed)
}
