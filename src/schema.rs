//! The compiled-in option schema.
//!
//! One row per recognized option: its name, the kind its value must have,
//! and its default. The table is immutable; `default_options` clones a
//! template built once, so callers can never corrupt the schema itself.

use crate::value::{OptionKind, OptionValue, OptionsMap};
use once_cell::sync::Lazy;

/// Placeholder token inside editor commands. The editor-invocation side of
/// the application replaces it with the path to the Asymptote file being
/// edited; this crate never performs the substitution.
pub const ASY_PATH_PLACEHOLDER: &str = "*ASYPATH";

#[cfg(windows)]
const DEFAULT_EXTERNAL_EDITOR: &str = "notepad.exe *ASYPATH";
#[cfg(not(windows))]
const DEFAULT_EXTERNAL_EDITOR: &str = "emacs *ASYPATH";

/// One row of the schema.
#[derive(Debug, Clone, Copy)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    default: DefaultValue,
}

/// Const-friendly default payload; `&'static str` where the runtime value
/// owns a `String`.
#[derive(Debug, Clone, Copy)]
enum DefaultValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(&'static str),
}

impl OptionSpec {
    const fn bool(name: &'static str, default: bool) -> Self {
        OptionSpec {
            name,
            kind: OptionKind::Bool,
            default: DefaultValue::Bool(default),
        }
    }

    const fn int(name: &'static str, default: i64) -> Self {
        OptionSpec {
            name,
            kind: OptionKind::Int,
            default: DefaultValue::Int(default),
        }
    }

    const fn float(name: &'static str, default: f64) -> Self {
        OptionSpec {
            name,
            kind: OptionKind::Float,
            default: DefaultValue::Float(default),
        }
    }

    const fn str(name: &'static str, default: &'static str) -> Self {
        OptionSpec {
            name,
            kind: OptionKind::Str,
            default: DefaultValue::Str(default),
        }
    }

    /// Materialize this row's default as an owned value.
    pub fn default_value(&self) -> OptionValue {
        match self.default {
            DefaultValue::Bool(value) => OptionValue::Bool(value),
            DefaultValue::Int(value) => OptionValue::Int(value),
            DefaultValue::Float(value) => OptionValue::Float(value),
            DefaultValue::Str(value) => OptionValue::Str(value.to_string()),
        }
    }
}

/// Every option the store recognizes.
///
/// `_comment` and `_GRID_COMMANDS` are documentation strings carried in the
/// settings files xasy has always written; they reconcile like any other
/// string option but mean nothing to the application.
pub const SCHEMA: &[OptionSpec] = &[
    OptionSpec::str(
        "_comment",
        "Note: *ASYPATH will be replaced with the path to Asymptote file.",
    ),
    OptionSpec::str("externalEditor", DEFAULT_EXTERNAL_EDITOR),
    OptionSpec::str("asyPath", "asy"),
    OptionSpec::bool("showDebug", false),
    OptionSpec::str("defaultPenOptions", ""),
    OptionSpec::str("defaultPenColor", "#000000"),
    OptionSpec::float("defaultPenWidth", 1.0),
    OptionSpec::bool("groupObjDefault", false),
    OptionSpec::bool("enableImmediatePreview", true),
    OptionSpec::bool("useDegrees", false),
    OptionSpec::str("terminalFont", "Courier"),
    OptionSpec::int("terminalFontSize", 10),
    OptionSpec::bool("defaultShowAxes", true),
    OptionSpec::bool("defaultShowGrid", false),
    OptionSpec::bool("defaultGridSnap", false),
    OptionSpec::bool("drawSelectedOnTop", true),
    OptionSpec::str("_GRID_COMMANDS", "Grid Commands."),
    OptionSpec::str("gridMajorAxesColor", "#000000"),
    OptionSpec::str("gridMinorAxesColor", "#AAAAAA"),
    OptionSpec::int("gridMajorAxesSpacing", 100),
    OptionSpec::int("gridMinorAxesCount", 9),
    OptionSpec::bool("debugMode", true),
];

/// Look up the schema row for an option name.
pub fn spec_for(name: &str) -> Option<&'static OptionSpec> {
    SCHEMA.iter().find(|spec| spec.name == name)
}

static DEFAULT_TEMPLATE: Lazy<OptionsMap> = Lazy::new(|| {
    SCHEMA
        .iter()
        .map(|spec| (spec.name.to_string(), spec.default_value()))
        .collect()
});

/// A fresh copy of the default option mapping for the current platform.
pub fn default_options() -> OptionsMap {
    DEFAULT_TEMPLATE.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_schema_row_with_the_declared_kind() {
        let defaults = default_options();
        assert_eq!(defaults.len(), SCHEMA.len());
        for spec in SCHEMA {
            let value = defaults
                .get(spec.name)
                .unwrap_or_else(|| panic!("missing default for {}", spec.name));
            assert_eq!(value.kind(), spec.kind, "kind of {}", spec.name);
        }
    }

    #[test]
    fn external_editor_default_carries_the_placeholder() {
        let defaults = default_options();
        let editor = defaults["externalEditor"]
            .as_str()
            .expect("externalEditor should be a string");
        assert!(editor.contains(ASY_PATH_PLACEHOLDER));
    }

    #[test]
    fn each_copy_of_the_defaults_is_independent() {
        let mut first = default_options();
        first.insert("asyPath".to_string(), OptionValue::from("/opt/asy"));
        let second = default_options();
        assert_eq!(second["asyPath"], OptionValue::from("asy"));
    }

    #[test]
    fn spec_lookup_finds_known_names_only() {
        assert!(spec_for("terminalFontSize").is_some());
        assert!(spec_for("noSuchOption").is_none());
    }
}
