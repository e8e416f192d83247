//! Format handlers for the settings file.
//!
//! Handlers form a static registry keyed by file extension. JSON is the
//! mandatory baseline; the CSON and YAML handlers are compiled in behind
//! the `cson` and `yaml` cargo features. A file in a format whose handler
//! is missing is reported as unavailable rather than fed to the wrong
//! parser, and the store then falls back to defaults.

use crate::value::OptionsMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Settings-file formats the store understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Cson,
    Yaml,
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Format::Cson => "CSON",
            Format::Yaml => "YAML",
            Format::Json => "JSON",
        };
        write!(f, "{}", label)
    }
}

/// Why a settings file could not be turned into an options mapping.
///
/// Both cases are recoverable: the store logs and falls back to defaults.
#[derive(Debug, Error)]
pub(crate) enum ParseError {
    #[error("no {0} handler compiled into this build")]
    Unavailable(Format),
    #[error("{0}")]
    Malformed(String),
}

impl Format {
    /// Select the handler from a file extension. Anything unrecognized,
    /// including no extension at all, is read as JSON.
    pub fn from_path(path: &Path) -> Format {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("cson") => Format::Cson,
            Some("yml") | Some("yaml") => Format::Yaml,
            _ => Format::Json,
        }
    }

    /// Parse file contents into a flat options mapping. Nested values and
    /// non-mapping top levels are malformed; the schema only holds scalars.
    pub(crate) fn parse(self, contents: &str) -> Result<OptionsMap, ParseError> {
        match self {
            Format::Json => serde_json::from_str(contents)
                .map_err(|err| ParseError::Malformed(err.to_string())),
            Format::Yaml => parse_yaml(contents),
            Format::Cson => parse_cson(contents),
        }
    }
}

#[cfg(feature = "yaml")]
fn parse_yaml(contents: &str) -> Result<OptionsMap, ParseError> {
    serde_yaml::from_str(contents).map_err(|err| ParseError::Malformed(err.to_string()))
}

#[cfg(not(feature = "yaml"))]
fn parse_yaml(_contents: &str) -> Result<OptionsMap, ParseError> {
    Err(ParseError::Unavailable(Format::Yaml))
}

#[cfg(feature = "cson")]
fn parse_cson(contents: &str) -> Result<OptionsMap, ParseError> {
    crate::cson::parse(contents).map_err(ParseError::Malformed)
}

#[cfg(not(feature = "cson"))]
fn parse_cson(_contents: &str) -> Result<OptionsMap, ParseError> {
    Err(ParseError::Unavailable(Format::Cson))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::OptionValue;

    #[test]
    fn handler_selection_follows_the_extension() {
        assert_eq!(Format::from_path(Path::new("xasyconf.cson")), Format::Cson);
        assert_eq!(Format::from_path(Path::new("xasyconf.yaml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("xasyconf.yml")), Format::Yaml);
        assert_eq!(Format::from_path(Path::new("xasyconf.json")), Format::Json);
        // No extension, or an unknown one, is read as JSON.
        assert_eq!(Format::from_path(Path::new("xasyconf")), Format::Json);
        assert_eq!(Format::from_path(Path::new("xasyconf.conf")), Format::Json);
    }

    #[test]
    fn json_handler_parses_a_flat_mapping() {
        let options = Format::Json
            .parse(r#"{"asyPath": "asy", "terminalFontSize": 10}"#)
            .expect("flat JSON should parse");
        assert_eq!(options["asyPath"], OptionValue::from("asy"));
        assert_eq!(options["terminalFontSize"], OptionValue::Int(10));
    }

    #[test]
    fn json_handler_reports_malformed_content() {
        let err = Format::Json.parse("{not json").unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
        let err = Format::Json.parse(r#"["top", "level", "array"]"#).unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_handler_parses_a_flat_mapping() {
        let options = Format::Yaml
            .parse("showDebug: true\ndefaultPenWidth: 1.5\nterminalFont: Courier\n")
            .expect("flat YAML should parse");
        assert_eq!(options["showDebug"], OptionValue::Bool(true));
        assert_eq!(options["defaultPenWidth"], OptionValue::Float(1.5));
        assert_eq!(options["terminalFont"], OptionValue::from("Courier"));
    }

    #[cfg(not(feature = "yaml"))]
    #[test]
    fn yaml_handler_reports_unavailable_when_not_compiled_in() {
        let err = Format::Yaml.parse("showDebug: true\n").unwrap_err();
        assert!(matches!(err, ParseError::Unavailable(Format::Yaml)));
    }
}
