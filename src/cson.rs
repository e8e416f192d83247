//! Minimal reader for flat CSON documents.
//!
//! xasy settings files are a single level of `key: value` pairs, so this
//! reader covers exactly that subset of CSON: `#` comments, bare or quoted
//! keys, single- or double-quoted strings with escapes, booleans (including
//! the CoffeeScript `yes`/`no`/`on`/`off` spellings), integers and floats.
//! Nested objects, arrays and multiline strings are rejected.

use crate::value::{OptionValue, OptionsMap};

pub(crate) fn parse(contents: &str) -> Result<OptionsMap, String> {
    let mut options = OptionsMap::new();
    for (index, raw) in contents.lines().enumerate() {
        let line = strip_comment(raw);
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lineno = index + 1;
        let (key, rest) = split_key(line)
            .ok_or_else(|| format!("line {lineno}: expected `key: value`"))?;
        let value =
            parse_scalar(rest.trim()).map_err(|err| format!("line {lineno}: {err}"))?;
        options.insert(key, value);
    }
    Ok(options)
}

/// Cut the line at the first `#` that sits outside of a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (pos, ch) in line.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match ch {
            '\\' if quote.is_some() => escaped = true,
            '\'' | '"' => match quote {
                Some(open) if open == ch => quote = None,
                Some(_) => {}
                None => quote = Some(ch),
            },
            '#' if quote.is_none() => return &line[..pos],
            _ => {}
        }
    }
    line
}

/// Split `key: value` at the colon that ends the key. The key may be bare
/// or quoted; bare keys must not contain whitespace.
fn split_key(line: &str) -> Option<(String, &str)> {
    if line.starts_with('\'') || line.starts_with('"') {
        let (key, rest) = take_quoted(line).ok()?;
        let rest = rest.trim_start();
        let rest = rest.strip_prefix(':')?;
        return Some((key, rest));
    }
    let colon = line.find(':')?;
    let key = line[..colon].trim();
    if key.is_empty() || key.chars().any(char::is_whitespace) {
        return None;
    }
    Some((key.to_string(), &line[colon + 1..]))
}

fn parse_scalar(text: &str) -> Result<OptionValue, String> {
    // Tolerate a trailing comma on unquoted scalars.
    let text = text.strip_suffix(',').unwrap_or(text).trim();
    if text.is_empty() {
        return Err("missing value".to_string());
    }
    if text.starts_with('\'') || text.starts_with('"') {
        let (value, rest) = take_quoted(text)?;
        let rest = rest.trim();
        if !rest.is_empty() && rest != "," {
            return Err(format!("unexpected content after string: `{rest}`"));
        }
        return Ok(OptionValue::Str(value));
    }
    if text.starts_with('{') || text.starts_with('[') {
        return Err("nested values are not supported".to_string());
    }
    match text {
        "true" | "yes" | "on" => return Ok(OptionValue::Bool(true)),
        "false" | "no" | "off" => return Ok(OptionValue::Bool(false)),
        _ => {}
    }
    if let Ok(value) = text.parse::<i64>() {
        return Ok(OptionValue::Int(value));
    }
    if let Ok(value) = text.parse::<f64>() {
        return Ok(OptionValue::Float(value));
    }
    Err(format!("unrecognized value `{text}`"))
}

/// Consume a quoted token from the start of `text`; returns the unescaped
/// content and whatever follows the closing quote.
fn take_quoted(text: &str) -> Result<(String, &str), String> {
    let mut chars = text.char_indices();
    let (_, open) = chars.next().ok_or("empty token")?;
    let mut value = String::new();
    let mut escaped = false;
    for (pos, ch) in chars {
        if escaped {
            let unescaped = match ch {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                other => other,
            };
            value.push(unescaped);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => escaped = true,
            _ if ch == open => return Ok((value, &text[pos + ch.len_utf8()..])),
            _ => value.push(ch),
        }
    }
    Err("unterminated string".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_flat_document_with_comments() {
        let doc = "\
# xasy user settings
asyPath: '/usr/local/bin/asy'
showDebug: true
terminalFontSize: 12     # points
defaultPenWidth: 2.5
defaultPenColor: \"#FF0000\"
";
        let options = parse(doc).expect("document should parse");
        assert_eq!(options["asyPath"], OptionValue::from("/usr/local/bin/asy"));
        assert_eq!(options["showDebug"], OptionValue::Bool(true));
        assert_eq!(options["terminalFontSize"], OptionValue::Int(12));
        assert_eq!(options["defaultPenWidth"], OptionValue::Float(2.5));
        assert_eq!(options["defaultPenColor"], OptionValue::from("#FF0000"));
    }

    #[test]
    fn hash_inside_a_quoted_string_is_not_a_comment() {
        let options = parse("gridMinorAxesColor: '#AAAAAA'").expect("should parse");
        assert_eq!(options["gridMinorAxesColor"], OptionValue::from("#AAAAAA"));
    }

    #[test]
    fn coffeescript_boolean_spellings_are_accepted() {
        let options = parse("useDegrees: yes\ndrawSelectedOnTop: off\n")
            .expect("should parse");
        assert_eq!(options["useDegrees"], OptionValue::Bool(true));
        assert_eq!(options["drawSelectedOnTop"], OptionValue::Bool(false));
    }

    #[test]
    fn quoted_keys_and_escapes_round_trip() {
        let options = parse("'external editor': \"emacs \\\"*ASYPATH\\\"\"")
            .expect("should parse");
        assert_eq!(
            options["external editor"],
            OptionValue::from("emacs \"*ASYPATH\"")
        );
    }

    #[test]
    fn nested_values_are_rejected() {
        assert!(parse("grid: {snap: true}").is_err());
        assert!(parse("colors: [1, 2]").is_err());
    }

    #[test]
    fn malformed_lines_report_their_line_number() {
        let err = parse("showDebug: true\nwhat is this\n").unwrap_err();
        assert!(err.contains("line 2"), "got: {err}");
    }

    #[test]
    fn unterminated_string_is_an_error() {
        assert!(parse("asyPath: 'asy").is_err());
    }
}
