use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{GcovrError, Result};
use crate::options::{GcovrParams, OptionValue};

// Untagged so a JSON array selects raw arguments and an object selects named
// options. IndexMap keeps the document's key order.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ConfigDocument {
    Raw(Vec<String>),
    Named(IndexMap<String, Value>),
}

/// Parses a JSON configuration document.
pub fn parse_params(text: &str) -> Result<GcovrParams> {
    let doc: ConfigDocument = serde_json::from_str(text).map_err(|e| {
        GcovrError::config(format!(
            "expected an object of options or an array of arguments ({e})"
        ))
    })?;
    match doc {
        ConfigDocument::Raw(args) => Ok(GcovrParams::Raw(args)),
        ConfigDocument::Named(map) => {
            let mut named = IndexMap::with_capacity(map.len());
            for (key, value) in map {
                let value = json_to_value(&key, value)?;
                named.insert(key, value);
            }
            Ok(GcovrParams::Named(named))
        }
    }
}

/// Reads and parses a JSON configuration file.
pub fn load_params(path: &Path) -> Result<GcovrParams> {
    let text = fs::read_to_string(path)
        .map_err(|e| GcovrError::io(format!("read config {}", path.display()), e))?;
    parse_params(&text)
}

fn json_to_value(key: &str, value: Value) -> Result<OptionValue> {
    match value {
        Value::Null => Ok(OptionValue::Absent),
        Value::Bool(b) => Ok(OptionValue::Flag(b)),
        Value::String(s) => Ok(OptionValue::Text(s)),
        Value::Number(n) => Ok(OptionValue::Text(n.to_string())),
        Value::Array(_) | Value::Object(_) => Err(GcovrError::config(format!(
            "option `{key}` must be a boolean, string, number or null"
        ))),
    }
}

/// Parses a `key=value` pair from the command line.
///
/// `true`/`false` become flags, a bare `key` is `key=true`.
pub fn parse_option_pair(pair: &str) -> Result<(String, OptionValue)> {
    let (key, value) = match pair.split_once('=') {
        Some((k, v)) => (k.trim(), Some(v)),
        None => (pair.trim(), None),
    };
    if key.is_empty() {
        return Err(GcovrError::config(format!("missing option name in `{pair}`")));
    }
    let value = match value {
        None => OptionValue::Flag(true),
        Some(v) if v.eq_ignore_ascii_case("true") => OptionValue::Flag(true),
        Some(v) if v.eq_ignore_ascii_case("false") => OptionValue::Flag(false),
        Some(v) => OptionValue::Text(v.to_string()),
    };
    Ok((key.to_string(), value))
}

/// Merges command-line pairs over a base of named options. Existing keys keep
/// their position.
pub fn merge_pairs(
    base: Option<GcovrParams>,
    pairs: &[String],
) -> Result<Option<GcovrParams>> {
    if pairs.is_empty() {
        return Ok(base);
    }
    let mut named = match base {
        None => IndexMap::new(),
        Some(GcovrParams::Named(map)) => map,
        Some(GcovrParams::Raw(_)) => {
            return Err(GcovrError::config(
                "--option cannot be combined with a raw argument list",
            ));
        }
    };
    for pair in pairs {
        let (key, value) = parse_option_pair(pair)?;
        named.insert(key, value);
    }
    Ok(Some(GcovrParams::Named(named)))
}
