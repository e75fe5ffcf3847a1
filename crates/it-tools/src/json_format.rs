//! JSON prettifier with optional recursive key sorting.
//!
//! Input is read as JSON5, so unquoted keys, trailing commas and comments are
//! accepted. Output is always plain JSON.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use thiserror::Error;

// JSON.stringify clamps the indent width to 10 spaces.
const MAX_INDENT: usize = 10;

#[derive(Debug, Error)]
pub enum JsonFormatError {
    #[error("Invalid JSON: {0}")]
    Parse(#[source] json5::Error),
    #[error("Failed to write JSON: {0}")]
    Write(#[source] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FormatJsonOptions {
    pub sort_keys: bool,
    /// Spaces per nesting level; 0 produces compact output.
    pub indent_size: usize,
}

impl Default for FormatJsonOptions {
    fn default() -> Self {
        Self {
            sort_keys: true,
            indent_size: 3,
        }
    }
}

/// Case-insensitive order, lowercase first when two keys differ only in case.
fn compare_keys(a: &str, b: &str) -> Ordering {
    let folded = |s: &str| s.chars().flat_map(char::to_lowercase).collect::<Vec<_>>();
    folded(a).cmp(&folded(b)).then_with(|| b.cmp(a))
}

/// Sorts the keys of every object in `value`, recursing through arrays.
///
/// Keys are compared case-insensitively (`a`, `b`, `B`, `c`). Array order is
/// left alone.
pub fn sort_object_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(items.into_iter().map(sort_object_keys).collect()),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|(a, _), (b, _)| compare_keys(a, b));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, sort_object_keys(value)))
                    .collect::<Map<String, Value>>(),
            )
        }
        other => other,
    }
}

/// Parses `raw` and pretty-prints it.
///
/// # Errors
///
/// [`JsonFormatError::Parse`] when `raw` is not valid JSON5.
///
/// # Example
///
/// ```
/// use it_tools::json_format::{format_json, FormatJsonOptions};
///
/// let options = FormatJsonOptions { indent_size: 2, ..Default::default() };
/// let pretty = format_json(r#"{"b":1,"a":[true,null]}"#, &options).unwrap();
/// assert_eq!(pretty, "{\n  \"a\": [\n    true,\n    null\n  ],\n  \"b\": 1\n}");
/// ```
pub fn format_json(raw: &str, options: &FormatJsonOptions) -> Result<String, JsonFormatError> {
    let value: Value = json5::from_str(raw).map_err(|err| {
        log::debug!("json parse failed: {}", err);
        JsonFormatError::Parse(err)
    })?;
    let value = if options.sort_keys {
        sort_object_keys(value)
    } else {
        value
    };

    let indent_size = options.indent_size.min(MAX_INDENT);
    if indent_size == 0 {
        return serde_json::to_string(&value).map_err(JsonFormatError::Write);
    }

    let indent = " ".repeat(indent_size);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer).map_err(JsonFormatError::Write)?;

    // serde_json only ever writes UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
