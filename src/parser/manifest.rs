//! Parser for npm package.json manifests.
//!
//! This module turns untrusted raw text into a [`Manifest`]. Failure is a
//! normal, expected outcome: malformed JSON and non-object top-level values
//! both come back as a [`ParseError`] variant, never as a panic.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::types::Manifest;

/// Errors that can occur while parsing a manifest.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// Failed to read the file from disk.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The raw text is not syntactically valid JSON.
    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The text parsed, but the top-level value is not an object.
    #[error("Manifest must be a JSON object, found {found}")]
    NotAnObject {
        /// The JSON kind that was found instead ("array", "string", ...).
        found: &'static str,
    },
}

/// Result type alias for parser operations.
pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a manifest from a file path.
///
/// Convenience entry point for the CLI; the core pipeline works on strings.
pub fn parse_file(path: &Path) -> ParseResult<Manifest> {
    let content = fs::read_to_string(path)?;
    parse_str(&content)
}

/// Parses a manifest from a string.
///
/// Accepts any string, including the empty string. Succeeds iff the text is
/// valid JSON whose top-level value is an object; no further structural
/// checks happen at this stage. Pure function of its input.
///
/// # Example
///
/// ```
/// use depsieve::parser::parse_str;
///
/// let manifest = parse_str(r#"{"name": "my-app", "version": "1.0.0"}"#).unwrap();
/// assert_eq!(manifest.name(), Some("my-app"));
///
/// assert!(parse_str("[1,2,3]").is_err());
/// assert!(parse_str("not json").is_err());
/// ```
pub fn parse_str(content: &str) -> ParseResult<Manifest> {
    let value: Value = serde_json::from_str(content)?;
    match value {
        Value::Object(fields) => Ok(Manifest::new(fields)),
        other => Err(ParseError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

/// Returns the JSON kind name for an unexpected top-level value.
fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
