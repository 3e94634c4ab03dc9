//! Shared types for manifest ingestion.
//!
//! This module defines the core data structures that flow through the
//! ingestion pipeline: the parsed manifest, raw version specifiers, and
//! the candidate/kept entry pair produced by extraction and filtering.

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// A successfully parsed package manifest.
///
/// Wraps the top-level JSON object of a `package.json`-shaped document.
/// Key order follows the source document (serde_json is built with
/// `preserve_order`), which is what keeps extraction order-stable.
///
/// A `Manifest` only exists for the duration of one ingestion call; it is
/// never persisted.
///
/// # Example
///
/// ```
/// use depsieve::parser::parse_str;
///
/// let manifest = parse_str(r#"{"name": "my-app"}"#).unwrap();
/// assert_eq!(manifest.name(), Some("my-app"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Manifest(Map<String, Value>);

impl Manifest {
    /// Wraps a top-level JSON object as a manifest.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Returns the raw field map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Returns the package name, if present and a string.
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    /// Type-guarded accessor for an object-valued field.
    ///
    /// Returns the field's map when the field is present and is itself a
    /// JSON object; a missing or wrong-typed field yields `None`, which
    /// callers treat as an empty map rather than an error.
    pub fn object_field(&self, key: &str) -> Option<&Map<String, Value>> {
        self.0.get(key).and_then(Value::as_object)
    }
}

/// A raw version specifier as found in a dependency map.
///
/// Dependency map values are usually strings, but nothing stops a manifest
/// author from writing a number, null, or a nested object there. Such
/// entries still count as candidates; they just can never classify as
/// registry-resolvable.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSpecifier {
    /// A JSON string value, eligible for semver classification.
    Text(String),
    /// Any non-string JSON value. Never registry-resolvable.
    Malformed(Value),
}

impl RawSpecifier {
    /// Builds a specifier from a raw dependency map value.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => RawSpecifier::Text(s.clone()),
            other => RawSpecifier::Malformed(other.clone()),
        }
    }

    /// Returns the specifier text when it was a JSON string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawSpecifier::Text(s) => Some(s),
            RawSpecifier::Malformed(_) => None,
        }
    }
}

impl fmt::Display for RawSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawSpecifier::Text(s) => f.write_str(s),
            RawSpecifier::Malformed(v) => write!(f, "{}", v),
        }
    }
}

/// A dependency declaration before filtering.
///
/// Produced by merging the `dependencies` and `devDependencies` maps;
/// package names are unique within the candidate list.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateEntry {
    /// The package name (e.g., "react", "lodash").
    pub name: String,

    /// The raw version specifier, exactly as the manifest declared it.
    pub specifier: RawSpecifier,
}

impl CandidateEntry {
    /// Creates a new candidate entry.
    pub fn new(name: impl Into<String>, specifier: RawSpecifier) -> Self {
        Self {
            name: name.into(),
            specifier,
        }
    }
}

impl fmt::Display for CandidateEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.specifier)
    }
}

/// A dependency declaration that survived specifier filtering.
///
/// Kept entries always carry a string specifier: non-string values never
/// classify as resolvable, so they can't reach this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeptEntry {
    /// The package name.
    pub name: String,

    /// The registry-resolvable version specifier (e.g., "^18.0.0").
    pub specifier: String,
}

impl KeptEntry {
    /// Creates a new kept entry.
    pub fn new(name: impl Into<String>, specifier: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            specifier: specifier.into(),
        }
    }
}

impl fmt::Display for KeptEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.specifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_manifest_object_field_present() {
        let manifest = Manifest::new(
            json!({"dependencies": {"react": "^18.0.0"}})
                .as_object()
                .unwrap()
                .clone(),
        );
        let deps = manifest.object_field("dependencies").unwrap();
        assert_eq!(deps.len(), 1);
    }

    #[test]
    fn test_manifest_object_field_missing() {
        let manifest = Manifest::default();
        assert!(manifest.object_field("dependencies").is_none());
    }

    #[test]
    fn test_manifest_object_field_wrong_type() {
        let manifest = Manifest::new(
            json!({"dependencies": "not-a-map"})
                .as_object()
                .unwrap()
                .clone(),
        );
        assert!(manifest.object_field("dependencies").is_none());
    }

    #[test]
    fn test_raw_specifier_from_string_value() {
        let spec = RawSpecifier::from_value(&json!("^1.2.3"));
        assert_eq!(spec.as_text(), Some("^1.2.3"));
    }

    #[test]
    fn test_raw_specifier_from_non_string_value() {
        let spec = RawSpecifier::from_value(&json!(42));
        assert_eq!(spec.as_text(), None);
        assert!(matches!(spec, RawSpecifier::Malformed(_)));
    }

    #[test]
    fn test_raw_specifier_display() {
        assert_eq!(
            format!("{}", RawSpecifier::Text("~4.17.21".into())),
            "~4.17.21"
        );
        assert_eq!(format!("{}", RawSpecifier::from_value(&json!(null))), "null");
    }

    #[test]
    fn test_candidate_entry_display() {
        let entry = CandidateEntry::new("lodash", RawSpecifier::Text("~4.17.21".into()));
        assert_eq!(format!("{}", entry), "lodash@~4.17.21");
    }

    #[test]
    fn test_kept_entry_new() {
        let entry = KeptEntry::new("react", "^18.0.0");
        assert_eq!(entry.name, "react");
        assert_eq!(entry.specifier, "^18.0.0");
    }

    #[test]
    fn test_kept_entry_serializes_fields() {
        let entry = KeptEntry::new("react", "^18.0.0");
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["name"], "react");
        assert_eq!(value["specifier"], "^18.0.0");
    }
}
