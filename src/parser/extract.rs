//! Dependency extraction from parsed manifests.
//!
//! Harvests the `dependencies` and `devDependencies` maps of a [`Manifest`]
//! and merges them into one ordered candidate list.
//!
//! Merge rules, fixed and relied on by the rest of the pipeline:
//!
//! - `dependencies` is traversed first, then `devDependencies`, each in
//!   document key order.
//! - A package name appearing in both maps produces a single candidate:
//!   the later occurrence overwrites the specifier (last-write-wins), but
//!   the entry keeps its first-seen position in the list.
//! - Missing or wrong-typed dependency fields contribute nothing; they are
//!   not errors.

use std::collections::HashMap;

use super::types::{CandidateEntry, Manifest, RawSpecifier};

/// The dependency map fields read from a manifest, in traversal order.
const DEPENDENCY_FIELDS: [&str; 2] = ["dependencies", "devDependencies"];

/// Extracts the merged, ordered candidate list from a manifest.
///
/// # Example
///
/// ```
/// use depsieve::parser::{extract_candidates, parse_str};
///
/// let manifest = parse_str(r#"{
///     "dependencies": {"react": "^18.0.0"},
///     "devDependencies": {"typescript": "^5.0.0"}
/// }"#).unwrap();
///
/// let candidates = extract_candidates(&manifest);
/// assert_eq!(candidates.len(), 2);
/// assert_eq!(candidates[0].name, "react");
/// assert_eq!(candidates[1].name, "typescript");
/// ```
pub fn extract_candidates(manifest: &Manifest) -> Vec<CandidateEntry> {
    let mut candidates: Vec<CandidateEntry> = Vec::new();
    // Maps package names to their candidate indices for O(1) overwrite
    let mut positions: HashMap<String, usize> = HashMap::new();

    for field in DEPENDENCY_FIELDS {
        let Some(map) = manifest.object_field(field) else {
            continue;
        };

        for (name, value) in map {
            let specifier = RawSpecifier::from_value(value);
            match positions.get(name) {
                Some(&index) => candidates[index].specifier = specifier,
                None => {
                    positions.insert(name.clone(), candidates.len());
                    candidates.push(CandidateEntry::new(name.as_str(), specifier));
                }
            }
        }
    }

    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn candidates_for(json: &str) -> Vec<CandidateEntry> {
        extract_candidates(&parse_str(json).unwrap())
    }

    #[test]
    fn test_extract_both_maps() {
        let candidates = candidates_for(
            r#"{
                "dependencies": {"react": "^18.2.0", "lodash": "^4.17.21"},
                "devDependencies": {"typescript": "^5.0.0"}
            }"#,
        );

        assert_eq!(candidates.len(), 3);
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["react", "lodash", "typescript"]);
    }

    #[test]
    fn test_extract_no_dependency_fields() {
        let candidates = candidates_for(r#"{"name": "empty-deps"}"#);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_extract_empty_maps() {
        let candidates = candidates_for(r#"{"dependencies": {}, "devDependencies": {}}"#);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_extract_wrong_typed_field_is_empty() {
        let candidates = candidates_for(
            r#"{"dependencies": "oops", "devDependencies": {"jest": "^29.0.0"}}"#,
        );
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].name, "jest");
    }

    #[test]
    fn test_extract_array_valued_field_is_empty() {
        let candidates = candidates_for(r#"{"dependencies": ["react"]}"#);
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_extract_dev_overwrites_in_place() {
        let candidates = candidates_for(
            r#"{
                "dependencies": {"a": "1.0.0", "b": "1.0.0"},
                "devDependencies": {"a": "2.0.0"}
            }"#,
        );

        // "a" keeps its first-seen position but carries the dev specifier
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].name, "a");
        assert_eq!(candidates[0].specifier.as_text(), Some("2.0.0"));
        assert_eq!(candidates[1].name, "b");
    }

    #[test]
    fn test_extract_preserves_document_order() {
        let candidates = candidates_for(
            r#"{"dependencies": {"zebra": "1.0.0", "apple": "2.0.0", "mango": "3.0.0"}}"#,
        );
        let names: Vec<&str> = candidates.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["zebra", "apple", "mango"]);
    }

    #[test]
    fn test_extract_non_string_values_still_candidates() {
        let candidates = candidates_for(
            r#"{"dependencies": {"weird": 42, "worse": null, "ok": "^1.0.0"}}"#,
        );

        assert_eq!(candidates.len(), 3);
        assert!(candidates[0].specifier.as_text().is_none());
        assert!(candidates[1].specifier.as_text().is_none());
        assert_eq!(candidates[2].specifier.as_text(), Some("^1.0.0"));
    }
}
