//! The ingestion result object.
//!
//! Assembles validity, kept entries, and counters into the immutable value
//! handed back to the caller. Serialization uses camelCase field names so
//! the JSON shape reads `{"isValid": ..., "entries": [...], "counters":
//! {"total": ..., "skipped": ...}}`.

use serde::Serialize;

use crate::parser::types::KeptEntry;

/// Candidate counters for one ingestion call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Counters {
    /// Number of candidate entries produced by the merge.
    pub total: usize,
    /// Candidates dropped by specifier filtering; always
    /// `total - entries.len()`.
    pub skipped: usize,
}

/// The outcome of one ingestion call.
///
/// Freshly constructed on every call and immutable once returned; successive
/// results have no relationship to each other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IngestResult {
    /// True iff the raw input parsed as a JSON object, regardless of
    /// whether any dependencies were found.
    pub is_valid: bool,

    /// Kept entries, in candidate merge order. Names are unique.
    pub entries: Vec<KeptEntry>,

    /// Candidate counters.
    pub counters: Counters,
}

impl IngestResult {
    /// The result for input that failed to parse as a JSON object.
    pub fn invalid() -> Self {
        Self {
            is_valid: false,
            entries: Vec::new(),
            counters: Counters::default(),
        }
    }

    /// Assembles a successful result from the candidate count and the
    /// entries that survived filtering.
    pub fn assemble(total: usize, entries: Vec<KeptEntry>) -> Self {
        let skipped = total - entries.len();
        Self {
            is_valid: true,
            entries,
            counters: Counters { total, skipped },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_result_shape() {
        let result = IngestResult::invalid();
        assert!(!result.is_valid);
        assert!(result.entries.is_empty());
        assert_eq!(result.counters, Counters::default());
    }

    #[test]
    fn test_assemble_computes_skipped() {
        let entries = vec![KeptEntry::new("a", "^1.0.0")];
        let result = IngestResult::assemble(3, entries);

        assert!(result.is_valid);
        assert_eq!(result.counters.total, 3);
        assert_eq!(result.counters.skipped, 2);
    }

    #[test]
    fn test_assemble_nothing_skipped() {
        let entries = vec![KeptEntry::new("a", "^1.0.0"), KeptEntry::new("b", "2.0.0")];
        let result = IngestResult::assemble(2, entries);
        assert_eq!(result.counters.skipped, 0);
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = IngestResult::assemble(1, vec![KeptEntry::new("react", "^18.0.0")]);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["isValid"], true);
        assert_eq!(value["entries"][0]["name"], "react");
        assert_eq!(value["counters"]["total"], 1);
        assert_eq!(value["counters"]["skipped"], 0);
    }
}
