//! The ingestion pipeline.
//!
//! Wires the parser, extractor, and filter together behind one pure
//! operation: [`ingest`] takes raw manifest text and returns an
//! [`IngestResult`]. The pipeline is synchronous, does no I/O, holds no
//! state between calls, and never panics on untrusted input — parse
//! failures come back as `is_valid = false`, not as errors.
//!
//! Callers that reprocess continuously (say, on every keystroke) just call
//! [`ingest`] again; identical input yields an identical result, and any
//! throttling or cancellation policy belongs to the caller.
//!
//! # Example
//!
//! ```
//! use depsieve::ingest::ingest;
//!
//! let result = ingest(r#"{
//!     "dependencies": {
//!         "react": "^18.2.0",
//!         "internal": "file:../internal"
//!     }
//! }"#);
//!
//! assert!(result.is_valid);
//! assert_eq!(result.counters.total, 2);
//! assert_eq!(result.counters.skipped, 1);
//! assert_eq!(result.entries[0].name, "react");
//! ```

pub mod result;

pub use result::{Counters, IngestResult};

use crate::parser::{extract_candidates, parse_str};
use crate::specifier::{filter_candidates, DistTagPolicy};

/// Ingests raw manifest text under the default (strict) dist-tag policy.
pub fn ingest(raw: &str) -> IngestResult {
    ingest_with_policy(raw, DistTagPolicy::default())
}

/// Ingests raw manifest text under an explicit dist-tag policy.
///
/// Pure function of its inputs: parse, extract, filter, assemble. A parse
/// failure (bad JSON or non-object top level) short-circuits to
/// [`IngestResult::invalid`]; everything downstream of a successful parse
/// degrades to skipping entries rather than failing.
pub fn ingest_with_policy(raw: &str, policy: DistTagPolicy) -> IngestResult {
    let Ok(manifest) = parse_str(raw) else {
        return IngestResult::invalid();
    };

    let candidates = extract_candidates(&manifest);
    let kept = filter_candidates(&candidates, policy);
    IngestResult::assemble(candidates.len(), kept)
}
