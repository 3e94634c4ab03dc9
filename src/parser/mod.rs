//! Parser module for depsieve.
//!
//! Turns untrusted manifest text into an ordered list of dependency
//! candidates in two steps:
//!
//! 1. [`parse_str`] — decode the raw text as a JSON object ([`Manifest`]);
//!    syntax errors and non-object top-level values are reported as
//!    [`ParseError`] variants, never panics.
//! 2. [`extract_candidates`] — merge the `dependencies` and
//!    `devDependencies` maps into one order-stable candidate list.
//!
//! # Example
//!
//! ```
//! use depsieve::parser::{extract_candidates, parse_str};
//!
//! let manifest = parse_str(r#"{
//!     "dependencies": {"react": "^18.0.0"},
//!     "devDependencies": {"typescript": "^5.0.0"}
//! }"#).unwrap();
//!
//! let candidates = extract_candidates(&manifest);
//! assert_eq!(candidates.len(), 2);
//! ```

pub mod extract;
pub mod manifest;
pub mod types;

// Re-export commonly used items for convenience
pub use extract::extract_candidates;
pub use manifest::{parse_file, parse_str, ParseError, ParseResult};
pub use types::{CandidateEntry, KeptEntry, Manifest, RawSpecifier};
