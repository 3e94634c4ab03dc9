//! Specifier classification and filtering.
//!
//! Every dependency candidate carries a raw version specifier. This module
//! decides, per specifier, whether a package registry could resolve it to a
//! published version ([`Resolvability::Resolvable`]) or whether it points at
//! a location instead — a git/ssh URL, a tarball, a local path, a workspace
//! link ([`Resolvability::NonResolvable`]).
//!
//! The governing rule: a specifier must denote a concrete or range-bounded
//! published version, not a location. Anything unrecognized defaults to
//! non-resolvable; classification never fails.
//!
//! Dist-tag aliases (`latest`, `next`, `beta`) sit in between: registries
//! can resolve them, but they are not literal semver ranges. Which way they
//! classify is a [`DistTagPolicy`] choice; the default is strict.

pub mod range;

use crate::parser::types::{CandidateEntry, KeptEntry, RawSpecifier};

/// URL-ish prefixes that mark a specifier as a location.
const LOCATION_PREFIXES: [&str; 10] = [
    "git:",
    "git+",
    "ssh:",
    "http:",
    "https:",
    "file:",
    "workspace:",
    "npm:",
    "link:",
    "portal:",
];

/// Relative/absolute path prefixes.
const PATH_PREFIXES: [&str; 4] = ["./", "../", "/", "~/"];

/// Whether a registry can resolve a specifier to a published version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolvability {
    /// A semver version or range; a registry lookup can satisfy it.
    Resolvable,
    /// A location, dist-tag (under strict policy), or garbage; skipped.
    NonResolvable,
}

impl Resolvability {
    /// Returns true for the resolvable case.
    pub fn is_resolvable(&self) -> bool {
        matches!(self, Resolvability::Resolvable)
    }
}

/// How dist-tag-style specifiers (`latest`, `next`, the empty string)
/// classify.
///
/// Registries resolve dist-tags to whatever version the tag currently
/// points at, so both readings are defensible; strict keeps only literal
/// semver ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistTagPolicy {
    /// Dist-tags and the empty string classify as non-resolvable.
    #[default]
    Strict,
    /// Dist-tags and the empty string (registry alias for the newest
    /// version) classify as resolvable.
    Lenient,
}

impl std::str::FromStr for DistTagPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(DistTagPolicy::Strict),
            "lenient" => Ok(DistTagPolicy::Lenient),
            _ => Err(format!(
                "Unknown dist-tag policy: '{}'. Valid policies: strict, lenient",
                s
            )),
        }
    }
}

impl std::fmt::Display for DistTagPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistTagPolicy::Strict => write!(f, "strict"),
            DistTagPolicy::Lenient => write!(f, "lenient"),
        }
    }
}

/// Classifies a specifier under the default (strict) dist-tag policy.
///
/// # Example
///
/// ```
/// use depsieve::specifier::{classify, Resolvability};
///
/// assert_eq!(classify("^1.2.3"), Resolvability::Resolvable);
/// assert_eq!(classify("git+https://example.com/a.git"), Resolvability::NonResolvable);
/// assert_eq!(classify("latest"), Resolvability::NonResolvable);
/// ```
pub fn classify(specifier: &str) -> Resolvability {
    classify_with_policy(specifier, DistTagPolicy::default())
}

/// Classifies a specifier under an explicit dist-tag policy.
///
/// Total over arbitrary input: any string classifies one way or the other,
/// with unrecognized forms defaulting to non-resolvable.
pub fn classify_with_policy(specifier: &str, policy: DistTagPolicy) -> Resolvability {
    let spec = specifier.trim();

    // npm registries treat "" as "*"; under strict policy it is skipped
    // like any other tag alias.
    if spec.is_empty() {
        return match policy {
            DistTagPolicy::Strict => Resolvability::NonResolvable,
            DistTagPolicy::Lenient => Resolvability::Resolvable,
        };
    }

    if is_location(spec) {
        return Resolvability::NonResolvable;
    }

    if range::is_semver_range(spec) {
        return Resolvability::Resolvable;
    }

    if policy == DistTagPolicy::Lenient && is_dist_tag(spec) {
        return Resolvability::Resolvable;
    }

    Resolvability::NonResolvable
}

/// Keeps the candidates whose specifiers classify as resolvable.
///
/// Stable: kept entries appear in their original candidate order.
/// Non-string specifiers never classify as resolvable.
pub fn filter_candidates(candidates: &[CandidateEntry], policy: DistTagPolicy) -> Vec<KeptEntry> {
    candidates
        .iter()
        .filter_map(|candidate| match &candidate.specifier {
            RawSpecifier::Text(text) if classify_with_policy(text, policy).is_resolvable() => {
                Some(KeptEntry::new(&candidate.name, text))
            }
            _ => None,
        })
        .collect()
}

/// Detects location-form specifiers: URLs, paths, workspace/npm aliases,
/// and GitHub `owner/repo` shorthands.
fn is_location(spec: &str) -> bool {
    let lower = spec.to_ascii_lowercase();

    if lower.contains("://") {
        return true;
    }
    if LOCATION_PREFIXES.iter().any(|p| lower.starts_with(p)) {
        return true;
    }
    if PATH_PREFIXES.iter().any(|p| spec.starts_with(p)) || spec == "." || spec == ".." {
        return true;
    }
    // GitHub shorthand ("owner/repo") and Windows paths; no semver range
    // contains these characters.
    spec.contains('/') || spec.contains('\\')
}

/// A bare dist-tag name: starts with a letter, followed by alphanumerics,
/// hyphens, underscores, or dots.
fn is_dist_tag(spec: &str) -> bool {
    let mut bytes = spec.bytes();
    bytes
        .next()
        .is_some_and(|b| b.is_ascii_alphabetic())
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
}
