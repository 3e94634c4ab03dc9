//! Semver range recognition.
//!
//! Decides whether a version specifier string is a semver version or range
//! expression, per npm range grammar:
//!
//! - single versions, with optional pre-release/build metadata and an
//!   optional leading `v` (`1.2.3`, `v1.2.3`, `1.2.3-beta.1+build.5`)
//! - comparator operators `^ ~ >= <= > < =` and `~>` (`^1.2.3`, `>=2.0.0`)
//! - whitespace-joined comparator sets (`>=1.2.3 <2.0.0`)
//! - hyphen ranges (`1.2.3 - 2.0.0`)
//! - `||`-joined alternatives (`^1.0.0 || ^2.0.0`)
//! - `x`/`X`/`*` wildcard components and the bare wildcard (`1.x`, `*`)
//!
//! This is a recognizer, not a resolver: it never evaluates a range against
//! concrete versions, it only answers whether a registry could. Full
//! three-part versions go through `semver::Version::parse` directly; the
//! partial and wildcard forms npm allows are parsed by hand around it.

use semver::Version;

/// Comparator operator prefixes, longest first so `>=` wins over `>`.
const OPERATORS: [&str; 8] = [">=", "<=", "~>", ">", "<", "=", "^", "~"];

/// Returns true when the trimmed specifier is a semver version or range.
///
/// The input must already be trimmed; the empty string is not a range
/// (the caller decides what the registry would do with it).
pub(crate) fn is_semver_range(spec: &str) -> bool {
    if spec.is_empty() {
        return false;
    }
    // Every ||-alternative must be well-formed for the whole expression
    // to count as a range.
    spec.split("||").all(|alt| is_range_alternative(alt.trim()))
}

/// Validates one `||`-free range alternative.
fn is_range_alternative(alt: &str) -> bool {
    if alt.is_empty() {
        return false;
    }

    // Hyphen ranges take both endpoints as plain partial versions, no
    // operators on either side.
    if let Some((low, high)) = alt.split_once(" - ") {
        return !high.contains(" - ")
            && is_partial_version(low.trim())
            && is_partial_version(high.trim());
    }

    alt.split_whitespace().all(is_comparator)
}

/// Validates a single comparator: an optional operator followed by a
/// partial version.
fn is_comparator(token: &str) -> bool {
    for op in OPERATORS {
        if let Some(rest) = token.strip_prefix(op) {
            return is_partial_version(rest);
        }
    }
    is_partial_version(token)
}

/// Validates a version that may omit trailing components or use wildcards.
///
/// Accepts `1`, `1.2`, `1.2.3`, `1.x`, `1.2.*`, `*`, and full versions
/// with pre-release/build metadata. Pre-release and build metadata are
/// only allowed on complete, wildcard-free versions.
fn is_partial_version(version: &str) -> bool {
    let version = version.strip_prefix('v').unwrap_or(version);
    if version.is_empty() {
        return false;
    }

    // Fast path: a complete semver version needs no hand parsing.
    if Version::parse(version).is_ok() {
        return true;
    }

    // Split off build metadata, then pre-release.
    let (version, build) = match version.split_once('+') {
        Some((v, b)) => (v, Some(b)),
        None => (version, None),
    };
    let (core, prerelease) = match version.split_once('-') {
        Some((v, p)) => (v, Some(p)),
        None => (version, None),
    };

    let parts: Vec<&str> = core.split('.').collect();
    if parts.is_empty() || parts.len() > 3 {
        return false;
    }
    if !parts.iter().all(|p| is_version_component(p)) {
        return false;
    }

    // "1.2-beta" and "1.x+build" are not versions npm can resolve.
    if prerelease.is_some() || build.is_some() {
        let complete = parts.len() == 3 && parts.iter().all(|p| !is_wildcard(p));
        if !complete {
            return false;
        }
    }

    prerelease.is_none_or(is_metadata_segment) && build.is_none_or(is_metadata_segment)
}

/// A numeric component or a wildcard.
fn is_version_component(part: &str) -> bool {
    is_wildcard(part) || (!part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

fn is_wildcard(part: &str) -> bool {
    matches!(part, "x" | "X" | "*")
}

/// Dot-separated alphanumeric/hyphen identifiers, none empty.
fn is_metadata_segment(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .split('.')
            .all(|id| !id.is_empty() && id.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-'))
}
