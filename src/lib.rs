//! Depsieve - package manifest ingestion with registry-resolvable dependency extraction
//!
//! This crate takes untrusted `package.json`-shaped text, validates it as a
//! JSON object, extracts its `dependencies` and `devDependencies` maps, and
//! filters out entries whose version specifier points at a location (git,
//! filesystem, workspace) rather than a registry-published version. The
//! surviving entries are ready for downstream lookup against a package
//! registry.
//!
//! The whole surface is one pure operation: [`ingest::ingest`].

pub mod ingest;
pub mod parser;
pub mod specifier;
