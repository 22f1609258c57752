//! Core functionality for rebuilding package archives
//!
//! Contains the archive sweep and the sequential per-project rebuild loop.

pub mod archives;
pub mod rebuilder;

pub use rebuilder::{PackageRebuilder, ProjectOutcome, RebuildSummary};
