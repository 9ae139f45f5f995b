//! Error types for ansible2tab-core

use thiserror::Error;

/// Errors produced by this crate
///
/// Parsing and formatting are total; the only failure is asking for an
/// output format that does not exist.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Format name did not match any supported output format
    #[error("unknown output format: {0} (expected tsv, json, md, or mdcode)")]
    UnknownFormat(String),
}

/// Result type alias for ansible2tab-core operations
pub type Result<T> = std::result::Result<T, Error>;
