//! Error types for querypick operations.

use thiserror::Error;

/// Errors that can occur while extracting entries or toggling a selection.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuerypickError {
    /// The address string is not a syntactically valid absolute URL.
    #[error("URL parsing failed: {0}")]
    Parse(#[from] url::ParseError),

    /// A toggle was requested for a position not present in the sequence.
    ///
    /// Callers are expected to only toggle indices they just observed, so
    /// hitting this is a contract violation rather than a runtime condition
    /// to surface to users.
    #[error("toggle index {index} is out of range for a sequence of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
