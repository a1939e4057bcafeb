//! Core data structures for query entry extraction and selection.

use serde::Serialize;

/// One key/value pair extracted from a URL's query or fragment component.
///
/// Keys are not unique within a sequence; duplicates are preserved and
/// treated as distinct positional entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Parameter name, percent-decoded where the extractor decodes it.
    pub key: String,
    /// Parameter value; an absent value is represented as the empty string.
    pub value: String,
}

impl Entry {
    /// Create a new entry from a key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// An entry paired with its "enabled" flag.
///
/// Identity within a sequence is positional only. No identity is derived
/// from key or value content, since duplicate keys are legal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToggledEntry {
    /// Whether this entry is included in the rebuilt URL.
    pub enabled: bool,
    /// The underlying key/value pair.
    pub entry: Entry,
}

impl ToggledEntry {
    /// Wrap an entry with the flag set to enabled.
    pub fn new(entry: Entry) -> Self {
        Self {
            enabled: true,
            entry,
        }
    }
}

/// Tri-state aggregate of the enabled flags in a selection sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSummary {
    /// Every entry is enabled (and the sequence is non-empty).
    AllEnabled,
    /// No entry is enabled. An empty sequence summarizes to this.
    NoneEnabled,
    /// Some but not all entries are enabled.
    Mixed,
}

impl SelectionSummary {
    /// Label for the "toggle all" control.
    ///
    /// `Mixed` reads the same as `AllEnabled`: toggling while partially
    /// selected disables everything.
    pub fn toggle_all_label(self) -> &'static str {
        match self {
            SelectionSummary::NoneEnabled => "Enable all",
            SelectionSummary::AllEnabled | SelectionSummary::Mixed => "Disable all",
        }
    }
}
