//! The entry selection model: per-entry enabled flags over an ordered
//! sequence, with a derived tri-state summary.
//!
//! Every operation here is value-producing. Callers may hold references to
//! a prior sequence, so an operation reads a snapshot and returns a new
//! sequence rather than flipping flags in place. The summary is always
//! recomputed in full from the sequence; there is no cached aggregate that
//! could desynchronize.

use crate::error::QuerypickError;
use crate::types::{Entry, SelectionSummary, ToggledEntry};

/// Wrap each entry with an enabled flag set to true, preserving order.
pub fn initialize(entries: Vec<Entry>) -> Vec<ToggledEntry> {
    entries.into_iter().map(ToggledEntry::new).collect()
}

/// Return a new sequence with the flag at `index` inverted.
///
/// Fails with `IndexOutOfRange` when `index` is outside the sequence.
///
/// # Examples
///
/// ```
/// use querypick::{initialize, toggle_one, Entry};
///
/// let sequence = initialize(vec![Entry::new("a", "1"), Entry::new("b", "2")]);
/// let toggled = toggle_one(&sequence, 0).unwrap();
/// assert!(!toggled[0].enabled);
/// assert!(toggled[1].enabled);
/// assert!(sequence[0].enabled);
/// ```
pub fn toggle_one(
    sequence: &[ToggledEntry],
    index: usize,
) -> Result<Vec<ToggledEntry>, QuerypickError> {
    if index >= sequence.len() {
        return Err(QuerypickError::IndexOutOfRange {
            index,
            len: sequence.len(),
        });
    }

    Ok(sequence
        .iter()
        .enumerate()
        .map(|(i, toggled)| ToggledEntry {
            enabled: if i == index {
                !toggled.enabled
            } else {
                toggled.enabled
            },
            entry: toggled.entry.clone(),
        })
        .collect())
}

/// Return a new sequence with every flag set the same way.
///
/// When the current summary is `NoneEnabled`, everything is enabled;
/// otherwise (`AllEnabled` or `Mixed`) everything is disabled. Toggling
/// while partially selected therefore disables, not enables.
pub fn toggle_all(sequence: &[ToggledEntry]) -> Vec<ToggledEntry> {
    let enable = summarize(sequence) == SelectionSummary::NoneEnabled;

    sequence
        .iter()
        .map(|toggled| ToggledEntry {
            enabled: enable,
            entry: toggled.entry.clone(),
        })
        .collect()
}

/// Compute the tri-state summary of a sequence's enabled flags.
///
/// Total for every input: an empty sequence summarizes to `NoneEnabled`.
pub fn summarize(sequence: &[ToggledEntry]) -> SelectionSummary {
    let enabled_count = sequence.iter().filter(|toggled| toggled.enabled).count();

    if enabled_count == 0 {
        SelectionSummary::NoneEnabled
    } else if enabled_count == sequence.len() {
        SelectionSummary::AllEnabled
    } else {
        SelectionSummary::Mixed
    }
}
