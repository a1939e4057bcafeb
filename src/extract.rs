//! Entry extraction from a URL's query and fragment components.
//!
//! Both extractors accept an arbitrary string and fail with a parse error
//! when it is not a valid absolute URL. Relative references are rejected.

use std::cmp::Ordering;

use url::Url;

use crate::error::QuerypickError;
use crate::types::Entry;

/// Extract query-component entries from an address string.
///
/// Entries come back in the order they occur, percent-decoded, with
/// duplicate keys preserved. An empty value (`?a=`) and a valueless key
/// (`?a`) both yield an entry with an empty value string.
///
/// # Examples
///
/// ```
/// use querypick::{extract_query_entries, Entry};
///
/// let entries = extract_query_entries("https://x.test/p?a=1&a=2&b=").unwrap();
/// assert_eq!(entries, vec![
///     Entry::new("a", "1"),
///     Entry::new("a", "2"),
///     Entry::new("b", ""),
/// ]);
/// ```
pub fn extract_query_entries(address: &str) -> Result<Vec<Entry>, QuerypickError> {
    let url = Url::parse(address)?;
    Ok(query_entries_of(&url))
}

/// Collect the decoded query pairs of an already-parsed URL.
pub fn query_entries_of(url: &Url) -> Vec<Entry> {
    url.query_pairs()
        .map(|(key, value)| Entry::new(key, value))
        .collect()
}

/// Extract fragment-component entries from an address string.
///
/// The fragment (text after `#`) is split on `&` into candidate pairs, then
/// each candidate on `=`. A candidate is silently discarded unless the `=`
/// split yields exactly two pieces, so a value containing a literal `=`
/// drops that pair. The value half is percent-decoded; the key half is kept
/// raw. Both quirks are deliberate behavior-compatibility, not oversights.
///
/// # Examples
///
/// ```
/// use querypick::{extract_fragment_entries, Entry};
///
/// let entries = extract_fragment_entries("https://x.test/p#a=1&b=2&bad").unwrap();
/// assert_eq!(entries, vec![Entry::new("a", "1"), Entry::new("b", "2")]);
/// ```
pub fn extract_fragment_entries(address: &str) -> Result<Vec<Entry>, QuerypickError> {
    let url = Url::parse(address)?;
    let fragment = url.fragment().unwrap_or("");

    let mut entries = Vec::new();
    for candidate in fragment.split('&') {
        let pieces: Vec<&str> = candidate.split('=').collect();
        if pieces.len() != 2 {
            continue;
        }
        // A value that is not valid UTF-8 after percent-expansion is
        // dropped along with its key rather than failing the extraction.
        let Ok(value) = urlencoding::decode(pieces[1]) else {
            continue;
        };
        entries.push(Entry::new(pieces[0], value));
    }

    Ok(entries)
}

/// Compare two entries by lowercased key, for case-insensitive sorting.
///
/// # Examples
///
/// ```
/// use querypick::{sort_by_lowercase_key, Entry};
///
/// let mut entries = vec![Entry::new("Beta", "2"), Entry::new("alpha", "1")];
/// entries.sort_by(sort_by_lowercase_key);
/// assert_eq!(entries[0].key, "alpha");
/// ```
pub fn sort_by_lowercase_key(a: &Entry, b: &Entry) -> Ordering {
    a.key.to_lowercase().cmp(&b.key.to_lowercase())
}
