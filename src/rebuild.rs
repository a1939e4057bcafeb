//! URL reconstruction from a base URL and the enabled subset of a
//! selection sequence.

use url::Url;

use crate::types::ToggledEntry;

/// Build the result address: `base` with its query component replaced
/// wholesale by the serialization of the enabled entries, in order.
///
/// Serialization goes through the standard form-urlencoded serializer (a
/// space encodes as `+`). When no entry is enabled the result has no query
/// component at all, so no trailing `?`. Every other component of `base`
/// is carried over unchanged. Total: this never fails for a valid base.
///
/// # Examples
///
/// ```
/// use querypick::{build_result_address, extract_query_entries, initialize, toggle_one};
/// use url::Url;
///
/// let base = Url::parse("https://x.test/p?a=1&b=2").unwrap();
/// let sequence = initialize(extract_query_entries(base.as_str()).unwrap());
///
/// let sequence = toggle_one(&sequence, 0).unwrap();
/// let result = build_result_address(&base, &sequence);
/// assert_eq!(result.as_str(), "https://x.test/p?b=2");
/// ```
pub fn build_result_address(base: &Url, sequence: &[ToggledEntry]) -> Url {
    let enabled: Vec<_> = sequence
        .iter()
        .filter(|toggled| toggled.enabled)
        .map(|toggled| &toggled.entry)
        .collect();

    let mut result = base.clone();
    result.set_query(None);

    if !enabled.is_empty() {
        let mut pairs = result.query_pairs_mut();
        for entry in enabled {
            pairs.append_pair(&entry.key, &entry.value);
        }
    }

    result
}
