//! querypick - toggleable URL query parameters
//!
//! This crate parses a URL's query component into an ordered list of
//! key/value entries, tracks a per-entry enabled flag, and rebuilds a URL
//! containing only the enabled subset. The rebuilt address can be pushed
//! to the system clipboard.
//!
//! # Features
//!
//! - **Order-preserving**: entries keep their source-URL order, duplicate
//!   keys included
//! - **Positional identity**: toggling addresses an entry by index, never
//!   by key, so duplicate keys cannot collide
//! - **Value-producing**: toggle operations return a new sequence instead
//!   of mutating in place
//! - **Standards-compliant**: parsing and re-serialization go through the
//!   `url` crate's form-urlencoded machinery, never hand-rolled encoding
//!
//! # Quick Start
//!
//! ```
//! use querypick::{
//!     build_result_address, extract_query_entries, initialize, summarize,
//!     toggle_one, SelectionSummary,
//! };
//! use url::Url;
//!
//! let address = "https://x.test/p?a=1&b=2";
//!
//! // Parse the query into a selection sequence, everything enabled.
//! let entries = extract_query_entries(address)?;
//! let sequence = initialize(entries);
//! assert_eq!(summarize(&sequence), SelectionSummary::AllEnabled);
//!
//! // Disable the first parameter and rebuild.
//! let sequence = toggle_one(&sequence, 0)?;
//! let base = Url::parse(address)?;
//! let result = build_result_address(&base, &sequence);
//! assert_eq!(result.as_str(), "https://x.test/p?b=2");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Error Handling
//!
//! Extraction returns `Result<_, QuerypickError>`; the only runtime error
//! is a failed URL parse. Toggling an out-of-range index is a caller
//! contract violation surfaced as `IndexOutOfRange`. Clipboard failures
//! are reported as a `false` return, never as an error.

pub mod app;
pub mod clipboard;
pub mod error;
pub mod extract;
pub mod rebuild;
pub mod selection;
pub mod types;

// Orchestration state for a presentation layer
pub use app::{App, MSG_EMPTY, MSG_NO_PARAMS, MSG_UNPARSEABLE};

// Clipboard bridge
pub use clipboard::{copy_to_clipboard, Clipboard, ClipboardPayload, SystemClipboard};

pub use error::QuerypickError;

// Entry extraction
pub use extract::{
    extract_fragment_entries, extract_query_entries, query_entries_of, sort_by_lowercase_key,
};

// URL reconstruction
pub use rebuild::build_result_address;

// Selection model
pub use selection::{initialize, summarize, toggle_all, toggle_one};

pub use types::{Entry, SelectionSummary, ToggledEntry};
