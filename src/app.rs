//! Orchestration layer: wires an address string through extraction, the
//! selection model, and reconstruction, and exposes the state a
//! presentation layer renders.

use url::Url;

use crate::clipboard::{copy_to_clipboard, Clipboard, ClipboardPayload};
use crate::error::QuerypickError;
use crate::extract::query_entries_of;
use crate::rebuild::build_result_address;
use crate::selection;
use crate::types::{SelectionSummary, ToggledEntry};

/// Status when no address has been entered yet.
pub const MSG_EMPTY: &str = "Input a URL to get started";
/// Status when the address does not parse as an absolute URL.
pub const MSG_UNPARSEABLE: &str = "The URL could not be parsed";
/// Status when the address parses but carries no query parameters.
pub const MSG_NO_PARAMS: &str = "No query parameters found in URL";

/// In-memory application state.
///
/// The selection sequence is replaced wholesale whenever the address
/// changes; it is never migrated across addresses. Malformed input
/// degrades to a status message, never to a failure.
pub struct App {
    address: String,
    url: Option<Url>,
    entries: Vec<ToggledEntry>,
    message: &'static str,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            address: String::new(),
            url: None,
            entries: Vec::new(),
            message: MSG_EMPTY,
        }
    }

    /// Replace the address and rebuild all derived state.
    pub fn set_address(&mut self, address: &str) {
        self.address = address.to_string();

        if address.is_empty() {
            self.url = None;
            self.entries = Vec::new();
            self.message = MSG_EMPTY;
            return;
        }

        match Url::parse(address) {
            Ok(url) => {
                let entries = query_entries_of(&url);
                self.message = if entries.is_empty() { MSG_NO_PARAMS } else { "" };
                self.entries = selection::initialize(entries);
                self.url = Some(url);
            }
            Err(_) => {
                self.url = None;
                self.entries = Vec::new();
                self.message = MSG_UNPARSEABLE;
            }
        }
    }

    /// The address as last entered.
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Current status message; empty when the entry list is shown.
    pub fn message(&self) -> &str {
        self.message
    }

    /// Current selection sequence, in source-URL order.
    pub fn entries(&self) -> &[ToggledEntry] {
        &self.entries
    }

    /// Tri-state aggregate of the current selection.
    pub fn summary(&self) -> SelectionSummary {
        selection::summarize(&self.entries)
    }

    /// Label for the "toggle all" control.
    pub fn toggle_all_label(&self) -> &'static str {
        self.summary().toggle_all_label()
    }

    /// Invert the enabled flag of the entry at `index`.
    pub fn toggle_entry(&mut self, index: usize) -> Result<(), QuerypickError> {
        self.entries = selection::toggle_one(&self.entries, index)?;
        Ok(())
    }

    /// Enable or disable every entry, per the current summary.
    pub fn toggle_all(&mut self) {
        self.entries = selection::toggle_all(&self.entries);
    }

    /// The rebuilt URL containing only the enabled entries, or `None`
    /// when no valid URL is held.
    pub fn result_address(&self) -> Option<String> {
        self.url
            .as_ref()
            .map(|url| build_result_address(url, &self.entries).to_string())
    }

    /// Copy the result address to `clipboard`. Returns `false` when there
    /// is no result to copy or the write fails.
    pub fn copy_result(&self, clipboard: &mut dyn Clipboard) -> bool {
        match self.result_address() {
            Some(address) => copy_to_clipboard(clipboard, &ClipboardPayload::Text(address)),
            None => false,
        }
    }
}
