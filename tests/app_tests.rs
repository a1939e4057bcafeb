//! Tests for the orchestration layer: status messages, selection
//! lifecycle, and the copy path.

use querypick::{App, Clipboard, SelectionSummary, MSG_EMPTY, MSG_NO_PARAMS, MSG_UNPARSEABLE};

struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    fn new() -> Self {
        Self { contents: None }
    }
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> bool {
        self.contents = Some(text.to_string());
        true
    }
}

#[test]
fn test_fresh_app_prompts_for_input() {
    let app = App::new();
    assert_eq!(app.message(), MSG_EMPTY);
    assert!(app.entries().is_empty());
    assert_eq!(app.result_address(), None);
}

#[test]
fn test_unparseable_address_degrades_to_a_message() {
    let mut app = App::new();
    app.set_address("not a url");
    assert_eq!(app.message(), MSG_UNPARSEABLE);
    assert!(app.entries().is_empty());
    assert_eq!(app.result_address(), None);
}

#[test]
fn test_address_without_query() {
    let mut app = App::new();
    app.set_address("https://x.test/p");
    assert_eq!(app.message(), MSG_NO_PARAMS);
    assert!(app.entries().is_empty());
    // The result address is still shown for a valid URL.
    assert_eq!(app.result_address(), Some("https://x.test/p".to_string()));
}

#[test]
fn test_address_with_query_shows_the_list() {
    let mut app = App::new();
    app.set_address("https://x.test/p?a=1&b=2");
    assert_eq!(app.message(), "");
    assert_eq!(app.entries().len(), 2);
    assert_eq!(app.summary(), SelectionSummary::AllEnabled);
    assert_eq!(
        app.result_address(),
        Some("https://x.test/p?a=1&b=2".to_string())
    );
}

#[test]
fn test_toggling_updates_the_result() {
    let mut app = App::new();
    app.set_address("https://x.test/p?a=1&b=2");

    app.toggle_entry(0).unwrap();
    assert_eq!(app.summary(), SelectionSummary::Mixed);
    assert_eq!(app.toggle_all_label(), "Disable all");
    assert_eq!(app.result_address(), Some("https://x.test/p?b=2".to_string()));

    app.toggle_entry(1).unwrap();
    assert_eq!(app.summary(), SelectionSummary::NoneEnabled);
    assert_eq!(app.toggle_all_label(), "Enable all");
    assert_eq!(app.result_address(), Some("https://x.test/p".to_string()));
}

#[test]
fn test_toggle_all_round_trip() {
    let mut app = App::new();
    app.set_address("https://x.test/p?a=1&b=2");

    app.toggle_all();
    assert_eq!(app.summary(), SelectionSummary::NoneEnabled);

    app.toggle_all();
    assert_eq!(app.summary(), SelectionSummary::AllEnabled);
}

#[test]
fn test_toggle_out_of_range_is_an_error() {
    let mut app = App::new();
    app.set_address("https://x.test/p?a=1");
    assert!(app.toggle_entry(5).is_err());
}

#[test]
fn test_changing_address_replaces_the_selection_wholesale() {
    let mut app = App::new();
    app.set_address("https://x.test/p?a=1&b=2");
    app.toggle_entry(0).unwrap();

    // A new address gets a fresh, fully-enabled sequence.
    app.set_address("https://y.test/q?a=1&b=2");
    assert_eq!(app.summary(), SelectionSummary::AllEnabled);

    // Clearing the address discards the selection.
    app.set_address("");
    assert_eq!(app.message(), MSG_EMPTY);
    assert!(app.entries().is_empty());
    assert_eq!(app.result_address(), None);
}

#[test]
fn test_copy_result_writes_the_address_text() {
    let mut app = App::new();
    app.set_address("https://x.test/p?a=1&b=2");
    app.toggle_entry(1).unwrap();

    let mut clipboard = MemoryClipboard::new();
    assert!(app.copy_result(&mut clipboard));
    assert_eq!(clipboard.contents.as_deref(), Some("https://x.test/p?a=1"));
}

#[test]
fn test_copy_with_nothing_to_copy() {
    let app = App::new();
    let mut clipboard = MemoryClipboard::new();
    assert!(!app.copy_result(&mut clipboard));
    assert_eq!(clipboard.contents, None);
}
