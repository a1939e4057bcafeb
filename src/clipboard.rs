//! Clipboard bridge: coerce a value to text and write it to the system
//! clipboard, reporting the outcome as a plain boolean.

use serde_json::Value;

/// A value headed for the clipboard.
///
/// Plain text is coerced directly; anything structured goes through JSON
/// serialization. The split exists because serializing a raw string as
/// JSON would wrap it in quote characters.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipboardPayload {
    /// Copied verbatim.
    Text(String),
    /// Serialized with `serde_json` before copying.
    Json(Value),
}

impl ClipboardPayload {
    /// Coerce the payload to the text that will be written.
    ///
    /// Returns `None` when JSON serialization fails.
    pub fn to_text(&self) -> Option<String> {
        match self {
            ClipboardPayload::Text(text) => Some(text.clone()),
            ClipboardPayload::Json(value) => serde_json::to_string(value).ok(),
        }
    }
}

impl From<&str> for ClipboardPayload {
    fn from(text: &str) -> Self {
        ClipboardPayload::Text(text.to_string())
    }
}

impl From<String> for ClipboardPayload {
    fn from(text: String) -> Self {
        ClipboardPayload::Text(text)
    }
}

impl From<Value> for ClipboardPayload {
    fn from(value: Value) -> Self {
        ClipboardPayload::Json(value)
    }
}

/// Destination for copied text. Implementations report success as a bool
/// and never panic on failure.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> bool;
}

/// System clipboard backed by arboard, initialized on first use.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { inner: None }
    }

    fn ensure(&mut self) -> Option<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            self.inner = arboard::Clipboard::new().ok();
        }
        self.inner.as_mut()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> bool {
        match self.ensure() {
            Some(clipboard) => clipboard.set_text(text.to_string()).is_ok(),
            None => false,
        }
    }
}

/// Coerce `payload` to text and write it to `clipboard`.
///
/// Returns `true` on success and `false` on any failure, whether the
/// coercion or the clipboard write. Failures are swallowed, never thrown.
pub fn copy_to_clipboard(clipboard: &mut dyn Clipboard, payload: &ClipboardPayload) -> bool {
    match payload.to_text() {
        Some(text) => clipboard.set_text(&text),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct MemoryClipboard {
        contents: Option<String>,
        fail: bool,
    }

    impl MemoryClipboard {
        fn new() -> Self {
            Self {
                contents: None,
                fail: false,
            }
        }
    }

    impl Clipboard for MemoryClipboard {
        fn set_text(&mut self, text: &str) -> bool {
            if self.fail {
                return false;
            }
            self.contents = Some(text.to_string());
            true
        }
    }

    #[test]
    fn test_text_payload_is_not_quoted() {
        assert_eq!(
            ClipboardPayload::from("hello").to_text(),
            Some("hello".to_string())
        );
    }

    #[test]
    fn test_json_payload_is_serialized() {
        assert_eq!(
            ClipboardPayload::from(json!({"a": 1})).to_text(),
            Some(r#"{"a":1}"#.to_string())
        );
    }

    #[test]
    fn test_json_string_gains_quotes() {
        // The reason the dual policy exists.
        assert_eq!(
            ClipboardPayload::Json(json!("hello")).to_text(),
            Some(r#""hello""#.to_string())
        );
    }

    #[test]
    fn test_entry_list_copies_as_json() {
        let entries = vec![crate::types::Entry::new("a", "1")];
        let payload = ClipboardPayload::Json(serde_json::to_value(&entries).unwrap());
        assert_eq!(
            payload.to_text(),
            Some(r#"[{"key":"a","value":"1"}]"#.to_string())
        );
    }

    #[test]
    fn test_copy_reports_success() {
        let mut clipboard = MemoryClipboard::new();
        assert!(copy_to_clipboard(&mut clipboard, &"abc".into()));
        assert_eq!(clipboard.contents.as_deref(), Some("abc"));
    }

    #[test]
    fn test_copy_swallows_write_failure() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.fail = true;
        assert!(!copy_to_clipboard(&mut clipboard, &"abc".into()));
        assert_eq!(clipboard.contents, None);
    }
}
