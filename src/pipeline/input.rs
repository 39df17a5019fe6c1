//! Input resolution: turn whatever the upstream agent returned into text.
//!
//! Agents hand back plain strings, chat messages, or whole conversation
//! states depending on the framework. [`TextContent`] gives the engine one
//! narrow way to get text out of any of them, with explicit fallbacks instead
//! of ad hoc type probing at call sites.

use crate::error::SegmentError;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Anything the segmenter can read itinerary text from.
pub trait TextContent {
    /// The textual content, or `""` when there is none.
    fn extract_text(&self) -> String;
}

impl TextContent for str {
    fn extract_text(&self) -> String {
        self.to_string()
    }
}

impl TextContent for String {
    fn extract_text(&self) -> String {
        self.clone()
    }
}

/// An absent reply is treated as empty text.
impl<T: TextContent> TextContent for Option<T> {
    fn extract_text(&self) -> String {
        self.as_ref().map(TextContent::extract_text).unwrap_or_default()
    }
}

/// JSON replies, in order of preference:
///
/// 1. a string is used as-is;
/// 2. `{"messages": [...]}` yields the last message's text;
/// 3. `{"content": ...}` yields that content;
/// 4. `null` is empty;
/// 5. anything else is stringified.
impl TextContent for Value {
    fn extract_text(&self) -> String {
        match self {
            Value::String(s) => s.clone(),
            Value::Null => String::new(),
            Value::Object(map) => {
                if let Some(Value::Array(messages)) = map.get("messages") {
                    return messages
                        .last()
                        .map(message_text)
                        .unwrap_or_default();
                }
                if let Some(content) = map.get("content") {
                    return content.extract_text();
                }
                self.to_string()
            }
            other => other.to_string(),
        }
    }
}

/// Text of one chat message: its `content` when it has one, else the message
/// itself stringified.
fn message_text(message: &Value) -> String {
    match message {
        Value::Object(map) if map.contains_key("content") => map["content"].extract_text(),
        other => other.extract_text(),
    }
}

/// Read an itinerary text file.
pub fn read_itinerary_file(path: impl AsRef<Path>) -> Result<String, SegmentError> {
    let path: PathBuf = path.as_ref().to_path_buf();
    match std::fs::read_to_string(&path) {
        Ok(text) => {
            debug!("Read {} bytes from {}", text.len(), path.display());
            Ok(text)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(SegmentError::InputNotFound { path })
        }
        Err(e) if e.kind() == std::io::ErrorKind::PermissionDenied => {
            Err(SegmentError::PermissionDenied { path })
        }
        Err(source) => Err(SegmentError::InputReadFailed { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_string_identity() {
        assert_eq!("Day 1".extract_text(), "Day 1");
        assert_eq!(String::from("x").extract_text(), "x");
    }

    #[test]
    fn test_none_is_empty() {
        let reply: Option<String> = None;
        assert_eq!(reply.extract_text(), "");
    }

    #[test]
    fn test_last_message_content() {
        let v = json!({"messages": [
            {"role": "user", "content": "Plan Goa"},
            {"role": "assistant", "content": "Day 1\nBeach"}
        ]});
        assert_eq!(v.extract_text(), "Day 1\nBeach");
    }

    #[test]
    fn test_message_without_content_stringified() {
        let v = json!({"messages": ["hello", 42]});
        assert_eq!(v.extract_text(), "42");
    }

    #[test]
    fn test_content_field() {
        assert_eq!(json!({"content": "Weather\nHot"}).extract_text(), "Weather\nHot");
    }

    #[test]
    fn test_unknown_shape_stringified() {
        assert_eq!(json!({"answer": 1}).extract_text(), r#"{"answer":1}"#);
        assert_eq!(json!([1, 2]).extract_text(), "[1,2]");
        assert_eq!(Value::Null.extract_text(), "");
    }

    #[test]
    fn test_missing_file() {
        let err = read_itinerary_file("/definitely/not/here.txt").unwrap_err();
        assert!(matches!(err, SegmentError::InputNotFound { .. }));
    }
}
