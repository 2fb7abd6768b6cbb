//! Snippet data model.
//!
//! The types here are designed for serialization with [`serde`] and
//! round-trip through JSON output and SQLite storage.

use serde::{Deserialize, Serialize};

/// Sentinel printed when a requested keyword has no stored snippet.
pub const SNIPPET_NOT_FOUND: &str = "404 Snippet Not Found";

/// Sentinel printed when a catalog listing finds no snippets at all.
pub const NO_SNIPPETS_FOUND: &str = "404 No Snippets Found";

/// A named unit of stored text.
///
/// The `keyword` uniquely identifies the snippet; the `message` is an
/// arbitrary text body with no length constraint. At most one snippet
/// exists per keyword at any time, enforced by the storage layer.
///
/// # Examples
///
/// ```
/// use snippet_core::Snippet;
///
/// let snippet = Snippet::new("deploy", "cargo build --release");
/// assert_eq!(snippet.keyword, "deploy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique name under which the message is stored.
    pub keyword: String,
    /// Stored text body.
    pub message: String,
}

impl Snippet {
    /// Creates a snippet from a keyword and message.
    pub fn new(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snippet_json_round_trip() {
        let snippet = Snippet::new("k1", "hello world");
        let json = serde_json::to_string(&snippet).unwrap();
        let back: Snippet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snippet);
    }

    #[test]
    fn test_sentinels_are_distinct() {
        assert_ne!(SNIPPET_NOT_FOUND, NO_SNIPPETS_FOUND);
    }

    #[test]
    fn test_message_equal_to_sentinel_is_just_text() {
        let snippet = Snippet::new("k", SNIPPET_NOT_FOUND);
        assert_eq!(snippet.message, SNIPPET_NOT_FOUND);
    }
}
