//! Structured devotional document.
//!
//! The parse result is always fully populated: absent pieces are `None` or
//! empty sequences, never an error. Every sequence preserves source order,
//! and every paragraph is trimmed, non-empty, and free of markdown
//! decoration. Values are owned and compared by value; the caller owns the
//! result exclusively.

use serde::{Deserialize, Serialize};

/// One titled subsection of a devotional body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub title: String,
    pub paragraphs: Vec<String>,
}

impl Topic {
    pub fn new(title: String, paragraphs: Vec<String>) -> Self {
        Self { title, paragraphs }
    }
}

/// Parsed devotional content, ready for display.
///
/// Consumers render only the populated pieces: a `None` verse or an empty
/// paragraph sequence means the section is simply omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevotionalDocument {
    /// Quoted scripture text, markdown-stripped.
    pub verse: Option<String>,
    /// Citation for the verse, e.g. "João 3:16".
    pub reference: Option<String>,
    pub introduction: Vec<String>,
    pub topics: Vec<Topic>,
    pub conclusion: Vec<String>,
    pub prayer: Vec<String>,
}

impl DevotionalDocument {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.verse.is_none()
            && self.reference.is_none()
            && self.introduction.is_empty()
            && self.topics.is_empty()
            && self.conclusion.is_empty()
            && self.prayer.is_empty()
    }

    /// Every paragraph across all sections, in document order.
    pub fn iter_paragraphs(&self) -> impl Iterator<Item = &str> {
        self.introduction
            .iter()
            .map(String::as_str)
            .chain(
                self.topics
                    .iter()
                    .flat_map(|topic| topic.paragraphs.iter().map(String::as_str)),
            )
            .chain(self.conclusion.iter().map(String::as_str))
            .chain(self.prayer.iter().map(String::as_str))
    }
}
