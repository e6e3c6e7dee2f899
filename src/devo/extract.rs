//! Extraction driver.
//!
//! Assembles a [`DevotionalDocument`] from loosely formatted text. Each
//! piece (verse, introduction, topics, conclusion, prayer) is an
//! independent scan over the same canonical string; no scan consumes input
//! from another, so their relative order carries no meaning. The driver
//! never fails: absent or unmatched pieces stay empty.

use super::document::DevotionalDocument;
use super::input::RawInput;
use super::sections;
use super::verse;

/// Parse raw devotional text into a structured document.
///
/// Accepts any [`RawInput`]; [`RawInput::Absent`] and empty text yield a
/// fully formed empty document.
pub fn extract(raw: &RawInput) -> DevotionalDocument {
    let Some(text) = raw.canonical_text() else {
        return DevotionalDocument::default();
    };
    if text.is_empty() {
        return DevotionalDocument::default();
    }

    let mut document = DevotionalDocument::default();

    if let Some(found) = verse::find_verse(&text) {
        document.verse = Some(found.verse);
        document.reference = Some(found.reference);
    }

    document.introduction = sections::introduction(&text);
    document.topics = sections::topics(&text);
    document.conclusion = sections::conclusion(&text);
    document.prayer = sections::prayer(&text);

    document
}
