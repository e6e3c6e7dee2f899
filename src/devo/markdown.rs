//! Markdown stripping.
//!
//! Generated text decorates content with inline markdown (bold, italic,
//! headers, list markers) that display does not want. Stripping is a fixed
//! sequence of replacements over the whole string; the sequence order is
//! load-bearing. Bold pairs are removed before italic pairs, otherwise a
//! `**bold**` span would be consumed as two empty italic spans. Line-start
//! markers (headers, bullets, numbered items) are removed only at true line
//! starts so that marker-like text inside a line survives.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*").unwrap());
static ITALIC_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*([^*]+)\*").unwrap());
static UNDERSCORE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"__(.*?)__").unwrap());
static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static HEADING_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#+\s+").unwrap());
static BULLET_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*[-*+]\s+").unwrap());
static NUMBER_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());

/// Remove inline markdown decoration, keeping the decorated text.
pub fn strip_markdown(text: &str) -> String {
    let text = BOLD_MARKER.replace_all(text, "");
    let text = ITALIC_SPAN.replace_all(&text, "$1");
    let text = UNDERSCORE_SPAN.replace_all(&text, "$1");
    let text = CODE_SPAN.replace_all(&text, "$1");
    let text = HEADING_MARKER.replace_all(&text, "");
    let text = BULLET_MARKER.replace_all(&text, "");
    let text = NUMBER_MARKER.replace_all(&text, "");
    text.trim().to_string()
}
