//! Verse and citation extraction.
//!
//! The quoted scripture and its citation can appear anywhere in the document,
//! in one of several shapes depending on the generator's mood and language.
//! The shapes are declared as named regex rules and tried in declaration
//! order; the first rule that matches anywhere in the text wins and no merge
//! across rules happens. Priority is part of the contract: the Portuguese
//! quoted form outranks every English form, and the labeled English form
//! outranks the unlabeled one.
//!
//! Known gaps, kept on purpose:
//! - citation classes start with a letter, so book names such as
//!   "1 Corinthians" are not recognized by the bold and parenthesized forms;
//! - the Portuguese citation accepts a single-word book name only.

use once_cell::sync::Lazy;
use regex::Regex;

use super::markdown::strip_markdown;

/// Verse/citation rules as named regex patterns.
/// Order matters: rules are tried in declaration order and the first match wins.
///
/// Every rule captures the verse text as group 1 and the citation as group 2.
const VERSE_PATTERNS: &[(&str, &str)] = &[
    // Portuguese: quoted text, then a citation like "Provérbios 3:5" anywhere later.
    (
        "pt_quoted",
        r#"(?i)["“”]([^"“”]+)["“”][\s\S]*?([A-Za-zÀ-ÖØ-öø-ÿ]+\s\d+:\d+(?:-\d+)?)"#,
    ),
    // English: after a "Bible Verses:" label (itself possibly bold-wrapped),
    // a bold verse span then a bold citation span.
    (
        "en_bold_labeled",
        r"(?i)Bible Verses?:(?:\*\*)?[\s\S]*?\*\*([^*]+)\*\*[\s\S]*?\*\*([A-Za-z\s]+\d+:\d+(?:-\d+)?)\*\*",
    ),
    // English: the same bold verse/citation pair without the label.
    (
        "en_bold",
        r"(?i)\*\*([^*]+)\*\*[\s\S]*?\*\*([A-Za-z\s]+\d+:\d+(?:-\d+)?)\*\*",
    ),
    // Quoted text with a parenthesized citation, optionally carrying a
    // translation code like "NIV". The quotes stay in the capture.
    (
        "quoted_paren",
        r#"(?i)(["'][^"']+["'])[\s\S]*?\(([A-Za-z\s]+\d+:\d+(?:-\d+)?(?:\s+[A-Z]+)?)\)"#,
    ),
    // Loose: near "verse"/"scripture", an unquoted run followed closely by a
    // parenthesized citation.
    (
        "labeled_loose",
        r#"(?i)(?:verse|scripture)[\s\S]{0,30}?([^"'\n]{10,150})[\s\S]{0,20}?\(([A-Za-z\s]+\d+:\d+(?:-\d+)?)\)"#,
    ),
];

static COMPILED_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    VERSE_PATTERNS
        .iter()
        .map(|(name, pattern)| (*name, Regex::new(pattern).unwrap()))
        .collect()
});

/// A matched verse/citation pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerseMatch {
    /// Name of the rule that matched, for auditing.
    pub pattern: &'static str,
    /// Verse text, markdown-stripped.
    pub verse: String,
    /// Citation text, markdown-stripped.
    pub reference: String,
}

/// Find the highest-priority verse/citation pair in the text.
pub fn find_verse(text: &str) -> Option<VerseMatch> {
    for (name, regex) in COMPILED_PATTERNS.iter() {
        if let Some(caps) = regex.captures(text) {
            let (Some(verse), Some(reference)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            return Some(VerseMatch {
                pattern: *name,
                verse: strip_markdown(verse.as_str()),
                reference: strip_markdown(reference.as_str()),
            });
        }
    }
    None
}
