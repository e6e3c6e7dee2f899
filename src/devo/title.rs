//! Title normalization.
//!
//! Generated titles come back wrapped in stray quotes (straight or curly,
//! sometimes doubled) and with arbitrary casing. Display wants a single
//! canonical shape: quotes stripped, first word capitalized, every other
//! word lowercased. Acronyms and proper nouns are deliberately not
//! preserved; the rule is uniform so that normalizing an already-normalized
//! title is a no-op.

use super::input::RawInput;

/// Quote characters stripped from title boundaries.
const QUOTE_CHARS: &[char] = &['"', '\'', '\u{201C}', '\u{201D}'];

/// Normalize a raw title into display form.
///
/// [`RawInput::Absent`] propagates as `None`; every other input yields
/// `Some`, including inputs that normalize to the empty string.
pub fn normalize(raw: &RawInput) -> Option<String> {
    let text = raw.canonical_text()?;
    Some(normalize_text(&text))
}

/// Normalize a title string: strip boundary quotes, capitalize the first
/// word, lowercase the rest.
pub fn normalize_text(raw: &str) -> String {
    let stripped = strip_boundary_quotes(raw);

    stripped
        .split(' ')
        .enumerate()
        .map(|(index, word)| {
            if index == 0 {
                capitalize(word)
            } else {
                word.to_lowercase()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Strip whitespace and quote runs from both boundaries until stable.
///
/// Quotes and whitespace can interleave (`'" Title "'`), so a single
/// trim-then-strip pass is not enough; iterating to a fixpoint guarantees
/// the result has neither boundary quotes nor boundary whitespace.
fn strip_boundary_quotes(raw: &str) -> &str {
    let mut text = raw.trim();
    loop {
        let stripped = text.trim_matches(|c: char| QUOTE_CHARS.contains(&c)).trim();
        if stripped == text {
            return stripped;
        }
        text = stripped;
    }
}

/// Uppercase the first character of a word and lowercase the remainder.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            let mut result: String = first.to_uppercase().collect();
            result.push_str(&chars.as_str().to_lowercase());
            result
        }
        None => String::new(),
    }
}
