//! Section extraction: introduction, topics, conclusion, prayer.
//!
//! Every section is located by an independent scan over the full original
//! string, not by a single consuming tokenizer. A section is a slice between
//! a start label and the earliest following boundary label (or the end of
//! the text). Label keywords are distinct, so in well-formed input the
//! independent scans partition the text; in malformed input each scan simply
//! comes back empty on its own.
//!
//! Two label vocabularies coexist: Portuguese uppercase labels
//! ("INTRODUÇÃO:", "TÓPICO I:", "CONCLUSÃO:", "ORAÇÃO:") and English
//! bold-marked labels ("Introduction:", "Reflection:", "Practical
//! Application:", "Closing Prayer:"). Matching is case-insensitive and
//! tolerates labels anywhere in a line, not only at line starts. There is no
//! English conclusion label: English-shaped documents always produce an
//! empty conclusion. That asymmetry is long-standing observed behavior and
//! is kept as-is.

use once_cell::sync::Lazy;
use regex::Regex;

use super::document::Topic;
use super::markdown::strip_markdown;

// Portuguese labels.
static INTRODUCAO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)INTRODUÇÃO:").unwrap());
static TOPICO_I: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)TÓPICO I:").unwrap());
static TOPICO_ANY: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)TÓPICO ").unwrap());
static CONCLUSAO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)CONCLUSÃO:").unwrap());
static ORACAO: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)ORAÇÃO:").unwrap());

/// Topic headers carry a roman numeral from I to VI and a same-line title.
/// Numerals beyond VI are not recognized; a seventh topic is silently skipped.
static TOPICO_HEADER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)TÓPICO (I|II|III|IV|V|VI):\s*([^\n]+)").unwrap());

// English labels. The `_AT` variants (optional colon) locate a section
// start; the bare variants (colon required) bound the previous section.
static INTRODUCTION_AT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Introduction:?").unwrap());
static BIBLE_VERSES: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Bible Verses?:").unwrap());
static REFLECTION_AT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Reflection:?").unwrap());
static REFLECTION: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Reflection:").unwrap());
static APPLICATION_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Practical Application:?").unwrap());
static APPLICATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Practical Application:").unwrap());
static CLOSING_PRAYER_AT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)Closing Prayer:?").unwrap());
static CLOSING_PRAYER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)Closing Prayer:").unwrap());

// Structural markers used by the unlabeled English fallbacks.
static LEADING_TITLE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^Title[:\s]*[^\n]*\n+").unwrap());
static LEADING_BOLD_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*[^\n]*\*\*\s*\n+").unwrap());
static BOLD_TITLE_AND_BLANK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\*\*[^\n]*\*\*\s*\n\n").unwrap());
static BOLD_OPEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*").unwrap());
static NUMBERED_LIST_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^\s*1\.\s+[A-Z]").unwrap());
static NUMBERED_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^\s*\d+\.\s+").unwrap());

/// Slice the text between the first match of `label` and the earliest
/// following match of any boundary (or the end of the text).
fn label_slice<'t>(text: &'t str, label: &Regex, boundaries: &[&Regex]) -> Option<&'t str> {
    let found = label.find(text)?;
    let rest = &text[found.end()..];
    Some(bounded(rest, boundaries))
}

/// Truncate `rest` at the earliest boundary match, if any.
fn bounded<'t>(rest: &'t str, boundaries: &[&Regex]) -> &'t str {
    let end = boundaries
        .iter()
        .filter_map(|boundary| boundary.find(rest).map(|m| m.start()))
        .min()
        .unwrap_or(rest.len());
    &rest[..end]
}

/// Split a block into display paragraphs: one paragraph per non-empty line,
/// markdown-stripped, dropping lines that strip down to nothing.
pub(crate) fn split_paragraphs(block: &str) -> Vec<String> {
    block
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(strip_markdown)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Paragraph splitting for English fallback blocks: additionally drops a
/// leading bold title line and any line that opens with a bold delimiter,
/// so section headings are not re-captured as paragraphs.
fn split_paragraphs_en(block: &str) -> Vec<String> {
    let trimmed = block.trim();
    let without_title = LEADING_BOLD_TITLE.replace(trimmed, "");
    without_title
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("**"))
        .map(strip_markdown)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Extract the introduction paragraphs.
///
/// The Portuguese label is tried first; if it is missing or its block is
/// blank, the English chain runs: explicit "Introduction:" label, then the
/// start of the text (optionally skipping one leading "Title ..." line), then
/// a bold title line followed by a blank line. Within the chain the first
/// alternative whose start marker is present is taken, even when its block
/// turns out blank.
pub fn introduction(text: &str) -> Vec<String> {
    if let Some(block) = label_slice(text, &INTRODUCAO, &[&*TOPICO_I]) {
        if !block.trim().is_empty() {
            return split_paragraphs(block);
        }
    }

    if let Some(block) = label_slice(text, &INTRODUCTION_AT, &[&*BIBLE_VERSES, &*REFLECTION]) {
        return split_paragraphs_en(block);
    }

    if let Some(block) = intro_from_start(text) {
        return split_paragraphs_en(block);
    }

    if let Some(block) = intro_after_bold_title(text) {
        return split_paragraphs_en(block);
    }

    Vec::new()
}

/// Unlabeled fallback: everything from the start of the text (minus one
/// leading "Title ..." line) up to the first recognizable section marker.
/// Always applicable, so the chain never reaches past it in practice.
fn intro_from_start(text: &str) -> Option<&str> {
    let start = LEADING_TITLE_LINE.find(text).map_or(0, |m| m.end());
    let rest = &text[start..];
    Some(bounded(
        rest,
        &[&*BIBLE_VERSES, &*REFLECTION, &*NUMBERED_LIST_START],
    ))
}

/// Title-prefixed fallback: a lone bold line and a blank line, then text up
/// to the next bold span or labeled section.
fn intro_after_bold_title(text: &str) -> Option<&str> {
    let title = BOLD_TITLE_AND_BLANK.find(text)?;
    let rest = &text[title.end()..];
    Some(bounded(rest, &[&*BOLD_OPEN, &*BIBLE_VERSES, &*REFLECTION]))
}

/// Extract every topic: Portuguese numbered topics first, then the English
/// named sections, each list in source order.
pub fn topics(text: &str) -> Vec<Topic> {
    let mut topics = portuguese_topics(text);
    topics.extend(english_topics(text));
    topics
}

/// Collect "TÓPICO <numeral>: <title>" blocks with an explicit cursor,
/// advancing past each body so a malformed header inside a body cannot be
/// matched twice. Bodies run to the next topic marker, "CONCLUSÃO:",
/// "ORAÇÃO:", or the end of the text.
fn portuguese_topics(text: &str) -> Vec<Topic> {
    let mut topics = Vec::new();
    let mut cursor = 0;

    while let Some(caps) = TOPICO_HEADER.captures(&text[cursor..]) {
        let (Some(whole), Some(title)) = (caps.get(0), caps.get(2)) else {
            break;
        };
        let body_start = cursor + whole.end();
        let body = bounded(&text[body_start..], &[&*TOPICO_ANY, &*CONCLUSAO, &*ORACAO]);

        topics.push(Topic::new(
            strip_markdown(title.as_str()),
            split_paragraphs(body),
        ));
        cursor = body_start + body.len();
    }

    topics
}

/// Collect the English "Reflection" and "Practical Application" sections.
/// A practical-application block shaped as a numbered list keeps one
/// paragraph per list item; items are never merged across lines.
fn english_topics(text: &str) -> Vec<Topic> {
    let mut topics = Vec::new();

    if let Some(block) = label_slice(text, &REFLECTION_AT, &[&*APPLICATION, &*CLOSING_PRAYER]) {
        if !block.trim().is_empty() {
            topics.push(Topic::new("Reflection".to_string(), split_paragraphs(block)));
        }
    }

    if let Some(block) = label_slice(text, &APPLICATION_AT, &[&*CLOSING_PRAYER]) {
        let block = block.trim();
        if !block.is_empty() {
            let paragraphs = if NUMBERED_ITEM.is_match(block) {
                numbered_list_paragraphs(block)
            } else {
                split_paragraphs(block)
            };
            topics.push(Topic::new("Practical Application".to_string(), paragraphs));
        }
    }

    topics
}

/// One paragraph per non-empty list line, markdown-stripped (which also
/// removes the numeric marker itself).
fn numbered_list_paragraphs(block: &str) -> Vec<String> {
    block
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(strip_markdown)
        .filter(|item| !item.is_empty())
        .collect()
}

/// Extract the conclusion paragraphs. Portuguese only: there is no English
/// conclusion label.
pub fn conclusion(text: &str) -> Vec<String> {
    match label_slice(text, &CONCLUSAO, &[&*ORACAO]) {
        Some(block) => split_paragraphs(block),
        None => Vec::new(),
    }
}

/// Extract the prayer paragraphs: "ORAÇÃO:" to the end of the text, or
/// failing that "Closing Prayer:" to the end.
pub fn prayer(text: &str) -> Vec<String> {
    if let Some(block) = label_slice(text, &ORACAO, &[]) {
        if !block.trim().is_empty() {
            return split_paragraphs(block);
        }
    }

    match label_slice(text, &CLOSING_PRAYER_AT, &[]) {
        Some(block) => split_paragraphs(block),
        None => Vec::new(),
    }
}
