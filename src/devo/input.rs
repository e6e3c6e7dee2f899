//! Raw input union accepted by the parsing entry points.
//!
//! Upstream generation code hands titles and document bodies around in loose
//! shapes: a plain string, a list of string fragments, a string-to-string
//! mapping, or nothing at all. Rather than accepting only `&str` and pushing
//! the shape problem onto every caller, the union is modeled as an explicit
//! tagged variant. Each variant canonicalizes to a single string before any
//! pattern matching begins; structured inputs are flattened, never merged
//! field by field.

use std::collections::BTreeMap;

/// Loosely shaped input for title normalization and document extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawInput {
    /// No value was supplied. Distinct from an empty string.
    Absent,
    /// A single string, used verbatim.
    Text(String),
    /// A list of string fragments, flattened with commas.
    Sequence(Vec<String>),
    /// A string-to-string mapping, flattened to its values in key order.
    Mapping(BTreeMap<String, String>),
}

impl RawInput {
    /// Canonical string form of the input, or `None` for [`RawInput::Absent`].
    ///
    /// `Sequence` joins its elements with `","`. `Mapping` joins its values
    /// with `","` in key order. An empty sequence or mapping canonicalizes to
    /// the empty string, the same as `Text(String::new())`.
    pub fn canonical_text(&self) -> Option<String> {
        match self {
            RawInput::Absent => None,
            RawInput::Text(text) => Some(text.clone()),
            RawInput::Sequence(items) => Some(items.join(",")),
            RawInput::Mapping(entries) => {
                Some(entries.values().cloned().collect::<Vec<_>>().join(","))
            }
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, RawInput::Absent)
    }
}

impl From<&str> for RawInput {
    fn from(text: &str) -> Self {
        RawInput::Text(text.to_string())
    }
}

impl From<String> for RawInput {
    fn from(text: String) -> Self {
        RawInput::Text(text)
    }
}

impl From<Vec<String>> for RawInput {
    fn from(items: Vec<String>) -> Self {
        RawInput::Sequence(items)
    }
}

impl From<&[&str]> for RawInput {
    fn from(items: &[&str]) -> Self {
        RawInput::Sequence(items.iter().map(|item| item.to_string()).collect())
    }
}

impl From<BTreeMap<String, String>> for RawInput {
    fn from(entries: BTreeMap<String, String>) -> Self {
        RawInput::Mapping(entries)
    }
}

impl<T> From<Option<T>> for RawInput
where
    T: Into<RawInput>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => RawInput::Absent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_has_no_canonical_text() {
        assert_eq!(RawInput::Absent.canonical_text(), None);
        assert!(RawInput::Absent.is_absent());
    }

    #[test]
    fn text_is_used_verbatim() {
        let input = RawInput::from("Um texto qualquer");
        assert_eq!(input.canonical_text().as_deref(), Some("Um texto qualquer"));
    }

    #[test]
    fn sequence_is_joined_with_commas() {
        let input = RawInput::from(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(input.canonical_text().as_deref(), Some("a,b"));

        let input = RawInput::from(&["c", "d"][..]);
        assert_eq!(input.canonical_text().as_deref(), Some("c,d"));
    }

    #[test]
    fn mapping_flattens_values_in_key_order() {
        let mut entries = BTreeMap::new();
        entries.insert("b".to_string(), "segundo".to_string());
        entries.insert("a".to_string(), "primeiro".to_string());
        let input = RawInput::from(entries);
        assert_eq!(input.canonical_text().as_deref(), Some("primeiro,segundo"));
    }

    #[test]
    fn option_none_maps_to_absent() {
        let input: RawInput = Option::<&str>::None.into();
        assert!(input.is_absent());
    }

    #[test]
    fn empty_text_is_not_absent() {
        let input = RawInput::from("");
        assert!(!input.is_absent());
        assert_eq!(input.canonical_text().as_deref(), Some(""));
    }
}
