//! Shortcut-to-label bindings.

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// A label name bound to a single canonical (uppercase) shortcut key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub shortcut: char,
    pub text: String,
}

/// Bijective mapping from shortcut keys to label names, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    labels: Vec<Label>,
}

impl LabelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `text` to `shortcut`. Both are trimmed; the shortcut is uppercased
    /// and must then be exactly one character.
    pub fn add(&mut self, shortcut: &str, text: &str) -> Result<char, LabelError> {
        let text = text.trim();
        let raw = shortcut.trim();
        if text.is_empty() || raw.is_empty() {
            return Err(LabelError::EmptyField);
        }
        let key = normalize_shortcut(raw)?;
        if self.get(key).is_some() {
            return Err(LabelError::DuplicateShortcut(key));
        }
        self.labels.push(Label {
            shortcut: key,
            text: text.to_string(),
        });
        tracing::debug!("label added: {key}={text}");
        Ok(key)
    }

    /// Remove the binding for `shortcut`, returning the removed label.
    pub fn remove(&mut self, shortcut: &str) -> Result<Label, LabelError> {
        let idx = normalize_shortcut(shortcut.trim())
            .ok()
            .and_then(|key| self.labels.iter().position(|l| l.shortcut == key))
            .ok_or_else(|| LabelError::NotFound(shortcut.trim().to_string()))?;
        Ok(self.labels.remove(idx))
    }

    /// Look up the label text for a key press. The key is case-folded first.
    pub fn get(&self, key: char) -> Option<&str> {
        let key = canonical_key(key)?;
        self.labels
            .iter()
            .find(|l| l.shortcut == key)
            .map(|l| l.text.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }

    /// Legend line such as `Shortcuts: A=cat   B=dog`.
    pub fn legend(&self) -> String {
        let mut text = String::from("Shortcuts: ");
        for label in &self.labels {
            text.push_str(&format!("{}={}   ", label.shortcut, label.text));
        }
        text.trim_end().to_string()
    }
}

fn normalize_shortcut(raw: &str) -> Result<char, LabelError> {
    let upper = raw.to_uppercase();
    let mut chars = upper.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LabelError::InvalidShortcut),
    }
}

/// Uppercase a single key, rejecting keys whose uppercase form is not one char.
pub(crate) fn canonical_key(key: char) -> Option<char> {
    let mut upper = key.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn duplicate_shortcut_is_rejected_case_insensitively() {
        let mut set = LabelSet::new();
        assert_eq!(set.add("c", "cat"), Ok('C'));
        assert_eq!(set.add("C", "dog"), Err(LabelError::DuplicateShortcut('C')));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get('C'), Some("cat"));
        assert_eq!(set.get('c'), Some("cat"));
    }

    #[rstest]
    #[case("", "cat", LabelError::EmptyField)]
    #[case("   ", "cat", LabelError::EmptyField)]
    #[case("A", "  ", LabelError::EmptyField)]
    #[case("AB", "cat", LabelError::InvalidShortcut)]
    #[case("ß", "cat", LabelError::InvalidShortcut)]
    fn add_rejects_invalid_input(
        #[case] shortcut: &str,
        #[case] text: &str,
        #[case] expected: LabelError,
    ) {
        let mut set = LabelSet::new();
        assert_eq!(set.add(shortcut, text), Err(expected));
        assert!(set.is_empty());
    }

    #[test]
    fn add_trims_both_fields() {
        let mut set = LabelSet::new();
        assert_eq!(set.add(" x ", "  bird "), Ok('X'));
        assert_eq!(set.get('x'), Some("bird"));
    }

    #[test]
    fn label_text_may_repeat() {
        let mut set = LabelSet::new();
        set.add("a", "cat").unwrap();
        set.add("b", "cat").unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn remove_deletes_binding_or_reports_missing() {
        let mut set = LabelSet::new();
        set.add("A", "cat").unwrap();
        set.add("B", "dog").unwrap();

        let removed = set.remove("a").unwrap();
        assert_eq!(removed.text, "cat");
        assert_eq!(set.get('A'), None);
        assert_eq!(set.remove("A"), Err(LabelError::NotFound("A".into())));
        assert_eq!(set.remove("long"), Err(LabelError::NotFound("long".into())));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn legend_follows_insertion_order() {
        let mut set = LabelSet::new();
        set.add("d", "dog").unwrap();
        set.add("a", "cat").unwrap();
        assert_eq!(set.legend(), "Shortcuts: D=dog   A=cat");
        let keys: Vec<char> = set.iter().map(|l| l.shortcut).collect();
        assert_eq!(keys, vec!['D', 'A']);
    }
}
