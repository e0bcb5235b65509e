use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

/// High-water mark of the last significant token a thread matched
///
/// `choice` compares `token_index` across failed alternatives to report the
/// one that got furthest. Primitive matchers use it to key suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mark {
    /// Text of the last significant token
    pub token: String,
    /// Offset at which that token ended
    pub token_index: usize,
    /// Offset at which the parser that matched it started
    pub parser_index: usize,
}

impl Mark {
    pub fn new(token: impl Into<String>, parser_index: usize, token_index: usize) -> Self {
        Mark {
            token: token.into(),
            token_index,
            parser_index,
        }
    }

    /// True before any significant token has been matched
    pub fn is_empty(&self) -> bool {
        self.token.is_empty() && self.token_index == 0
    }
}

/// Matched text that never moves the high-water mark
///
/// Whitespace (including the empty match) and a lone comma are separators,
/// and would otherwise crowd out the tokens that explain a failure.
pub fn is_insignificant(text: &str) -> bool {
    text == "," || text.chars().all(char::is_whitespace)
}

/// Patterns that were attempted and failed, keyed by what preceded them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suggestions {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl Suggestions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `pattern` was expected after `key`
    pub fn record(&mut self, key: impl Into<String>, pattern: impl Into<String>) {
        self.entries
            .entry(key.into())
            .or_default()
            .insert(pattern.into());
    }

    pub fn get(&self, key: &str) -> Option<&BTreeSet<String>> {
        self.entries.get(key)
    }

    /// Everything that was expected after `key`, in sorted order
    pub fn expected_after(&self, key: &str) -> Vec<&str> {
        self.entries
            .get(key)
            .map(|set| set.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Per-run handle to a [`Suggestions`] table
///
/// Every state derived from the same initial state shares one table, so
/// suggestions recorded inside abandoned `choice` branches survive. The
/// table only grows for the lifetime of the run.
#[derive(Debug, Clone, Default)]
pub struct SuggestionRegistry {
    inner: Rc<RefCell<Suggestions>>,
}

impl SuggestionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, key: impl Into<String>, pattern: impl Into<String>) {
        self.inner.borrow_mut().record(key, pattern);
    }

    /// Copy of the current table
    pub fn snapshot(&self) -> Suggestions {
        self.inner.borrow().clone()
    }

    /// True when both handles point at the same table
    pub fn shares_with(&self, other: &SuggestionRegistry) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insignificant_text() {
        assert!(is_insignificant(""));
        assert!(is_insignificant("   "));
        assert!(is_insignificant("\t\n"));
        assert!(is_insignificant(","));
        assert!(!is_insignificant(",,"));
        assert!(!is_insignificant(" x "));
        assert!(!is_insignificant("let"));
    }

    #[test]
    fn test_suggestions_deduplicate_and_sort() {
        let mut suggestions = Suggestions::new();
        suggestions.record("let", "=");
        suggestions.record("let", "[a-z]+");
        suggestions.record("let", "=");

        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions.expected_after("let"), vec!["=", "[a-z]+"]);
        assert!(suggestions.expected_after("var").is_empty());
    }

    #[test]
    fn test_registry_clones_share_table() {
        let registry = SuggestionRegistry::new();
        let other = registry.clone();
        other.record("x", ";");

        assert!(registry.shares_with(&other));
        assert_eq!(registry.snapshot().expected_after("x"), vec![";"]);
        assert!(!registry.shares_with(&SuggestionRegistry::new()));
    }

    #[test]
    fn test_mark_empty() {
        assert!(Mark::default().is_empty());
        assert!(!Mark::new("let", 0, 3).is_empty());
    }
}
