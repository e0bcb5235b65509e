use crate::diagnostics::{Mark, SuggestionRegistry, Suggestions};
use crate::error::{CodeLoc, ParseError};
use crate::value::Value;

/// The record threaded through every parser
///
/// A state borrows the input and owns everything else. Transitions take
/// `self` by value and hand back the derived state, so no transition can
/// change a state that another binding still holds. Once `is_error` is
/// set, combinators pass the state through untouched unless they are
/// defined to recover from it.
#[derive(Debug, Clone)]
pub struct ParseState<'code> {
    target: &'code str,
    index: usize,
    result: Value,
    error: Option<String>,
    error_chain: Vec<String>,
    last_match: Mark,
    suggestions: SuggestionRegistry,
}

impl<'code> ParseState<'code> {
    /// Fresh state at offset 0 with its own suggestion registry
    pub fn new(target: &'code str) -> Self {
        ParseState {
            target,
            index: 0,
            result: Value::Null,
            error: None,
            error_chain: Vec::new(),
            last_match: Mark::default(),
            suggestions: SuggestionRegistry::new(),
        }
    }

    pub fn target(&self) -> &'code str {
        self.target
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Unconsumed suffix of the input
    pub fn remaining(&self) -> &'code str {
        self.target.get(self.index..).unwrap_or("")
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.target.len()
    }

    pub fn result(&self) -> &Value {
        &self.result
    }

    pub fn into_value(self) -> Value {
        self.result
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Every error message seen along this thread, oldest first
    pub fn error_chain(&self) -> &[String] {
        &self.error_chain
    }

    pub fn last_match(&self) -> &Mark {
        &self.last_match
    }

    /// Copy of the suggestions recorded so far in this run
    pub fn suggestions(&self) -> Suggestions {
        self.suggestions.snapshot()
    }

    pub fn registry(&self) -> &SuggestionRegistry {
        &self.suggestions
    }

    /// Move to `index` with a new result; error fields are left alone
    pub fn advance(self, index: usize, result: Value) -> Self {
        debug_assert!(index <= self.target.len());
        ParseState {
            index,
            result,
            ..self
        }
    }

    pub fn with_result(self, result: Value) -> Self {
        ParseState { result, ..self }
    }

    /// Replace the result with `f` applied to it
    pub fn map_result(mut self, f: impl FnOnce(Value) -> Value) -> Self {
        let result = std::mem::take(&mut self.result);
        self.result = f(result);
        self
    }

    /// Flag the state as failed and append `message` to the chain
    pub fn fail(self, message: impl Into<String>) -> Self {
        let message = message.into();
        let mut error_chain = self.error_chain;
        error_chain.push(message.clone());
        ParseState {
            error: Some(message),
            error_chain,
            ..self
        }
    }

    pub fn with_last_match(self, last_match: Mark) -> Self {
        ParseState { last_match, ..self }
    }

    /// Take the error chain and high-water mark of `other`, keeping
    /// everything else
    pub fn with_diagnostics_of(self, other: &ParseState<'code>) -> Self {
        ParseState {
            error_chain: other.error_chain.clone(),
            last_match: other.last_match.clone(),
            ..self
        }
    }

    /// Adopt the suggestion registry of `other`, keeping everything else
    pub(crate) fn with_registry_of(self, other: &ParseState<'code>) -> Self {
        ParseState {
            suggestions: other.suggestions.clone(),
            ..self
        }
    }

    /// Location of the current offset, for error rendering
    pub fn loc(&self) -> CodeLoc<'code> {
        CodeLoc::new(self.target, self.index)
    }

    /// Convert a finished state into a `Result`
    pub fn into_result(self) -> Result<Value, ParseError<'code>> {
        match self.error {
            None => Ok(self.result),
            Some(message) => Err(ParseError::Failed {
                message,
                chain: self.error_chain,
                loc: CodeLoc::new(self.target, self.index),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_clean() {
        let state = ParseState::new("abc");
        assert_eq!(state.index(), 0);
        assert!(state.result().is_null());
        assert!(!state.is_error());
        assert!(state.error_chain().is_empty());
        assert!(state.last_match().is_empty());
        assert!(state.suggestions().is_empty());
        assert_eq!(state.remaining(), "abc");
    }

    #[test]
    fn test_advance_leaves_error_fields() {
        let state = ParseState::new("abc").fail("boom").advance(2, Value::from("ab"));
        assert_eq!(state.index(), 2);
        assert_eq!(state.result(), &Value::from("ab"));
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.remaining(), "c");
    }

    #[test]
    fn test_fail_appends_to_chain() {
        let state = ParseState::new("abc").fail("first").fail("second");
        assert_eq!(state.error(), Some("second"));
        assert_eq!(state.error_chain(), ["first", "second"]);
    }

    #[test]
    fn test_transitions_do_not_touch_the_original() {
        let original = ParseState::new("abc");
        let derived = original.clone().advance(1, Value::from("a")).fail("x");

        assert_eq!(original.index(), 0);
        assert!(!original.is_error());
        assert!(derived.is_error());
        assert!(original.registry().shares_with(derived.registry()));
    }

    #[test]
    fn test_into_result() {
        let ok = ParseState::new("abc").with_result(Value::Int(3));
        assert_eq!(ok.into_result().unwrap(), Value::Int(3));

        let err = ParseState::new("abc")
            .advance(1, Value::Null)
            .fail("expected digit");
        let error = err.into_result().unwrap_err();
        assert!(error.to_string().contains("expected digit"));
        assert_eq!(error.position(), 1);
    }

    #[test]
    fn test_remaining_at_end() {
        let state = ParseState::new("ab").advance(2, Value::Null);
        assert!(state.is_at_end());
        assert_eq!(state.remaining(), "");
    }
}
