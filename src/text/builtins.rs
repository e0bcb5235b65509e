use crate::parser::Parser;
use crate::state::ParseState;
use crate::text::pattern::Pattern;
use crate::text::{consume, mismatch};
use crate::value::Value;
use std::sync::LazyLock;

static LETTERS: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new("[A-Za-z]+").expect("letters pattern is valid"));
static DIGITS: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new("[0-9]+").expect("digits pattern is valid"));
static WHITESPACE: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(r"\s+").expect("whitespace pattern is valid"));
static OPTIONAL_WHITESPACE: LazyLock<Pattern> =
    LazyLock::new(|| Pattern::new(r"\s*").expect("whitespace pattern is valid"));

/// One or more ASCII letters
pub fn letters() -> Pattern {
    LETTERS.clone()
}

/// One or more ASCII digits
pub fn digits() -> Pattern {
    DIGITS.clone()
}

/// One or more whitespace characters
pub fn whitespace() -> Pattern {
    WHITESPACE.clone()
}

/// Zero or more whitespace characters; never fails
pub fn optional_whitespace() -> Pattern {
    OPTIONAL_WHITESPACE.clone()
}

/// Parser that matches any single character
pub struct AnyChar;

impl<'code> Parser<'code> for AnyChar {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        match state.remaining().chars().next() {
            Some(c) => consume(state, c.len_utf8()),
            None => mismatch(state, "any character", "."),
        }
    }
}

pub fn any_char() -> AnyChar {
    AnyChar
}

/// Parser that succeeds with `Null` only when no input is left
pub struct EndOfInput;

impl<'code> Parser<'code> for EndOfInput {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        if state.is_at_end() {
            state.with_result(Value::Null)
        } else {
            mismatch(state, "end of input", "$")
        }
    }
}

pub fn end_of_input() -> EndOfInput {
    EndOfInput
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        let state = letters().run("abc123");
        assert_eq!(state.result(), &Value::from("abc"));
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_digits_fail_on_letters() {
        let state = digits().run("abc");
        assert!(state.is_error());
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_whitespace_requires_one() {
        assert!(whitespace().run("x").is_error());
        assert_eq!(whitespace().run(" \t\nx").index(), 3);
        assert_eq!(optional_whitespace().run("x").index(), 0);
        assert!(!optional_whitespace().run("").is_error());
    }

    #[test]
    fn test_any_char() {
        let state = any_char().run("éa");
        assert_eq!(state.result(), &Value::from("é"));
        assert_eq!(state.index(), 2);

        let state = any_char().run("");
        assert!(state.is_error());
        assert!(state.error().unwrap().contains("any character"));
    }

    #[test]
    fn test_end_of_input() {
        assert!(!end_of_input().run("").is_error());
        let state = end_of_input().run("x");
        assert!(state.is_error());
        assert_eq!(
            state.error(),
            Some("expected end of input at index 0, got \"x\"")
        );
    }
}
