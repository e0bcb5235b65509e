use crate::parser::Parser;
use crate::state::ParseState;
use crate::text::{consume, mismatch};
use std::borrow::Cow;

/// Parser that matches an exact string at the current offset
pub struct Literal {
    expected: Cow<'static, str>,
}

impl Literal {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'code> Parser<'code> for Literal {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        if !self.expected.is_empty() && state.is_at_end() {
            return mismatch(state, &format!("{:?}", self.expected), &self.expected);
        }

        if state.remaining().starts_with(&*self.expected) {
            let len = self.expected.len();
            consume(state, len)
        } else {
            mismatch(state, &format!("{:?}", self.expected), &self.expected)
        }
    }
}

/// Convenience function to create a Literal parser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> Literal {
    Literal::new(expected)
}
