//! Primitives that look at or replace the threaded state without
//! consuming input

use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser that returns the next character without advancing
///
/// The result is a one-character token, or `Null` at end of input. Never
/// fails.
pub struct Peek;

impl<'code> Parser<'code> for Peek {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }
        let next = match state.remaining().chars().next() {
            Some(c) => Value::Token(c.to_string()),
            None => Value::Null,
        };
        state.with_result(next)
    }
}

pub fn peek() -> Peek {
    Peek
}

/// Identity parser; combine with `chain` to inspect the current state
pub struct GetState;

impl<'code> Parser<'code> for GetState {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        state
    }
}

pub fn get_state() -> GetState {
    GetState
}

/// Parser that replaces the current state with a stored one
///
/// Every field is taken from the stored state except the suggestion
/// registry, which stays with the run. The input state is discarded even
/// when it is an error, so this is the one way to resume a thread that has
/// failed.
pub struct SetState<'code> {
    state: ParseState<'code>,
}

impl<'code> Parser<'code> for SetState<'code> {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        self.state.clone().with_registry_of(&state)
    }
}

pub fn set_state(state: ParseState<'_>) -> SetState<'_> {
    SetState { state }
}
