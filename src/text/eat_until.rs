use crate::error::PatternError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::text::consume;
use regex::Regex;

/// Parser that consumes everything up to the first match of a terminal
///
/// The terminal itself is not consumed. When it never occurs the rest of
/// the input is taken. Never fails. An empty or all-whitespace span leaves
/// the high-water mark where it was.
#[derive(Debug, Clone)]
pub struct EatUntil {
    terminal: Regex,
}

impl EatUntil {
    pub fn new(terminal: &str) -> Result<Self, PatternError> {
        let terminal = Regex::new(terminal).map_err(|e| PatternError {
            pattern: terminal.to_string(),
            source: e,
        })?;
        Ok(EatUntil { terminal })
    }
}

impl<'code> Parser<'code> for EatUntil {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let remaining = state.remaining();
        let len = self
            .terminal
            .find(remaining)
            .map(|m| m.start())
            .unwrap_or(remaining.len());
        consume(state, len)
    }
}

/// Compile an eat-until parser for the given terminal expression
pub fn eat_until(terminal: &str) -> Result<EatUntil, PatternError> {
    EatUntil::new(terminal)
}
