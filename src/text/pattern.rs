use crate::error::PatternError;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::text::{consume, mismatch};
use regex::Regex;

/// Parser that matches a regular expression anchored at the current offset
///
/// The expression is compiled once, wrapped as `^(?:...)`, and run against
/// the unconsumed suffix of the shared input; no substring is built until
/// a match succeeds.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, PatternError> {
        let regex = Regex::new(&format!("^(?:{})", source)).map_err(|e| PatternError {
            pattern: source.to_string(),
            source: e,
        })?;
        Ok(Pattern {
            source: source.to_string(),
            regex,
        })
    }

    /// The expression as written by the caller
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Length in bytes of the match at the start of `text`, if any
    pub(crate) fn match_len(&self, text: &str) -> Option<usize> {
        self.regex.find(text).map(|m| m.end())
    }
}

impl<'code> Parser<'code> for Pattern {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        match self.match_len(state.remaining()) {
            Some(len) => consume(state, len),
            None => mismatch(state, &format!("/{}/", self.source), &self.source),
        }
    }
}

/// Compile a pattern parser
pub fn pattern(source: &str) -> Result<Pattern, PatternError> {
    Pattern::new(source)
}
