use crate::boxed::BoxedParser;
use crate::parser::Parser;
use crate::state::ParseState;
use tracing::trace;

/// Parser combinator that tries alternatives in order from the same state
///
/// The first alternative to succeed wins. When all of them fail, the
/// result is an aggregate failure carrying the diagnostics of the
/// alternative whose high-water mark got furthest; on equal marks the
/// earlier alternative is kept.
pub struct Choice<'code> {
    parsers: Vec<BoxedParser<'code>>,
}

impl<'code> Choice<'code> {
    pub fn new(parsers: impl IntoIterator<Item = BoxedParser<'code>>) -> Self {
        Choice {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl<'code> Parser<'code> for Choice<'code> {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let mut furthest: Option<ParseState<'code>> = None;

        for parser in &self.parsers {
            let attempt = parser.parse(state.clone());
            if !attempt.is_error() {
                return attempt;
            }
            let further = match &furthest {
                None => true,
                Some(best) => {
                    attempt.last_match().token_index > best.last_match().token_index
                }
            };
            if further {
                furthest = Some(attempt);
            }
        }

        let index = state.index();
        trace!(index, alternatives = self.parsers.len(), "no alternative matched");
        let message = format!("choice: unable to match with any parser at index {}", index);
        match furthest {
            Some(best) => state.with_diagnostics_of(&best).fail(message),
            None => state.fail(message),
        }
    }
}

/// Convenience function to create a Choice parser
pub fn choice<'code>(parsers: impl IntoIterator<Item = BoxedParser<'code>>) -> Choice<'code> {
    Choice::new(parsers)
}
