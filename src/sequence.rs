use crate::boxed::BoxedParser;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser combinator that runs parsers one after another and collects
/// their results into a `Seq`
///
/// Stops at the first failure and returns that state as is.
pub struct SequenceOf<'code> {
    parsers: Vec<BoxedParser<'code>>,
}

impl<'code> SequenceOf<'code> {
    pub fn new(parsers: impl IntoIterator<Item = BoxedParser<'code>>) -> Self {
        SequenceOf {
            parsers: parsers.into_iter().collect(),
        }
    }
}

impl<'code> Parser<'code> for SequenceOf<'code> {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let mut results = Vec::with_capacity(self.parsers.len());
        let mut state = state;

        for parser in &self.parsers {
            state = parser.parse(state);
            if state.is_error() {
                return state;
            }
            results.push(state.result().clone());
        }

        state.with_result(Value::Seq(results))
    }
}

/// Convenience function to create a SequenceOf parser
pub fn sequence_of<'code>(
    parsers: impl IntoIterator<Item = BoxedParser<'code>>,
) -> SequenceOf<'code> {
    SequenceOf::new(parsers)
}

/// Like [`SequenceOf`], with a separator run between consecutive parsers
///
/// Separator results are dropped; the `Seq` holds one entry per parser.
pub struct SequenceSepBy<'code, S> {
    separator: S,
    parsers: Vec<BoxedParser<'code>>,
}

impl<'code, S> Parser<'code> for SequenceSepBy<'code, S>
where
    S: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let mut results = Vec::with_capacity(self.parsers.len());
        let mut state = state;

        for (i, parser) in self.parsers.iter().enumerate() {
            if i > 0 {
                state = self.separator.parse(state);
                if state.is_error() {
                    return state;
                }
            }
            state = parser.parse(state);
            if state.is_error() {
                return state;
            }
            results.push(state.result().clone());
        }

        state.with_result(Value::Seq(results))
    }
}

/// Convenience function to create a SequenceSepBy parser
pub fn sequence_sep_by<'code, S>(
    separator: S,
    parsers: impl IntoIterator<Item = BoxedParser<'code>>,
) -> SequenceSepBy<'code, S>
where
    S: Parser<'code>,
{
    SequenceSepBy {
        separator,
        parsers: parsers.into_iter().collect(),
    }
}
