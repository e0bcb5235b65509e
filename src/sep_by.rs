use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser combinator that matches values separated by a separator parser
///
/// Alternates value, separator, value, ... and stops at the first failure
/// of either. The returned state sits after the last value, so a dangling
/// separator is left unconsumed. Never fails; an empty list is a success.
pub struct SepBy<S, P> {
    separator: S,
    parser: P,
}

impl<S, P> SepBy<S, P> {
    pub fn new(separator: S, parser: P) -> Self {
        SepBy { separator, parser }
    }
}

/// Shared loop of `sep_by` and `sep_by_one`
fn collect<'code, S, P>(
    separator: &S,
    parser: &P,
    state: ParseState<'code>,
) -> (ParseState<'code>, Vec<Value>)
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    let mut results = Vec::new();
    let mut last_value = state.clone();
    let mut next = state;

    loop {
        let value_state = parser.parse(next);
        if value_state.is_error() {
            return (last_value.with_diagnostics_of(&value_state), results);
        }
        results.push(value_state.result().clone());
        last_value = value_state.clone();

        let separator_state = separator.parse(value_state);
        if separator_state.is_error() {
            return (last_value.with_diagnostics_of(&separator_state), results);
        }
        next = separator_state;
    }
}

impl<'code, S, P> Parser<'code> for SepBy<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let (state, results) = collect(&self.separator, &self.parser, state);
        state.with_result(Value::Seq(results))
    }
}

/// Creates a parser that matches zero or more values separated by `separator`
pub fn sep_by<'code, S, P>(separator: S, parser: P) -> SepBy<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    SepBy::new(separator, parser)
}

/// Like [`SepBy`], but at least one value is required
pub struct SepByOne<S, P> {
    separator: S,
    parser: P,
}

impl<'code, S, P> Parser<'code> for SepByOne<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let start = state.index();
        let (state, results) = collect(&self.separator, &self.parser, state);
        if results.is_empty() {
            return state.fail(format!(
                "sep_by_one: unable to capture any results at index {}",
                start
            ));
        }
        state.with_result(Value::Seq(results))
    }
}

/// Creates a parser that matches one or more values separated by `separator`
pub fn sep_by_one<'code, S, P>(separator: S, parser: P) -> SepByOne<S, P>
where
    S: Parser<'code>,
    P: Parser<'code>,
{
    SepByOne { separator, parser }
}
