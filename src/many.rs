use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Never fails. The failure that ends the loop is dropped, but its error
/// chain and high-water mark are kept on the returned state so a later
/// error can still explain what was attempted.
///
/// The inner parser must consume input on every success; a parser that
/// can succeed without consuming makes this loop forever.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

/// Shared loop of `many` and `many_one`: the last successful state and
/// everything it collected
pub(crate) fn collect<'code, P>(
    parser: &P,
    state: ParseState<'code>,
) -> (ParseState<'code>, Vec<Value>)
where
    P: Parser<'code>,
{
    let mut results = Vec::new();
    let mut state = state;

    loop {
        let attempt = parser.parse(state.clone());
        if attempt.is_error() {
            return (state.with_diagnostics_of(&attempt), results);
        }
        results.push(attempt.result().clone());
        state = attempt;
    }
}

impl<'code, P> Parser<'code> for Many<P>
where
    P: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let (state, results) = collect(&self.parser, state);
        state.with_result(Value::Seq(results))
    }
}

/// Convenience function to create a Many parser
pub fn many<'code, P>(parser: P) -> Many<P>
where
    P: Parser<'code>,
{
    Many::new(parser)
}
