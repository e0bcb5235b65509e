use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser combinator that makes a parser optional
///
/// Behaves like `choice([parser, succeed(Null)])`: when the parser fails,
/// the starting state is returned with a `Null` result. Never fails.
pub struct OneOrZero<P> {
    parser: P,
}

impl<P> OneOrZero<P> {
    pub fn new(parser: P) -> Self {
        OneOrZero { parser }
    }
}

impl<'code, P> Parser<'code> for OneOrZero<P>
where
    P: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let attempt = self.parser.parse(state.clone());
        if attempt.is_error() {
            state.with_result(Value::Null)
        } else {
            attempt
        }
    }
}

/// Convenience function to create a OneOrZero parser
pub fn one_or_zero<'code, P>(parser: P) -> OneOrZero<P>
where
    P: Parser<'code>,
{
    OneOrZero::new(parser)
}
