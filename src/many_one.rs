use crate::many::collect;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct ManyOne<P> {
    parser: P,
}

impl<P> ManyOne<P> {
    pub fn new(parser: P) -> Self {
        ManyOne { parser }
    }
}

impl<'code, P> Parser<'code> for ManyOne<P>
where
    P: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let start = state.index();
        let (state, results) = collect(&self.parser, state);
        if results.is_empty() {
            return state.fail(format!(
                "many_one: unable to match the input parser at least once at index {}",
                start
            ));
        }
        state.with_result(Value::Seq(results))
    }
}

/// Convenience function to create a ManyOne parser
pub fn many_one<'code, P>(parser: P) -> ManyOne<P>
where
    P: Parser<'code>,
{
    ManyOne::new(parser)
}
