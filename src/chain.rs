use crate::parser::Parser;
use crate::state::ParseState;

/// Parser combinator that picks the next parser from the state the first
/// one produced
///
/// This is monadic bind: `f` sees everything parsed so far and returns the
/// parser to continue with, starting where the first one stopped.
pub struct Chain<P, F> {
    parser: P,
    binder: F,
}

impl<P, F> Chain<P, F> {
    pub fn new(parser: P, binder: F) -> Self {
        Chain { parser, binder }
    }
}

impl<'code, P, F, Q> Parser<'code> for Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(&ParseState<'code>) -> Q,
    Q: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        let next = self.parser.parse(state);
        if next.is_error() {
            return next;
        }
        let follow = (self.binder)(&next);
        follow.parse(next)
    }
}

/// Convenience function to create a Chain parser
pub fn chain<'code, P, F, Q>(parser: P, binder: F) -> Chain<P, F>
where
    P: Parser<'code>,
    F: Fn(&ParseState<'code>) -> Q,
    Q: Parser<'code>,
{
    Chain::new(parser, binder)
}

/// Extension trait to add .chain() method support for parsers
pub trait ChainExt<'code>: Parser<'code> + Sized {
    fn chain<F, Q>(self, binder: F) -> Chain<Self, F>
    where
        F: Fn(&ParseState<'code>) -> Q,
        Q: Parser<'code>,
    {
        Chain::new(self, binder)
    }
}

/// Implement ChainExt for all parsers
impl<'code, P> ChainExt<'code> for P where P: Parser<'code> {}
