use crate::parser::Parser;
use crate::state::ParseState;
use std::fmt;

/// Parser combinator that rewrites the error message of a failed parse
///
/// The mapper receives the current message and the offset of the failure.
/// The new message is appended to the error chain like any other failure,
/// so the original explanation stays in the history.
pub struct ErrorMap<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> ErrorMap<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        ErrorMap { parser, mapper }
    }
}

impl<P, F> fmt::Debug for ErrorMap<P, F>
where
    P: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorMap")
            .field("parser", &self.parser)
            .field("mapper", &"<function>")
            .finish()
    }
}

impl<'code, P, F> Parser<'code> for ErrorMap<P, F>
where
    P: Parser<'code>,
    F: Fn(&str, usize) -> String,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        let next = self.parser.parse(state);
        if !next.is_error() {
            return next;
        }
        let message = (self.mapper)(next.error().unwrap_or_default(), next.index());
        next.fail(message)
    }
}

/// Extension trait to add .error_map() method support for parsers
pub trait ErrorMapExt<'code>: Parser<'code> + Sized {
    fn error_map<F>(self, mapper: F) -> ErrorMap<Self, F>
    where
        F: Fn(&str, usize) -> String,
    {
        ErrorMap::new(self, mapper)
    }
}

/// Implement ErrorMapExt for all parsers
impl<'code, P> ErrorMapExt<'code> for P where P: Parser<'code> {}

/// Convenience function to create an ErrorMap parser
pub fn error_map<'code, P, F>(parser: P, mapper: F) -> ErrorMap<P, F>
where
    P: Parser<'code>,
    F: Fn(&str, usize) -> String,
{
    ErrorMap::new(parser, mapper)
}
