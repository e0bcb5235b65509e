use crate::parser::Parser;
use crate::state::ParseState;

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// The factory runs again on every parse; nothing is cached. This is what
/// lets a rule refer to itself (or to a rule defined after it) without
/// building an infinite parser up front.
///
/// Left-recursive rules (`expr := expr op term`) are not supported: the
/// factory is re-entered at the same offset and recursion never ends.
/// Write them as `term (op term)*` instead.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'code, F, P> Parser<'code> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        let parser = (self.factory)();
        parser.parse(state)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'code, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'code>,
{
    Lazy::new(factory)
}
