use crate::state::ParseState;
use tracing::debug;

/// Core parser trait for state-threading combinators
///
/// A parser is a transform from one [`ParseState`] to the next. Building a
/// parser does nothing; all work happens in `parse`, which may be called
/// any number of times with different states.
///
/// Implementations must hand back an errored input state unchanged, and on
/// failure must not move `index`.
pub trait Parser<'code> {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code>;

    /// Parse `target` from offset 0 with a fresh suggestion registry
    fn run(&self, target: &'code str) -> ParseState<'code> {
        let state = self.parse(ParseState::new(target));
        debug!(
            index = state.index(),
            is_error = state.is_error(),
            input_len = target.len(),
            "parse finished"
        );
        state
    }
}

impl<'code, P> Parser<'code> for &P
where
    P: Parser<'code> + ?Sized,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        (**self).parse(state)
    }
}

/// Parser built from a plain state transform
pub struct FnParser<F> {
    transform: F,
}

impl<'code, F> Parser<'code> for FnParser<F>
where
    F: Fn(ParseState<'code>) -> ParseState<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        (self.transform)(state)
    }
}

/// Wrap a state transform as a parser
pub fn from_fn<'code, F>(transform: F) -> FnParser<F>
where
    F: Fn(ParseState<'code>) -> ParseState<'code>,
{
    FnParser { transform }
}
