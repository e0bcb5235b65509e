use crate::parser::Parser;
use crate::state::ParseState;

/// Parser that matches content between opening and closing delimiters
///
/// Parses `open + content + close` and keeps only the content's result.
/// Whitespace is not skipped; put it in the delimiters if the grammar
/// allows it.
///
/// # Examples
/// - `"[content]"` → `"content"`
/// - `"(123)"` → `"123"`
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'code, P1, P2, P3> Parser<'code> for Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        let state = self.open.parse(state);
        if state.is_error() {
            return state;
        }
        let state = self.content.parse(state);
        if state.is_error() {
            return state;
        }
        let content = state.result().clone();
        let state = self.close.parse(state);
        if state.is_error() {
            return state;
        }
        state.with_result(content)
    }
}

/// Creates a parser that matches content between opening and closing delimiters
pub fn between<'code, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
    P3: Parser<'code>,
{
    Between::new(open, content, close)
}
