//! Primitives that consume input
//!
//! All of them share the bookkeeping below: a successful significant match
//! moves the high-water mark, a failed match records a suggestion in the
//! run's registry and produces an "expected X, got Y" error.

pub mod builtins;
pub mod eat_until;
pub mod literal;
pub mod pattern;

pub use builtins::{any_char, digits, end_of_input, letters, optional_whitespace, whitespace};
pub use eat_until::eat_until;
pub use literal::literal;
pub use pattern::pattern;

use crate::diagnostics::{Mark, is_insignificant};
use crate::state::ParseState;
use crate::value::Value;
use tracing::trace;

const SNIPPET_CHARS: usize = 10;

/// Advance past `len` bytes of matched text
pub(crate) fn consume<'code>(state: ParseState<'code>, len: usize) -> ParseState<'code> {
    let start = state.index();
    let end = start + len;
    let text = &state.target()[start..end];
    let state = state.advance(end, Value::from(text));

    if is_insignificant(text) {
        state
    } else {
        state.with_last_match(Mark::new(text, start, end))
    }
}

/// What the registry files a miss under: the last token when nothing has
/// been consumed since it, otherwise the previous result
fn suggestion_key(state: &ParseState<'_>) -> String {
    let mark = state.last_match();
    if !mark.is_empty() && mark.token_index == state.index() {
        mark.token.clone()
    } else {
        state.result().to_string()
    }
}

/// Record the miss and fail with an "expected X, got Y" message
///
/// `expected` is the human-readable form, `suggestion` the raw pattern
/// filed in the registry.
pub(crate) fn mismatch<'code>(
    state: ParseState<'code>,
    expected: &str,
    suggestion: &str,
) -> ParseState<'code> {
    state.registry().record(suggestion_key(&state), suggestion);

    let remaining = state.remaining();
    let got = if remaining.is_empty() {
        "unexpected end of input".to_string()
    } else {
        let snippet: String = remaining.chars().take(SNIPPET_CHARS).collect();
        format!("{:?}", snippet)
    };

    let mark = state.last_match();
    let message = if mark.is_empty() {
        format!("expected {} at index {}, got {}", expected, state.index(), got)
    } else {
        format!(
            "expected {} after {:?} at index {}, got {}",
            expected,
            mark.token,
            state.index(),
            got
        )
    };

    trace!(index = state.index(), expected, "match failed");
    state.fail(message)
}
