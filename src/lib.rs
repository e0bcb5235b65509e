//! # StateComb - State-Threading Parser Combinators
//!
//! Every parser is a transformation from one [`ParseState`] to the next. A
//! state carries the input, the current offset, the last result and, once
//! something has gone wrong, an error plus the history of messages that led
//! to it. Failed states short-circuit through every combinator, so a grammar
//! is just nested values and is reusable across runs.
//!
//! Beyond pass/fail, each run keeps diagnostics:
//!
//! - **Last significant match**: the last token that moved the parse forward
//!   (commas and whitespace do not count), used to phrase error messages
//! - **Suggestions**: for every token, the set of patterns that were tried
//!   right after it; useful for editor completion
//! - **Furthest failure**: `choice` reports the alternative that got furthest
//!
//! ```rust
//! use statecomb::*;
//!
//! let item = digits().skip(optional_whitespace());
//! let list = between(literal("["), sep_by(literal(","), item), literal("]"));
//! let state = list.run("[1,2 ,3]");
//! assert!(!state.is_error());
//! assert_eq!(state.result(), &Value::from(vec!["1", "2", "3"]));
//! ```

pub mod between;
pub mod boxed;
pub mod chain;
pub mod choice;
pub mod contextual;
pub mod diagnostics;
pub mod do_block;
pub mod error;
pub mod error_map;
pub mod introspect;
pub mod lazy;
pub mod many;
pub mod many_one;
pub mod map;
pub mod optional;
pub mod pair;
pub mod parser;
pub mod sep_by;
pub mod sequence;
pub mod state;
pub mod succeed;
pub mod text;
pub mod value;

pub use between::between;
pub use boxed::{BoxExt, BoxedParser};
pub use chain::{ChainExt, chain};
pub use choice::choice;
pub use contextual::{Context, Halt, contextual};
pub use diagnostics::{Mark, SuggestionRegistry, Suggestions};
pub use do_block::{Bindings, Do, DoBlock, do_block};
pub use error::{CodeLoc, ParseError, PatternError};
pub use error_map::{ErrorMapExt, error_map};
pub use introspect::{get_state, peek, set_state};
pub use lazy::lazy;
pub use many::many;
pub use many_one::many_one;
pub use map::{MapExt, map};
pub use optional::one_or_zero;
pub use pair::PairExt;
pub use parser::{Parser, from_fn};
pub use sep_by::{sep_by, sep_by_one};
pub use sequence::{sequence_of, sequence_sep_by};
pub use state::ParseState;
pub use succeed::{fail, succeed};
pub use text::{
    any_char, digits, eat_until, end_of_input, letters, literal, optional_whitespace, pattern,
    whitespace,
};
pub use value::Value;
