use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser that always succeeds without consuming input and sets a fixed result
pub struct Succeed {
    value: Value,
}

impl<'code> Parser<'code> for Succeed {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }
        state.with_result(self.value.clone())
    }
}

pub fn succeed(value: impl Into<Value>) -> Succeed {
    Succeed {
        value: value.into(),
    }
}

/// Parser that always fails with a fixed message
pub struct Fail {
    message: String,
}

impl<'code> Parser<'code> for Fail {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }
        state.fail(self.message.clone())
    }
}

pub fn fail(message: impl Into<String>) -> Fail {
    Fail {
        message: message.into(),
    }
}
