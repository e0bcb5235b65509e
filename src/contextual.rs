use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Returned by [`Context::bind`] when the bound parser failed
///
/// Propagate it with `?`; the driver then hands back the failed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Halt;

/// The thread of state a [`contextual`] body runs parsers against
pub struct Context<'code> {
    state: ParseState<'code>,
}

impl<'code> Context<'code> {
    /// Run `parser` from the current state and return its result
    pub fn bind<P>(&mut self, parser: &P) -> Result<Value, Halt>
    where
        P: Parser<'code> + ?Sized,
    {
        let next = parser.parse(self.state.clone());
        let outcome = if next.is_error() {
            Err(Halt)
        } else {
            Ok(next.result().clone())
        };
        self.state = next;
        outcome
    }

    /// The state after the most recent bind
    pub fn state(&self) -> &ParseState<'code> {
        &self.state
    }

    /// Fail the thread with `message`
    pub fn fail(&mut self, message: impl Into<String>) -> Halt {
        self.state = self.state.clone().fail(message);
        Halt
    }
}

/// Sequential composition in direct style
///
/// The body binds parsers one at a time through the [`Context`] and may
/// decide what to bind next from anything it has already seen. The value it
/// returns becomes the result. A failed bind propagated with `?` ends the
/// parse with that failure.
pub struct Contextual<F> {
    body: F,
}

impl<'code, F> Parser<'code> for Contextual<F>
where
    F: Fn(&mut Context<'code>) -> Result<Value, Halt>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }

        let mut context = Context { state };
        let outcome = (self.body)(&mut context);
        let state = context.state;

        match outcome {
            Ok(value) if !state.is_error() => state.with_result(value),
            _ => state,
        }
    }
}

pub fn contextual<'code, F>(body: F) -> Contextual<F>
where
    F: Fn(&mut Context<'code>) -> Result<Value, Halt>,
{
    Contextual { body }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{digits, letters, literal, optional_whitespace, pattern};

    fn declaration<'code>() -> impl Parser<'code> {
        contextual(|ctx| {
            let kind = ctx.bind(&letters())?;
            ctx.bind(&optional_whitespace())?;
            let name = ctx.bind(&letters())?;
            ctx.bind(&optional_whitespace())?;
            ctx.bind(&literal("="))?;
            ctx.bind(&optional_whitespace())?;

            // The declared kind decides how the value is read
            let value = match kind.as_str() {
                Some("int") => ctx.bind(&digits())?,
                Some("str") => ctx.bind(&letters())?,
                _ => return Err(ctx.fail(format!("unknown kind {}", kind))),
            };

            Ok(Value::record([("kind", kind), ("name", name), ("value", value)]))
        })
    }

    #[test]
    fn test_later_binds_depend_on_earlier_results() {
        let state = declaration().run("int x = 42");
        assert!(!state.is_error());
        assert_eq!(state.result().get("value"), Some(&Value::from("42")));
        assert_eq!(state.result().get("name"), Some(&Value::from("x")));

        let state = declaration().run("str y = abc");
        assert_eq!(state.result().get("value"), Some(&Value::from("abc")));

        let state = declaration().run("int y = abc");
        assert!(state.is_error());
        assert_eq!(state.index(), 8);
    }

    #[test]
    fn test_explicit_fail() {
        let state = declaration().run("bool b = yes");
        assert!(state.is_error());
        assert_eq!(state.error(), Some("unknown kind bool"));
    }

    #[test]
    fn test_failure_stops_the_body() {
        let state = declaration().run("int = 1");
        assert!(state.is_error());
        assert!(state.error().unwrap().contains("/[A-Za-z]+/"));
    }

    #[test]
    fn test_bind_a_computed_parser() {
        let parser = contextual(|ctx| {
            let n = ctx
                .bind(&digits())?
                .as_str()
                .and_then(|s| s.parse::<usize>().ok())
                .unwrap_or(0);
            ctx.bind(&literal(":"))?;
            let body = match pattern(&format!(".{{{}}}", n)) {
                Ok(p) => ctx.bind(&p)?,
                Err(e) => return Err(ctx.fail(e.to_string())),
            };
            Ok(body)
        });

        let state = parser.run("2:abc");
        assert_eq!(state.result(), &Value::from("ab"));
        assert_eq!(state.remaining(), "c");
    }

    #[test]
    fn test_errored_input_skips_body() {
        let parser = contextual(|_ctx| Ok(Value::Int(1)));
        let state = parser.parse(ParseState::new("x").fail("earlier"));
        assert_eq!(state.error(), Some("earlier"));
        assert!(state.result().is_null());
    }
}
