use crate::boxed::{BoxExt, BoxedParser};
use crate::chain::ChainExt;
use crate::parser::Parser;
use crate::state::ParseState;
use crate::succeed::succeed;
use crate::value::Value;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Results bound so far in a [`DoBlock`], by name
pub type Bindings = BTreeMap<String, Value>;

type MakeParser<'code> = Rc<dyn Fn(&Bindings) -> BoxedParser<'code> + 'code>;
type Finish<'code> = Rc<dyn Fn(&Bindings) -> Value + 'code>;

struct Step<'code> {
    name: Option<String>,
    make: MakeParser<'code>,
}

/// Builder for a sequence of named binds
///
/// Each step either runs a fixed parser or builds one from the bindings
/// made so far. `yield_with` closes the block and computes the result.
/// The finished parser is a chain of `chain` calls, one per step.
pub struct DoBlock<'code> {
    steps: Vec<Step<'code>>,
}

impl<'code> Default for DoBlock<'code> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'code> DoBlock<'code> {
    pub fn new() -> Self {
        DoBlock { steps: Vec::new() }
    }

    /// Run `parser` and bind its result to `name`
    pub fn bind<P>(self, name: &str, parser: P) -> Self
    where
        P: Parser<'code> + 'code,
    {
        let parser = parser.boxed();
        self.push(Some(name), Rc::new(move |_| parser.clone()))
    }

    /// Build the next parser from the bindings so far and bind its result
    pub fn bind_with<F>(self, name: &str, make: F) -> Self
    where
        F: Fn(&Bindings) -> BoxedParser<'code> + 'code,
    {
        self.push(Some(name), Rc::new(make))
    }

    /// Run `parser` and discard its result
    pub fn then<P>(self, parser: P) -> Self
    where
        P: Parser<'code> + 'code,
    {
        let parser = parser.boxed();
        self.push(None, Rc::new(move |_| parser.clone()))
    }

    fn push(mut self, name: Option<&str>, make: MakeParser<'code>) -> Self {
        self.steps.push(Step {
            name: name.map(str::to_string),
            make,
        });
        self
    }

    /// Close the block; `finish` turns the bindings into the result
    pub fn yield_with<F>(self, finish: F) -> Do<'code>
    where
        F: Fn(&Bindings) -> Value + 'code,
    {
        Do {
            steps: self.steps.into(),
            finish: Rc::new(finish),
        }
    }
}

/// A closed [`DoBlock`]
pub struct Do<'code> {
    steps: Rc<[Step<'code>]>,
    finish: Finish<'code>,
}

/// Desugar the steps from `position` on into nested chains
fn desugar<'code>(
    steps: Rc<[Step<'code>]>,
    position: usize,
    bindings: Bindings,
    finish: Finish<'code>,
) -> BoxedParser<'code> {
    let Some(step) = steps.get(position) else {
        return succeed(finish(&bindings)).boxed();
    };

    let parser = (step.make)(&bindings);
    let name = step.name.clone();
    let rest = Rc::clone(&steps);

    parser
        .chain(move |state: &ParseState<'code>| {
            let mut bindings = bindings.clone();
            if let Some(name) = &name {
                bindings.insert(name.clone(), state.result().clone());
            }
            desugar(Rc::clone(&rest), position + 1, bindings, Rc::clone(&finish))
        })
        .boxed()
}

impl<'code> Parser<'code> for Do<'code> {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        if state.is_error() {
            return state;
        }
        desugar(
            Rc::clone(&self.steps),
            0,
            Bindings::new(),
            Rc::clone(&self.finish),
        )
        .parse(state)
    }
}

pub fn do_block<'code>() -> DoBlock<'code> {
    DoBlock::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{digits, letters, literal, optional_whitespace};

    #[test]
    fn test_named_binds() {
        let parser = do_block()
            .bind("name", letters())
            .then(literal("="))
            .bind("value", digits())
            .yield_with(|b| {
                Value::record([
                    ("name", b["name"].clone()),
                    ("value", b["value"].clone()),
                ])
            });

        let state = parser.run("x=12");
        assert!(!state.is_error());
        assert_eq!(state.result().get("name"), Some(&Value::from("x")));
        assert_eq!(state.result().get("value"), Some(&Value::from("12")));
        assert!(state.is_at_end());
    }

    #[test]
    fn test_bind_with_depends_on_bindings() {
        // "(x)" or "[x]": the closer must match the opener
        let parser = do_block()
            .bind("open", literal("(").boxed())
            .bind("body", letters())
            .bind_with("close", |b| match b["open"].as_str() {
                Some("(") => literal(")").boxed(),
                _ => literal("]").boxed(),
            })
            .yield_with(|b| b["body"].clone());

        assert_eq!(parser.run("(ab)").result(), &Value::from("ab"));
        let state = parser.run("(ab]");
        assert!(state.is_error());
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_failure_short_circuits() {
        let parser = do_block()
            .bind("a", digits())
            .then(optional_whitespace())
            .bind("b", digits())
            .yield_with(|_| Value::Int(0));

        let state = parser.run("1 x");
        assert!(state.is_error());
        assert_eq!(state.index(), 2);
        assert_eq!(state.result(), &Value::from(" "));
    }

    #[test]
    fn test_empty_block_yields() {
        let parser = do_block().yield_with(|b| Value::Int(b.len() as i64));
        let state = parser.run("abc");
        assert_eq!(state.result(), &Value::Int(0));
        assert_eq!(state.index(), 0);
    }

    #[test]
    fn test_reusable_across_runs() {
        let parser = do_block()
            .bind("n", digits())
            .yield_with(|b| b["n"].clone());
        assert_eq!(parser.run("1").result(), &Value::from("1"));
        assert_eq!(parser.run("22").result(), &Value::from("22"));
    }
}
