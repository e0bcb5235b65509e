use crate::parser::Parser;
use crate::state::ParseState;

/// Which side of a [`Pair`] supplies the result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keep {
    Left,
    Right,
}

/// Parser combinator that runs two parsers in sequence and keeps one result
pub struct Pair<P1, P2> {
    left: P1,
    right: P2,
    keep: Keep,
}

impl<P1, P2> Pair<P1, P2> {
    pub fn new(left: P1, right: P2, keep: Keep) -> Self {
        Pair { left, right, keep }
    }
}

impl<'code, P1, P2> Parser<'code> for Pair<P1, P2>
where
    P1: Parser<'code>,
    P2: Parser<'code>,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        let state = self.left.parse(state);
        if state.is_error() {
            return state;
        }
        match self.keep {
            Keep::Right => self.right.parse(state),
            Keep::Left => {
                let left = state.result().clone();
                let state = self.right.parse(state);
                if state.is_error() {
                    return state;
                }
                state.with_result(left)
            }
        }
    }
}

/// Extension trait to add .skip() and .then() method support for parsers
pub trait PairExt<'code>: Parser<'code> + Sized {
    /// Parse `self` then `other`, keeping the result of `self`
    fn skip<P>(self, other: P) -> Pair<Self, P>
    where
        P: Parser<'code>,
    {
        Pair::new(self, other, Keep::Left)
    }

    /// Parse `self` then `other`, keeping the result of `other`
    fn then<P>(self, other: P) -> Pair<Self, P>
    where
        P: Parser<'code>,
    {
        Pair::new(self, other, Keep::Right)
    }
}

/// Implement PairExt for all parsers
impl<'code, P> PairExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{digits, letters, literal, optional_whitespace};
    use crate::value::Value;

    #[test]
    fn test_skip_keeps_left() {
        let state = letters().skip(literal(";")).run("abc;");
        assert_eq!(state.result(), &Value::from("abc"));
        assert!(state.is_at_end());
    }

    #[test]
    fn test_then_keeps_right() {
        let state = optional_whitespace().then(digits()).run("  12");
        assert_eq!(state.result(), &Value::from("12"));
    }

    #[test]
    fn test_either_side_failing_fails() {
        assert!(letters().skip(literal(";")).run("abc").is_error());
        assert!(letters().then(digits()).run("123").is_error());
    }
}
