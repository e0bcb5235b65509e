use crate::parser::Parser;
use crate::state::ParseState;
use crate::value::Value;

/// Parser combinator that transforms the result of a parser using a mapping function
pub struct Map<P, F> {
    parser: P,
    mapper: F,
}

impl<P, F> Map<P, F> {
    pub fn new(parser: P, mapper: F) -> Self {
        Map { parser, mapper }
    }
}

impl<'code, P, F> Parser<'code> for Map<P, F>
where
    P: Parser<'code>,
    F: Fn(Value) -> Value,
{
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        let next = self.parser.parse(state);
        if next.is_error() {
            return next;
        }
        next.map_result(&self.mapper)
    }
}

/// Convenience function to create a Map parser
pub fn map<'code, P, F>(parser: P, mapper: F) -> Map<P, F>
where
    P: Parser<'code>,
    F: Fn(Value) -> Value,
{
    Map::new(parser, mapper)
}

/// Extension trait to add .map() method support for parsers
pub trait MapExt<'code>: Parser<'code> + Sized {
    fn map<F>(self, mapper: F) -> Map<Self, F>
    where
        F: Fn(Value) -> Value,
    {
        Map::new(self, mapper)
    }
}

/// Implement MapExt for all parsers
impl<'code, P> MapExt<'code> for P where P: Parser<'code> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::{digits, letters, literal};

    #[test]
    fn test_map_token_to_int() {
        let parser = digits().map(|v| {
            v.as_str()
                .and_then(|s| s.parse::<i64>().ok())
                .map(Value::Int)
                .unwrap_or(Value::Null)
        });

        let state = parser.run("123");
        assert_eq!(state.result(), &Value::Int(123));
        assert_eq!(state.index(), 3);
    }

    #[test]
    fn test_map_chaining() {
        let parser = letters()
            .map(|v| Value::from(v.to_string().to_uppercase()))
            .map(|v| Value::record([("name", v)]));

        let state = parser.run("abc");
        assert_eq!(state.result().get("name"), Some(&Value::from("ABC")));
    }

    #[test]
    fn test_map_preserves_errors() {
        let parser = literal("A").map(|_| Value::from("mapped"));
        let state = parser.run("xyz");
        assert!(state.is_error());
        assert!(state.result().is_null());
    }

    #[test]
    fn test_map_does_not_consume() {
        let state = literal("ab").map(|_| Value::Int(0)).run("abc");
        assert_eq!(state.index(), 2);
        assert_eq!(state.last_match().token, "ab");
    }

    #[test]
    fn test_function_syntax() {
        let parser = map(literal("9"), |_| Value::Int(9));
        assert_eq!(parser.run("9").result(), &Value::Int(9));
    }
}
