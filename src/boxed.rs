use crate::parser::Parser;
use crate::state::ParseState;
use std::rc::Rc;

/// Type-erased, cheaply clonable parser
///
/// Lists of parsers with different concrete types (`sequence_of`,
/// `choice`) and recursive rules returned from functions need a single
/// nameable type; this is it.
pub struct BoxedParser<'code> {
    parser: Rc<dyn Parser<'code> + 'code>,
}

impl<'code> Clone for BoxedParser<'code> {
    fn clone(&self) -> Self {
        BoxedParser {
            parser: Rc::clone(&self.parser),
        }
    }
}

impl<'code> BoxedParser<'code> {
    pub fn new<P: Parser<'code> + 'code>(parser: P) -> Self {
        BoxedParser {
            parser: Rc::new(parser),
        }
    }
}

impl<'code> Parser<'code> for BoxedParser<'code> {
    fn parse(&self, state: ParseState<'code>) -> ParseState<'code> {
        self.parser.parse(state)
    }
}

/// Extension trait to add .boxed() method support for parsers
pub trait BoxExt<'code>: Parser<'code> + Sized + 'code {
    fn boxed(self) -> BoxedParser<'code> {
        BoxedParser::new(self)
    }
}

/// Implement BoxExt for all parsers
impl<'code, P> BoxExt<'code> for P where P: Parser<'code> + 'code {}
