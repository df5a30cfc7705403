use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// A lazy parser that defers the construction of the actual parser until parse time.
/// This is useful for breaking mutual recursion between parsers: a grammar
/// rule can reference a rule that is defined in terms of it, because neither
/// body is evaluated until a cursor arrives.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'src, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Lazy::new(factory)
}
