use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator for ordered choice: tries the first parser, and if it
/// fails, tries the second parser from the same position
///
/// Both attempts start from the original cursor — a failed first attempt has
/// no way to move it. Chaining (`p1.or(p2).or(p3)`) gives n-ary alternation
/// in which the first matching branch wins; order matters, this is not
/// longest-match.
pub struct Or<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> Or<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        Or { parser1, parser2 }
    }
}

impl<'src, P1, P2, O> Parser<'src> for Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    type Output = O;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        match self.parser1.parse(cursor) {
            Ok(result) => Ok(result),
            Err(_) => self.parser2.parse(cursor),
        }
    }
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized {
    fn or<P>(self, other: P) -> Or<Self, P>
    where
        P: Parser<'src, Output = Self::Output>,
    {
        Or::new(self, other)
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> {}

/// Convenience function to create an Or parser
pub fn or<'src, P1, P2, O>(parser1: P1, parser2: P2) -> Or<P1, P2>
where
    P1: Parser<'src, Output = O>,
    P2: Parser<'src, Output = O>,
{
    Or::new(parser1, parser2)
}
