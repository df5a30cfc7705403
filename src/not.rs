use crate::cursor::TextCursor;
use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;

/// Parser combinator that performs negative lookahead
///
/// Succeeds with () if the given parser fails at the current position.
/// Fails if the given parser succeeds.
/// Never consumes any input regardless of outcome.
pub struct Not<P> {
    parser: P,
}

impl<P> Not<P> {
    pub fn new(parser: P) -> Self {
        Not { parser }
    }
}

impl<'src, P> Parser<'src> for Not<P>
where
    P: Parser<'src>,
{
    type Output = ();

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        match self.parser.parse(cursor) {
            Ok(_) => {
                let (source, position) = cursor.inner();
                Err(ParseError::SyntaxError {
                    message: "negative lookahead failed: unexpected match".into(),
                    loc: SourceLoc::new(source, position),
                })
            }
            Err(_) => Ok(((), cursor)),
        }
    }
}

/// Convenience function to create a Not parser
pub fn not<'src, P>(parser: P) -> Not<P>
where
    P: Parser<'src>,
{
    Not::new(parser)
}
