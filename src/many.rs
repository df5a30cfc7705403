use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Collected values preserve encounter order. This combinator never fails:
/// zero matches is a valid success with the cursor unchanged.
pub struct Many<P> {
    parser: P,
}

impl<P> Many<P> {
    pub fn new(parser: P) -> Self {
        Many { parser }
    }
}

impl<'src, P> Parser<'src> for Many<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        mut cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let mut results = Vec::new();

        loop {
            match self.parser.parse(cursor) {
                Ok((value, next_cursor)) => {
                    // A match that consumed nothing would match forever
                    let progressed = next_cursor.position() > cursor.position();
                    results.push(value);
                    cursor = next_cursor;
                    if !progressed {
                        break;
                    }
                }
                Err(_) => {
                    // Many matches zero or more, so the error is not propagated
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Many parser
pub fn many<'src, P>(parser: P) -> Many<P>
where
    P: Parser<'src>,
{
    Many::new(parser)
}
