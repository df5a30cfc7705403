use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that makes another parser optional
///
/// On success, yields `Some(value)`; on failure, swallows the error and
/// succeeds with `None` and the cursor unchanged. It never fails.
pub struct Optional<P> {
    parser: P,
}

impl<P> Optional<P> {
    pub fn new(parser: P) -> Self {
        Optional { parser }
    }
}

impl<'src, P> Parser<'src> for Optional<P>
where
    P: Parser<'src>,
{
    type Output = Option<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        match self.parser.parse(cursor) {
            Ok((value, next_cursor)) => Ok((Some(value), next_cursor)),
            Err(_) => Ok((None, cursor)),
        }
    }
}

/// Convenience function to create an Optional parser
pub fn optional<'src, P>(parser: P) -> Optional<P>
where
    P: Parser<'src>,
{
    Optional::new(parser)
}

/// Extension trait to add .optional() method support for parsers
pub trait OptionalExt<'src>: Parser<'src> + Sized {
    fn optional(self) -> Optional<Self> {
        Optional::new(self)
    }
}

/// Implement OptionalExt for all parsers
impl<'src, P> OptionalExt<'src> for P where P: Parser<'src> {}
