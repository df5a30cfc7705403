use crate::cursor::TextCursor;
use crate::error::ParseError;

/// Core trait for parser combinators
///
/// A parser is a pure value: deterministic for a given cursor, free of side
/// effects, and composable without being invoked. Success yields the parsed
/// value together with the cursor to continue from; failure yields an error
/// and no cursor at all, so a failing parser cannot leak forward progress —
/// the caller's own (Copy) cursor is the backtrack point.
pub trait Parser<'src> {
    type Output;

    /// Attempt to parse from the given cursor position
    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>>;
}

impl<'a, 'src, P> Parser<'src> for &'a P
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        (**self).parse(cursor)
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    type Output = P::Output;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        (**self).parse(cursor)
    }
}
