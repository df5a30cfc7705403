use crate::cursor::TextCursor;
use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;

/// Parser combinator that repeatedly applies a taker parser until a stopper
/// parser would match
///
/// Each round first checks whether `stopper` succeeds at the current position;
/// the check is a peek — the stopper's result cursor is discarded and the
/// terminator is never consumed. While the stopper does not match, `taker`
/// runs and its value is appended. A `taker` failure fails the whole
/// combinator.
pub struct TakeUntil<P, S> {
    taker: P,
    stopper: S,
}

impl<P, S> TakeUntil<P, S> {
    pub fn new(taker: P, stopper: S) -> Self {
        Self { taker, stopper }
    }
}

impl<'src, P, S> Parser<'src> for TakeUntil<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let mut results = Vec::new();
        let mut current_cursor = cursor;

        loop {
            if self.stopper.parse(current_cursor).is_ok() {
                return Ok((results, current_cursor));
            }

            let (value, next_cursor) = self.taker.parse(current_cursor)?;
            // A taker that consumed nothing would loop forever: the stopper
            // check and the re-application both see the same state
            if next_cursor.position() == current_cursor.position() {
                let (source, position) = current_cursor.inner();
                return Err(ParseError::SyntaxError {
                    message: "repeated parser consumed no input".into(),
                    loc: SourceLoc::new(source, position),
                });
            }
            results.push(value);
            current_cursor = next_cursor;
        }
    }
}

/// Convenience function to create a TakeUntil parser
pub fn take_until<'src, P, S>(taker: P, stopper: S) -> TakeUntil<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    TakeUntil::new(taker, stopper)
}
