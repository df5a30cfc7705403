use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser authored as an ordered series of sub-parser steps
///
/// The closure body is the step list: each step runs a sub-parser with `?`,
/// binding its value and rebinding the cursor for the next step. The first
/// failing step aborts the whole composite through `?`, and because the
/// composite's caller still holds its own `Copy` cursor, the failure is
/// observed at the composite's boundary with no forward progress — the same
/// contract as checking each step's success flag by hand and early-returning.
///
/// Example:
/// ```
/// use textcomb::char::is_char;
/// use textcomb::cursor::TextCursor;
/// use textcomb::integer::integer;
/// use textcomb::parser::Parser;
/// use textcomb::sequence::sequence;
/// use textcomb::whitespace::skip_whitespace;
///
/// let pair = sequence(|cursor| {
///     let (_, cursor) = skip_whitespace().parse(cursor)?;
///     let (key, cursor) = integer().parse(cursor)?;
///     let (_, cursor) = is_char(':').parse(cursor)?;
///     let (value, cursor) = integer().parse(cursor)?;
///     Ok(((key, value), cursor))
/// });
///
/// let ((key, value), _) = pair.parse(TextCursor::new(" 3:14")).unwrap();
/// assert_eq!((key, value), (3, 14));
/// ```
pub struct Sequence<F> {
    steps: F,
}

impl<F> Sequence<F> {
    pub fn new(steps: F) -> Self {
        Sequence { steps }
    }
}

impl<'src, F, T> Parser<'src> for Sequence<F>
where
    F: Fn(TextCursor<'src>) -> Result<(T, TextCursor<'src>), ParseError<'src>>,
{
    type Output = T;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        (self.steps)(cursor)
    }
}

/// Convenience function to create a Sequence parser
pub fn sequence<'src, F, T>(steps: F) -> Sequence<F>
where
    F: Fn(TextCursor<'src>) -> Result<(T, TextCursor<'src>), ParseError<'src>>,
{
    Sequence::new(steps)
}
