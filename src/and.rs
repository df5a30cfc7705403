use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that sequences two parsers and returns both results as a tuple
///
/// Note: When chaining multiple `.and()` calls, this produces nested tuples like
/// `(((a, b), c), d)` rather than flat tuples like `(a, b, c, d)`. This is due
/// to Rust's lack of variadic generics. The nested destructuring pattern is
/// explicit about the parsing order; for longer step chains, `sequence` reads
/// better.
///
/// Example:
/// ```
/// use textcomb::and::AndExt;
/// use textcomb::char::is_char;
/// use textcomb::cursor::TextCursor;
/// use textcomb::integer::integer;
/// use textcomb::parser::Parser;
///
/// let cursor = TextCursor::new("123.456");
/// let (((int_part, _), frac_part), _cursor) = integer()
///     .and(is_char('.'))
///     .and(integer())
///     .parse(cursor).unwrap();
/// assert_eq!(int_part, 123);
/// assert_eq!(frac_part, 456);
/// ```
pub struct And<P1, P2> {
    parser1: P1,
    parser2: P2,
}

impl<P1, P2> And<P1, P2> {
    pub fn new(parser1: P1, parser2: P2) -> Self {
        And { parser1, parser2 }
    }
}

impl<'src, P1, P2> Parser<'src> for And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    type Output = (P1::Output, P2::Output);

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let (result1, cursor) = self.parser1.parse(cursor)?;
        let (result2, cursor) = self.parser2.parse(cursor)?;
        Ok(((result1, result2), cursor))
    }
}

/// Convenience function to create an And parser
pub fn and<'src, P1, P2>(parser1: P1, parser2: P2) -> And<P1, P2>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
{
    And::new(parser1, parser2)
}

/// Extension trait to add .and() method support for parsers
pub trait AndExt<'src>: Parser<'src> + Sized {
    fn and<P>(self, other: P) -> And<Self, P>
    where
        P: Parser<'src>,
    {
        And::new(self, other)
    }
}

/// Implement AndExt for all parsers
impl<'src, P> AndExt<'src> for P where P: Parser<'src> {}
