use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches content between two delimiter parsers
///
/// Runs open, content, and close in sequence and yields only the content's
/// value. All three must succeed.
pub struct Between<P1, P2, P3> {
    open: P1,
    content: P2,
    close: P3,
}

impl<P1, P2, P3> Between<P1, P2, P3> {
    pub fn new(open: P1, content: P2, close: P3) -> Self {
        Between {
            open,
            content,
            close,
        }
    }
}

impl<'src, P1, P2, P3> Parser<'src> for Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    type Output = P2::Output;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let (_, cursor) = self.open.parse(cursor)?;
        let (value, cursor) = self.content.parse(cursor)?;
        let (_, cursor) = self.close.parse(cursor)?;
        Ok((value, cursor))
    }
}

/// Convenience function to create a Between parser
pub fn between<'src, P1, P2, P3>(open: P1, content: P2, close: P3) -> Between<P1, P2, P3>
where
    P1: Parser<'src>,
    P2: Parser<'src>,
    P3: Parser<'src>,
{
    Between::new(open, content, close)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::integer::integer;

    #[test]
    fn test_between_parens() {
        let cursor = TextCursor::new("(42)");
        let parser = between(is_char('('), integer(), is_char(')'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 42);
        assert!(cursor.eos());
    }

    #[test]
    fn test_between_missing_open() {
        let cursor = TextCursor::new("42)");
        let parser = between(is_char('('), integer(), is_char(')'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_between_missing_close() {
        let cursor = TextCursor::new("(42");
        let parser = between(is_char('('), integer(), is_char(')'));

        assert!(parser.parse(cursor).is_err());
        // Open and content matched before the failure; the caller's cursor
        // still points at the start
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_between_content_failure() {
        let cursor = TextCursor::new("(x)");
        let parser = between(is_char('('), integer(), is_char(')'));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_between_leaves_rest() {
        let cursor = TextCursor::new("[7]tail");
        let parser = between(is_char('['), integer(), is_char(']'));

        let (value, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(value, 7);
        assert_eq!(cursor.value().unwrap(), 't');
    }
}
