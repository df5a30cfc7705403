use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches one or more occurrences of the given parser
pub struct Some<P> {
    parser: P,
}

impl<P> Some<P> {
    pub fn new(parser: P) -> Self {
        Some { parser }
    }
}

impl<'src, P> Parser<'src> for Some<P>
where
    P: Parser<'src>,
{
    type Output = Vec<P::Output>;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let mut results = Vec::new();

        // First match must succeed
        let (first_value, mut cursor) = self.parser.parse(cursor)?;
        results.push(first_value);

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
                    // Stop on first error after at least one match
                    break;
                }
            }
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a Some parser
pub fn some<'src, P>(parser: P) -> Some<P>
where
    P: Parser<'src>,
{
    Some::new(parser)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::{any_char, is_char};

    #[test]
    fn test_some_zero_matches_fails() {
        let cursor = TextCursor::new("xyz");
        let parser = some(is_char('a'));

        let result = parser.parse(cursor);
        assert!(result.is_err());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_some_one_match() {
        let cursor = TextCursor::new("abc");
        let parser = some(is_char('a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['a']);
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_some_multiple_matches() {
        let cursor = TextCursor::new("aaabcd");
        let parser = some(is_char('a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a']);
        assert_eq!(cursor.value().unwrap(), 'b');
    }

    #[test]
    fn test_some_all_matches() {
        let cursor = TextCursor::new("aaaa");
        let parser = some(is_char('a'));

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['a', 'a', 'a', 'a']);
        assert!(cursor.eos());
    }

    #[test]
    fn test_some_with_any_char() {
        let cursor = TextCursor::new("hello");
        let parser = some(any_char());

        let (results, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(results, vec!['h', 'e', 'l', 'l', 'o']);
        assert!(cursor.eos());
    }

    #[test]
    fn test_some_empty_input() {
        let cursor = TextCursor::new("");
        let parser = some(is_char('a'));

        let result = parser.parse(cursor);
        assert!(result.is_err());
    }
}
