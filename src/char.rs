use crate::cursor::TextCursor;
use crate::error::{ParseError, SourceLoc};
use crate::filter::{FilterExt, FilterParser};
use crate::parser::Parser;

/// Parser that consumes and returns a single character
pub struct AnyCharParser;

impl AnyCharParser {
    pub fn new() -> Self {
        AnyCharParser
    }
}

impl Default for AnyCharParser {
    fn default() -> Self {
        AnyCharParser::new()
    }
}

impl<'src> Parser<'src> for AnyCharParser {
    type Output = char;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        cursor.advance()
    }
}

/// Parser that matches a specific character
pub struct IsCharParser {
    expected: char,
}

impl IsCharParser {
    pub fn new(expected: char) -> Self {
        IsCharParser { expected }
    }
}

impl<'src> Parser<'src> for IsCharParser {
    type Output = char;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        match cursor.value() {
            Ok(c) if c == self.expected => Ok((c, cursor.next())),
            Ok(c) => {
                let (source, position) = cursor.inner();
                Err(ParseError::SyntaxError {
                    message: format!("expected '{}', found '{}'", self.expected, c).into(),
                    loc: SourceLoc::new(source, position),
                })
            }
            Err(e) => Err(e),
        }
    }
}

/// Convenience function to create an AnyCharParser
pub fn any_char() -> AnyCharParser {
    AnyCharParser::new()
}

/// Convenience function to create an IsCharParser
pub fn is_char(expected: char) -> IsCharParser {
    IsCharParser::new(expected)
}

/// Parser that matches any single character satisfying a predicate
pub fn char_matching<F>(predicate: F) -> FilterParser<AnyCharParser, F>
where
    F: Fn(&char) -> bool,
{
    any_char().filter(predicate, "character does not satisfy predicate")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_any_char_success() {
        let cursor = TextCursor::new("hello");
        let parser = any_char();

        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, 'h');
        assert_eq!(cursor.value().unwrap(), 'e');
    }

    #[test]
    fn test_any_char_eof() {
        let cursor = TextCursor::new("x");
        let parser = any_char();

        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, 'x');
        assert!(cursor.eos());

        let result = parser.parse(cursor);
        assert!(result.is_err());
    }

    #[test]
    fn test_any_char_sequence() {
        let cursor = TextCursor::new("abc");
        let parser = any_char();

        let (a, cursor) = parser.parse(cursor).unwrap();
        let (b, cursor) = parser.parse(cursor).unwrap();
        let (c, cursor) = parser.parse(cursor).unwrap();

        assert_eq!((a, b, c), ('a', 'b', 'c'));
        assert!(cursor.eos());
    }

    #[test]
    fn test_any_char_multibyte() {
        let cursor = TextCursor::new("é中");
        let parser = any_char();

        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, 'é');
        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, '中');
        assert!(cursor.eos());
    }

    #[test]
    fn test_is_char_success() {
        let cursor = TextCursor::new("hello");
        let parser = is_char('h');

        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, 'h');
        assert_eq!(cursor.value().unwrap(), 'e');
    }

    #[test]
    fn test_is_char_mismatch() {
        let cursor = TextCursor::new("world");
        let parser = is_char('h');

        let result = parser.parse(cursor);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("expected 'h', found 'w'")
        );
    }

    #[test]
    fn test_is_char_mismatch_leaves_caller_cursor_usable() {
        let cursor = TextCursor::new("world");

        assert!(is_char('h').parse(cursor).is_err());

        // The caller's cursor is untouched; a sibling attempt still starts at 'w'
        let (c, _) = is_char('w').parse(cursor).unwrap();
        assert_eq!(c, 'w');
    }

    #[test]
    fn test_is_char_eof() {
        let cursor = TextCursor::new("");
        let parser = is_char('a');

        let result = parser.parse(cursor);
        assert!(result.is_err());
    }

    #[test]
    fn test_char_matching_success() {
        let cursor = TextCursor::new("5");
        let parser = char_matching(|c| c.is_ascii_digit());

        let (c, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(c, '5');
        assert!(cursor.eos());
    }

    #[test]
    fn test_char_matching_predicate_false() {
        let cursor = TextCursor::new("a");
        let parser = char_matching(|c| c.is_ascii_digit());

        let result = parser.parse(cursor);
        assert!(result.is_err());
    }

    #[test]
    fn test_char_matching_eof() {
        let cursor = TextCursor::new("");
        let parser = char_matching(|_| true);

        let result = parser.parse(cursor);
        assert!(result.is_err());
    }
}
