use crate::cursor::TextCursor;
use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use std::borrow::Cow;

/// Parser that applies a predicate to the output of another parser
///
/// The inner parser runs first; if its value flunks the predicate, the whole
/// parser fails with the given message, reported at the position the inner
/// parser started from.
pub struct FilterParser<P, F> {
    parser: P,
    predicate: F,
    error_message: Cow<'static, str>,
}

impl<P, F> FilterParser<P, F> {
    pub fn new(parser: P, predicate: F, error_message: Cow<'static, str>) -> Self {
        Self {
            parser,
            predicate,
            error_message,
        }
    }
}

impl<'src, P, F, T> Parser<'src> for FilterParser<P, F>
where
    P: Parser<'src, Output = T>,
    F: Fn(&T) -> bool,
{
    type Output = T;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let (value, next_cursor) = self.parser.parse(cursor)?;

        if (self.predicate)(&value) {
            Ok((value, next_cursor))
        } else {
            let (source, position) = cursor.inner();
            Err(ParseError::SyntaxError {
                message: self.error_message.clone(),
                loc: SourceLoc::new(source, position),
            })
        }
    }
}

/// Extension trait to add .filter() method support for parsers
pub trait FilterExt<'src>: Parser<'src> {
    fn filter<F>(
        self,
        predicate: F,
        error_message: impl Into<Cow<'static, str>>,
    ) -> FilterParser<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Output) -> bool,
    {
        FilterParser::new(self, predicate, error_message.into())
    }
}

impl<'src, P: Parser<'src>> FilterExt<'src> for P {}

/// Convenience function to create a filtered parser
pub fn filter<'src, P, F>(
    parser: P,
    predicate: F,
    error_message: impl Into<Cow<'static, str>>,
) -> FilterParser<P, F>
where
    P: Parser<'src>,
    F: Fn(&P::Output) -> bool,
{
    FilterParser::new(parser, predicate, error_message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::any_char;

    #[test]
    fn test_filter_success() {
        let cursor = TextCursor::new("a1");

        let parser = any_char().filter(|c| c.is_alphabetic(), "expected a letter");
        let (result, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(result, 'a');
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_filter_failure() {
        let cursor = TextCursor::new("1");

        let parser = any_char().filter(|c| c.is_alphabetic(), "expected a letter");
        let result = parser.parse(cursor);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("expected a letter"));
    }

    #[test]
    fn test_filter_failure_reports_start_position() {
        let cursor = TextCursor::new("ab1").next().next();

        let parser = any_char().filter(|c| c.is_alphabetic(), "expected a letter");
        let err = parser.parse(cursor).unwrap_err();
        assert_eq!(err.position(), 2);
    }

    #[test]
    fn test_filter_function_syntax() {
        let cursor = TextCursor::new("7");

        let parser = filter(any_char(), |c: &char| c.is_ascii_digit(), "expected a digit");
        let (result, _) = parser.parse(cursor).unwrap();
        assert_eq!(result, '7');
    }

    #[test]
    fn test_chained_filters() {
        let cursor = TextCursor::new("A");

        let parser = any_char()
            .filter(|c| c.is_alphabetic(), "expected a letter")
            .filter(|c| c.is_uppercase(), "expected uppercase");

        let (result, _) = parser.parse(cursor).unwrap();
        assert_eq!(result, 'A');
    }

    #[test]
    fn test_chained_filters_failure() {
        let cursor = TextCursor::new("a");

        let parser = any_char()
            .filter(|c| c.is_alphabetic(), "expected a letter")
            .filter(|c| c.is_uppercase(), "expected uppercase");

        let result = parser.parse(cursor);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("expected uppercase"));
    }

    #[test]
    fn test_filter_at_end_of_input() {
        let cursor = TextCursor::new("");

        let parser = any_char().filter(|c| c.is_alphabetic(), "expected a letter");
        let result = parser.parse(cursor);
        assert!(result.is_err());
    }
}
