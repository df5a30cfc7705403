use crate::cursor::TextCursor;
use crate::error::ParseError;
use crate::parser::Parser;

/// Parser combinator that matches a list of items separated by a parser
///
/// Parses at least one item, followed by zero or more occurrences of
/// (separator + item), and returns the item values.
///
/// # Note
/// - Requires at least one element
/// - A separator with no following element is an error
/// - Does not handle whitespace automatically
pub struct SeparatedList<P, S> {
    element: P,
    separator: S,
}

impl<P, S> SeparatedList<P, S> {
    pub fn new(element: P, separator: S) -> Self {
        SeparatedList { element, separator }
    }
}

impl<'src, P, S> Parser<'src> for SeparatedList<P, S>
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

        let (first, mut cursor) = self.element.parse(cursor)?;
        results.push(first);

        loop {
            let after_separator = match self.separator.parse(cursor) {
                Ok((_, next_cursor)) => next_cursor,
                Err(_) => break,
            };

            // Once a separator matched, the next element is required
            let (value, next_cursor) = self.element.parse(after_separator)?;
            results.push(value);
            cursor = next_cursor;
        }

        Ok((results, cursor))
    }
}

/// Convenience function to create a SeparatedList parser
pub fn separated_list<'src, P, S>(element: P, separator: S) -> SeparatedList<P, S>
where
    P: Parser<'src>,
    S: Parser<'src>,
{
    SeparatedList::new(element, separator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::char::is_char;
    use crate::integer::integer;

    #[test]
    fn test_separated_list_single_element() {
        let cursor = TextCursor::new("42");
        let parser = separated_list(integer(), is_char(','));

        let (values, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(values, vec![42]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_separated_list_multiple_elements() {
        let cursor = TextCursor::new("1,2,3");
        let parser = separated_list(integer(), is_char(','));

        let (values, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(cursor.eos());
    }

    #[test]
    fn test_separated_list_stops_before_unrelated_tail() {
        let cursor = TextCursor::new("1,2;3");
        let parser = separated_list(integer(), is_char(','));

        let (values, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(values, vec![1, 2]);
        assert_eq!(cursor.value().unwrap(), ';');
    }

    #[test]
    fn test_separated_list_no_elements_fails() {
        let cursor = TextCursor::new("x");
        let parser = separated_list(integer(), is_char(','));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_separated_list_trailing_separator_fails() {
        let cursor = TextCursor::new("1,2,");
        let parser = separated_list(integer(), is_char(','));

        assert!(parser.parse(cursor).is_err());
    }

    #[test]
    fn test_separated_list_multi_char_separator() {
        let cursor = TextCursor::new("1 -> 2 -> 3");
        let parser = separated_list(integer(), crate::literal::literal(" -> "));

        let (values, cursor) = parser.parse(cursor).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
        assert!(cursor.eos());
    }
}
