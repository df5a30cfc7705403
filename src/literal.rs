use crate::cursor::TextCursor;
use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;
use std::borrow::Cow;

// Helper shared by both literal parsers: match every character of `expected`
// consecutively from `cursor`
fn match_literal<'src>(
    expected: &str,
    cursor: TextCursor<'src>,
) -> Result<TextCursor<'src>, ParseError<'src>> {
    let mut current_cursor = cursor;

    for expected_char in expected.chars() {
        match current_cursor.advance() {
            Ok((actual_char, next_cursor)) => {
                if actual_char == expected_char {
                    current_cursor = next_cursor;
                } else {
                    let (source, position) = current_cursor.inner();
                    return Err(ParseError::SyntaxError {
                        message: format!(
                            "expected '{}', found '{}' while matching '{}'",
                            expected_char, actual_char, expected
                        )
                        .into(),
                        loc: SourceLoc::new(source, position),
                    });
                }
            }
            Err(_) => {
                let (source, position) = current_cursor.inner();
                return Err(ParseError::SyntaxError {
                    message: format!(
                        "expected '{}', but reached end of input while matching '{}'",
                        expected_char, expected
                    )
                    .into(),
                    loc: SourceLoc::new(source, position),
                });
            }
        }
    }

    Ok(current_cursor)
}

/// Parser that matches an exact string character by character
///
/// An empty literal matches anywhere, consuming nothing.
pub struct LiteralParser {
    expected: Cow<'static, str>,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        Self {
            expected: expected.into(),
        }
    }
}

impl<'src> Parser<'src> for LiteralParser {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let cursor = match_literal(&self.expected, cursor)?;
        // Clone is cheap here - just copies the reference for &'static str
        Ok((self.expected.clone(), cursor))
    }
}

/// Parser that tries a list of literals in order and yields the first match
///
/// Ordered choice over literals: listed order decides, not longest match.
pub struct AnyLiteralParser {
    alternatives: Vec<Cow<'static, str>>,
}

impl AnyLiteralParser {
    pub fn new<I>(alternatives: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Cow<'static, str>>,
    {
        Self {
            alternatives: alternatives.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'src> Parser<'src> for AnyLiteralParser {
    type Output = Cow<'static, str>;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        for alternative in &self.alternatives {
            // Each attempt starts from the original cursor
            if let Ok(next_cursor) = match_literal(alternative, cursor) {
                return Ok((alternative.clone(), next_cursor));
            }
        }

        let (source, position) = cursor.inner();
        Err(ParseError::SyntaxError {
            message: format!("expected one of: {}", self.alternatives.join(", ")).into(),
            loc: SourceLoc::new(source, position),
        })
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}

/// Convenience function to create an AnyLiteralParser
pub fn any_literal<I>(alternatives: I) -> AnyLiteralParser
where
    I: IntoIterator,
    I::Item: Into<Cow<'static, str>>,
{
    AnyLiteralParser::new(alternatives)
}
