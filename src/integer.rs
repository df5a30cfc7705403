use crate::char::any_char;
use crate::cursor::TextCursor;
use crate::error::{ParseError, SourceLoc};
use crate::filter::FilterExt;
use crate::parser::Parser;
use crate::some::some;

/// Parser that matches a single ASCII decimal digit
pub fn digit<'src>() -> impl Parser<'src, Output = char> {
    any_char().filter(|c| c.is_ascii_digit(), "expected digit")
}

/// Parser that matches one or more decimal digits and returns their value
///
/// Unsigned only: no sign, no fractional part. The digit run is maximal — it
/// stops at the first non-digit. The value is held as a `u128` so any digit
/// run a real input carries fits exactly; a run that exceeds even that range
/// is a syntax error, never a wrap.
pub fn integer<'src>() -> impl Parser<'src, Output = u128> {
    IntegerParser
}

struct IntegerParser;

impl<'src> Parser<'src> for IntegerParser {
    type Output = u128;

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        let (digits, next_cursor) = some(digit()).parse(cursor)?;

        let num_str: String = digits.into_iter().collect();
        match num_str.parse::<u128>() {
            Ok(value) => Ok((value, next_cursor)),
            Err(_) => {
                let (source, position) = cursor.inner();
                Err(ParseError::SyntaxError {
                    message: format!("number too large: {}", num_str).into(),
                    loc: SourceLoc::new(source, position),
                })
            }
        }
    }
}
