use crate::cursor::TextCursor;
use crate::error::{ParseError, SourceLoc};
use crate::parser::Parser;

/// Parser that succeeds only at the end of the input
///
/// Consumes nothing. Grammars that must consume the whole input end with
/// this; by itself a top-level parser is free to stop early.
pub struct EosParser;

impl EosParser {
    pub fn new() -> Self {
        EosParser
    }
}

impl Default for EosParser {
    fn default() -> Self {
        EosParser::new()
    }
}

impl<'src> Parser<'src> for EosParser {
    type Output = ();

    fn parse(
        &self,
        cursor: TextCursor<'src>,
    ) -> Result<(Self::Output, TextCursor<'src>), ParseError<'src>> {
        if cursor.eos() {
            Ok(((), cursor))
        } else {
            let (source, position) = cursor.inner();
            Err(ParseError::SyntaxError {
                message: "expected end of input".into(),
                loc: SourceLoc::new(source, position),
            })
        }
    }
}

/// Convenience function to create an EosParser
pub fn eos() -> EosParser {
    EosParser::new()
}
