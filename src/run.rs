use crate::cursor::TextCursor;
use crate::parser::Parser;

/// Run a parser against a piece of text
///
/// Wraps the text into a cursor at the start and invokes the parser once.
/// Returns the parsed value on success and `None` on failure. Partial
/// consumption is accepted — a parser that stops before the end of the text
/// still succeeds; grammars that must consume everything end with `eos()`.
pub fn run<'src, P>(parser: &P, input: &'src str) -> Option<P::Output>
where
    P: Parser<'src>,
{
    let cursor = TextCursor::new(input);
    match parser.parse(cursor) {
        Ok((value, _)) => Some(value),
        Err(_) => None,
    }
}
