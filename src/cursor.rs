use crate::error::{ParseError, SourceLoc};

/// An immutable position in a piece of source text
///
/// A cursor is a `Copy` value: saving a backtrack point is a plain copy, and a
/// failed parse attempt can never disturb the copy its caller kept. Advancing
/// produces a new cursor; it never mutates an existing one. The offset is a
/// byte index into the source and always sits on a character boundary.
#[derive(Debug, Copy, Clone)]
pub enum TextCursor<'src> {
    Valid { source: &'src str, offset: usize },
    EndOfInput { source: &'src str },
}

impl<'src> TextCursor<'src> {
    pub fn new(source: &'src str) -> Self {
        if source.is_empty() {
            return TextCursor::EndOfInput { source };
        }
        TextCursor::Valid { source, offset: 0 }
    }

    /// Get the character at the current position without advancing
    ///
    /// Returns an error if the cursor is at the end of the input
    pub fn value(&self) -> Result<char, ParseError<'src>> {
        match *self {
            TextCursor::Valid { source, offset } => match source[offset..].chars().next() {
                Some(c) => Ok(c),
                None => Err(ParseError::UnexpectedEndOfInput(SourceLoc::new(
                    source,
                    source.len(),
                ))),
            },
            TextCursor::EndOfInput { source } => Err(ParseError::UnexpectedEndOfInput(
                SourceLoc::new(source, source.len()),
            )),
        }
    }

    /// Advance past the current character
    ///
    /// If already at the end, the cursor stays at the end
    pub fn next(self) -> Self {
        match self {
            TextCursor::Valid { source, offset } => {
                let width = source[offset..].chars().next().map_or(0, char::len_utf8);
                let next_offset = offset + width;
                if next_offset >= source.len() {
                    TextCursor::EndOfInput { source }
                } else {
                    TextCursor::Valid {
                        source,
                        offset: next_offset,
                    }
                }
            }
            TextCursor::EndOfInput { source } => TextCursor::EndOfInput { source },
        }
    }

    /// Read the current character and advance in one step
    ///
    /// This is the single-step consume every primitive parser is built on:
    /// the character that was under the cursor plus the cursor after it.
    pub fn advance(self) -> Result<(char, Self), ParseError<'src>> {
        let c = self.value()?;
        Ok((c, self.next()))
    }

    /// Current byte offset; the source length when at the end of the input
    pub fn position(&self) -> usize {
        match *self {
            TextCursor::Valid { offset, .. } => offset,
            TextCursor::EndOfInput { source } => source.len(),
        }
    }

    /// Check whether any characters remain
    pub fn eos(&self) -> bool {
        matches!(self, TextCursor::EndOfInput { .. })
    }

    /// The full source text this cursor reads from
    pub fn source(&self) -> &'src str {
        match *self {
            TextCursor::Valid { source, .. } => source,
            TextCursor::EndOfInput { source } => source,
        }
    }

    /// Unpack into source and position, for error construction
    pub fn inner(self) -> (&'src str, usize) {
        (self.source(), self.position())
    }
}
