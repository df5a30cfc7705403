use std::borrow::Cow;
use std::fmt;
use thiserror::Error;

/// Line number and byte offset within that line
#[derive(Debug, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// Location of a parse failure: the full source plus the byte offset where the
/// failing parser was positioned
#[derive(Debug, Copy, Clone)]
pub struct SourceLoc<'src> {
    source: &'src str,
    offset: usize,
}

impl<'src> SourceLoc<'src> {
    pub fn new(source: &'src str, offset: usize) -> Self {
        Self { source, offset }
    }

    pub fn position(&self) -> usize {
        self.offset
    }

    /// Calculate line number and byte offset within that line
    ///
    /// Note: byte offset is reported instead of a column number because column
    /// calculation depends on encoding, tab rendering, and terminal behavior;
    /// the offset within the line is unambiguous.
    pub fn readable_position(&self) -> ReadablePosition {
        let mut line = 1;
        let mut line_start = 0;

        for (i, byte) in self.source.bytes().enumerate() {
            if i >= self.offset {
                break;
            }
            if byte == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }

        ReadablePosition {
            line,
            byte_offset: self.offset - line_start,
        }
    }

    /// Lines of context around the failure position: up to 2 lines before and
    /// after, with a pointer under the failing line
    fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let mut lines = Vec::new();
        let mut current_line = 1;
        let mut line_start = 0;

        let push_line = |current_line: usize, content: &str, lines: &mut Vec<String>| {
            if current_line < pos.line.saturating_sub(2) || current_line > pos.line + 2 {
                return;
            }
            let prefix = if current_line == pos.line {
                format!("  > {} | ", current_line)
            } else {
                format!("    {} | ", current_line)
            };
            lines.push(format!("{}{}", prefix, content));

            if current_line == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        };

        for (i, ch) in self.source.char_indices() {
            if ch == '\n' {
                push_line(current_line, &self.source[line_start..i], &mut lines);
                current_line += 1;
                line_start = i + 1;
            }
        }

        // Last line if the source has no trailing newline
        if line_start < self.source.len() {
            push_line(current_line, &self.source[line_start..], &mut lines);
        }

        lines
    }

    /// Human-readable description of this location with surrounding context
    pub fn describe(&self) -> String {
        let pos = self.readable_position();
        let mut out = format!(
            "at line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.offset
        );
        for line in self.context_lines() {
            out.push('\n');
            out.push_str(&line);
        }
        out
    }
}

impl fmt::Display for SourceLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.describe())
    }
}

/// Error produced by a failed parse
///
/// Failures carry the position they occurred at; combinators propagate them
/// unchanged, so the error a caller sees points at the parser that gave up.
#[derive(Debug, Error)]
pub enum ParseError<'src> {
    #[error("unexpected end of input {0}")]
    UnexpectedEndOfInput(SourceLoc<'src>),
    #[error("syntax error: {message} {loc}")]
    SyntaxError {
        message: Cow<'static, str>,
        loc: SourceLoc<'src>,
    },
}

impl<'src> ParseError<'src> {
    /// Returns the position where this error occurred
    pub fn position(&self) -> usize {
        match self {
            ParseError::UnexpectedEndOfInput(loc) => loc.position(),
            ParseError::SyntaxError { loc, .. } => loc.position(),
        }
    }
}
