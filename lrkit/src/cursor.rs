//! Source positions, spans and the lexer cursor.
//!
//! Lexers advance a [`LexerCursor`] over the bytes they consume; the cursor's
//! [`Span`] then covers the text of the token just recognized and is attached
//! to that token and to any diagnostic produced for it.

use std::fmt;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based column number (characters from the start of the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// Displays as a human-facing, 1-based `line:column` pair.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

/// A half-open source range: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for `start <= end`
/// in lexicographic `(line, column)` ordering.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Start (or restart) this span at its current `end` position (empty span at end).
    /// Effect: span(x,y, z,w) -> span(z,w, z,w)
    pub fn collapse(&mut self) {
        self.start = self.end;
    }

    /// Is this span empty (start == end)?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)
    }
}

/// Tracks the current lexical position.
///
/// `pos` is the byte offset of the next unconsumed byte; `span` covers the
/// bytes consumed since the last [`Span::collapse`].
#[derive(Debug, Clone, Default)]
pub struct LexerCursor {
    pub pos: usize,
    pub span: Span,
}

impl LexerCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by consuming a character `c`, updating the span end.
    pub fn advance(&mut self, c: char) {
        if c == '\n' {
            self.span.end.line += 1;
            self.span.end.column = 0;
        } else {
            self.span.end.column += 1;
        }
        self.pos += c.len_utf8();
    }

    /// Advance over every character of `text`.
    pub fn advance_str(&mut self, text: &str) {
        text.chars().for_each(|c| self.advance(c));
    }

    /// Begin a new token at the current position.
    pub fn mark(&mut self) {
        self.span.collapse();
    }
}

/// Build an `Span` inline from 0-based line/column coordinates.
///
/// # Examples
///
/// ```rust
/// # use lrkit::span;
/// let s = span!(0, 0, 1, 4);
/// assert_eq!(s.end.column, 4);
/// ```
#[macro_export]
macro_rules! span {
    ($line_start:expr, $col_start:expr, $line_end:expr, $col_end:expr) => {
        $crate::Span {
            start: $crate::Position {
                line: $line_start,
                column: $col_start,
            },
            end: $crate::Position {
                line: $line_end,
                column: $col_end,
            },
        }
    };
}
