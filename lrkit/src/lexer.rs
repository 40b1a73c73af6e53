use crate::{ParserTokenID, Span};
use std::fmt::Debug;

/// A token as seen by the parsing engine: a kind plus a source span.
///
/// The semantic payload stays with the concrete token type; the engine hands
/// whole tokens to [`ParserDriver::shift`](crate::ParserDriver::shift).
pub trait Token: Clone + Debug {
    type TokenID: ParserTokenID;

    fn token_id(&self) -> Self::TokenID;
    fn span(&self) -> Span;
}

/// A pull-based token source.
///
/// `try_next` is called once for the first lookahead and once after every
/// shift. At end of input it keeps returning the grammar's end token, so the
/// engine never has to distinguish "no more tokens" from "end token".
pub trait Lexer {
    type Token: Token;
    type Error;

    fn try_next(&mut self) -> Result<Self::Token, Self::Error>;

    fn stats(&self) -> LexerStats;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LexerStats {
    /// Tokens returned to the caller, including end tokens.
    pub tokens: usize,
    /// Bytes consumed.
    pub bytes: usize,
    /// Matches discarded without producing a token (e.g. whitespace).
    pub skipped: usize,
}
