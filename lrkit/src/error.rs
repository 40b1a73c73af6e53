//! Errors raised by the parsing engine itself.
//!
//! Lexers and drivers bring their own error types; a driver's error type must
//! be constructible from [`ParserError`] (and from its lexer's error) so that
//! [`Parser::parse`](crate::Parser::parse) can surface every failure through
//! a single `Result`.

use crate::Span;
use thiserror::Error;

/// A fatal failure of the shift-reduce loop.
///
/// The engine performs no recovery: the first error ends the parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParserError {
    /// No action is defined for the current state and lookahead token.
    ///
    /// Covers malformed and incomplete input as well as stray trailing tokens.
    #[error("unexpected {token} at {span}")]
    UnexpectedToken {
        /// Label of the offending token kind.
        token: &'static str,
        /// Location of the offending token.
        span: Span,
    },

    /// Pushing another frame would exceed the configured depth limit.
    #[error("nesting exceeds {limit} stack frames at {span}")]
    StackOverflow {
        /// The configured maximum number of frames.
        limit: usize,
        /// Location of the lookahead token when the limit was hit.
        span: Span,
    },

    /// A reduction asked for more frames than sit above the sentinel.
    #[error("stack underflow reducing {prod}")]
    StackUnderflow { prod: &'static str },

    /// The goto table has no entry for the state exposed by a reduction.
    #[error("no goto from state {state} on {symbol}")]
    MissingGoto { state: usize, symbol: &'static str },
}
