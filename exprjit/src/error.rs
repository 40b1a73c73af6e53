//! # Expression Error Type
//!
//! [`ExprError`] is the single error surface of the library. It collects
//! failures from:
//!
//! - **lexing** ([`LexError`]),
//! - **parsing** ([`ParserError`] from the engine),
//! - **evaluation and code generation** (parameters, division by zero),
//! - **executable memory** (mapping and protection changes).
//!
//! `#[from]` conversions let every stage propagate with `?`.
use crate::LexError;
use lrkit::ParserError;
use smartstring::alias::String;
use thiserror::Error;

/// Every failure of evaluating or compiling an expression.
///
/// All errors are fatal: the first one ends the run.
///
/// # Example
/// ```rust
/// # use exprjit::ExprError;
/// let err = exprjit::evaluate("1 +").unwrap_err();
/// assert!(matches!(err, ExprError::Parse(_)));
/// ```
#[derive(Debug, Error)]
pub enum ExprError {
    #[error("lexing error: {0}")]
    Lex(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParserError),

    /// A parameter that the grammar does not provide, or a non-parameter
    /// value where one was expected.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("division by zero")]
    DivisionByZero,

    /// Allocating or protecting executable memory failed.
    #[error("executable memory: {0}")]
    Memory(#[from] std::io::Error),

    #[error("native code generation is only supported on x86-64")]
    UnsupportedTarget,
}
