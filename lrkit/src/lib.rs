//! # lrkit
//!
//! A small runtime for table-driven LR parsing.
//!
//! A grammar is described by three id types ([`ParserStateID`],
//! [`ParserTokenID`], [`ParserProdID`]) and a [`ParserData`] implementation
//! that answers one question: *what to do in state `s` on token `t`*. Semantic
//! work is supplied separately by a [`ParserDriver`], so the same tables can be
//! reused by several drivers (an interpreter and a compiler, say).
//!
//! [`Parser`] ties a [`Lexer`] and a driver together and runs the classic
//! shift-reduce loop over a bounded stack of `(state, value)` frames.
//!
//! ## Modules
//!
//! - [`cursor`]: positions, spans and the [`LexerCursor`]
//! - [`error`]: [`ParserError`]
//! - [`lexer`]: the [`Token`] and [`Lexer`] traits
//! - [`parser`]: id traits, tables, drivers and the engine
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod parser;

pub use cursor::{LexerCursor, Position, Span};
pub use error::ParserError;
pub use lexer::{Lexer, LexerStats, Token};
pub use parser::{
    DEFAULT_MAX_DEPTH, Parser, ParserAction, ParserData, ParserDriver, ParserProdID,
    ParserStateID, ParserStats, ParserTokenID,
};
