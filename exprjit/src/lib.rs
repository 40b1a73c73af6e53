//! # exprjit
//!
//! Integer arithmetic expressions, parsed by a table-driven LR parser and
//! either evaluated on the fly or compiled to x86-64 machine code.
//!
//! The language has `+ - * /` with the usual precedence, parentheses, prefix
//! signs, integer literals in C notation (`42`, `0x2a`, `052`) and, in the
//! parameterized grammar, the three parameters `x`, `y` and `z`.
//!
//! ## Overview
//!
//! - [`lexer`]: DFA-driven tokenizer producing [`ExprToken`]s,
//! - [`grammar`]: token kinds, productions and the [`ExprGrammar`] trait,
//! - [`tables`]: the [`ArithGrammar`] and [`ParamGrammar`] parse tables,
//! - [`eval`]: the [`Evaluator`] driver,
//! - [`codegen`]: the [`CodeGenerator`] driver,
//! - [`asm`]: instruction encoding,
//! - [`jit`]: executable memory and the call into generated code.
//!
//! Both drivers run on the same [`lrkit::Parser`] and see exactly the same
//! sequence of reductions.
//!
//! ## Example
//!
//! ```rust
//! assert_eq!(exprjit::evaluate("2 + 3 * 4").unwrap(), 14);
//!
//! let bindings = exprjit::Bindings::new(1, 2, 3);
//! assert_eq!(exprjit::evaluate_with("(x + y) * z", bindings).unwrap(), 9);
//!
//! # #[cfg(target_arch = "x86_64")]
//! # {
//! let f = exprjit::compile("x * x - y").unwrap();
//! assert_eq!(f.call(exprjit::Bindings::new(5, 1, 0)).unwrap(), 24);
//! # }
//! ```
pub mod asm;
pub mod codegen;
pub mod error;
pub mod eval;
pub mod grammar;
pub mod jit;
pub mod lexer;
pub mod tables;
pub mod token;

pub use asm::Assembler;
pub use codegen::CodeGenerator;
pub use error::ExprError;
pub use eval::{Bindings, Evaluator};
pub use grammar::{ExprGrammar, ProdID, TokenID, Trace};
pub use jit::{JitFunction, MachineCode};
pub use lexer::{ExprLexer, LexError};
pub use tables::{ArithGrammar, ArithState, ParamGrammar, ParamState};
pub use token::{ExprToken, Operator, Param, TokenValue};

/// Evaluates a parameter-free expression.
pub fn evaluate(source: &str) -> Result<i64, ExprError> {
    Evaluator::<ArithGrammar>::new().evaluate(source)
}

/// Evaluates an expression over `x`, `y`, `z`.
pub fn evaluate_with(source: &str, bindings: Bindings) -> Result<i64, ExprError> {
    Evaluator::<ParamGrammar>::new()
        .with_bindings(bindings)
        .evaluate(source)
}

/// Compiles an expression over `x`, `y`, `z` and loads it for execution.
pub fn compile(source: &str) -> Result<JitFunction, ExprError> {
    CodeGenerator::<ParamGrammar>::new().compile(source)?.load()
}
