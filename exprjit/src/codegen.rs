//! # Code Generator
//!
//! A [`ParserDriver`] that emits x86-64 instructions while the expression is
//! parsed. Each reduction appends the code for its production to an
//! [`Assembler`]; by the time the parser accepts, the routine body is complete
//! and only the epilogue is missing.
//!
//! The emitted code is a stack machine, so reductions only need to know that
//! their operands are already on the native stack. Stack values carry no
//! results; they only remember which operator or parameter a token named.
use crate::{
    Assembler, ExprError, ExprGrammar, ExprLexer, ExprToken, MachineCode, Operator, ProdID,
    TokenValue, Trace,
};
use lrkit::{DEFAULT_MAX_DEPTH, Lexer, Parser, ParserDriver, ParserProdID};
use std::marker::PhantomData;

/// Compiles expressions of grammar `G` to native code.
///
/// # Example
/// ```rust
/// # use exprjit::{Bindings, CodeGenerator, ParamGrammar};
/// let code = CodeGenerator::<ParamGrammar>::new().compile("(x + y) * z").unwrap();
/// # #[cfg(target_arch = "x86_64")]
/// # {
/// let f = code.load().unwrap();
/// assert_eq!(f.call(Bindings::new(1, 2, 3)).unwrap(), 9);
/// # }
/// ```
pub struct CodeGenerator<G> {
    asm: Assembler,
    trace: Option<Trace>,
    max_depth: usize,
    _marker: PhantomData<G>,
}

impl<G: ExprGrammar> Default for CodeGenerator<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ExprGrammar> CodeGenerator<G> {
    pub fn new() -> Self {
        Self {
            asm: Assembler::new(),
            trace: None,
            max_depth: DEFAULT_MAX_DEPTH,
            _marker: PhantomData,
        }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Installs a hook that sees every production before it is reduced.
    pub fn with_trace(mut self, trace: impl FnMut(ProdID) + 'static) -> Self {
        self.trace = Some(Box::new(trace));
        self
    }

    /// Parses `source` and returns the finished routine.
    pub fn compile(self, source: &str) -> Result<MachineCode, ExprError> {
        let lexer = ExprLexer::try_new(source, G::PARAMETERS)?;
        let max_depth = self.max_depth;
        let mut parser = Parser::new(lexer, self).with_max_depth(max_depth);
        parser.parse()?;

        log::debug!(
            "compiled {:?} with {} grammar; {:?}; {:?}",
            source,
            G::NAME,
            parser.stats(),
            parser.lexer().stats()
        );
        Ok(parser.into_driver().asm.finish())
    }
}

impl<G: ExprGrammar> ParserDriver for CodeGenerator<G> {
    type ParserData = G;
    type Token = ExprToken;
    type Value = TokenValue;
    type Error = ExprError;

    fn shift(&mut self, token: &ExprToken) -> TokenValue {
        token.value
    }

    fn reduce(&mut self, prod_id: ProdID, values: &[TokenValue]) -> Result<TokenValue, ExprError> {
        if let Some(trace) = self.trace.as_mut() {
            trace(prod_id);
        }
        let before = self.asm.len();

        match prod_id {
            ProdID::FactorNumber => {
                // Factor -> number
                let TokenValue::Number(n) = values[0] else {
                    unreachable!()
                };
                self.asm.load_immediate(n);
            }
            ProdID::FactorParam => {
                // Factor -> param
                let TokenValue::Param(param) = values[0] else {
                    return Err(ExprError::InvalidParameter(format!("{:?}", values[0]).into()));
                };
                if !G::has_parameter(param) {
                    return Err(ExprError::InvalidParameter(param.to_string().into()));
                }
                self.asm.push_param(param);
            }
            ProdID::FactorSigned => {
                // Factor -> addop Factor
                let TokenValue::Op(op) = values[0] else {
                    unreachable!()
                };
                if op == Operator::Sub {
                    self.asm.negate();
                }
            }
            ProdID::TermProduct | ProdID::ExprSum => {
                // Term -> Term mulop Factor, Expr -> Expr addop Term
                let TokenValue::Op(op) = values[1] else {
                    unreachable!()
                };
                self.asm.binary(op);
            }
            ProdID::FactorGroup | ProdID::TermFactor | ProdID::ExprTerm | ProdID::Start => {}
        }

        log::trace!(
            "emit {}: {} bytes",
            prod_id.label(),
            self.asm.len() - before
        );
        Ok(TokenValue::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::{LOAD_SIZE, NEGATE_SIZE, OVERHEAD, PARAM_SIZE, binary_size};
    use crate::{ArithGrammar, ParamGrammar};
    use lrkit::ParserError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn compile(s: &str) -> Result<MachineCode, ExprError> {
        init_logger();
        CodeGenerator::<ParamGrammar>::new().compile(s)
    }

    #[test]
    fn code_size_follows_the_source() {
        let cases = [
            ("1", LOAD_SIZE),
            ("x", PARAM_SIZE),
            ("((x))", PARAM_SIZE),
            ("+x", PARAM_SIZE),
            ("-x", PARAM_SIZE + NEGATE_SIZE),
            ("x + 1", PARAM_SIZE + LOAD_SIZE + binary_size(Operator::Add)),
            (
                "(x - y) * z / 2",
                3 * PARAM_SIZE
                    + LOAD_SIZE
                    + binary_size(Operator::Sub)
                    + binary_size(Operator::Mul)
                    + binary_size(Operator::Div),
            ),
        ];
        for (source, body) in cases {
            assert_eq!(compile(source).unwrap().len(), OVERHEAD + body, "{source:?}");
        }
    }

    #[test]
    fn operands_are_emitted_before_their_operator() {
        let code = compile("y - 3").unwrap();
        let body = &code.bytes()[code.entry() + 5..code.len() - 3];
        assert_eq!(body[0], 0x56);
        assert_eq!(&body[1..3], &[0x48, 0xb8]);
        assert_eq!(body[1 + LOAD_SIZE..], [0x58, 0x48, 0x29, 0x04, 0x24]);
    }

    #[test]
    fn compiling_twice_gives_identical_code() {
        assert_eq!(compile("x*0x10-y").unwrap(), compile("x*0x10-y").unwrap());
    }

    #[test]
    fn errors_stop_compilation() {
        assert!(matches!(
            compile("1 +"),
            Err(ExprError::Parse(ParserError::UnexpectedToken { .. }))
        ));
        assert!(matches!(compile("x # y"), Err(ExprError::Lex(_))));
        assert!(matches!(
            CodeGenerator::<ArithGrammar>::new().compile("x"),
            Err(ExprError::Lex(_))
        ));
        let deep = format!("{}x{}", "(".repeat(120), ")".repeat(120));
        assert!(matches!(
            compile(&deep),
            Err(ExprError::Parse(ParserError::StackOverflow { .. }))
        ));
    }

    #[test]
    fn non_parameter_value_is_an_invalid_parameter() {
        init_logger();
        let mut generator = CodeGenerator::<ParamGrammar>::new();
        let err = generator
            .reduce(ProdID::FactorParam, &[TokenValue::Number(1)])
            .unwrap_err();
        assert!(matches!(err, ExprError::InvalidParameter(_)));
    }

    #[test]
    fn trace_matches_the_evaluator() {
        init_logger();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        CodeGenerator::<ParamGrammar>::new()
            .with_trace(move |prod| sink.borrow_mut().push(prod))
            .compile("-x*2")
            .unwrap();

        use ProdID::*;
        assert_eq!(
            *seen.borrow(),
            vec![
                FactorParam,
                FactorSigned,
                TermFactor,
                FactorNumber,
                TermProduct,
                ExprTerm
            ]
        );
    }

    #[cfg(target_arch = "x86_64")]
    #[test]
    fn compiled_code_runs() {
        use crate::Bindings;
        let run = |s: &str, x, y, z| compile(s).unwrap().load().unwrap().call(Bindings::new(x, y, z));
        assert_eq!(run("x+y*z", 1, 2, 3).unwrap(), 7);
        assert_eq!(run("(x+y)*z", 1, 2, 3).unwrap(), 9);
        assert_eq!(run("-7/2", 0, 0, 0).unwrap(), -3);
        assert_eq!(run("(0-7)/2", 0, 0, 0).unwrap(), -3);
        assert_eq!(run("x/z + z", -9, 0, 2).unwrap(), -2);
        assert!(matches!(run("1/0", 0, 0, 0), Err(ExprError::DivisionByZero)));
        assert!(matches!(run("x/(y-y)", 5, 3, 0), Err(ExprError::DivisionByZero)));
    }
}
