//! # Evaluator
//!
//! A [`ParserDriver`] that computes the value of an expression while it is
//! being parsed. Every reduction folds the values of its right-hand side into
//! a single [`TokenValue::Number`]; nothing is built in between.
//!
//! Arithmetic is 64-bit two's complement and wraps on overflow. Division
//! truncates toward zero; a zero divisor is an error.
use crate::{
    ExprError, ExprGrammar, ExprLexer, ExprToken, Operator, Param, ProdID, TokenValue, Trace,
};
use lrkit::{DEFAULT_MAX_DEPTH, Lexer, Parser, ParserDriver, ParserProdID};
use std::marker::PhantomData;

/// Values bound to the parameters `x`, `y` and `z`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub x: i64,
    pub y: i64,
    pub z: i64,
}

impl Bindings {
    pub fn new(x: i64, y: i64, z: i64) -> Self {
        Self { x, y, z }
    }

    pub fn get(&self, param: Param) -> i64 {
        match param {
            Param::X => self.x,
            Param::Y => self.y,
            Param::Z => self.z,
        }
    }
}

/// Interprets expressions of grammar `G`.
///
/// # Example
/// ```rust
/// # use exprjit::{Bindings, Evaluator, ParamGrammar};
/// let value = Evaluator::<ParamGrammar>::new()
///     .with_bindings(Bindings::new(1, 2, 3))
///     .evaluate("x + y * z")
///     .unwrap();
/// assert_eq!(value, 7);
/// ```
pub struct Evaluator<G> {
    bindings: Bindings,
    trace: Option<Trace>,
    max_depth: usize,
    _marker: PhantomData<G>,
}

impl<G: ExprGrammar> Default for Evaluator<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: ExprGrammar> Evaluator<G> {
    pub fn new() -> Self {
        Self {
            bindings: Bindings::default(),
            trace: None,
            max_depth: DEFAULT_MAX_DEPTH,
            _marker: PhantomData,
        }
    }

    pub fn with_bindings(mut self, bindings: Bindings) -> Self {
        self.bindings = bindings;
        self
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

    /// Parses and evaluates `source`.
    pub fn evaluate(self, source: &str) -> Result<i64, ExprError> {
        let lexer = ExprLexer::try_new(source, G::PARAMETERS)?;
        let max_depth = self.max_depth;
        let mut parser = Parser::new(lexer, self).with_max_depth(max_depth);
        let value = parser.parse()?;

        log::debug!(
            "evaluated {:?} with {} grammar: {:?}; {:?}; {:?}",
            source,
            G::NAME,
            value,
            parser.stats(),
            parser.lexer().stats()
        );
        let TokenValue::Number(n) = value else {
            unreachable!("expression value {value:?} is not a number")
        };
        Ok(n)
    }
}

impl<G: ExprGrammar> ParserDriver for Evaluator<G> {
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
        log::trace!("eval {}: {:?}", prod_id.label(), values);

        let value = match prod_id {
            ProdID::FactorNumber | ProdID::TermFactor | ProdID::ExprTerm => {
                // Factor -> number, Term -> Factor, Expr -> Term
                values[0]
            }
            ProdID::FactorParam => {
                // Factor -> param
                let TokenValue::Param(param) = values[0] else {
                    return Err(ExprError::InvalidParameter(format!("{:?}", values[0]).into()));
                };
                if !G::has_parameter(param) {
                    return Err(ExprError::InvalidParameter(param.to_string().into()));
                }
                TokenValue::Number(self.bindings.get(param))
            }
            ProdID::FactorGroup => {
                // Factor -> ( Expr )
                values[1]
            }
            ProdID::FactorSigned => {
                // Factor -> addop Factor
                let &[TokenValue::Op(op), TokenValue::Number(n)] = values else {
                    unreachable!()
                };
                match op {
                    Operator::Sub => TokenValue::Number(n.wrapping_neg()),
                    _ => TokenValue::Number(n),
                }
            }
            ProdID::TermProduct | ProdID::ExprSum => {
                // Term -> Term mulop Factor, Expr -> Expr addop Term
                let &[TokenValue::Number(a), TokenValue::Op(op), TokenValue::Number(b)] = values
                else {
                    unreachable!()
                };
                TokenValue::Number(apply(op, a, b)?)
            }
            ProdID::Start => {
                // Start -> Expr end
                values[0]
            }
        };
        Ok(value)
    }
}

/// Applies a binary operator with wrapping semantics.
pub fn apply(op: Operator, a: i64, b: i64) -> Result<i64, ExprError> {
    match op {
        Operator::Add => Ok(a.wrapping_add(b)),
        Operator::Sub => Ok(a.wrapping_sub(b)),
        Operator::Mul => Ok(a.wrapping_mul(b)),
        Operator::Div if b == 0 => Err(ExprError::DivisionByZero),
        Operator::Div => Ok(a.wrapping_div(b)),
    }
}
