//! # Expression Tokens
//!
//! The payload carried by tokens of the expression language and the concrete
//! token type handed to the parsing engine.
//!
//! - [`Param`]: one of the three call parameters `x`, `y`, `z`,
//! - [`Operator`]: the four binary operators,
//! - [`TokenValue`]: what a token (and, later, a stack frame) carries,
//! - [`ExprToken`]: kind + payload + span, implementing [`lrkit::Token`].
use crate::TokenID;
use lrkit::{Span, Token};
use std::fmt;

/// A call parameter, bound positionally at evaluation or call time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    X,
    Y,
    Z,
}

impl Param {
    pub const ALL: [Param; 3] = [Param::X, Param::Y, Param::Z];

    /// Parses a single-letter parameter name.
    pub fn from_name(c: char) -> Option<Self> {
        match c {
            'x' => Some(Param::X),
            'y' => Some(Param::Y),
            'z' => Some(Param::Z),
            _ => None,
        }
    }

    pub fn name(&self) -> char {
        match self {
            Param::X => 'x',
            Param::Y => 'y',
            Param::Z => 'z',
        }
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// `+` and `-` share the additive token kind.
    pub fn is_additive(&self) -> bool {
        matches!(self, Operator::Add | Operator::Sub)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// The payload carried by a token.
///
/// Numbers carry their literal value, parameters their identity and operators
/// which of the two operators sharing a token kind they are. Parentheses and
/// the end token carry nothing. Drivers reuse this type as the value stored on
/// the parse stack.
///
/// # Example
/// ```rust
/// # use exprjit::TokenValue;
/// let value = TokenValue::Number(42);
/// let TokenValue::Number(n) = value else {
///     panic!("expected a number");
/// };
/// assert_eq!(n, 42);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TokenValue {
    /// No payload (punctuation, end of input).
    #[default]
    None,

    /// Integer literal.
    Number(i64),

    /// Parameter reference.
    Param(Param),

    /// Binary operator.
    Op(Operator),
}

/// A lexical token of the expression language.
///
/// # Example
/// ```rust
/// # use exprjit::{ExprToken, TokenID, TokenValue};
/// # use lrkit::{Token, span};
/// let tok = ExprToken {
///     token_id: TokenID::Number,
///     value: TokenValue::Number(99),
///     span: span!(0, 0, 0, 2),
/// };
///
/// assert_eq!(tok.token_id(), TokenID::Number);
/// assert_eq!(tok.span(), span!(0, 0, 0, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprToken {
    /// The token's kind.
    pub token_id: TokenID,
    /// Associated payload, if any.
    pub value: TokenValue,
    /// Where the token occurs in the source.
    pub span: Span,
}

impl Token for ExprToken {
    type TokenID = TokenID;

    fn token_id(&self) -> TokenID {
        self.token_id
    }

    fn span(&self) -> Span {
        self.span
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrkit::span;

    #[test]
    fn param_names_round_trip() {
        for p in Param::ALL {
            assert_eq!(Param::from_name(p.name()), Some(p));
        }
        assert_eq!(Param::from_name('w'), None);
        assert_eq!(Param::Z.to_string(), "z");
    }

    #[test]
    fn operator_symbols_round_trip() {
        for c in ['+', '-', '*', '/'] {
            let op = Operator::from_symbol(c).unwrap();
            assert_eq!(op.symbol(), c);
        }
        assert_eq!(Operator::from_symbol('%'), None);
        assert!(Operator::Sub.is_additive());
        assert!(!Operator::Div.is_additive());
    }

    #[test]
    fn token_value_defaults_to_none() {
        assert_eq!(TokenValue::default(), TokenValue::None);
    }

    #[test]
    #[should_panic(expected = "expected a number")]
    fn token_value_number_extraction_panics_on_param() {
        let TokenValue::Number(_n) = TokenValue::Param(Param::Y) else {
            panic!("expected a number");
        };
    }

    #[test]
    fn expr_token_trait_accessors_return_fields() {
        let t = ExprToken {
            token_id: TokenID::Param,
            value: TokenValue::Param(Param::Y),
            span: span!(0, 4, 0, 5),
        };

        assert_eq!(t.token_id(), TokenID::Param);
        assert_eq!(t.span().start.column, 4);
        assert!(format!("{t:?}").contains("ExprToken"));
    }
}
