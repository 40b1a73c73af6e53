//! # Expression Grammar
//!
//! Token kinds and productions of the expression language.
//!
//! ```text
//! Start  -> Expr end
//! Expr   -> Expr addop Term   | Term
//! Term   -> Term mulop Factor | Factor
//! Factor -> ( Expr ) | number | param | addop Factor
//! ```
//!
//! The productions are shared by every table variant; a variant that does not
//! provide parameters simply never reduces `Factor -> param`.
use crate::Param;
use lrkit::{ParserData, ParserProdID, ParserTokenID};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Terminal and nonterminal kinds, nonterminals first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum TokenID {
    // Nonterminals:
    Factor = 0,
    Term = 1,
    Expr = 2,
    Start = 3,

    // Terminals:
    End = 4,
    Number = 5,
    Param = 6,
    AddOp = 7,
    MulOp = 8,
    LeftParen = 9,
    RightParen = 10,
}

impl ParserTokenID for TokenID {
    const COUNT_NONTERMINALS: usize = 4;
    const COUNT_TERMINALS: usize = 7;
    const COUNT: usize = Self::COUNT_NONTERMINALS + Self::COUNT_TERMINALS;

    fn label(&self) -> &'static str {
        TokenID::LABELS[usize::from(*self)]
    }
}

impl TokenID {
    pub const LABELS: &'static [&'static str] = &[
        "Factor", // 0
        "Term",   // 1
        "Expr",   // 2
        "Start",  // 3
        "end",    // 4
        "number", // 5
        "param",  // 6
        "addop",  // 7
        "mulop",  // 8
        "(",      // 9
        ")",      // 10
    ];

    pub fn is_terminal(&self) -> bool {
        usize::from(*self) >= Self::COUNT_NONTERMINALS
    }
}

/// Productions; the id doubles as the semantic action selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IntoPrimitive, TryFromPrimitive)]
#[repr(usize)]
pub enum ProdID {
    FactorNumber = 0,
    FactorParam = 1,
    FactorGroup = 2,
    TermFactor = 3,
    TermProduct = 4,
    ExprTerm = 5,
    ExprSum = 6,
    Start = 7,
    FactorSigned = 8,
}

impl ParserProdID for ProdID {
    type TokenID = TokenID;

    const COUNT: usize = 9;

    fn label(&self) -> &'static str {
        ProdID::LABELS[usize::from(*self)]
    }
    fn lhs_token_id(&self) -> TokenID {
        ProdID::LHS_TOKENS[usize::from(*self)]
    }
    fn size(&self) -> usize {
        ProdID::SIZES[usize::from(*self)]
    }
}

impl ProdID {
    pub const LABELS: &'static [&'static str] = &[
        "Factor -> number",          // 0
        "Factor -> param",           // 1
        "Factor -> ( Expr )",        // 2
        "Term -> Factor",            // 3
        "Term -> Term mulop Factor", // 4
        "Expr -> Term",              // 5
        "Expr -> Expr addop Term",   // 6
        "Start -> Expr end",         // 7
        "Factor -> addop Factor",    // 8
    ];

    pub const LHS_TOKENS: &'static [TokenID] = &[
        TokenID::Factor, // 0
        TokenID::Factor, // 1
        TokenID::Factor, // 2
        TokenID::Term,   // 3
        TokenID::Term,   // 4
        TokenID::Expr,   // 5
        TokenID::Expr,   // 6
        TokenID::Start,  // 7
        TokenID::Factor, // 8
    ];

    pub const SIZES: &'static [usize] = &[
        1, // 0
        1, // 1
        3, // 2
        1, // 3
        3, // 4
        1, // 5
        3, // 6
        2, // 7
        2, // 8
    ];

    pub const ALL: [ProdID; 9] = [
        ProdID::FactorNumber,
        ProdID::FactorParam,
        ProdID::FactorGroup,
        ProdID::TermFactor,
        ProdID::TermProduct,
        ProdID::ExprTerm,
        ProdID::ExprSum,
        ProdID::Start,
        ProdID::FactorSigned,
    ];
}

/// A table variant of the expression grammar.
///
/// Both variants share [`TokenID`] and [`ProdID`]; they differ in their
/// states and in which parameters the lexer may hand them.
pub trait ExprGrammar: ParserData<TokenID = TokenID, ProdID = ProdID> {
    /// Short name used in log output.
    const NAME: &'static str;

    /// Parameters addressable from source text, in argument order.
    const PARAMETERS: &'static [Param];

    fn has_parameter(param: Param) -> bool {
        Self::PARAMETERS.contains(&param)
    }
}

/// Called with each production just before its reduction takes effect.
pub type Trace = Box<dyn FnMut(ProdID)>;
