//! # Parse Tables
//!
//! The SLR(1) automata of the two grammar variants, as literal constants.
//!
//! [`ParamGrammar`] recognizes parameters; [`ArithGrammar`] is the same
//! automaton with the parameter state removed and the remaining states
//! renumbered. In both, the states for the prefix sign (`Factor -> addop
//! Factor`) come after the states of the plain grammar.
use crate::{ExprGrammar, Param, ProdID, TokenID};
use lrkit::{ParserAction, ParserData, ParserStateID, ParserTokenID};

/// A state of the [`ParamGrammar`] automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParamState(u8);

impl ParserStateID for ParamState {
    const COUNT: usize = 15;
}

impl From<ParamState> for usize {
    fn from(s: ParamState) -> Self {
        s.0 as usize
    }
}

/// A state of the [`ArithGrammar`] automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArithState(u8);

impl ParserStateID for ArithState {
    const COUNT: usize = 14;
}

impl From<ArithState> for usize {
    fn from(s: ArithState) -> Self {
        s.0 as usize
    }
}

/// Arithmetic over literals and the parameters `x`, `y`, `z`.
pub struct ParamGrammar;

impl ParamGrammar {
    const TAB: &'static [[ParserAction<ParamState, ProdID>; TokenID::COUNT]] = &[
        /* STATE 0 */ [
            ParserAction::Goto(ParamState(4)), /* 0(Factor) */
            ParserAction::Goto(ParamState(5)), /* 1(Term) */
            ParserAction::Goto(ParamState(6)), /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ParamState(2)), /* 5(number) */
            ParserAction::Shift(ParamState(3)), /* 6(param) */
            ParserAction::Shift(ParamState(13)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ParamState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 1 */ [
            ParserAction::Goto(ParamState(4)), /* 0(Factor) */
            ParserAction::Goto(ParamState(5)), /* 1(Term) */
            ParserAction::Goto(ParamState(7)), /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ParamState(2)), /* 5(number) */
            ParserAction::Shift(ParamState(3)), /* 6(param) */
            ParserAction::Shift(ParamState(13)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ParamState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 2 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::FactorNumber), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::FactorNumber), /* 7(addop) */
            ParserAction::Reduce(ProdID::FactorNumber), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::FactorNumber), /* 10()) */
        ],
        /* STATE 3 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::FactorParam), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::FactorParam), /* 7(addop) */
            ParserAction::Reduce(ProdID::FactorParam), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::FactorParam), /* 10()) */
        ],
        /* STATE 4 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::TermFactor), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::TermFactor), /* 7(addop) */
            ParserAction::Reduce(ProdID::TermFactor), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::TermFactor), /* 10()) */
        ],
        /* STATE 5 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::ExprTerm), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::ExprTerm), /* 7(addop) */
            ParserAction::Shift(ParamState(8)), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::ExprTerm), /* 10()) */
        ],
        /* STATE 6 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Accept, /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ParamState(9)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 7 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ParamState(9)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Shift(ParamState(10)), /* 10()) */
        ],
        /* STATE 8 */ [
            ParserAction::Goto(ParamState(11)), /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ParamState(2)), /* 5(number) */
            ParserAction::Shift(ParamState(3)), /* 6(param) */
            ParserAction::Shift(ParamState(13)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ParamState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 9 */ [
            ParserAction::Goto(ParamState(4)), /* 0(Factor) */
            ParserAction::Goto(ParamState(12)), /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ParamState(2)), /* 5(number) */
            ParserAction::Shift(ParamState(3)), /* 6(param) */
            ParserAction::Shift(ParamState(13)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ParamState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 10 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::FactorGroup), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::FactorGroup), /* 7(addop) */
            ParserAction::Reduce(ProdID::FactorGroup), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::FactorGroup), /* 10()) */
        ],
        /* STATE 11 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::TermProduct), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::TermProduct), /* 7(addop) */
            ParserAction::Reduce(ProdID::TermProduct), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::TermProduct), /* 10()) */
        ],
        /* STATE 12 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::ExprSum), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::ExprSum), /* 7(addop) */
            ParserAction::Shift(ParamState(8)), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::ExprSum), /* 10()) */
        ],
        /* STATE 13 */ [
            ParserAction::Goto(ParamState(14)), /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ParamState(2)), /* 5(number) */
            ParserAction::Shift(ParamState(3)), /* 6(param) */
            ParserAction::Shift(ParamState(13)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ParamState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 14 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::FactorSigned), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::FactorSigned), /* 7(addop) */
            ParserAction::Reduce(ProdID::FactorSigned), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::FactorSigned), /* 10()) */
        ],
    ];
}

impl ParserData for ParamGrammar {
    type StateID = ParamState;
    type TokenID = TokenID;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> ParamState {
        ParamState(0)
    }

    #[inline]
    fn lookup(state_id: ParamState, token_id: TokenID) -> ParserAction<ParamState, ProdID> {
        Self::TAB[usize::from(state_id)][usize::from(token_id)]
    }
}

impl ExprGrammar for ParamGrammar {
    const NAME: &'static str = "param";
    const PARAMETERS: &'static [Param] = &Param::ALL;
}

/// Plain arithmetic on literals.
pub struct ArithGrammar;

impl ArithGrammar {
    const TAB: &'static [[ParserAction<ArithState, ProdID>; TokenID::COUNT]] = &[
        /* STATE 0 */ [
            ParserAction::Goto(ArithState(3)), /* 0(Factor) */
            ParserAction::Goto(ArithState(4)), /* 1(Term) */
            ParserAction::Goto(ArithState(5)), /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ArithState(2)), /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ArithState(12)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ArithState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 1 */ [
            ParserAction::Goto(ArithState(3)), /* 0(Factor) */
            ParserAction::Goto(ArithState(4)), /* 1(Term) */
            ParserAction::Goto(ArithState(6)), /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ArithState(2)), /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ArithState(12)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ArithState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 2 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::FactorNumber), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::FactorNumber), /* 7(addop) */
            ParserAction::Reduce(ProdID::FactorNumber), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::FactorNumber), /* 10()) */
        ],
        /* STATE 3 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::TermFactor), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::TermFactor), /* 7(addop) */
            ParserAction::Reduce(ProdID::TermFactor), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::TermFactor), /* 10()) */
        ],
        /* STATE 4 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::ExprTerm), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::ExprTerm), /* 7(addop) */
            ParserAction::Shift(ArithState(7)), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::ExprTerm), /* 10()) */
        ],
        /* STATE 5 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Accept, /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ArithState(8)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 6 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ArithState(8)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Shift(ArithState(9)), /* 10()) */
        ],
        /* STATE 7 */ [
            ParserAction::Goto(ArithState(10)), /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ArithState(2)), /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ArithState(12)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ArithState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 8 */ [
            ParserAction::Goto(ArithState(3)), /* 0(Factor) */
            ParserAction::Goto(ArithState(11)), /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ArithState(2)), /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ArithState(12)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ArithState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 9 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::FactorGroup), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::FactorGroup), /* 7(addop) */
            ParserAction::Reduce(ProdID::FactorGroup), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::FactorGroup), /* 10()) */
        ],
        /* STATE 10 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::TermProduct), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::TermProduct), /* 7(addop) */
            ParserAction::Reduce(ProdID::TermProduct), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::TermProduct), /* 10()) */
        ],
        /* STATE 11 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::ExprSum), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::ExprSum), /* 7(addop) */
            ParserAction::Shift(ArithState(7)), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::ExprSum), /* 10()) */
        ],
        /* STATE 12 */ [
            ParserAction::Goto(ArithState(13)), /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Error, /* 4(end) */
            ParserAction::Shift(ArithState(2)), /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Shift(ArithState(12)), /* 7(addop) */
            ParserAction::Error, /* 8(mulop) */
            ParserAction::Shift(ArithState(1)), /* 9(() */
            ParserAction::Error, /* 10()) */
        ],
        /* STATE 13 */ [
            ParserAction::Error, /* 0(Factor) */
            ParserAction::Error, /* 1(Term) */
            ParserAction::Error, /* 2(Expr) */
            ParserAction::Error, /* 3(Start) */
            ParserAction::Reduce(ProdID::FactorSigned), /* 4(end) */
            ParserAction::Error, /* 5(number) */
            ParserAction::Error, /* 6(param) */
            ParserAction::Reduce(ProdID::FactorSigned), /* 7(addop) */
            ParserAction::Reduce(ProdID::FactorSigned), /* 8(mulop) */
            ParserAction::Error, /* 9(() */
            ParserAction::Reduce(ProdID::FactorSigned), /* 10()) */
        ],
    ];
}

impl ParserData for ArithGrammar {
    type StateID = ArithState;
    type TokenID = TokenID;
    type ProdID = ProdID;

    #[inline]
    fn start_state() -> ArithState {
        ArithState(0)
    }

    #[inline]
    fn lookup(state_id: ArithState, token_id: TokenID) -> ParserAction<ArithState, ProdID> {
        Self::TAB[usize::from(state_id)][usize::from(token_id)]
    }
}

impl ExprGrammar for ArithGrammar {
    const NAME: &'static str = "arith";
    const PARAMETERS: &'static [Param] = &[];
}
