use crate::{Lexer, ParserError, Span, Token};
use smartstring::alias::String;
use std::fmt::Debug;

/// Default limit on parse-stack frames, sentinel included.
pub const DEFAULT_MAX_DEPTH: usize = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParserAction<US, UP>
where
    US: ParserStateID,
    UP: ParserProdID,
{
    Error,
    Accept,
    Shift(US),
    Reduce(UP),
    Goto(US),
}

pub trait ParserStateID: Copy + Debug + Eq + Into<usize> {
    const COUNT: usize;
}

pub trait ParserTokenID: Copy + Debug + Eq + Into<usize> {
    const COUNT_NONTERMINALS: usize;
    const COUNT_TERMINALS: usize;
    const COUNT: usize;

    fn label(&self) -> &'static str;
}

pub trait ParserProdID: Copy + Debug + Eq + Into<usize> {
    type TokenID: ParserTokenID;

    const COUNT: usize;

    /// Human-readable production, e.g. `"Term -> Term mulop Factor"`.
    fn label(&self) -> &'static str;
    /// The nonterminal on the left-hand side.
    fn lhs_token_id(&self) -> Self::TokenID;
    /// Number of right-hand-side symbols (frames popped on reduce).
    fn size(&self) -> usize;
}

/// Static parse tables: one action per (state, token) cell.
///
/// Terminal columns hold `Shift`/`Reduce`/`Accept`/`Error`; nonterminal
/// columns hold `Goto`/`Error`. Tables are expected to be conflict-free.
pub trait ParserData {
    type StateID: ParserStateID;
    type TokenID: ParserTokenID;
    type ProdID: ParserProdID<TokenID = Self::TokenID>;

    fn start_state() -> Self::StateID;

    fn lookup(
        state_id: Self::StateID,
        token_id: Self::TokenID,
    ) -> ParserAction<Self::StateID, Self::ProdID>;
}

type StateOf<D> = <<D as ParserDriver>::ParserData as ParserData>::StateID;

/// Semantic actions attached to a grammar.
///
/// The engine decides *where* to go (tables); the driver decides *what* each
/// step produces. `shift` turns a lookahead token into the value stored in its
/// frame, `reduce` folds the popped values of a production into one.
pub trait ParserDriver {
    type ParserData: ParserData;
    type Token: Token<TokenID = <Self::ParserData as ParserData>::TokenID>;
    /// Semantic value kept alongside each state; `Default` fills the sentinel.
    type Value: Default + Debug;
    type Error: From<ParserError>;

    fn shift(&mut self, token: &Self::Token) -> Self::Value;

    /// Called with the right-hand-side values in left-to-right order.
    fn reduce(
        &mut self,
        prod_id: <Self::ParserData as ParserData>::ProdID,
        values: &[Self::Value],
    ) -> Result<Self::Value, Self::Error>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParserStats {
    pub tokens: usize,
    pub shifts: usize,
    pub reductions: usize,
    /// Deepest the stack got, sentinel included.
    pub max_depth: usize,
}

/// The shift-reduce engine.
///
/// Owns a lexer and a driver and keeps two parallel stacks, one of states and
/// one of driver values. Both stacks always have the same length and start
/// with a sentinel frame that is never popped.
pub struct Parser<L, D>
where
    L: Lexer<Token = D::Token>,
    D: ParserDriver,
{
    lexer: L,
    driver: D,
    states: Vec<StateOf<D>>,
    values: Vec<D::Value>,
    max_depth: usize,
    stats: ParserStats,
}

impl<L, D> Parser<L, D>
where
    L: Lexer<Token = D::Token>,
    D: ParserDriver,
    D::Error: From<L::Error>,
{
    pub fn new(lexer: L, driver: D) -> Self {
        Self {
            lexer,
            driver,
            states: Vec::new(),
            values: Vec::new(),
            max_depth: DEFAULT_MAX_DEPTH,
            stats: ParserStats::default(),
        }
    }

    /// Limits the number of stack frames (sentinel included).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn stats(&self) -> ParserStats {
        self.stats.clone()
    }

    pub fn lexer(&self) -> &L {
        &self.lexer
    }

    pub fn into_driver(self) -> D {
        self.driver
    }

    /// Runs the automaton until the input is accepted or an error occurs.
    pub fn parse(&mut self) -> Result<D::Value, D::Error> {
        self.states.clear();
        self.values.clear();
        self.states.push(D::ParserData::start_state());
        self.values.push(D::Value::default());
        self.stats.max_depth = self.stats.max_depth.max(1);

        let mut token = self.lexer.try_next()?;
        self.stats.tokens += 1;
        if log::log_enabled!(log::Level::Trace) {
            self.dump_state(&token);
        }

        loop {
            match D::ParserData::lookup(self.top_state(), token.token_id()) {
                ParserAction::Shift(new_state) => {
                    log::trace!("Shift {:?}", new_state);
                    let value = self.driver.shift(&token);
                    self.push(new_state, value, token.span())?;
                    token = self.lexer.try_next()?;
                    self.stats.tokens += 1;
                    self.stats.shifts += 1;
                }

                ParserAction::Reduce(prod_id) => {
                    let prod_id_idx: usize = prod_id.into();
                    log::trace!("Reduce {:?}({})", prod_id, prod_id_idx);
                    let depth = self.states.len();
                    let arity = prod_id.size();
                    if arity >= depth {
                        return Err(ParserError::StackUnderflow {
                            prod: prod_id.label(),
                        }
                        .into());
                    }
                    let base = depth - arity;
                    let value = self.driver.reduce(prod_id, &self.values[base..])?;
                    self.states.truncate(base);
                    self.values.truncate(base);

                    let state = self.top_state();
                    let lhs_id = prod_id.lhs_token_id();
                    let ParserAction::Goto(new_state) = D::ParserData::lookup(state, lhs_id) else {
                        return Err(ParserError::MissingGoto {
                            state: state.into(),
                            symbol: lhs_id.label(),
                        }
                        .into());
                    };
                    self.push(new_state, value, token.span())?;
                    self.stats.reductions += 1;
                }

                ParserAction::Accept => {
                    log::trace!("Accept");
                    debug_assert_eq!(self.values.len(), 2);
                    let value = self.values.pop().unwrap_or_default();
                    self.states.truncate(1);
                    self.values.truncate(1);
                    return Ok(value);
                }

                ParserAction::Error => {
                    return Err(ParserError::UnexpectedToken {
                        token: token.token_id().label(),
                        span: token.span(),
                    }
                    .into());
                }

                ParserAction::Goto(_) => unreachable!("goto on a terminal"),
            }

            if log::log_enabled!(log::Level::Trace) {
                self.dump_state(&token);
            }
        }
    }

    fn top_state(&self) -> StateOf<D> {
        self.states[self.states.len() - 1]
    }

    fn push(&mut self, state: StateOf<D>, value: D::Value, span: Span) -> Result<(), ParserError> {
        if self.states.len() >= self.max_depth {
            return Err(ParserError::StackOverflow {
                limit: self.max_depth,
                span,
            });
        }
        self.states.push(state);
        self.values.push(value);
        self.stats.max_depth = self.stats.max_depth.max(self.states.len());
        Ok(())
    }

    fn dump_state(&self, incoming: &D::Token) {
        let mut output = String::new();
        for (state, value) in self.states.iter().zip(self.values.iter()) {
            output.push_str(&format!("<{:?}> {:?}  ", state, value));
        }
        output.push_str(&format!("<-  {:?}", incoming.token_id()));
        log::trace!("{}", output);
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::{Lexer, LexerStats, Token};
    use crate::parser::{
        Parser, ParserAction, ParserData, ParserDriver, ParserProdID, ParserStateID,
        ParserTokenID,
    };
    use crate::{ParserError, Span, span};
    use std::marker::PhantomData;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    // Start -> E end
    // E -> n         (E1)
    // E -> E + n     (E2)

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TokenID {
        Start,
        E,
        End,
        Num,
        Plus,
    }

    impl From<TokenID> for usize {
        fn from(token_id: TokenID) -> Self {
            token_id as usize
        }
    }

    impl ParserTokenID for TokenID {
        const COUNT_NONTERMINALS: usize = 2;
        const COUNT_TERMINALS: usize = 3;
        const COUNT: usize = 5;

        fn label(&self) -> &'static str {
            ["Start", "E", "end", "n", "+"][*self as usize]
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct StateID(u8);

    impl From<StateID> for usize {
        fn from(state_id: StateID) -> Self {
            state_id.0 as usize
        }
    }

    impl ParserStateID for StateID {
        const COUNT: usize = 5;
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum ProdID {
        E1,
        E2,
    }

    impl From<ProdID> for usize {
        fn from(prod_id: ProdID) -> Self {
            prod_id as usize
        }
    }

    impl ParserProdID for ProdID {
        type TokenID = TokenID;

        const COUNT: usize = 2;

        fn label(&self) -> &'static str {
            ["E -> n", "E -> E + n"][*self as usize]
        }
        fn lhs_token_id(&self) -> TokenID {
            TokenID::E
        }
        fn size(&self) -> usize {
            [1, 3][*self as usize]
        }
    }

    type Action = ParserAction<StateID, ProdID>;

    struct XParserData;
    impl ParserData for XParserData {
        type StateID = StateID;
        type TokenID = TokenID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            StateID(0)
        }

        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            use TokenID::*;
            match (state_id.0, token_id) {
                (0, Num) => Action::Shift(StateID(1)),
                (0, E) => Action::Goto(StateID(2)),
                (1, End | Plus) => Action::Reduce(ProdID::E1),
                (2, End) => Action::Accept,
                (2, Plus) => Action::Shift(StateID(3)),
                (3, Num) => Action::Shift(StateID(4)),
                (4, End | Plus) => Action::Reduce(ProdID::E2),
                _ => Action::Error,
            }
        }
    }

    /// Same automaton with the goto out of state 0 removed.
    struct NoGotoData;
    impl ParserData for NoGotoData {
        type StateID = StateID;
        type TokenID = TokenID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            StateID(0)
        }

        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            match (state_id.0, token_id) {
                (0, TokenID::E) => Action::Error,
                _ => XParserData::lookup(state_id, token_id),
            }
        }
    }

    /// Reduces a three-symbol production right after the first shift.
    struct EagerData;
    impl ParserData for EagerData {
        type StateID = StateID;
        type TokenID = TokenID;
        type ProdID = ProdID;

        fn start_state() -> StateID {
            StateID(0)
        }

        fn lookup(state_id: StateID, token_id: TokenID) -> Action {
            match (state_id.0, token_id) {
                (1, _) => Action::Reduce(ProdID::E2),
                _ => XParserData::lookup(state_id, token_id),
            }
        }
    }

    #[derive(Debug, Clone)]
    struct XToken {
        token_id: TokenID,
        value: i64,
        span: Span,
    }

    impl Token for XToken {
        type TokenID = TokenID;

        fn token_id(&self) -> TokenID {
            self.token_id
        }
        fn span(&self) -> Span {
            self.span
        }
    }

    struct XLexer {
        tokens: Vec<XToken>,
        next: usize,
        stats: LexerStats,
    }

    impl XLexer {
        /// Digits become numbers, `+` becomes plus, anything else is a lexer error.
        fn new(s: &str) -> Self {
            let tokens = s
                .bytes()
                .enumerate()
                .map(|(i, b)| XToken {
                    token_id: match b {
                        b'0'..=b'9' => TokenID::Num,
                        b'+' => TokenID::Plus,
                        _ => TokenID::Start,
                    },
                    value: (b as i64) - (b'0' as i64),
                    span: span!(0, i, 0, i + 1),
                })
                .collect();
            Self {
                tokens,
                next: 0,
                stats: LexerStats::default(),
            }
        }
    }

    impl Lexer for XLexer {
        type Token = XToken;
        type Error = String;

        fn try_next(&mut self) -> Result<XToken, String> {
            self.stats.tokens += 1;
            match self.tokens.get(self.next) {
                Some(t) if t.token_id == TokenID::Start => Err(format!("bad byte at {}", t.span)),
                Some(t) => {
                    self.next += 1;
                    Ok(t.clone())
                }
                None => Ok(XToken {
                    token_id: TokenID::End,
                    value: 0,
                    span: span!(0, self.next, 0, self.next),
                }),
            }
        }

        fn stats(&self) -> LexerStats {
            self.stats.clone()
        }
    }

    #[derive(Debug, PartialEq)]
    enum XError {
        Parser(ParserError),
        Lexer(String),
    }

    impl From<ParserError> for XError {
        fn from(e: ParserError) -> Self {
            XError::Parser(e)
        }
    }

    impl From<String> for XError {
        fn from(e: String) -> Self {
            XError::Lexer(e)
        }
    }

    /// Sums the numbers and remembers the order of reductions.
    struct XDriver<D> {
        reduced: Vec<ProdID>,
        _marker: PhantomData<D>,
    }

    impl<D> XDriver<D> {
        fn new() -> Self {
            Self {
                reduced: Vec::new(),
                _marker: PhantomData,
            }
        }
    }

    impl<D> ParserDriver for XDriver<D>
    where
        D: ParserData<TokenID = TokenID, ProdID = ProdID>,
    {
        type ParserData = D;
        type Token = XToken;
        type Value = i64;
        type Error = XError;

        fn shift(&mut self, token: &XToken) -> i64 {
            token.value
        }

        fn reduce(&mut self, prod_id: ProdID, values: &[i64]) -> Result<i64, XError> {
            self.reduced.push(prod_id);
            match prod_id {
                ProdID::E1 => Ok(values[0]),
                ProdID::E2 => Ok(values[0] + values[2]),
            }
        }
    }

    fn parser<D>(s: &str) -> Parser<XLexer, XDriver<D>>
    where
        D: ParserData<TokenID = TokenID, ProdID = ProdID>,
    {
        Parser::new(XLexer::new(s), XDriver::new())
    }

    #[test]
    fn folds_left_recursive_sum() {
        init_logger();
        let mut parser = parser::<XParserData>("1+2+3");
        assert_eq!(parser.parse(), Ok(6));

        let stats = parser.stats();
        assert_eq!(stats.shifts, 5);
        assert_eq!(stats.reductions, 3);
        assert_eq!(stats.tokens, 6);
        assert_eq!(stats.max_depth, 4);
        assert_eq!(
            parser.into_driver().reduced,
            vec![ProdID::E1, ProdID::E2, ProdID::E2]
        );
    }

    #[test]
    fn single_number_is_accepted() {
        init_logger();
        assert_eq!(parser::<XParserData>("7").parse(), Ok(7));
    }

    #[test]
    fn incomplete_input_is_an_unexpected_end() {
        init_logger();
        let err = parser::<XParserData>("1+").parse().unwrap_err();
        assert_eq!(
            err,
            XError::Parser(ParserError::UnexpectedToken {
                token: "end",
                span: span!(0, 2, 0, 2),
            })
        );
    }

    #[test]
    fn leading_operator_is_rejected_before_any_reduction() {
        init_logger();
        let mut parser = parser::<XParserData>("+1");
        let err = parser.parse().unwrap_err();
        assert!(matches!(
            err,
            XError::Parser(ParserError::UnexpectedToken { token: "+", .. })
        ));
        assert!(parser.into_driver().reduced.is_empty());
    }

    #[test]
    fn lexer_errors_pass_through() {
        init_logger();
        let err = parser::<XParserData>("1+x").parse().unwrap_err();
        assert_eq!(err, XError::Lexer("bad byte at 1:3".to_string()));
    }

    #[test]
    fn depth_limit_is_reported() {
        init_logger();
        let mut parser = parser::<XParserData>("1+2").with_max_depth(2);
        let err = parser.parse().unwrap_err();
        assert_eq!(
            err,
            XError::Parser(ParserError::StackOverflow {
                limit: 2,
                span: span!(0, 1, 0, 2),
            })
        );
    }

    #[test]
    fn depth_limit_allows_exactly_enough_frames() {
        init_logger();
        let mut parser = parser::<XParserData>("1+2").with_max_depth(4);
        assert_eq!(parser.parse(), Ok(3));
    }

    #[test]
    fn missing_goto_is_reported() {
        init_logger();
        let err = parser::<NoGotoData>("1").parse().unwrap_err();
        assert_eq!(
            err,
            XError::Parser(ParserError::MissingGoto {
                state: 0,
                symbol: "E",
            })
        );
    }

    #[test]
    fn reduce_never_pops_the_sentinel() {
        init_logger();
        let mut parser = parser::<EagerData>("1+2");
        let err = parser.parse().unwrap_err();
        assert_eq!(
            err,
            XError::Parser(ParserError::StackUnderflow { prod: "E -> E + n" })
        );
        assert!(parser.into_driver().reduced.is_empty());
    }
}
