//! # Expression Lexer
//!
//! Splits source text into [`ExprToken`]s with a multi-pattern dense DFA.
//!
//! Each call to [`ExprLexer::try_next`] runs one anchored, leftmost-first
//! search from the cursor; the pattern that matched selects a [`Rule`] whose
//! action either skips the text or produces a token. Rule order is priority
//! order, which gives C-style literal prefixes: `0x1f` is hexadecimal, `017`
//! octal, and `08` lexes as `0` followed by `8`.
use crate::{ExprToken, Operator, Param, TokenID, TokenValue};
use lrkit::{Lexer, LexerCursor, LexerStats, Position};
use num_enum::TryFromPrimitive;
use regex_automata::{
    Anchored, Input,
    dfa::{Automaton, dense},
};
use smartstring::alias::String;
use std::sync::LazyLock;
use thiserror::Error;

/// Lexical rules, in priority order; the discriminant is the DFA pattern id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(usize)]
pub enum Rule {
    WhiteSpace,
    HexNumber,
    OctNumber,
    DecNumber,
    Param,
    AddOp,
    MulOp,
    LeftParen,
    RightParen,
    Error,
}

const PATTERNS: [&str; 10] = [
    r"[ \t\r\n]+",
    r"0[xX][0-9a-fA-F]+",
    r"0[0-7]*",
    r"[1-9][0-9]*",
    r"[xyz]",
    r"[+\-]",
    r"[*/]",
    r"\(",
    r"\)",
    r"(?s:.)",
];

static DFA: LazyLock<Result<dense::DFA<Vec<u32>>, std::string::String>> = LazyLock::new(|| {
    log::debug!("building lexer DFA from {} patterns", PATTERNS.len());
    dense::DFA::new_many(&PATTERNS).map_err(|e| e.to_string())
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token, or a parameter the grammar lacks.
    #[error("unexpected character {found:?} at {position}")]
    UnexpectedChar { found: char, position: Position },

    /// An integer literal that does not fit in 64 signed bits.
    #[error("integer literal {literal} out of range at {position}")]
    LiteralOutOfRange { literal: String, position: Position },

    #[error("lexer automaton: {0}")]
    Automaton(String),
}

/// Lexer over a borrowed source string.
///
/// `parameters` lists the parameter names the consuming grammar accepts; any
/// other `x`, `y` or `z` is reported as an unexpected character.
pub struct ExprLexer<'a> {
    source: &'a str,
    parameters: &'static [Param],
    dfa: &'static dense::DFA<Vec<u32>>,
    cursor: LexerCursor,
    stats: LexerStats,
}

impl<'a> ExprLexer<'a> {
    pub fn try_new(source: &'a str, parameters: &'static [Param]) -> Result<Self, LexError> {
        let dfa = DFA
            .as_ref()
            .map_err(|e| LexError::Automaton(e.as_str().into()))?;
        Ok(Self {
            source,
            parameters,
            dfa,
            cursor: LexerCursor::new(),
            stats: LexerStats::default(),
        })
    }

    fn token(&mut self, token_id: TokenID, value: TokenValue) -> ExprToken {
        self.stats.tokens += 1;
        ExprToken {
            token_id,
            value,
            span: self.cursor.span,
        }
    }

    fn action(
        &mut self,
        rule: Rule,
        text: &str,
        position: Position,
    ) -> Result<Option<ExprToken>, LexError> {
        let first = text.chars().next().unwrap_or('\0');
        let token = match rule {
            Rule::WhiteSpace => {
                // [ \t\r\n]+
                self.stats.skipped += 1;
                return Ok(None);
            }
            Rule::HexNumber | Rule::OctNumber | Rule::DecNumber => {
                let n = literal_value(rule, text).ok_or_else(|| LexError::LiteralOutOfRange {
                    literal: text.into(),
                    position,
                })?;
                self.token(TokenID::Number, TokenValue::Number(n))
            }
            Rule::Param => {
                // [xyz]
                let param = Param::from_name(first)
                    .filter(|p| self.parameters.contains(p))
                    .ok_or(LexError::UnexpectedChar {
                        found: first,
                        position,
                    })?;
                self.token(TokenID::Param, TokenValue::Param(param))
            }
            Rule::AddOp | Rule::MulOp => {
                // [+\-] and [*/]
                let op = Operator::from_symbol(first).ok_or(LexError::UnexpectedChar {
                    found: first,
                    position,
                })?;
                let token_id = if op.is_additive() {
                    TokenID::AddOp
                } else {
                    TokenID::MulOp
                };
                self.token(token_id, TokenValue::Op(op))
            }
            Rule::LeftParen => self.token(TokenID::LeftParen, TokenValue::None),
            Rule::RightParen => self.token(TokenID::RightParen, TokenValue::None),
            Rule::Error => {
                // (?s:.)
                return Err(LexError::UnexpectedChar {
                    found: first,
                    position,
                });
            }
        };
        Ok(Some(token))
    }
}

impl Lexer for ExprLexer<'_> {
    type Token = ExprToken;
    type Error = LexError;

    fn try_next(&mut self) -> Result<ExprToken, LexError> {
        loop {
            self.cursor.mark();
            let position = self.cursor.span.start;
            let source = self.source;
            let rest = &source[self.cursor.pos..];
            if rest.is_empty() {
                log::trace!("END at {}", position);
                return Ok(self.token(TokenID::End, TokenValue::None));
            }

            let input = Input::new(rest).anchored(Anchored::Yes);
            let m = self
                .dfa
                .try_search_fwd(&input)
                .map_err(|e| LexError::Automaton(e.to_string().into()))?
                .ok_or_else(|| LexError::UnexpectedChar {
                    found: rest.chars().next().unwrap_or('\0'),
                    position,
                })?;
            let rule = Rule::try_from(m.pattern().as_usize())
                .map_err(|e| LexError::Automaton(e.to_string().into()))?;
            let text = &rest[..m.offset()];
            log::trace!("MATCH: rule={:?}, text={:?}, at {}", rule, text, position);

            self.cursor.advance_str(text);
            self.stats.bytes += text.len();

            if let Some(token) = self.action(rule, text, position)? {
                return Ok(token);
            }
        }
    }

    fn stats(&self) -> LexerStats {
        self.stats.clone()
    }
}

/// Value of a literal matched by one of the number rules.
fn literal_value(rule: Rule, text: &str) -> Option<i64> {
    match rule {
        // 0[xX][0-9a-fA-F]+
        Rule::HexNumber => i64::from_str_radix(&text[2..], 16).ok(),
        // 0[0-7]*
        Rule::OctNumber if text.len() == 1 => Some(0),
        Rule::OctNumber => i64::from_str_radix(&text[1..], 8).ok(),
        // [1-9][0-9]*
        Rule::DecNumber => text.parse().ok(),
        _ => None,
    }
}

/// Parses a whole string as an integer with an optional sign, using the same
/// prefixes as source literals (`0x` hexadecimal, leading `0` octal).
///
/// Surrounding whitespace is ignored. Returns `None` for empty, malformed or
/// out-of-range text.
///
/// ```rust
/// # use exprjit::lexer::parse_integer;
/// assert_eq!(parse_integer("-0x10"), Some(-16));
/// assert_eq!(parse_integer("010"), Some(8));
/// assert_eq!(parse_integer("12abc"), None);
/// ```
pub fn parse_integer(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        (16, hex)
    } else if digits.len() > 1 && digits.starts_with('0') {
        (8, &digits[1..])
    } else {
        (10, digits)
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let magnitude = i128::from(u64::from_str_radix(digits, radix).ok()?);
    i64::try_from(if negative { -magnitude } else { magnitude }).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lrkit::{Token, span};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn lex_with(s: &str, parameters: &'static [Param]) -> Result<Vec<ExprToken>, LexError> {
        let mut lexer = ExprLexer::try_new(s, parameters)?;
        let mut tokens = Vec::new();
        loop {
            let token = lexer.try_next()?;
            let end = token.token_id() == TokenID::End;
            tokens.push(token);
            if end {
                return Ok(tokens);
            }
        }
    }

    fn lex(s: &str) -> Vec<ExprToken> {
        lex_with(s, &Param::ALL).unwrap()
    }

    fn values(s: &str) -> Vec<TokenValue> {
        lex(s).into_iter().map(|t| t.value).collect()
    }

    #[test]
    fn recognizes_every_token_kind() {
        init_logger();
        let ids: Vec<TokenID> = lex("(x + 1) * y - z / 2")
            .iter()
            .map(|t| t.token_id())
            .collect();
        use TokenID::*;
        assert_eq!(
            ids,
            vec![
                LeftParen, Param, AddOp, Number, RightParen, MulOp, Param, AddOp, Param, MulOp,
                Number, End
            ]
        );
    }

    #[test]
    fn operators_carry_their_symbol() {
        init_logger();
        assert_eq!(
            values("+-*/"),
            vec![
                TokenValue::Op(Operator::Add),
                TokenValue::Op(Operator::Sub),
                TokenValue::Op(Operator::Mul),
                TokenValue::Op(Operator::Div),
                TokenValue::None,
            ]
        );
    }

    #[test]
    fn literal_prefixes_select_the_base() {
        init_logger();
        assert_eq!(
            values("0x1f 0XFF 017 0 42"),
            vec![
                TokenValue::Number(31),
                TokenValue::Number(255),
                TokenValue::Number(15),
                TokenValue::Number(0),
                TokenValue::Number(42),
                TokenValue::None,
            ]
        );
    }

    #[test]
    fn non_octal_digit_after_zero_starts_a_new_literal() {
        init_logger();
        assert_eq!(
            values("08"),
            vec![TokenValue::Number(0), TokenValue::Number(8), TokenValue::None]
        );
    }

    #[test]
    fn largest_literal_fits_and_next_one_does_not() {
        init_logger();
        assert_eq!(
            values("9223372036854775807")[0],
            TokenValue::Number(i64::MAX)
        );
        let err = lex_with("1 + 9223372036854775808", &[]).unwrap_err();
        assert_eq!(
            err,
            LexError::LiteralOutOfRange {
                literal: "9223372036854775808".into(),
                position: Position::new(0, 4),
            }
        );
    }

    #[test]
    fn spans_cover_token_text() {
        init_logger();
        let tokens = lex(" 12 *\n x");
        assert_eq!(tokens[0].span, span!(0, 1, 0, 3));
        assert_eq!(tokens[1].span, span!(0, 4, 0, 5));
        assert_eq!(tokens[2].span, span!(1, 1, 1, 2));
        assert!(tokens[3].span.is_empty());
    }

    #[test]
    fn unknown_character_is_an_error() {
        init_logger();
        let err = lex_with("1$2", &[]).unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                found: '$',
                position: Position::new(0, 1),
            }
        );
        assert_eq!(err.to_string(), "unexpected character '$' at 1:2");
    }

    #[test]
    fn non_ascii_character_is_reported_whole() {
        init_logger();
        let err = lex_with("1 × 2", &[]).unwrap_err();
        assert!(matches!(err, LexError::UnexpectedChar { found: '×', .. }));
    }

    #[test]
    fn non_ascii_character_is_reported_at_its_column() {
        init_logger();
        let err = lex_with("12 + é", &[]).unwrap_err();
        assert_eq!(err.to_string(), "unexpected character 'é' at 1:6");
    }

    #[test]
    fn parameters_need_grammar_support() {
        init_logger();
        assert!(lex_with("x", &Param::ALL).is_ok());
        let err = lex_with("1 + y", &[]).unwrap_err();
        assert_eq!(
            err,
            LexError::UnexpectedChar {
                found: 'y',
                position: Position::new(0, 4),
            }
        );
        assert!(lex_with("w", &Param::ALL).is_err());
    }

    #[test]
    fn end_is_returned_repeatedly() {
        init_logger();
        let mut lexer = ExprLexer::try_new("7", &[]).unwrap();
        assert_eq!(lexer.try_next().unwrap().token_id(), TokenID::Number);
        for _ in 0..3 {
            assert_eq!(lexer.try_next().unwrap().token_id(), TokenID::End);
        }
        assert_eq!(lexer.stats().tokens, 4);
    }

    #[test]
    fn stats_count_bytes_and_skipped_runs() {
        init_logger();
        let mut lexer = ExprLexer::try_new("  1 +\t2 ", &[]).unwrap();
        while lexer.try_next().unwrap().token_id() != TokenID::End {}
        assert_eq!(
            lexer.stats(),
            LexerStats {
                tokens: 4,
                bytes: 8,
                skipped: 4,
            }
        );
    }

    #[test]
    fn lexing_twice_gives_identical_tokens() {
        init_logger();
        let s = "0x10 * (y - 3)";
        assert_eq!(lex(s), lex(s));
    }

    #[test]
    fn parse_integer_accepts_signed_prefixed_literals() {
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("-5"), Some(-5));
        assert_eq!(parse_integer("+7"), Some(7));
        assert_eq!(parse_integer("0x10"), Some(16));
        assert_eq!(parse_integer("010"), Some(8));
        assert_eq!(parse_integer(" 42 "), Some(42));
        assert_eq!(parse_integer("-9223372036854775808"), Some(i64::MIN));
    }

    #[test]
    fn parse_integer_rejects_malformed_text() {
        for s in ["", "-", "0x", "08", "1.5", "abc", "9223372036854775808", "--1"] {
            assert_eq!(parse_integer(s), None, "{s:?}");
        }
    }
}
