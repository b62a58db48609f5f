use logos::Logos;

use crate::operator::BinaryOperator;

/// Represents one significant character of an expression.
///
/// Every token spans exactly one character, so two adjacent digits become two
/// `Digit` tokens and the evaluator can reject them. Spaces are skipped;
/// anything the lexer does not recognize surfaces as a lexer error.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A single decimal digit, `0` through `9`.
    #[regex(r"[0-9]", parse_digit)]
    Digit(u8),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Spaces. Tabs and newlines are not skipped.
    #[regex(r" +", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for the four operator characters, regardless of whether
    /// a `-` ends up acting as negation or subtraction.
    #[must_use]
    pub const fn is_operator(self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Star | Self::Slash)
    }

    /// Maps an operator token to the binary operator it denotes.
    #[must_use]
    pub const fn binary_operator(self) -> Option<BinaryOperator> {
        match self {
            Self::Plus => Some(BinaryOperator::Add),
            Self::Minus => Some(BinaryOperator::Sub),
            Self::Star => Some(BinaryOperator::Mul),
            Self::Slash => Some(BinaryOperator::Div),
            _ => None,
        }
    }
}

/// Parses the digit under the lexer cursor.
///
/// # Returns
/// - `Some(u8)`: The digit value, `0..=9`.
/// - `None`: If the slice is empty, which the regex rules out.
fn parse_digit(lex: &logos::Lexer<Token>) -> Option<u8> {
    lex.slice().bytes().next().map(|b| b - b'0')
}
