#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Represents all errors that can occur while evaluating an expression.
///
/// The variants are mutually exclusive. The first violation found during the
/// scan wins and aborts evaluation; no partial result is ever produced.
pub enum CalcError {
    /// The input was empty once spaces were removed.
    EmptyExpression,
    /// Two digits appeared back to back. Only single-digit operands are
    /// accepted.
    MultiDigitNumber,
    /// A binary operator had no left operand: it started the expression,
    /// followed another operator or followed `(`. Also raised for a binary
    /// `-` with nothing after it.
    UnexpectedOperator,
    /// The expression ended with an operator.
    OperatorAtEnd,
    /// A `)` had no matching `(`, or a `(` was never closed.
    MismatchedBrackets,
    /// The right operand of `/` was zero when the division was reduced.
    DivisionByZero,
    /// Any other structural violation: an unsupported character, an empty
    /// group `()`, an operator right before `)`, or operands left over with
    /// no operator to combine them.
    InvalidExpression,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "empty expression"),
            Self::MultiDigitNumber => write!(f, "multi-digit numbers are not allowed"),
            Self::UnexpectedOperator => write!(f, "unexpected operator without operand"),
            Self::OperatorAtEnd => write!(f, "expression cannot end with an operator"),
            Self::MismatchedBrackets => write!(f, "mismatched brackets"),
            Self::DivisionByZero => write!(f, "division by zero"),
            Self::InvalidExpression => write!(f, "invalid expression"),
        }
    }
}

impl std::error::Error for CalcError {}
