use logos::Logos;

use crate::{
    error::{CalcError, CalcResult},
    interpreter::lexer::Token,
    operator::BinaryOperator,
};

/// An entry on the operator stack.
///
/// `OpenParen` marks the start of a group. It has no priority and is only
/// removed by the matching `)`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum StackEntry {
    Operator(BinaryOperator),
    OpenParen,
}

/// Holds the state of a single evaluation.
///
/// An `Evaluator` lives for exactly one call to [`Evaluator::evaluate`]. It
/// scans the tokens once, left to right, keeping operands and pending
/// operators on two stacks and reducing eagerly whenever precedence or a
/// closing parenthesis allows it. No syntax tree is built.
///
/// ## State
///
/// - `operands`: values waiting to be combined, sign already applied.
/// - `operators`: unreduced operators and open parentheses.
/// - `negate_next`: set by a unary `-`, consumed by the next digit.
/// - `previous`: the last significant token, used for every context check.
#[derive(Debug, Default)]
pub struct Evaluator {
    operands:    Vec<f64>,
    operators:   Vec<StackEntry>,
    negate_next: bool,
    previous:    Option<Token>,
}

impl Evaluator {
    /// Evaluates `expression` and returns its value.
    ///
    /// Spaces are ignored. Every other character must be a digit, one of
    /// `+ - * /` or a parenthesis. The first grammar or arithmetic violation
    /// aborts the evaluation.
    ///
    /// # Errors
    /// Returns the [`CalcError`] describing the first violation found.
    pub fn evaluate(expression: &str) -> CalcResult<f64> {
        let mut tokens = Token::lexer(expression).peekable();
        if tokens.peek().is_none() {
            return Err(CalcError::EmptyExpression);
        }

        let mut state = Self::default();
        while let Some(token) = tokens.next() {
            let token = token.map_err(|()| CalcError::InvalidExpression)?;
            let is_last = tokens.peek().is_none();
            state.step(token, is_last)?;
            state.previous = Some(token);
        }
        state.finish()
    }

    /// Processes one token. `is_last` tells whether any input follows it.
    fn step(&mut self, token: Token, is_last: bool) -> CalcResult<()> {
        match token {
            Token::LParen => {
                self.operators.push(StackEntry::OpenParen);
                Ok(())
            },
            Token::RParen => self.close_group(),
            Token::Minus if self.at_group_start() => {
                self.negate_next = true;
                Ok(())
            },
            Token::Minus if is_last => Err(CalcError::UnexpectedOperator),
            Token::Digit(digit) => self.push_digit(digit),
            // Skipped by the lexer, never yielded.
            Token::Ignored => Ok(()),
            Token::Plus | Token::Minus | Token::Star | Token::Slash => {
                token.binary_operator()
                     .map_or(Err(CalcError::InvalidExpression), |op| self.push_operator(op))
            },
        }
    }

    /// Whether nothing, or only `(`, precedes the current token. A `-` in
    /// this position negates instead of subtracting.
    const fn at_group_start(&self) -> bool {
        matches!(self.previous, None | Some(Token::LParen))
    }

    fn previous_is_operator(&self) -> bool {
        self.previous.is_some_and(Token::is_operator)
    }

    fn push_digit(&mut self, digit: u8) -> CalcResult<()> {
        if matches!(self.previous, Some(Token::Digit(_))) {
            return Err(CalcError::MultiDigitNumber);
        }

        let mut value = f64::from(digit);
        if self.negate_next {
            value = -value;
            self.negate_next = false;
        }
        self.operands.push(value);
        Ok(())
    }

    /// Pushes a binary operator after reducing every pending operator of
    /// equal or higher priority, which makes equal-priority chains associate
    /// to the left.
    fn push_operator(&mut self, op: BinaryOperator) -> CalcResult<()> {
        if self.at_group_start() || self.previous_is_operator() {
            return Err(CalcError::UnexpectedOperator);
        }

        while let Some(&StackEntry::Operator(top)) = self.operators.last()
              && top.priority() >= op.priority()
        {
            self.reduce_pending()?;
        }
        self.operators.push(StackEntry::Operator(op));
        self.negate_next = false;
        Ok(())
    }

    /// Handles `)`: reduces back to the matching `(` and discards it.
    fn close_group(&mut self) -> CalcResult<()> {
        if matches!(self.previous, Some(Token::LParen)) || self.previous_is_operator() {
            return Err(CalcError::InvalidExpression);
        }

        while let Some(StackEntry::Operator(_)) = self.operators.last() {
            self.reduce_pending()?;
        }
        match self.operators.pop() {
            Some(StackEntry::OpenParen) => Ok(()),
            _ => Err(CalcError::MismatchedBrackets),
        }
    }

    /// Runs the end-of-input checks, drains the operator stack and returns
    /// the single remaining operand.
    fn finish(mut self) -> CalcResult<f64> {
        if self.previous_is_operator() {
            return Err(CalcError::OperatorAtEnd);
        }

        while let Some(&entry) = self.operators.last() {
            if entry == StackEntry::OpenParen {
                return Err(CalcError::MismatchedBrackets);
            }
            self.reduce_pending()?;
        }

        match self.operands.as_slice() {
            [result] => Ok(*result),
            _ => Err(CalcError::InvalidExpression),
        }
    }

    /// Applies the top operator to the top two operands.
    ///
    /// The right operand is the most recently pushed one. With fewer than two
    /// operands or no operator at all, nothing happens and `Ok(false)` is
    /// returned.
    ///
    /// # Errors
    /// - `DivisionByZero` if the operator is `/` and the right operand is
    ///   zero.
    /// - `InvalidExpression` if an open parenthesis is on top of the stack.
    fn reduce(&mut self) -> CalcResult<bool> {
        let (Some(&entry), [.., left, right]) = (self.operators.last(), self.operands.as_slice())
        else {
            return Ok(false);
        };
        let StackEntry::Operator(op) = entry else {
            return Err(CalcError::InvalidExpression);
        };

        let value = op.apply(*left, *right)?;
        self.operators.pop();
        self.operands.truncate(self.operands.len() - 2);
        self.operands.push(value);
        Ok(true)
    }

    /// Reduces while an operator is known to be pending. A reduction that
    /// cannot make progress means an operator lost its operands, so the
    /// expression is malformed.
    fn reduce_pending(&mut self) -> CalcResult<()> {
        if self.reduce()? {
            Ok(())
        } else {
            Err(CalcError::InvalidExpression)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_stacks(operands: &[f64], operators: &[StackEntry]) -> Evaluator {
        Evaluator { operands: operands.to_vec(),
                    operators: operators.to_vec(),
                    ..Evaluator::default() }
    }

    #[test]
    fn reduce_combines_top_two_operands() {
        let mut state = with_stacks(&[1.0, 6.0, 4.0],
                                    &[StackEntry::Operator(BinaryOperator::Add),
                                      StackEntry::Operator(BinaryOperator::Sub)]);
        assert_eq!(state.reduce(), Ok(true));
        assert_eq!(state.operands, vec![1.0, 2.0]);
        assert_eq!(state.operators, vec![StackEntry::Operator(BinaryOperator::Add)]);
    }

    #[test]
    fn reduce_is_a_no_op_without_enough_input() {
        let mut state = with_stacks(&[3.0], &[StackEntry::Operator(BinaryOperator::Mul)]);
        assert_eq!(state.reduce(), Ok(false));
        assert_eq!(state.operands, vec![3.0]);
        assert_eq!(state.operators.len(), 1);

        let mut state = with_stacks(&[3.0, 4.0], &[]);
        assert_eq!(state.reduce(), Ok(false));
        assert_eq!(state.operands, vec![3.0, 4.0]);
    }

    #[test]
    fn reduce_refuses_open_paren() {
        let mut state = with_stacks(&[3.0, 4.0], &[StackEntry::OpenParen]);
        assert_eq!(state.reduce(), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn reduce_reports_division_by_zero() {
        let mut state = with_stacks(&[3.0, 0.0], &[StackEntry::Operator(BinaryOperator::Div)]);
        assert_eq!(state.reduce(), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn stalled_reduction_is_invalid() {
        let mut state = with_stacks(&[], &[StackEntry::Operator(BinaryOperator::Add)]);
        assert_eq!(state.reduce_pending(), Err(CalcError::InvalidExpression));
    }

    #[test]
    fn unary_minus_only_at_group_start() {
        let mut state = Evaluator::default();
        assert!(state.at_group_start());
        state.previous = Some(Token::LParen);
        assert!(state.at_group_start());
        state.previous = Some(Token::Digit(1));
        assert!(!state.at_group_start());
    }

    #[test]
    fn ignored_token_leaves_state_alone() {
        let mut state = with_stacks(&[4.0], &[StackEntry::OpenParen]);
        state.negate_next = true;
        assert_eq!(state.step(Token::Ignored, true), Ok(()));
        assert_eq!(state.operands, vec![4.0]);
        assert_eq!(state.operators, vec![StackEntry::OpenParen]);
        assert!(state.negate_next);
    }

    #[test]
    fn negation_applies_to_next_digit_only() {
        let mut state = Evaluator::default();
        state.step(Token::Minus, false).unwrap();
        state.previous = Some(Token::Minus);
        assert!(state.negate_next);
        state.step(Token::Digit(9), false).unwrap();
        assert!(!state.negate_next);
        assert_eq!(state.operands, vec![-9.0]);
    }

    #[test]
    fn binary_operator_clears_pending_negation() {
        let mut state = with_stacks(&[2.0], &[]);
        state.previous = Some(Token::Digit(2));
        state.negate_next = true;
        state.step(Token::Star, false).unwrap();
        assert!(!state.negate_next);
        assert_eq!(state.operators, vec![StackEntry::Operator(BinaryOperator::Mul)]);
    }

    #[test]
    fn stacks_are_empty_after_a_balanced_group() {
        let mut state = Evaluator::default();
        for token in [Token::LParen, Token::Digit(2), Token::Plus, Token::Digit(3), Token::RParen] {
            state.step(token, false).unwrap();
            state.previous = Some(token);
        }
        assert!(state.operators.is_empty());
        assert_eq!(state.operands, vec![5.0]);
    }
}
