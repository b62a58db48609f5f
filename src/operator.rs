use crate::error::{CalcError, CalcResult};

/// Represents one of the four supported binary operators.
///
/// Each operator belongs to a precedence class. Operators of equal class
/// associate to the left, which the evaluator achieves by reducing the
/// pending operator before pushing a new one of the same class.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns the precedence class of the operator.
    ///
    /// `+` and `-` share class 1, `*` and `/` share class 2.
    ///
    /// # Example
    /// ```
    /// use digitcalc::operator::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.priority() > BinaryOperator::Sub.priority());
    /// assert_eq!(BinaryOperator::Add.priority(), BinaryOperator::Sub.priority());
    /// ```
    #[must_use]
    pub const fn priority(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
        }
    }

    /// Applies the operator to `left` and `right`, in that order.
    ///
    /// # Errors
    /// Returns [`CalcError::DivisionByZero`] when dividing by zero. Negative
    /// zero counts as zero.
    ///
    /// # Example
    /// ```
    /// use digitcalc::{error::CalcError, operator::BinaryOperator};
    ///
    /// assert_eq!(BinaryOperator::Sub.apply(7.0, 9.0), Ok(-2.0));
    /// assert_eq!(BinaryOperator::Div.apply(3.0, 0.0), Err(CalcError::DivisionByZero));
    /// ```
    pub fn apply(self, left: f64, right: f64) -> CalcResult<f64> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(left / right)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplicative_binds_tighter_than_additive() {
        for low in [BinaryOperator::Add, BinaryOperator::Sub] {
            for high in [BinaryOperator::Mul, BinaryOperator::Div] {
                assert!(high.priority() > low.priority(), "{high:?} should outrank {low:?}");
            }
        }
    }

    #[test]
    fn division_rejects_both_zeros() {
        assert_eq!(BinaryOperator::Div.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(BinaryOperator::Div.apply(1.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(BinaryOperator::Div.apply(0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn operands_are_applied_left_to_right() {
        assert_eq!(BinaryOperator::Sub.apply(2.0, 5.0), Ok(-3.0));
        assert_eq!(BinaryOperator::Div.apply(1.0, 2.0), Ok(0.5));
        assert_eq!(BinaryOperator::Mul.apply(-3.0, 3.0), Ok(-9.0));
        assert_eq!(BinaryOperator::Add.apply(4.0, 4.0), Ok(8.0));
    }
}
