//! # digitcalc
//!
//! digitcalc evaluates small arithmetic expressions written with single-digit
//! operands, the four basic operators, parentheses and unary minus.
//! Validation and evaluation happen in one left-to-right pass over the input,
//! using an operand stack and an operator stack instead of a syntax tree.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{error::CalcResult, interpreter::evaluator::Evaluator};

/// Provides the error type for evaluation failures.
///
/// This module defines [`error::CalcError`], one variant per way an
/// expression can be rejected, together with the [`error::CalcResult`] alias
/// used by every fallible function in the crate.
///
/// # Responsibilities
/// - Classifies grammar, bracket and arithmetic failures.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Scanning and evaluation machinery.
///
/// The token stream and the evaluator state never leave a single call to
/// [`evaluate`].
mod interpreter;
/// Binary operators, their precedence classes and their arithmetic.
pub mod operator;

/// Evaluates an arithmetic expression and returns its value.
///
/// Spaces are removed before anything else and are otherwise insignificant.
/// Operands are single digits; `-` directly at the start or right after `(`
/// negates the digit that follows. Each call is independent of every other.
///
/// # Errors
/// Returns the [`error::CalcError`] for the first violation found. No partial
/// result is produced.
///
/// # Examples
/// ```
/// use digitcalc::{error::CalcError, evaluate};
///
/// assert_eq!(evaluate("(2+2)*2"), Ok(8.0));
/// assert_eq!(evaluate("-1*5+7-(-9/8)"), Ok(3.125));
///
/// // Operands wider than one digit are rejected, even when spaced apart.
/// assert_eq!(evaluate("1 2+3"), Err(CalcError::MultiDigitNumber));
/// assert_eq!(evaluate("3/0"), Err(CalcError::DivisionByZero));
/// ```
pub fn evaluate(expression: &str) -> CalcResult<f64> {
    Evaluator::evaluate(expression)
}
