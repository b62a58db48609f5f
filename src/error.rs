/// Evaluation errors.
///
/// Defines every way a call to [`crate::evaluate`] can fail. Lexical,
/// grammatical and arithmetic failures share one enum because the evaluator
/// detects all of them in the same left-to-right pass.
pub mod calc_error;

pub use calc_error::CalcError;

/// Result type used throughout the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// [`CalcError`] describing the first failure encountered.
pub type CalcResult<T> = Result<T, CalcError>;
