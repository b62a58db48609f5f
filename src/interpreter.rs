/// The evaluator module validates and computes an expression in one pass.
///
/// It drives the lexer, enforces the grammar with one token of lookback, and
/// reduces operators eagerly on two stacks. It is the whole of the core; the
/// rest of the crate only wraps it.
///
/// # Responsibilities
/// - Rejects multi-digit numbers, misplaced operators and unbalanced
///   parentheses.
/// - Resolves precedence and left associativity without a syntax tree.
/// - Reports division by zero at reduction time.
pub mod evaluator;
/// The lexer module classifies each significant character of the input.
///
/// Tokens are single characters: digits, the four operators and the two
/// parentheses. Spaces are skipped and anything else is a lexer error. The
/// token stream is private to the evaluator.
pub mod lexer;
