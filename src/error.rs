/// Tokenizer errors.
///
/// Defines the errors raised while turning the raw input into tokens: stray
/// characters and numeric literals that do not follow the literal grammar.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a token sequence to a number,
/// such as unbalanced parentheses, missing operands or division by zero.
pub mod eval_error;
/// The combined error returned by [`calc`](crate::calc).
pub mod calc_error;

pub use calc_error::CalcError;
pub use eval_error::EvalError;
pub use lex_error::LexError;
