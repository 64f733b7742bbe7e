/// Core evaluation logic.
///
/// Contains the two-stack evaluator, the shunting-yard pass over the token
/// sequence and error propagation.
pub mod core;

/// Binary operator evaluation.
///
/// Implements the arithmetic for `+ - * / ^` including the division by zero
/// and finiteness checks.
pub mod binary;
