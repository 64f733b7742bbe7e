//! # stackcalc
//!
//! stackcalc evaluates arithmetic expressions written in Rust.
//! It tokenizes an expression, resolves operator precedence and associativity
//! with an operand stack and an operator stack, and returns the numeric result
//! or a typed error describing exactly what went wrong.

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

use crate::{
    error::CalcError,
    interpreter::{evaluator::core::evaluate, lexer::tokenize},
};

/// Provides the error types for tokenizing and evaluation.
///
/// This module defines every failure the calculator can report. Each error
/// carries the character position of the offending input where one exists,
/// so that callers can point at the problem.
///
/// # Responsibilities
/// - Defines `LexError` for the tokenizer and `EvalError` for the evaluator.
/// - Wraps both in `CalcError` while keeping the original cause available
///   through `std::error::Error::source`.
pub mod error;
/// Orchestrates the two stages of a calculation.
///
/// This module holds the lexer, which turns text into tokens, and the
/// evaluator, which reduces tokens to a number.
pub mod interpreter;
/// Defines the tokens exchanged between lexer and evaluator.
///
/// This module declares the `Token` enum and the `BinaryOperator` type with
/// its precedence and associativity.
pub mod token;

/// Evaluates an arithmetic expression and returns its value.
///
/// The expression may contain decimal numbers, the operators `+ - * / ^`,
/// parentheses and whitespace. `*` and `/` bind tighter than `+` and `-`, and
/// `^` binds tightest and groups to the right. Every call is independent: no
/// state is kept between calls.
///
/// # Errors
/// Returns `CalcError::Lex` if the expression cannot be tokenized and
/// `CalcError::Eval` if the tokens do not form a valid expression or the
/// arithmetic fails.
///
/// # Examples
/// ```
/// use stackcalc::{
///     calc,
///     error::{CalcError, EvalError},
/// };
///
/// assert_eq!(calc("2+3*4").unwrap(), 14.0);
/// assert_eq!(calc("(2+3)*4").unwrap(), 20.0);
/// assert_eq!(calc("-5+3").unwrap(), -2.0);
///
/// let err = calc("4/0").unwrap_err();
/// assert_eq!(err, CalcError::Eval(EvalError::DivisionByZero { position: 1 }));
/// ```
pub fn calc(input: &str) -> Result<f64, CalcError> {
    let tokens = tokenize(input)?;
    Ok(evaluate(tokens)?)
}
