use log::debug;

use crate::{
    error::EvalError,
    token::{Associativity, BinaryOperator, PositionedToken, Token, TokenSequence},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Holds the working state of a single evaluation.
///
/// The operand stack collects intermediate values. The operator stack holds
/// operators whose application is deferred until precedence allows it, and
/// left parentheses acting as barriers. Both stacks are created fresh for each
/// call to [`evaluate`] and discarded afterwards.
#[derive(Debug)]
pub struct Evaluator {
    /// Intermediate numeric values.
    pub operands:       Vec<f64>,
    /// Pending `Operator` and `LeftParen` tokens with their positions.
    pub operators:      Vec<PositionedToken>,
    /// Whether the next token must start an operand (a number or `(`).
    /// Operands and operators have to alternate.
    pub expect_operand: bool,
}

#[allow(clippy::new_without_default)]
impl Evaluator {
    /// Creates an evaluator with empty stacks, waiting for the first operand.
    #[must_use]
    pub const fn new() -> Self {
        Self { operands:       Vec::new(),
               operators:      Vec::new(),
               expect_operand: true, }
    }

    /// Feeds one token into the evaluation.
    ///
    /// - `Number`: pushed onto the operand stack.
    /// - `Operator`: applies every stacked operator that binds at least as
    ///   tightly (strictly tighter for right-associative operators), then
    ///   pushes itself.
    /// - `LeftParen`: pushed as a barrier.
    /// - `RightParen`: applies operators down to the matching `LeftParen`.
    ///
    /// # Errors
    /// - `UnbalancedParens` if a `)` has no matching `(`.
    /// - `MalformedExpression` if the token breaks the alternation of
    ///   operands and operators, as in `2 3 +` or `+ 2 3`.
    /// - Any error raised while applying an operator.
    pub fn push_token(&mut self, token: Token, position: usize) -> EvalResult<()> {
        match token {
            Token::Number(_) | Token::LeftParen if !self.expect_operand => {
                return Err(EvalError::MalformedExpression { position });
            },
            Token::Operator(_) if self.expect_operand => {
                return Err(EvalError::MalformedExpression { position });
            },
            Token::Number(value) => {
                self.operands.push(value.into_inner());
                self.expect_operand = false;
            },
            Token::Operator(op) => {
                while let Some(&(Token::Operator(top), top_position)) = self.operators.last()
                      && Self::yields_to(top, op)
                {
                    self.operators.pop();
                    self.apply(top, top_position)?;
                }
                self.operators.push((token, position));
                self.expect_operand = true;
            },
            Token::LeftParen => self.operators.push((token, position)),
            Token::RightParen => {
                if !self.operators.iter().any(|(t, _)| matches!(t, Token::LeftParen)) {
                    return Err(EvalError::UnbalancedParens { position });
                }
                if self.expect_operand {
                    return Err(EvalError::MalformedExpression { position });
                }
                self.close_paren(position)?;
            },
        }
        Ok(())
    }

    /// Whether the stacked operator `top` must be applied before `incoming`
    /// is pushed.
    const fn yields_to(top: BinaryOperator, incoming: BinaryOperator) -> bool {
        let (stacked, pushed) = (top.precedence(), incoming.precedence());
        stacked > pushed
        || (stacked == pushed && matches!(incoming.associativity(), Associativity::Left))
    }

    /// Applies operators until the nearest `LeftParen`, which is discarded.
    fn close_paren(&mut self, position: usize) -> EvalResult<()> {
        loop {
            match self.operators.pop() {
                Some((Token::LeftParen, _)) => return Ok(()),
                Some((Token::Operator(op), op_position)) => self.apply(op, op_position)?,
                Some(_) | None => return Err(EvalError::UnbalancedParens { position }),
            }
        }
    }

    /// Pops two operands, applies `op` and pushes the result.
    ///
    /// The right operand is popped first.
    ///
    /// # Errors
    /// - `MalformedExpression` if fewer than two operands are available.
    /// - Any error from [`Evaluator::eval_binary`].
    pub fn apply(&mut self, op: BinaryOperator, position: usize) -> EvalResult<()> {
        let (Some(right), Some(left)) = (self.operands.pop(), self.operands.pop()) else {
            return Err(EvalError::MalformedExpression { position });
        };

        let value = Self::eval_binary(op, left, right, position)?;
        debug!("applied {left} {op} {right} = {value}");
        self.operands.push(value);
        Ok(())
    }

    /// Applies all remaining operators and returns the single remaining value.
    ///
    /// `end` is the position reported when the final state is inconsistent.
    ///
    /// # Errors
    /// - `MalformedExpression` if the input ends where an operand is expected,
    ///   or the operand stack does not end with exactly one value.
    /// - `UnbalancedParens` if a `(` was never closed.
    pub fn finish(mut self, end: usize) -> EvalResult<f64> {
        if self.expect_operand {
            return Err(EvalError::MalformedExpression { position: end });
        }

        while let Some((token, position)) = self.operators.pop() {
            match token {
                Token::Operator(op) => self.apply(op, position)?,
                _ => return Err(EvalError::UnbalancedParens { position }),
            }
        }

        match self.operands.as_slice() {
            [value] => Ok(*value),
            _ => Err(EvalError::MalformedExpression { position: end }),
        }
    }
}

/// Evaluates a token sequence to a number.
///
/// Runs a single left-to-right pass with an operand stack and an operator
/// stack, applying operators as soon as precedence and associativity allow.
/// A successful evaluation always leaves exactly one operand and no pending
/// operators.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `UnbalancedParens` for an unmatched `(` or `)`.
/// - `MalformedExpression` for missing operands, operands and operators out
///   of order, or leftover values.
/// - `DivisionByZero` when dividing by zero.
/// - `NonFiniteResult` when an operation overflows or yields NaN.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::EvalError,
///     interpreter::evaluator::core::evaluate,
///     token::{BinaryOperator, Token},
/// };
///
/// // 2 + 3 * 4
/// let tokens = vec![(Token::number(2.0), 0),
///                   (Token::Operator(BinaryOperator::Add), 1),
///                   (Token::number(3.0), 2),
///                   (Token::Operator(BinaryOperator::Mul), 3),
///                   (Token::number(4.0), 4)];
/// assert_eq!(evaluate(tokens).unwrap(), 14.0);
///
/// assert_eq!(evaluate(Vec::new()), Err(EvalError::EmptyExpression));
/// ```
pub fn evaluate(tokens: TokenSequence) -> EvalResult<f64> {
    let Some(&(_, end)) = tokens.last() else {
        return Err(EvalError::EmptyExpression);
    };

    let mut evaluator = Evaluator::new();
    for (token, position) in tokens {
        evaluator.push_token(token, position)?;
    }
    evaluator.finish(end)
}
