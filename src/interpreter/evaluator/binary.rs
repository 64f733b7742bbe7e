use crate::{
    error::EvalError,
    interpreter::evaluator::core::{EvalResult, Evaluator},
    token::BinaryOperator,
};

impl Evaluator {
    /// Evaluates a binary arithmetic operation on two operands.
    ///
    /// Division by zero is checked explicitly. Any other result that is not
    /// finite (overflow, `0 ^ -1`, a negative base with a fractional exponent)
    /// is rejected too, so callers only ever see finite values.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator for error reporting.
    ///
    /// # Example
    /// ```
    /// use stackcalc::{
    ///     error::EvalError,
    ///     interpreter::evaluator::core::Evaluator,
    ///     token::BinaryOperator,
    /// };
    ///
    /// let result = Evaluator::eval_binary(BinaryOperator::Pow, 2.0, 10.0, 1).unwrap();
    /// assert_eq!(result, 1024.0);
    ///
    /// let err = Evaluator::eval_binary(BinaryOperator::Div, 4.0, 0.0, 1).unwrap_err();
    /// assert_eq!(err, EvalError::DivisionByZero { position: 1 });
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: f64,
                       right: f64,
                       position: usize)
                       -> EvalResult<f64> {
        use BinaryOperator::{Add, Div, Mul, Pow, Sub};

        let value = match op {
            Add => left + right,
            Sub => left - right,
            Mul => left * right,
            Div => {
                if right == 0.0 {
                    return Err(EvalError::DivisionByZero { position });
                }
                left / right
            },
            Pow => left.powf(right),
        };

        if value.is_finite() { Ok(value) } else { Err(EvalError::NonFiniteResult { position }) }
    }
}
