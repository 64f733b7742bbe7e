#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a token sequence.
///
/// Every variant except [`EvalError::EmptyExpression`] carries the zero-based
/// character position of the token that triggered it.
pub enum EvalError {
    /// The input contained no tokens.
    EmptyExpression,
    /// A `)` had no matching `(`, or a `(` was never closed.
    UnbalancedParens {
        /// Position of the unmatched parenthesis.
        position: usize,
    },
    /// An operator lacked operands, or values or operators were left over.
    MalformedExpression {
        /// Position of the operator or token where the problem surfaced.
        position: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// Position of the `/` operator.
        position: usize,
    },
    /// An operation produced an infinite or NaN value.
    NonFiniteResult {
        /// Position of the operator.
        position: usize,
    },
}

impl EvalError {
    /// Returns the character position the error refers to, if any.
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::UnbalancedParens { position }
            | Self::MalformedExpression { position }
            | Self::DivisionByZero { position }
            | Self::NonFiniteResult { position } => Some(*position),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Error: Empty expression."),
            Self::UnbalancedParens { position } => {
                write!(f, "Error at position {position}: Unbalanced parentheses.")
            },
            Self::MalformedExpression { position } => {
                write!(f, "Error at position {position}: Malformed expression.")
            },
            Self::DivisionByZero { position } => {
                write!(f, "Error at position {position}: Division by zero.")
            },
            Self::NonFiniteResult { position } => write!(f,
                                                         "Error at position {position}: Result is not a finite number."),
        }
    }
}

impl std::error::Error for EvalError {}
