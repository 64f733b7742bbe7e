use crate::error::{EvalError, LexError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Any failure of [`calc`](crate::calc), preserving the stage it came from.
pub enum CalcError {
    /// The input could not be tokenized.
    Lex(LexError),
    /// The tokens could not be evaluated.
    Eval(EvalError),
}

impl CalcError {
    /// Returns the character position of the failure, if one is known.
    ///
    /// # Example
    /// ```
    /// use stackcalc::calc;
    ///
    /// let err = calc("2+x").unwrap_err();
    /// assert_eq!(err.position(), Some(2));
    ///
    /// let err = calc("").unwrap_err();
    /// assert_eq!(err.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Lex(e) => Some(e.position()),
            Self::Eval(e) => e.position(),
        }
    }
}

impl From<LexError> for CalcError {
    fn from(value: LexError) -> Self {
        Self::Lex(value)
    }
}

impl From<EvalError> for CalcError {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::Eval(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CalcError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            Self::Eval(e) => Some(e),
        }
    }
}
