use std::fmt;

use ordered_float::OrderedFloat;

/// The grouping rule for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Represents a binary operator in an expression.
///
/// Each operator knows its binding strength and how it groups with operators
/// of the same strength. The evaluator only consults these two properties, so
/// adding an operator means adding a variant and extending the three matches
/// below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// Addition (`+`).
    Add,
    /// Subtraction (`-`).
    Sub,
    /// Multiplication (`*`).
    Mul,
    /// Division (`/`).
    Div,
    /// Exponentiation (`^`).
    Pow,
}

impl BinaryOperator {
    /// Returns the binding strength of the operator. Higher binds tighter.
    ///
    /// # Example
    /// ```
    /// use stackcalc::token::BinaryOperator;
    ///
    /// assert!(BinaryOperator::Mul.precedence() > BinaryOperator::Add.precedence());
    /// assert!(BinaryOperator::Pow.precedence() > BinaryOperator::Div.precedence());
    /// ```
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Returns how the operator groups with operators of equal precedence.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A classified unit of an expression.
///
/// Tokens are produced by [`tokenize`](crate::interpreter::lexer::tokenize)
/// and consumed once by
/// [`evaluate`](crate::interpreter::evaluator::core::evaluate). A leading
/// unary minus never appears as an operator token; it is folded into the sign
/// of the number it precedes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A numeric literal, such as `3`, `0.25` or a folded `-7`.
    Number(OrderedFloat<f64>),
    /// One of `+ - * / ^`.
    Operator(BinaryOperator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Convenience constructor for a number token.
    ///
    /// # Example
    /// ```
    /// use ordered_float::OrderedFloat;
    /// use stackcalc::token::Token;
    ///
    /// assert_eq!(Token::number(2.5), Token::Number(OrderedFloat(2.5)));
    /// ```
    #[must_use]
    pub const fn number(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// A token paired with the zero-based character position it starts at.
pub type PositionedToken = (Token, usize);

/// The ordered output of the tokenizer.
pub type TokenSequence = Vec<PositionedToken>;
