#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
///
/// Positions are zero-based character indices into the input.
pub enum LexError {
    /// Found a character that is not a digit, decimal point, operator,
    /// parenthesis or whitespace.
    InvalidCharacter {
        /// Where the character was found.
        position:  usize,
        /// The offending character.
        character: char,
    },
    /// A numeric literal does not match `DIGIT+ ['.' DIGIT+]`.
    MalformedNumber {
        /// Where the literal starts.
        position: usize,
    },
    /// A numeric literal is too large to be represented as a finite `f64`.
    LiteralTooLarge {
        /// Where the literal starts.
        position: usize,
    },
}

impl LexError {
    /// Returns the character position the error refers to.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::InvalidCharacter { position, .. }
            | Self::MalformedNumber { position }
            | Self::LiteralTooLarge { position } => *position,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { position, character } => {
                write!(f, "Error at position {position}: Invalid character '{character}'.")
            },
            Self::MalformedNumber { position } => {
                write!(f, "Error at position {position}: Malformed number.")
            },
            Self::LiteralTooLarge { position } => {
                write!(f, "Error at position {position}: Literal is too large.")
            },
        }
    }
}

impl std::error::Error for LexError {}
