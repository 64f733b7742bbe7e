use log::trace;
use logos::Logos;

use crate::{
    error::LexError,
    token::{BinaryOperator, PositionedToken, Token, TokenSequence},
};

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Why `logos` rejected a slice of input.
///
/// Unrecognized input yields the default variant; the number callback yields
/// the others. The position is attached afterwards in [`tokenize`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
enum LexFault {
    #[default]
    Unrecognized,
    Malformed,
    TooLarge,
}

/// A raw lexical unit as recognized by `logos`, before unary minus folding.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexFault)]
#[logos(skip r"[ \t\f\r\n]+")]
enum Lexeme {
    /// Any run of digits and points. The grammar is checked in the callback so
    /// that `1.2.3` is reported as one malformed literal instead of two
    /// numbers.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `^`
    #[token("^")]
    Caret,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

impl Lexeme {
    const fn into_token(self) -> Token {
        match self {
            Self::Number(value) => Token::number(value),
            Self::Plus => Token::Operator(BinaryOperator::Add),
            Self::Minus => Token::Operator(BinaryOperator::Sub),
            Self::Star => Token::Operator(BinaryOperator::Mul),
            Self::Slash => Token::Operator(BinaryOperator::Div),
            Self::Caret => Token::Operator(BinaryOperator::Pow),
            Self::LParen => Token::LeftParen,
            Self::RParen => Token::RightParen,
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// Accepts `DIGIT+ ['.' DIGIT+]` only.
///
/// # Returns
/// - `Ok(f64)`: The parsed value.
/// - `Err(LexFault::Malformed)`: Missing digits around the point, or more than
///   one point.
/// - `Err(LexFault::TooLarge)`: The value does not fit in a finite `f64`.
fn parse_number(lex: &logos::Lexer<Lexeme>) -> Result<f64, LexFault> {
    let slice = lex.slice();
    let (whole, fraction) = slice.split_once('.').unwrap_or((slice, "0"));

    if whole.is_empty() || fraction.is_empty() || fraction.contains('.') {
        return Err(LexFault::Malformed);
    }

    let value: f64 = slice.parse().map_err(|_| LexFault::Malformed)?;
    if value.is_finite() { Ok(value) } else { Err(LexFault::TooLarge) }
}

/// Maps byte offsets to character indices for offsets visited in increasing
/// order, counting only the characters between consecutive offsets.
struct CharCursor<'a> {
    source: &'a str,
    byte:   usize,
    chars:  usize,
}

impl<'a> CharCursor<'a> {
    const fn new(source: &'a str) -> Self {
        Self { source,
               byte: 0,
               chars: 0 }
    }

    /// Returns the character index of `byte_offset`, which must not precede
    /// the previously visited offset.
    fn advance_to(&mut self, byte_offset: usize) -> usize {
        self.chars += self.source[self.byte..byte_offset].chars().count();
        self.byte = byte_offset;
        self.chars
    }
}

/// Whether a `-` seen after `previous` should be read as a sign.
const fn expects_operand(previous: Option<&PositionedToken>) -> bool {
    matches!(previous, None | Some((Token::Operator(_) | Token::LeftParen, _)))
}

/// Converts an expression into its token sequence.
///
/// Whitespace between tokens is ignored. A `-` that follows nothing, an
/// operator or `(`, and that is directly followed by a number, becomes the
/// sign of that number rather than a subtraction. Each token is paired with
/// the character position where it starts.
///
/// # Errors
/// - `LexError::InvalidCharacter` for characters outside the expression
///   alphabet.
/// - `LexError::MalformedNumber` for literals such as `1.2.3`, `.5` or `3.`.
/// - `LexError::LiteralTooLarge` for literals beyond the `f64` range.
///
/// # Example
/// ```
/// use stackcalc::{
///     error::LexError,
///     interpreter::lexer::tokenize,
///     token::{BinaryOperator, Token},
/// };
///
/// let tokens = tokenize("-5 + 3").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::number(-5.0), 0),
///                 (Token::Operator(BinaryOperator::Add), 3),
///                 (Token::number(3.0), 5)]);
///
/// let err = tokenize("2+x").unwrap_err();
/// assert_eq!(err, LexError::InvalidCharacter { position: 2, character: 'x' });
/// ```
pub fn tokenize(source: &str) -> LexResult<TokenSequence> {
    let mut lexemes = Vec::new();
    let mut lexer = Lexeme::lexer(source);
    let mut cursor = CharCursor::new(source);

    while let Some(lexeme) = lexer.next() {
        let position = cursor.advance_to(lexer.span().start);
        match lexeme {
            Ok(lexeme) => lexemes.push((lexeme, position)),
            Err(LexFault::Malformed) => return Err(LexError::MalformedNumber { position }),
            Err(LexFault::TooLarge) => return Err(LexError::LiteralTooLarge { position }),
            Err(LexFault::Unrecognized) => {
                let character = source[lexer.span().start..].chars().next().unwrap_or_default();
                return Err(LexError::InvalidCharacter { position, character });
            },
        }
    }

    let mut tokens = TokenSequence::with_capacity(lexemes.len());
    let mut iter = lexemes.into_iter().peekable();

    while let Some((lexeme, position)) = iter.next() {
        if matches!(lexeme, Lexeme::Minus)
           && expects_operand(tokens.last())
           && let Some(&(Lexeme::Number(value), _)) = iter.peek()
        {
            iter.next();
            tokens.push((Token::number(-value), position));
            continue;
        }
        tokens.push((lexeme.into_token(), position));
    }

    trace!("tokenized {source:?} into {} tokens", tokens.len());
    Ok(tokens)
}
