/// The evaluator module reduces a token sequence to a number.
///
/// The evaluator makes a single pass over the tokens, keeping an operand stack
/// and an operator stack, and applies operators in precedence order. It
/// reports runtime errors such as division by zero or unbalanced parentheses.
pub mod evaluator;
/// The lexer module tokenizes an expression.
///
/// The lexer reads the raw expression and produces numbers, operators and
/// parentheses, each with the character position it starts at. A leading
/// unary minus is folded into the number it applies to.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Validates numeric literals.
/// - Reports lexical errors for invalid characters or malformed literals.
pub mod lexer;
