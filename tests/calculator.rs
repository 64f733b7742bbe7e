use std::fs;

use stackcalc::{
    calc,
    error::{CalcError, EvalError, LexError},
    interpreter::{evaluator::core::evaluate, lexer::tokenize},
    token::{BinaryOperator, Token},
};
use walkdir::WalkDir;

const TOLERANCE: f64 = 1e-9;

fn error_kind(error: &CalcError) -> &'static str {
    match error {
        CalcError::Lex(LexError::InvalidCharacter { .. }) => "InvalidCharacter",
        CalcError::Lex(LexError::MalformedNumber { .. }) => "MalformedNumber",
        CalcError::Lex(LexError::LiteralTooLarge { .. }) => "LiteralTooLarge",
        CalcError::Eval(EvalError::EmptyExpression) => "EmptyExpression",
        CalcError::Eval(EvalError::UnbalancedParens { .. }) => "UnbalancedParens",
        CalcError::Eval(EvalError::MalformedExpression { .. }) => "MalformedExpression",
        CalcError::Eval(EvalError::DivisionByZero { .. }) => "DivisionByZero",
        CalcError::Eval(EvalError::NonFiniteResult { .. }) => "NonFiniteResult",
    }
}

fn assert_value(src: &str, expected: f64) {
    match calc(src) {
        Ok(value) => assert!((value - expected).abs() <= TOLERANCE,
                             "{src:?} evaluated to {value}, expected {expected}"),
        Err(e) => panic!("{src:?} failed: {e}"),
    }
}

fn assert_failure(src: &str, expected: &CalcError) {
    match calc(src) {
        Ok(value) => panic!("{src:?} evaluated to {value} but was expected to fail"),
        Err(e) => assert_eq!(&e, expected, "{src:?} failed with the wrong error"),
    }
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, line) in content.lines().enumerate() {
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }
            let (expression, expected) =
                line.rsplit_once("=>")
                    .unwrap_or_else(|| panic!("{path:?}:{}: missing '=>'", i + 1));
            let (expression, expected) = (expression.trim(), expected.trim());
            count += 1;

            match (calc(expression), expected.strip_prefix('!')) {
                (Ok(value), None) => {
                    let expected: f64 = expected.parse().unwrap_or_else(|e| {
                                                           panic!("{path:?}:{}: bad value: {e}", i + 1)
                                                       });
                    assert!((value - expected).abs() <= TOLERANCE,
                            "{path:?}:{}: {expression:?} evaluated to {value}, expected {expected}",
                            i + 1);
                },
                (Err(e), Some(kind)) => assert_eq!(error_kind(&e),
                                                   kind,
                                                   "{path:?}:{}: {expression:?} failed with {e}",
                                                   i + 1),
                (Ok(value), Some(kind)) => {
                    panic!("{path:?}:{}: {expression:?} evaluated to {value}, expected {kind}", i + 1)
                },
                (Err(e), None) => panic!("{path:?}:{}: {expression:?} failed: {e}", i + 1),
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

#[test]
fn precedence_and_grouping() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2*(3+4)*5", 70.0);
}

#[test]
fn left_associative_subtraction_and_division() {
    assert_value("10-2-3", 5.0);
    assert_value("100/10/5", 2.0);
}

#[test]
fn right_associative_power() {
    assert_value("2^3^2", 512.0);
    assert_value("2^2*3", 12.0);
}

#[test]
fn unary_minus_is_folded_into_the_number() {
    assert_value("-5+3", -2.0);
    assert_eq!(tokenize("(-1)").unwrap(),
               vec![(Token::LeftParen, 0), (Token::number(-1.0), 1), (Token::RightParen, 3)]);
    assert_eq!(tokenize("3-1").unwrap(),
               vec![(Token::number(3.0), 0),
                    (Token::Operator(BinaryOperator::Sub), 1),
                    (Token::number(1.0), 2)]);
}

#[test]
fn evaluation_is_idempotent() {
    let src = "1.5 * (2 - 0.25) / 3";
    assert_eq!(calc(src).unwrap().to_bits(), calc(src).unwrap().to_bits());
}

#[test]
fn division_by_zero_is_error() {
    assert_failure("4/0", &CalcError::Eval(EvalError::DivisionByZero { position: 1 }));
    assert_failure("1 / (3 - 3)", &CalcError::Eval(EvalError::DivisionByZero { position: 2 }));
}

#[test]
fn unbalanced_parens_are_error() {
    assert_failure("(2+3", &CalcError::Eval(EvalError::UnbalancedParens { position: 0 }));
    assert_failure("2+3)", &CalcError::Eval(EvalError::UnbalancedParens { position: 3 }));
}

#[test]
fn empty_input_is_error() {
    assert_failure("", &CalcError::Eval(EvalError::EmptyExpression));
    assert_failure("   \t", &CalcError::Eval(EvalError::EmptyExpression));
}

#[test]
fn invalid_character_reports_position() {
    assert_failure("2+x",
                   &CalcError::Lex(LexError::InvalidCharacter { position:  2,
                                                                character: 'x', }));
    // Positions count characters, not bytes.
    assert_failure("(é)",
                   &CalcError::Lex(LexError::InvalidCharacter { position:  1,
                                                                character: 'é', }));
}

#[test]
fn positions_stay_exact_on_long_input() {
    let sum = "1 + ".repeat(5000);
    assert_value(&format!("{sum}1"), 5001.0);
    assert_failure(&format!("{sum}é"),
                   &CalcError::Lex(LexError::InvalidCharacter { position:  20_000,
                                                                character: 'é', }));
}

#[test]
fn malformed_numbers_are_error() {
    assert_failure("1 + 1.2.3", &CalcError::Lex(LexError::MalformedNumber { position: 4 }));
    assert_failure(&"9".repeat(400),
                   &CalcError::Lex(LexError::LiteralTooLarge { position: 0 }));
}

#[test]
fn malformed_expressions_are_error() {
    assert_failure("1 +", &CalcError::Eval(EvalError::MalformedExpression { position: 2 }));
    assert_failure("1 2", &CalcError::Eval(EvalError::MalformedExpression { position: 2 }));
}

#[test]
fn operands_and_operators_must_alternate() {
    assert_failure("2 3 +", &CalcError::Eval(EvalError::MalformedExpression { position: 2 }));
    assert_failure("+ 2 3", &CalcError::Eval(EvalError::MalformedExpression { position: 0 }));
    assert_failure("2 + (3 4 *)",
                   &CalcError::Eval(EvalError::MalformedExpression { position: 7 }));
    assert_failure("1 2 + 3 *", &CalcError::Eval(EvalError::MalformedExpression { position: 2 }));
    assert_failure("(2 +)", &CalcError::Eval(EvalError::MalformedExpression { position: 4 }));
    // An unmatched `)` is still reported as such, even where an operand is due.
    assert_failure("2 + )", &CalcError::Eval(EvalError::UnbalancedParens { position: 4 }));
}

#[test]
fn overflow_is_error() {
    let big = format!("{0} * {0}", "9".repeat(300));
    assert_failure(&big,
                   &CalcError::Eval(EvalError::NonFiniteResult { position: 301 }));
}

#[test]
fn errors_keep_their_source() {
    use std::error::Error;

    let err = calc("2+x").unwrap_err();
    let source = err.source().expect("lex errors have a source");
    assert_eq!(source.to_string(), "Error at position 2: Invalid character 'x'.");
}

#[test]
fn evaluator_accepts_tokens_directly() {
    let tokens = tokenize("(1 + 2) ^ 2").unwrap();
    assert_eq!(evaluate(tokens), Ok(9.0));
    assert_eq!(evaluate(Vec::new()), Err(EvalError::EmptyExpression));
}

#[test]
fn expressions_evaluate_in_parallel() {
    let handles: Vec<_> = (1..=8).map(|n| std::thread::spawn(move || calc(&format!("{n} * (1 + 1)"))))
                                 .collect();

    for (n, handle) in (1..=8).zip(handles) {
        assert_eq!(handle.join().unwrap(), Ok(f64::from(n) * 2.0));
    }
}
