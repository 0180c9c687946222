//! Diagnostic formatting and exit status tests

use pretty_assertions::assert_eq;
use sapling::error::{type_name, EXIT_RUNTIME_ERROR, EXIT_STATIC_ERROR};
use sapling::*;

fn run(source: &str) -> Error {
    Session::with_output(Vec::new(), SessionConfig::default())
        .run(source)
        .unwrap_err()
}

// ═══════════════════════════════════════════════════════════════════════
// type_name Coverage
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_type_name_all_kinds() {
    assert_eq!(type_name(&Value::Nil), "nil");
    assert_eq!(type_name(&Value::Bool(true)), "bool");
    assert_eq!(type_name(&Value::Number(0.0)), "number");
    assert_eq!(type_name(&Value::string("")), "string");
}

// ═══════════════════════════════════════════════════════════════════════
// Display Formats
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_lex_errors_one_per_line() {
    let err = run("@\n\"open");
    assert_eq!(
        err.to_string(),
        "[line 1] Error: Unexpected character '@'.\n[line 2] Error: Unterminated string."
    );
}

#[test]
fn test_parse_error_location_forms() {
    let at_lexeme = ParseError::at(&Token::identifier("foo", 4), "Expect ';'.");
    assert_eq!(at_lexeme.to_string(), "[line 4] Error at 'foo': Expect ';'.");

    let at_end = ParseError::at(&Token::eof(9), "Expect expression.");
    assert_eq!(at_end.location, ErrorLocation::AtEnd);
    assert_eq!(at_end.to_string(), "[line 9] Error at end: Expect expression.");
}

#[test]
fn test_runtime_error_display() {
    let err = run("var s = \"a\";\nprint s - 1;");
    assert_eq!(
        err.to_string(),
        "[line 2] Operands of '-' must be numbers, got string and number."
    );

    let err = run("print \"a\" + nil;");
    assert_eq!(
        err.to_string(),
        "[line 1] Operands must be two numbers or two strings, got string and nil."
    );
}

#[test]
fn test_unary_mismatch_display() {
    let err = run("print -true;");
    assert_eq!(
        err.to_string(),
        "[line 1] Operand must be a number, got bool."
    );
}

#[test]
fn test_runtime_error_constructors() {
    let plus = Token::new(TokenKind::Plus, "+", None, 3);
    let err = RuntimeError::type_mismatch(&plus, "bad");
    assert_eq!(err.line(), Some(3));
    assert_eq!(err.to_string(), "[line 3] bad");

    let io = RuntimeError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone"));
    assert_eq!(io.line(), None);
}

// ═══════════════════════════════════════════════════════════════════════
// Exit Status
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_static_errors_exit_65() {
    for source in ["@", "print;", "var = 1;", "1 = 2;"] {
        let err = run(source);
        assert!(err.is_static(), "{}", source);
        assert_eq!(err.exit_code(), EXIT_STATIC_ERROR);
        assert_eq!(err.exit_code(), 65);
    }
}

#[test]
fn test_runtime_errors_exit_70() {
    for source in ["print x;", "x = 1;", "print 1 + nil;", "print -\"a\";"] {
        let err = run(source);
        assert!(!err.is_static(), "{}", source);
        assert_eq!(err.exit_code(), EXIT_RUNTIME_ERROR);
        assert_eq!(err.exit_code(), 70);
    }
}

#[test]
fn test_error_conversions() {
    let lex: Error = vec![LexError::UnterminatedString { line: 1 }].into();
    assert!(matches!(lex, Error::Lex(_)));

    let parse: Error = ParseError::at(&Token::eof(1), "x").into();
    assert!(matches!(parse, Error::Parse(_)));

    let runtime: Error = RuntimeError::undefined_variable(&Token::identifier("y", 1)).into();
    assert!(matches!(runtime, Error::Runtime(_)));
}
