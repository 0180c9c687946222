//! Scanner tests

use pretty_assertions::assert_eq;
use sapling::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    scan(source).tokens.iter().map(|t| t.kind).collect()
}

// ═══════════════════════════════════════════════════════════════════════
// Token Stream Shape
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_number_statement() {
    let scanned = scan("7;");
    assert!(!scanned.has_errors());
    assert_eq!(
        scanned.tokens,
        vec![
            Token::new(TokenKind::Number, "7", Some(Literal::Number(7.0)), 1),
            Token::new(TokenKind::Semicolon, ";", None, 1),
            Token::eof(1),
        ]
    );
}

#[test]
fn test_stream_always_ends_with_single_eof() {
    for source in ["", "   ", "// only a comment", "var a = 1;", "@"] {
        let tokens = scan(source).tokens;
        let eofs = tokens.iter().filter(|t| t.kind == TokenKind::Eof).count();
        assert_eq!(eofs, 1, "source {:?}", source);
        assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }
}

#[test]
fn test_declaration_tokens() {
    assert_eq!(
        kinds("var answer = 40 + 2;"),
        vec![
            TokenKind::Var,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_two_character_operators_win() {
    assert_eq!(
        kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_reserved_words_are_keywords() {
    assert_eq!(
        kinds("and class else false fun for if nil or print return super this true var while"),
        vec![
            TokenKind::And,
            TokenKind::Class,
            TokenKind::Else,
            TokenKind::False,
            TokenKind::Fun,
            TokenKind::For,
            TokenKind::If,
            TokenKind::Nil,
            TokenKind::Or,
            TokenKind::Print,
            TokenKind::Return,
            TokenKind::Super,
            TokenKind::This,
            TokenKind::True,
            TokenKind::Var,
            TokenKind::While,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keyword_prefix_is_identifier() {
    let tokens = scan("variable _print orchid").tokens;
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[1].lexeme, "_print");
}

// ═══════════════════════════════════════════════════════════════════════
// Literals
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_string_literal_strips_quotes() {
    let tokens = scan("\"hello world\"").tokens;
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, "\"hello world\"");
    assert_eq!(
        tokens[0].literal,
        Some(Literal::String("hello world".to_string()))
    );
}

#[test]
fn test_decimal_number() {
    let tokens = scan("3.25").tokens;
    assert_eq!(tokens[0].literal, Some(Literal::Number(3.25)));
}

#[test]
fn test_trailing_dot_is_not_part_of_number() {
    assert_eq!(
        kinds("1."),
        vec![TokenKind::Number, TokenKind::Dot, TokenKind::Eof]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Line Tracking
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_lines_advance_on_newlines() {
    let lines: Vec<usize> = scan("a\nb\n\nc").tokens.iter().map(|t| t.line).collect();
    assert_eq!(lines, vec![1, 2, 4, 4]);
}

#[test]
fn test_multiline_string_counts_lines() {
    let tokens = scan("\"one\ntwo\"\nx").tokens;
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[0].literal, Some(Literal::String("one\ntwo".into())));
    assert_eq!(tokens[1].lexeme, "x");
    assert_eq!(tokens[1].line, 3);
}

#[test]
fn test_comment_runs_to_end_of_line() {
    assert_eq!(
        kinds("1 // 2 3 4\n5"),
        vec![TokenKind::Number, TokenKind::Number, TokenKind::Eof]
    );
}

// ═══════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════

#[test]
fn test_every_lexical_error_is_collected() {
    let scanned = scan("@\nvar x = 1; #\n\"open");
    assert_eq!(
        scanned.errors,
        vec![
            LexError::UnexpectedCharacter { ch: '@', line: 1 },
            LexError::UnexpectedCharacter { ch: '#', line: 2 },
            LexError::UnterminatedString { line: 3 },
        ]
    );
    // scanning continued past the bad characters
    assert!(scanned.tokens.iter().any(|t| t.lexeme == "x"));
}

#[test]
fn test_into_result_splits_outcomes() {
    assert!(scan("1;").into_result().is_ok());
    let errors = scan("1; $").into_result().unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "[line 1] Error: Unexpected character '$'."
    );
}
