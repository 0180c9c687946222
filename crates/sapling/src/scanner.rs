//! Lexical scanner: source text to tokens
//!
//! The scanner walks the source one character at a time and never stops at
//! a bad character. Diagnostics are collected alongside the tokens so a
//! single pass reports every lexical error in the unit.

use crate::error::LexError;
use crate::token::{Literal, Token, TokenKind};

/// Everything a scan produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutput {
    /// Tokens in source order, always terminated by `Eof`
    pub tokens: Vec<Token>,

    /// Lexical diagnostics in source order
    pub errors: Vec<LexError>,
}

impl ScanOutput {
    /// Whether the scan recorded any diagnostics.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The tokens, or every diagnostic if there was one.
    pub fn into_result(self) -> Result<Vec<Token>, Vec<LexError>> {
        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            Err(self.errors)
        }
    }
}

/// Scan `source` into tokens.
///
/// # Example
///
/// ```
/// use sapling::{scan, TokenKind};
///
/// let output = scan("7;");
/// let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Number, TokenKind::Semicolon, TokenKind::Eof]);
/// assert!(output.errors.is_empty());
/// ```
pub fn scan(source: &str) -> ScanOutput {
    Scanner::new(source).scan_tokens()
}

/// Single-use scanner over one source unit.
#[derive(Debug)]
pub struct Scanner {
    source: Vec<char>,
    tokens: Vec<Token>,
    errors: Vec<LexError>,
    start: usize,
    current: usize,
    line: usize,
}

impl Scanner {
    /// Create a scanner positioned at the start of `source`.
    pub fn new(source: &str) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            errors: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
        }
    }

    /// Consume the scanner and produce the token stream.
    pub fn scan_tokens(mut self) -> ScanOutput {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }
        self.tokens.push(Token::eof(self.line));

        ScanOutput {
            tokens: self.tokens,
            errors: self.errors,
        }
    }

    fn scan_token(&mut self) {
        let c = self.advance();
        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            '/' => {
                if self.matches('/') {
                    // Line comment runs to the newline, which is left for the main loop
                    while self.peek() != Some('\n') && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }

            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.string(),

            c if c.is_ascii_digit() => self.number(),
            c if is_alpha(c) => self.identifier(),

            ch => self.errors.push(LexError::UnexpectedCharacter {
                ch,
                line: self.line,
            }),
        }
    }

    fn string(&mut self) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.errors
                .push(LexError::UnterminatedString { line: self.line });
            return;
        }

        // The closing quote
        self.advance();

        let value: String = self.source[self.start + 1..self.current - 1]
            .iter()
            .collect();
        self.add_literal(TokenKind::String, Literal::String(value));
    }

    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }

        // A fractional part needs at least one digit after the dot
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        let text = self.lexeme();
        // Digit runs with at most one interior dot always parse as f64
        let value = text.parse::<f64>().unwrap_or(f64::NAN);
        self.add_literal(TokenKind::Number, Literal::Number(value));
    }

    fn identifier(&mut self) {
        while self.peek().is_some_and(is_alphanumeric) {
            self.advance();
        }

        let kind = TokenKind::keyword(&self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // ═══════════════════════════════════════════════════════════════════
    // Cursor Helpers
    // ═══════════════════════════════════════════════════════════════════

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    fn matches(&mut self, expected: char) -> bool {
        if self.peek() != Some(expected) {
            return false;
        }
        self.current += 1;
        true
    }

    fn peek(&self) -> Option<char> {
        self.source.get(self.current).copied()
    }

    fn peek_next(&self) -> Option<char> {
        self.source.get(self.current + 1).copied()
    }

    fn lexeme(&self) -> String {
        self.source[self.start..self.current].iter().collect()
    }

    fn add_either(&mut self, next: char, matched: TokenKind, single: TokenKind) {
        let kind = if self.matches(next) { matched } else { single };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        let lexeme = self.lexeme();
        self.tokens.push(Token::new(kind, lexeme, None, self.line));
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Literal) {
        let lexeme = self.lexeme();
        self.tokens
            .push(Token::new(kind, lexeme, Some(literal), self.line));
    }
}

fn is_alpha(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

fn is_alphanumeric(c: char) -> bool {
    is_alpha(c) || c.is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        scan(source).tokens.iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_empty_source_is_just_eof() {
        let output = scan("");
        assert_eq!(output.tokens, vec![Token::eof(1)]);
        assert!(!output.has_errors());
    }

    #[test]
    fn test_two_char_operators_prefer_longest() {
        assert_eq!(
            kinds("!= == <= >= ! = < >"),
            vec![
                TokenKind::BangEqual,
                TokenKind::EqualEqual,
                TokenKind::LessEqual,
                TokenKind::GreaterEqual,
                TokenKind::Bang,
                TokenKind::Equal,
                TokenKind::Less,
                TokenKind::Greater,
                TokenKind::Eof,
            ]
        );
    }

    #[test]
    fn test_trailing_dot_is_not_fraction() {
        let output = scan("1.");
        assert_eq!(output.tokens[0].literal, Some(Literal::Number(1.0)));
        assert_eq!(output.tokens[1].kind, TokenKind::Dot);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        assert_eq!(kinds("1 // trailing"), vec![TokenKind::Number, TokenKind::Eof]);
    }

    #[test]
    fn test_into_result_surfaces_errors() {
        let errors = scan("@").into_result().unwrap_err();
        assert_eq!(
            errors,
            vec![LexError::UnexpectedCharacter { ch: '@', line: 1 }]
        );
    }
}
