//! Error types for each phase of a Sapling run

use std::fmt;
use std::io;

use thiserror::Error;

use crate::token::{Token, TokenKind};
use crate::value::Value;

/// Exit status for a source unit that failed to scan or parse.
pub const EXIT_STATIC_ERROR: i32 = 65;

/// Exit status for a source unit that faulted while running.
pub const EXIT_RUNTIME_ERROR: i32 = 70;

// ═══════════════════════════════════════════════════════════════════════
// Lexical Errors
// ═══════════════════════════════════════════════════════════════════════

/// A diagnostic recorded by the scanner.
///
/// Scanning never stops at one of these; every lexical error in a source
/// unit is collected in a single pass.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token
    #[error("[line {line}] Error: Unexpected character '{ch}'.")]
    UnexpectedCharacter {
        /// The offending character
        ch: char,
        /// Line it appeared on
        line: usize,
    },

    /// A string literal still open at end of input
    #[error("[line {line}] Error: Unterminated string.")]
    UnterminatedString {
        /// Line the scanner had reached at end of input
        line: usize,
    },
}

impl LexError {
    /// Source line the diagnostic refers to.
    pub fn line(&self) -> usize {
        match self {
            LexError::UnexpectedCharacter { line, .. } | LexError::UnterminatedString { line } => {
                *line
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Parse Errors
// ═══════════════════════════════════════════════════════════════════════

/// Where in the token stream a parse error was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorLocation {
    /// The parser ran into the end of input
    AtEnd,
    /// The parser stopped at this lexeme
    AtLexeme(String),
}

impl ErrorLocation {
    /// Describe the position of `token`.
    pub fn of(token: &Token) -> Self {
        if token.kind == TokenKind::Eof {
            ErrorLocation::AtEnd
        } else {
            ErrorLocation::AtLexeme(token.lexeme.clone())
        }
    }
}

impl fmt::Display for ErrorLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorLocation::AtEnd => write!(f, " at end"),
            ErrorLocation::AtLexeme(lexeme) => write!(f, " at '{}'", lexeme),
        }
    }
}

/// A grammar violation found by the parser.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("[line {line}] Error{location}: {message}")]
pub struct ParseError {
    /// Line of the token where parsing failed
    pub line: usize,

    /// Position descriptor
    pub location: ErrorLocation,

    /// Human-readable message
    pub message: String,
}

impl ParseError {
    /// Create a parse error positioned at `token`.
    pub fn at(token: &Token, message: impl Into<String>) -> Self {
        Self {
            line: token.line,
            location: ErrorLocation::of(token),
            message: message.into(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Runtime Errors
// ═══════════════════════════════════════════════════════════════════════

/// A fault raised while evaluating the AST.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Operand kinds the operator cannot combine
    #[error("[line {line}] {message}")]
    TypeMismatch {
        /// Operator lexeme
        operator: String,
        /// What the operator required
        message: String,
        /// Line of the operator token
        line: usize,
    },

    /// Read or assignment of a name bound in no enclosing frame
    #[error("[line {line}] Undefined variable '{name}'.")]
    UndefinedVariable {
        /// Variable name
        name: String,
        /// Line of the reference
        line: usize,
    },

    /// The `print` sink rejected a write
    #[error("failed to write program output: {0}")]
    Output(#[from] io::Error),
}

impl RuntimeError {
    /// A type mismatch reported against `operator`.
    pub fn type_mismatch(operator: &Token, message: impl Into<String>) -> Self {
        RuntimeError::TypeMismatch {
            operator: operator.lexeme.clone(),
            message: message.into(),
            line: operator.line,
        }
    }

    /// An undefined-variable fault for the name in `token`.
    pub fn undefined_variable(token: &Token) -> Self {
        RuntimeError::UndefinedVariable {
            name: token.lexeme.clone(),
            line: token.line,
        }
    }

    /// Source line of the fault, if it has one.
    pub fn line(&self) -> Option<usize> {
        match self {
            RuntimeError::TypeMismatch { line, .. } | RuntimeError::UndefinedVariable { line, .. } => {
                Some(*line)
            }
            RuntimeError::Output(_) => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Session Errors
// ═══════════════════════════════════════════════════════════════════════

/// Main error type for running a source unit.
#[derive(Error, Debug)]
pub enum Error {
    /// One or more lexical errors; nothing was parsed or executed
    #[error("{}", join_lines(.0))]
    Lex(Vec<LexError>),

    /// The first grammar error; nothing was executed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The fault that stopped execution
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Whether the failure happened before any statement ran.
    pub fn is_static(&self) -> bool {
        matches!(self, Error::Lex(_) | Error::Parse(_))
    }

    /// Process exit status conventionally used for this failure.
    pub fn exit_code(&self) -> i32 {
        if self.is_static() {
            EXIT_STATIC_ERROR
        } else {
            EXIT_RUNTIME_ERROR
        }
    }
}

impl From<Vec<LexError>> for Error {
    fn from(errors: Vec<LexError>) -> Self {
        Error::Lex(errors)
    }
}

fn join_lines<T: fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result type alias for Sapling runs
pub type Result<T> = std::result::Result<T, Error>;

/// Get a human-readable kind name for a runtime value.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Nil => "nil",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
    }
}
