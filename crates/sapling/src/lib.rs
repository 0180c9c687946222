//! # Sapling
//!
//! A tree-walking interpreter for a small dynamically-typed scripting
//! language: numbers, strings, booleans and `nil`, arithmetic and comparison
//! operators, `print`, `var` declarations, assignment and nested blocks.
//!
//! ## Architecture
//!
//! ```text
//! source → [Scanner] → tokens → [Parser] → Vec<Stmt> → [Interpreter + Environment] → output
//! ```
//!
//! - **Scanner**: characters to tokens, collecting every lexical error
//! - **Parser**: recursive descent over a precedence ladder, producing the AST
//! - **Environment**: arena of lexical frames chained by index
//! - **Interpreter**: evaluates the AST, stopping at the first runtime fault
//! - **Session**: the run entry point a file runner or REPL drives
//!
//! ## Example
//!
//! ```
//! use sapling::{Session, SessionConfig};
//!
//! let mut session = Session::with_output(Vec::new(), SessionConfig::default());
//! session
//!     .run("var x = 1; { var x = 2; print x; } print x;")
//!     .unwrap();
//! assert_eq!(session.output(), b"2\n1\n");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod config;
pub mod environment;
pub mod error;
pub mod eval;
pub mod interpreter;
pub mod parser;
pub mod printer;
pub mod scanner;
pub mod session;
pub mod token;
pub mod value;

// Re-export main types
pub use ast::{Expr, Stmt};
pub use config::SessionConfig;
pub use environment::{Environment, Frame, FrameId, ScopeGuard};
pub use error::{Error, ErrorLocation, LexError, ParseError, Result, RuntimeError};
pub use eval::{eval_expr, exec_block, exec_stmt, Evaluate};
pub use interpreter::Interpreter;
pub use parser::{parse, Parser};
pub use printer::AstPrinter;
pub use scanner::{scan, ScanOutput, Scanner};
pub use session::{check, Session};
pub use token::{Literal, Token, TokenKind};
pub use value::Value;

/// Sapling version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
