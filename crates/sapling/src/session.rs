//! Run entry point: scan, parse and interpret one source unit at a time

use std::io::{self, Stdout, Write};

use crate::config::SessionConfig;
use crate::error::{Error, Result, RuntimeError};
use crate::parser::Parser;
use crate::printer::AstPrinter;
use crate::scanner::scan;
use crate::token::Token;
use crate::Interpreter;

/// A running program: one interpreter whose state outlives each source unit.
///
/// Every call to [`Session::run`] is independent in its failure (a bad line
/// in a REPL does not poison the next one) but shares global bindings with
/// every earlier call.
///
/// # Example
///
/// ```
/// use sapling::{Session, SessionConfig};
///
/// let mut session = Session::with_output(Vec::new(), SessionConfig::default());
/// session.run("var greeting = \"hi\";").unwrap();
/// assert!(session.run("print greeting + 1;").is_err());
/// session.run("print greeting;").unwrap();
/// assert_eq!(session.output(), b"hi\n");
/// ```
#[derive(Debug)]
pub struct Session<W: Write = Stdout> {
    interpreter: Interpreter<W>,
    config: SessionConfig,
}

impl Default for Session<Stdout> {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

impl Session<Stdout> {
    /// Create a session printing to stdout.
    pub fn new(config: SessionConfig) -> Self {
        Self::with_output(io::stdout(), config)
    }
}

impl<W: Write> Session<W> {
    /// Create a session printing to `out`.
    pub fn with_output(out: W, config: SessionConfig) -> Self {
        Self {
            interpreter: Interpreter::with_output(out),
            config,
        }
    }

    /// Scan, parse and execute `source`.
    ///
    /// # Errors
    ///
    /// - `Error::Lex` with every lexical diagnostic; nothing is parsed
    /// - `Error::Parse` with the first syntax error; nothing is executed
    /// - `Error::Runtime` with the fault that stopped execution
    pub fn run(&mut self, source: &str) -> Result<()> {
        let scanned = scan(source);
        tracing::debug!(
            tokens = scanned.tokens.len(),
            errors = scanned.errors.len(),
            "scanned source"
        );

        if self.config.dump_tokens {
            self.dump_tokens(&scanned.tokens)
                .map_err(RuntimeError::from)?;
        }

        let tokens = scanned.into_result()?;
        let statements = Parser::new(tokens).parse()?;
        tracing::debug!(statements = statements.len(), "parsed source");

        if self.config.echo_ast {
            let out = self.interpreter.output_mut();
            for stmt in &statements {
                writeln!(out, "{}", AstPrinter.print_stmt(stmt)).map_err(RuntimeError::from)?;
            }
        }

        self.interpreter.interpret(&statements).map_err(|err| {
            tracing::debug!(line = ?err.line(), "runtime fault");
            Error::from(err)
        })
    }

    fn dump_tokens(&mut self, tokens: &[Token]) -> io::Result<()> {
        let out = self.interpreter.output_mut();
        for token in tokens {
            let json = serde_json::to_string(token)?;
            writeln!(out, "{}", json)?;
        }
        Ok(())
    }

    /// The session's configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying interpreter.
    pub fn interpreter(&self) -> &Interpreter<W> {
        &self.interpreter
    }

    /// Mutable access to the underlying interpreter.
    pub fn interpreter_mut(&mut self) -> &mut Interpreter<W> {
        &mut self.interpreter
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        self.interpreter.output()
    }
}

/// Report every static diagnostic in `source` without executing it.
///
/// Lexical errors come first (as a single `Error::Lex`), followed by one
/// `Error::Parse` per syntax error found with statement-level recovery.
/// An empty result means the source would be accepted by [`Session::run`].
pub fn check(source: &str) -> Vec<Error> {
    let scanned = scan(source);
    let mut errors = Vec::new();
    if !scanned.errors.is_empty() {
        errors.push(Error::Lex(scanned.errors));
    }

    let (_, parse_errors) = Parser::new(scanned.tokens).parse_recovering();
    errors.extend(parse_errors.into_iter().map(Error::Parse));

    tracing::debug!(errors = errors.len(), "checked source");
    errors
}
