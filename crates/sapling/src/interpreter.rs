//! Tree-walking interpreter over a persistent environment

use std::io::{self, Stdout, Write};

use crate::ast::{Expr, Stmt};
use crate::eval::{exec_stmts, Evaluate};
use crate::{Environment, RuntimeError, Value};

/// Executes statement sequences against one environment.
///
/// Global bindings persist across calls to [`Interpreter::interpret`], which
/// is what a REPL needs. `print` output goes to the writer `W`, stdout by
/// default.
///
/// # Example
///
/// ```
/// use sapling::{parse, scan, Interpreter};
///
/// let stmts = parse(scan("var a = 1; print a + 2;").tokens).unwrap();
/// let mut interpreter = Interpreter::with_output(Vec::new());
/// interpreter.interpret(&stmts).unwrap();
/// assert_eq!(interpreter.output(), b"3\n");
/// ```
#[derive(Debug)]
pub struct Interpreter<W: Write = Stdout> {
    env: Environment,
    out: W,
}

impl Default for Interpreter<Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter<Stdout> {
    /// Create an interpreter that prints to stdout.
    pub fn new() -> Self {
        Self::with_output(io::stdout())
    }
}

impl<W: Write> Interpreter<W> {
    /// Create an interpreter that prints to `out`.
    pub fn with_output(out: W) -> Self {
        Self {
            env: Environment::new(),
            out,
        }
    }

    /// Execute `statements` in order.
    ///
    /// # Errors
    ///
    /// Returns the first fault. Statements after the faulting one are not
    /// run; bindings made before it are kept.
    #[tracing::instrument(level = "trace", skip_all, fields(statements = statements.len()))]
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        let result = exec_stmts(statements, &mut self.env, &mut self.out);
        let flushed = self.out.flush();
        result?;
        flushed?;
        Ok(())
    }

    /// Evaluate a single expression against the current environment.
    pub fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        expr.eval(&mut self.env)
    }

    /// The interpreter's environment.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Mutable access to the environment, e.g. to predefine globals.
    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    /// The output sink.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Mutable access to the output sink.
    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Consume the interpreter and return its output sink.
    pub fn into_output(self) -> W {
        self.out
    }
}
