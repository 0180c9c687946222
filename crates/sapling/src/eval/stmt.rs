//! Statement execution

use std::io::Write;

use crate::ast::Stmt;
use crate::{Environment, RuntimeError, Value};

use super::Evaluate;

/// Execute a statement.
///
/// Statements produce no value; `print` writes to `out`.
///
/// # Errors
///
/// Returns the first fault raised while evaluating the statement.
pub fn exec_stmt<W: Write>(
    stmt: &Stmt,
    env: &mut Environment,
    out: &mut W,
) -> Result<(), RuntimeError> {
    tracing::trace!(kind = stmt_kind_name(stmt), depth = env.depth(), "exec");

    match stmt {
        // Expression evaluated for side effects, value discarded
        Stmt::Expression(expr) => {
            expr.eval(env)?;
        }

        Stmt::Print(expr) => {
            let value = expr.eval(env)?;
            writeln!(out, "{}", value)?;
        }

        Stmt::Var { name, initializer } => {
            let value = match initializer {
                Some(expr) => expr.eval(env)?,
                None => Value::Nil,
            };
            env.define(name.lexeme.clone(), value);
        }

        Stmt::Block(stmts) => exec_block(stmts, env, out)?,
    }

    Ok(())
}

/// Execute a block, managing scope.
///
/// Runs the statements in a fresh frame chained to the current one. The
/// frame is popped on every exit path, including a propagating fault.
///
/// # Errors
///
/// Returns the first fault raised by a contained statement.
pub fn exec_block<W: Write>(
    stmts: &[Stmt],
    env: &mut Environment,
    out: &mut W,
) -> Result<(), RuntimeError> {
    let mut scope = env.scope_guard();
    exec_stmts(stmts, &mut scope, out)
}

/// Execute statements in order within the current frame (without managing scope).
///
/// Stops at the first fault; later statements are not run.
///
/// # Errors
///
/// Returns the first fault raised by any statement.
pub fn exec_stmts<W: Write>(
    stmts: &[Stmt],
    env: &mut Environment,
    out: &mut W,
) -> Result<(), RuntimeError> {
    for stmt in stmts {
        exec_stmt(stmt, env, out)?;
    }
    Ok(())
}

/// Get a human-readable name for a statement kind.
fn stmt_kind_name(stmt: &Stmt) -> &'static str {
    match stmt {
        Stmt::Expression(_) => "expression",
        Stmt::Print(_) => "print",
        Stmt::Var { .. } => "var",
        Stmt::Block(_) => "block",
    }
}
