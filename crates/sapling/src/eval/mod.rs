//! Expression evaluation

pub mod assign;
pub mod binary;
pub mod stmt;
pub mod unary;

use crate::ast::Expr;
use crate::{Environment, RuntimeError, Value};

/// Trait for evaluating AST nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter. Each
/// variant is handled by one arm of the dispatcher below, which hands off to
/// the per-operator modules.
pub trait Evaluate {
    /// Evaluate this AST node in the given environment.
    fn eval(&self, env: &mut Environment) -> Result<Value, RuntimeError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, env: &mut Environment) -> Result<Value, RuntimeError> {
        match self {
            Expr::Literal(value) => Ok(value.clone()),

            // Parenthesized expressions - just unwrap
            Expr::Grouping(inner) => inner.eval(env),

            Expr::Unary { operator, right } => unary::eval_unary(operator, right, env),

            Expr::Binary {
                left,
                operator,
                right,
            } => binary::eval_binary(left, operator, right, env),

            Expr::Variable { name } => env.get(name),

            Expr::Assign { name, value } => assign::eval_assign(name, value, env),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate an expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, env: &mut Environment) -> Result<Value, RuntimeError> {
    expr.eval(env)
}

// Re-export for use by other modules
pub use stmt::{exec_block, exec_stmt, exec_stmts};
