//! Parenthesized prefix rendering of the AST, for debugging
//!
//! Nothing in evaluation consults this module.

use crate::ast::{Expr, Stmt};

/// Renders AST nodes as Lisp-like prefix text.
///
/// # Example
///
/// ```
/// use sapling::{scan, AstPrinter, Parser};
///
/// let expr = Parser::new(scan("1 + 2 * 3").tokens).parse_expression().unwrap();
/// assert_eq!(AstPrinter.print(&expr), "(+ 1 (* 2 3))");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AstPrinter;

impl AstPrinter {
    /// Render an expression.
    pub fn print(&self, expr: &Expr) -> String {
        match expr {
            Expr::Literal(value) => value.to_string(),
            Expr::Grouping(inner) => self.parenthesize("group", &[&**inner]),
            Expr::Unary { operator, right } => self.parenthesize(&operator.lexeme, &[&**right]),
            Expr::Binary {
                left,
                operator,
                right,
            } => self.parenthesize(&operator.lexeme, &[&**left, &**right]),
            Expr::Variable { name } => name.lexeme.clone(),
            Expr::Assign { name, value } => {
                format!("(= {} {})", name.lexeme, self.print(value))
            }
        }
    }

    /// Render a statement.
    pub fn print_stmt(&self, stmt: &Stmt) -> String {
        match stmt {
            Stmt::Expression(expr) => self.parenthesize(";", &[expr]),
            Stmt::Print(expr) => self.parenthesize("print", &[expr]),
            Stmt::Var {
                name,
                initializer: Some(init),
            } => format!("(var {} {})", name.lexeme, self.print(init)),
            Stmt::Var {
                name,
                initializer: None,
            } => format!("(var {})", name.lexeme),
            Stmt::Block(stmts) => {
                let mut out = String::from("(block");
                for stmt in stmts {
                    out.push(' ');
                    out.push_str(&self.print_stmt(stmt));
                }
                out.push(')');
                out
            }
        }
    }

    fn parenthesize(&self, name: &str, exprs: &[&Expr]) -> String {
        let mut out = format!("({}", name);
        for expr in exprs {
            out.push(' ');
            out.push_str(&self.print(expr));
        }
        out.push(')');
        out
    }
}
