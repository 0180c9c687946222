//! Abstract syntax tree produced by the parser

use crate::token::Token;
use crate::value::Value;

/// An expression node.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value: number, string, `true`, `false` or `nil`
    Literal(Value),

    /// A parenthesized expression
    Grouping(Box<Expr>),

    /// Prefix operator application: `-x`, `!x`
    Unary {
        /// Operator token (`-` or `!`)
        operator: Token,
        /// Operand
        right: Box<Expr>,
    },

    /// Infix operator application
    Binary {
        /// Left operand
        left: Box<Expr>,
        /// Operator token
        operator: Token,
        /// Right operand
        right: Box<Expr>,
    },

    /// A variable reference
    Variable {
        /// Identifier token
        name: Token,
    },

    /// Assignment to an existing variable; evaluates to the assigned value
    Assign {
        /// Identifier token of the target
        name: Token,
        /// Right-hand side
        value: Box<Expr>,
    },
}

impl Expr {
    /// Build a literal node.
    pub fn literal(value: impl Into<Value>) -> Self {
        Expr::Literal(value.into())
    }

    /// Build a grouping node.
    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    /// Build a unary node.
    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    /// Build a binary node.
    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    /// Build an assignment node.
    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }
}

/// A statement node.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// An expression evaluated for its side effects
    Expression(Expr),

    /// `print expr;`
    Print(Expr),

    /// `var name = initializer;`
    Var {
        /// Identifier token of the new binding
        name: Token,
        /// Optional initializer; the binding is `nil` without one
        initializer: Option<Expr>,
    },

    /// `{ ... }`, a new lexical scope
    Block(Vec<Stmt>),
}
