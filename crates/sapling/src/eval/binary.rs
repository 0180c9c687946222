//! Binary operation evaluation

use crate::ast::Expr;
use crate::error::type_name;
use crate::token::{Token, TokenKind};
use crate::{Environment, RuntimeError, Value};

use super::Evaluate;

/// Evaluate `left operator right`.
///
/// Both operands are evaluated, left first, before the operator is applied.
pub fn eval_binary(
    left: &Expr,
    operator: &Token,
    right: &Expr,
    env: &mut Environment,
) -> Result<Value, RuntimeError> {
    let left = left.eval(env)?;
    let right = right.eval(env)?;
    apply_binary(operator, left, right)
}

/// Apply a binary operator to two already-evaluated operands.
///
/// # Errors
///
/// `TypeMismatch` on the operator's line when the operand kinds are not
/// accepted by the operator.
pub fn apply_binary(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        // Arithmetic
        TokenKind::Plus => eval_add(operator, left, right),
        TokenKind::Minus => eval_sub(operator, left, right),
        TokenKind::Star => eval_mul(operator, left, right),
        TokenKind::Slash => eval_div(operator, left, right),

        // Comparison
        TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
        TokenKind::BangEqual => Ok(Value::Bool(left != right)),
        TokenKind::Less => eval_lt(operator, left, right),
        TokenKind::LessEqual => eval_le(operator, left, right),
        TokenKind::Greater => eval_gt(operator, left, right),
        TokenKind::GreaterEqual => eval_ge(operator, left, right),

        _ => Err(RuntimeError::type_mismatch(
            operator,
            format!("Unknown binary operator '{}'.", operator.lexeme),
        )),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Arithmetic Operations
// ═══════════════════════════════════════════════════════════════════════

fn eval_add(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    match (&left, &right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),

        // String concatenation
        (Value::String(a), Value::String(b)) => {
            Ok(Value::string(format!("{}{}", a.as_str(), b.as_str())))
        }

        _ => Err(RuntimeError::type_mismatch(
            operator,
            format!(
                "Operands must be two numbers or two strings, got {} and {}.",
                type_name(&left),
                type_name(&right)
            ),
        )),
    }
}

fn eval_sub(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    let (a, b) = number_operands(operator, &left, &right)?;
    Ok(Value::Number(a - b))
}

fn eval_mul(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    let (a, b) = number_operands(operator, &left, &right)?;
    Ok(Value::Number(a * b))
}

/// Division follows IEEE-754: a zero divisor yields an infinity or NaN,
/// never a fault.
fn eval_div(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
    let (a, b) = number_operands(operator, &left, &right)?;
    Ok(Value::Number(a / b))
}

// ═══════════════════════════════════════════════════════════════════════
// Comparison Operations
// ═══════════════════════════════════════════════════════════════════════

macro_rules! impl_comparison {
    ($name:ident, $op:tt) => {
        fn $name(operator: &Token, left: Value, right: Value) -> Result<Value, RuntimeError> {
            let (a, b) = number_operands(operator, &left, &right)?;
            Ok(Value::Bool(a $op b))
        }
    };
}

impl_comparison!(eval_lt, <);
impl_comparison!(eval_le, <=);
impl_comparison!(eval_gt, >);
impl_comparison!(eval_ge, >=);

/// Extract both operands as numbers or fail on the operator's line.
fn number_operands(
    operator: &Token,
    left: &Value,
    right: &Value,
) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::type_mismatch(
            operator,
            format!(
                "Operands of '{}' must be numbers, got {} and {}.",
                operator.lexeme,
                type_name(left),
                type_name(right)
            ),
        )),
    }
}
