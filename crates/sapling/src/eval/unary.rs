//! Unary operation evaluation

use crate::ast::Expr;
use crate::error::type_name;
use crate::token::{Token, TokenKind};
use crate::{Environment, RuntimeError, Value};

use super::Evaluate;

/// Evaluate a prefix operator applied to `right`.
pub fn eval_unary(
    operator: &Token,
    right: &Expr,
    env: &mut Environment,
) -> Result<Value, RuntimeError> {
    let operand = right.eval(env)?;

    match operator.kind {
        TokenKind::Minus => eval_neg(operator, operand),
        TokenKind::Bang => Ok(eval_not(&operand)),
        _ => Err(RuntimeError::type_mismatch(
            operator,
            format!("Unknown unary operator '{}'.", operator.lexeme),
        )),
    }
}

/// Evaluate unary negation (`-x`).
pub(crate) fn eval_neg(operator: &Token, operand: Value) -> Result<Value, RuntimeError> {
    match operand {
        Value::Number(n) => Ok(Value::Number(-n)),
        other => Err(RuntimeError::type_mismatch(
            operator,
            format!("Operand must be a number, got {}.", type_name(&other)),
        )),
    }
}

/// Evaluate logical NOT (`!x`); accepts any operand.
fn eval_not(operand: &Value) -> Value {
    Value::Bool(!operand.is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minus() -> Token {
        Token::new(TokenKind::Minus, "-", None, 2)
    }

    #[test]
    fn test_neg_number() {
        let result = eval_neg(&minus(), Value::Number(42.0)).unwrap();
        assert_eq!(result, Value::Number(-42.0));
    }

    #[test]
    fn test_neg_string_fails() {
        let result = eval_neg(&minus(), Value::string("test"));
        assert!(matches!(
            result.unwrap_err(),
            RuntimeError::TypeMismatch { line: 2, .. }
        ));
    }

    #[test]
    fn test_not_uses_truthiness() {
        assert_eq!(eval_not(&Value::Nil), Value::Bool(true));
        assert_eq!(eval_not(&Value::Bool(false)), Value::Bool(true));
        assert_eq!(eval_not(&Value::Number(0.0)), Value::Bool(false));
        assert_eq!(eval_not(&Value::string("")), Value::Bool(false));
    }
}
