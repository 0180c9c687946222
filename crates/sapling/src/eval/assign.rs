//! Assignment expression evaluation

use crate::ast::Expr;
use crate::token::Token;
use crate::{Environment, RuntimeError, Value};

use super::Evaluate;

/// Evaluate `name = value`.
///
/// The right side is evaluated first, then stored into the nearest existing
/// binding. The assigned value is the result, so assignments nest:
/// `a = b = 1`.
///
/// # Errors
///
/// Returns `UndefinedVariable` if no enclosing frame binds `name`. No
/// binding is created in that case.
pub fn eval_assign(
    name: &Token,
    value: &Expr,
    env: &mut Environment,
) -> Result<Value, RuntimeError> {
    let value = value.eval(env)?;
    env.assign(name, value.clone())?;
    Ok(value)
}
