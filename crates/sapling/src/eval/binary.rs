//! Binary operation evaluation
//!
//! Overflow wraps (two's complement) for every operator, including
//! `Int::MIN / -1`, which yields `Int::MIN`. Division truncates toward
//! zero and fails on a zero divisor.

use crate::ast::{Int, OperatorKind};
use crate::EvalError;

/// Combine two already-evaluated operands.
///
/// # Errors
///
/// Returns `DivisionByZero` for `Divide` with a zero right operand.
pub fn eval_binary(kind: OperatorKind, left: Int, right: Int) -> Result<Int, EvalError> {
    match kind {
        OperatorKind::Add => Ok(left.wrapping_add(right)),
        OperatorKind::Subtract => Ok(left.wrapping_sub(right)),
        OperatorKind::Multiply => Ok(left.wrapping_mul(right)),
        OperatorKind::Divide => eval_div(left, right),
    }
}

fn eval_div(left: Int, right: Int) -> Result<Int, EvalError> {
    if right == 0 {
        return Err(EvalError::DivisionByZero { dividend: left });
    }
    Ok(left.wrapping_div(right))
}
