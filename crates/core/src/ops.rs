//! Arithmetic operations over operands.
//!
//! Two integers stay in integer arithmetic. When the exact result does not
//! fit in an `i64`, or when either side is a float, the operation is
//! carried out in `f64`.

use serde_json::Value;
use tracing::debug;

use crate::error::OperandError;
use crate::operand::Operand;

/// Add two operands and return the sum.
pub fn add(a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
    let (a, b) = (a.into(), b.into());
    let sum = match (a, b) {
        (Operand::Int(x), Operand::Int(y)) => match x.checked_add(y) {
            Some(n) => Operand::Int(n),
            None => Operand::Float(x as f64 + y as f64),
        },
        _ => Operand::Float(a.as_f64() + b.as_f64()),
    };
    debug!(%a, %b, %sum, "performing addition");
    sum
}

/// Subtract `b` from `a` and return the difference.
pub fn subtract(a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
    let (a, b) = (a.into(), b.into());
    let difference = match (a, b) {
        (Operand::Int(x), Operand::Int(y)) => match x.checked_sub(y) {
            Some(n) => Operand::Int(n),
            None => Operand::Float(x as f64 - y as f64),
        },
        _ => Operand::Float(a.as_f64() - b.as_f64()),
    };
    debug!(%a, %b, %difference, "performing subtraction");
    difference
}

/// Add two untyped values, rejecting non-numeric input.
pub fn try_add(a: &Value, b: &Value) -> Result<Operand, OperandError> {
    Ok(add(Operand::try_from(a)?, Operand::try_from(b)?))
}

/// Subtract untyped `b` from untyped `a`, rejecting non-numeric input.
pub fn try_subtract(a: &Value, b: &Value) -> Result<Operand, OperandError> {
    Ok(subtract(Operand::try_from(a)?, Operand::try_from(b)?))
}

#[cfg(test)]
#[path = "ops_tests.rs"]
mod tests;
