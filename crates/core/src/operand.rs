// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Numeric operand model.
//!
//! An operand is either a 64-bit signed integer or an IEEE 754 double.
//! The two are kept distinct so integer arithmetic stays exact. Conversion
//! from an untyped JSON value is fallible and rejects anything that is not
//! a number.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::OperandError;

/// A numeric operand: integer or floating point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    /// Exact 64-bit signed integer.
    Int(i64),
    /// IEEE 754 double-precision float.
    Float(f64),
}

impl Operand {
    /// Numeric value as a double. Integers beyond 2^53 lose precision.
    pub fn as_f64(self) -> f64 {
        match self {
            Operand::Int(n) => n as f64,
            Operand::Float(x) => x,
        }
    }

    /// Integer value, if this operand is an integer.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Operand::Int(n) => Some(n),
            Operand::Float(_) => None,
        }
    }

    /// True when this operand is an integer.
    pub fn is_int(self) -> bool {
        matches!(self, Operand::Int(_))
    }
}

impl From<i64> for Operand {
    fn from(n: i64) -> Self {
        Operand::Int(n)
    }
}

impl From<i32> for Operand {
    fn from(n: i32) -> Self {
        Operand::Int(n.into())
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Float(x)
    }
}

impl From<f32> for Operand {
    fn from(x: f32) -> Self {
        Operand::Float(x.into())
    }
}

impl TryFrom<&Value> for Operand {
    type Error = OperandError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            // Integers in i64 range stay exact; u64 beyond i64::MAX and
            // all fractional numbers land in the float arm.
            Value::Number(n) => n
                .as_i64()
                .map(Operand::Int)
                .or_else(|| n.as_f64().map(Operand::Float))
                .ok_or(OperandError::InvalidType { found: "number" }),
            other => Err(OperandError::InvalidType { found: json_type_name(other) }),
        }
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Int(n) => write!(f, "{n}"),
            Operand::Float(x) => write!(f, "{x}"),
        }
    }
}

/// JSON type name used in rejection messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "operand_tests.rs"]
mod tests;
