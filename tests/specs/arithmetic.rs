// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Behavioral specs for the arithmetic operations.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use serde_json::json;
use tally::{Operand, OperandError, add, subtract, try_add};

use crate::prelude::*;

/// > add(2, 3) returns 5
#[test]
fn add_two_and_three() {
    init_diagnostics();
    assert_eq!(add(2, 3), Operand::Int(5));
}

/// > subtract(10, 4) returns 6
#[test]
fn subtract_ten_and_four() {
    assert_eq!(subtract(10, 4), Operand::Int(6));
}

/// > add(-1, 1) returns 0
#[test]
fn add_opposite_signs() {
    assert_eq!(add(-1, 1), Operand::Int(0));
}

/// > subtract(0, 5) returns -5
#[test]
fn subtract_from_zero() {
    assert_eq!(subtract(0, 5), Operand::Int(-5));
}

/// > A non-numeric operand fails immediately with an invalid-operand error
#[test]
fn non_numeric_operand_surfaces_an_error() {
    let err = try_add(&json!("two"), &json!(3)).unwrap_err();
    assert_eq!(err, OperandError::InvalidType { found: "string" });
}
