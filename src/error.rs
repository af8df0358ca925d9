/*
    Errors
*/

use thiserror::Error;

use crate::ops::{Op, Value};

/// Every way an operation on a `RationalNumber` or `ComplexNumber` can fail.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum NumError {
    #[error("denominator cannot be zero")]
    ZeroDenominator,

    #[error("exponent must be a non-negative integer, got {0}")]
    InvalidExponent(Value),

    #[error("cannot convert {0} to a fraction")]
    NonFinite(f64),

    #[error("fraction does not fit in 64-bit integers")]
    Overflow,

    #[error("unsupported operand type(s) for {op}: `{lhs}` and `{rhs}`")]
    TypeMismatch {
        op: Op,
        lhs: &'static str,
        rhs: &'static str,
    },

    #[error("division by zero")]
    DivisionByZero,

    #[error("invalid {kind} literal: `{text}`")]
    Parse { kind: &'static str, text: String },
}
