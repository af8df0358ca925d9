/*
    Operands and operators
*/

use std::fmt;

use crate::{ComplexNumber, RationalNumber};

/// An operand accepted by the fallible operations of this library.
///
/// This is the closed set of numeric kinds an operator can be handed.
/// Operations promote a `Value` in a fixed order: the receiver's own type
/// first (`Rational` or `Complex`), then `Int`, then `Float`; anything
/// else is a type mismatch for that operation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Rational(RationalNumber),
    Complex(ComplexNumber),
}

impl Value {
    /// Name of this operand's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Rational(_) => "RationalNumber",
            Value::Complex(_) => "ComplexNumber",
        }
    }

    /// Returns true if this `Value` is numerically zero.
    pub fn is_zero(&self) -> bool {
        match self {
            Value::Int(n) => *n == 0,
            Value::Float(x) => *x == 0.0,
            Value::Rational(r) => r.numerator() == 0,
            Value::Complex(c) => c.real().numerator() == 0 && c.imaginary().numerator() == 0,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Rational(r) => write!(f, "{r}"),
            Value::Complex(c) => write!(f, "{c}"),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<RationalNumber> for Value {
    fn from(r: RationalNumber) -> Self {
        Value::Rational(r)
    }
}

impl From<ComplexNumber> for Value {
    fn from(c: ComplexNumber) -> Self {
        Value::Complex(c)
    }
}

impl From<&RationalNumber> for Value {
    fn from(r: &RationalNumber) -> Self {
        Value::Rational(*r)
    }
}

impl From<&ComplexNumber> for Value {
    fn from(c: &ComplexNumber) -> Self {
        Value::Complex(*c)
    }
}

/// The operator a failing operation was evaluating.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    AddAssign,
    SubAssign,
    MulAssign,
    DivAssign,
    Eq,
    Construct,
}

impl Op {
    /// The symbol of this operator as written in source.
    pub fn symbol(&self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::AddAssign => "+=",
            Op::SubAssign => "-=",
            Op::MulAssign => "*=",
            Op::DivAssign => "/=",
            Op::Eq => "==",
            Op::Construct => "construction",
        }
    }

    /// Returns true for the compound-assignment operators.
    pub fn is_in_place(&self) -> bool {
        matches!(self, Op::AddAssign | Op::SubAssign | Op::MulAssign | Op::DivAssign)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
