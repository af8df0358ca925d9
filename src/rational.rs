/*
    Definition of `RationalNumber`
*/

mod arithmetic;
mod fmt;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, ToPrimitive, Zero};

use crate::convert::fraction_of_f64;
use crate::ops::{Op, Value};
use crate::{NumError, ReductionContext};

/// A fraction with 64-bit parts.
///
/// A `RationalNumber` is always stored in lowest terms with a strictly
/// positive denominator. Arithmetic is carried out exactly on big
/// integers and then fit back into 64 bits by the lossy reduction
/// policy of a [`ReductionContext`].
#[derive(Clone, Copy, Eq, Hash, PartialEq)]
pub struct RationalNumber {
    numerator: i64,
    denominator: i64,
}

// Constructors and getters
impl RationalNumber {
    /// Creates the fraction `numerator / denominator` in lowest terms.
    /// Fails if `denominator` is zero, or if the normalized numerator
    /// is `i64::MIN`, which has no negation.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, NumError> {
        Self::from_big(BigInt::from(numerator), BigInt::from(denominator))
    }

    /// Creates a fraction from a float using the default context.
    pub fn from_f64(x: f64) -> Result<Self, NumError> {
        Self::from_f64_with(x, &ReductionContext::default())
    }

    /// Creates a fraction from a float.
    ///
    /// The float is rounded to the context's decimal places and its exact
    /// binary ratio is truncated by the context, so the result is only an
    /// approximation of `x`.
    pub fn from_f64_with(x: f64, ctx: &ReductionContext) -> Result<Self, NumError> {
        let (numerator, denominator) = fraction_of_f64(x, ctx)?;
        Self::from_big(numerator, denominator)
    }

    /// Creates a fraction from a numerator and denominator of any kind.
    ///
    /// A float numerator is divided by the denominator in floating point
    /// and converted as by [`RationalNumber::from_f64`]. Otherwise both
    /// parts must be integers.
    pub fn from_values(
        numerator: impl Into<Value>,
        denominator: impl Into<Value>,
    ) -> Result<Self, NumError> {
        let numerator = numerator.into();
        let denominator = denominator.into();
        if denominator.is_zero() {
            return Err(NumError::ZeroDenominator);
        }

        match (numerator, denominator) {
            (Value::Int(n), Value::Int(d)) => Self::new(n, d),
            (Value::Float(x), Value::Int(d)) => Self::from_f64(x / d as f64),
            (Value::Float(x), Value::Float(d)) => Self::from_f64(x / d),
            (Value::Int(_), other) | (Value::Float(_), other) => Err(NumError::TypeMismatch {
                op: Op::Construct,
                lhs: "RationalNumber",
                rhs: other.kind(),
            }),
            (other, _) => Err(NumError::TypeMismatch {
                op: Op::Construct,
                lhs: "RationalNumber",
                rhs: other.kind(),
            }),
        }
    }

    /// Returns the numerator of this `RationalNumber`.
    pub fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Returns the denominator of this `RationalNumber`.
    /// This is always positive.
    pub fn denominator(&self) -> i64 {
        self.denominator
    }

    /// Returns the value of this `RationalNumber` as a float.
    pub fn to_f64(&self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }

    // Normalizes an exact fraction: checks the denominator,
    // moves the sign into the numerator, and divides out the gcd.
    pub(crate) fn from_big(numerator: BigInt, denominator: BigInt) -> Result<Self, NumError> {
        if denominator.is_zero() {
            return Err(NumError::ZeroDenominator);
        }

        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        let g = numerator.gcd(&denominator);
        let (numerator, denominator) = if g.is_one() {
            (numerator, denominator)
        } else {
            (numerator / &g, denominator / &g)
        };

        // the numerator range is kept symmetric so that negation is total
        match (numerator.to_i64(), denominator.to_i64()) {
            (Some(numerator), Some(denominator)) if numerator != i64::MIN => Ok(Self {
                numerator,
                denominator,
            }),
            _ => Err(NumError::Overflow),
        }
    }

    pub(crate) fn to_big(self) -> (BigInt, BigInt) {
        (BigInt::from(self.numerator), BigInt::from(self.denominator))
    }
}

// Implementing `Default` for `RationalNumber`
impl Default for RationalNumber {
    fn default() -> Self {
        Self {
            numerator: 0,
            denominator: 1,
        }
    }
}

impl TryFrom<i64> for RationalNumber {
    type Error = NumError;

    /// Fails only for `i64::MIN`.
    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Self::new(n, 1)
    }
}

impl From<i32> for RationalNumber {
    fn from(n: i32) -> Self {
        Self {
            numerator: n as i64,
            denominator: 1,
        }
    }
}

impl TryFrom<f64> for RationalNumber {
    type Error = NumError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Self::from_f64(x)
    }
}

impl TryFrom<Value> for RationalNumber {
    type Error = NumError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Rational(r) => Ok(r),
            other => Self::from_values(other, 1),
        }
    }
}

impl ToPrimitive for RationalNumber {
    /// Truncates toward zero.
    fn to_i64(&self) -> Option<i64> {
        Some(self.numerator / self.denominator)
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_i64()?.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(RationalNumber::to_f64(self))
    }
}
