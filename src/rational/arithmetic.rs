/*
    Arithmetic on `RationalNumber`
*/

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use super::*;
use crate::{ComplexNumber, Context, Number};

// Builds the result of an operation from its exact, unreduced parts.
// The parts are truncated by `ctx` before being normalized.
// In-place operators divide out the gcd first, so they lose
// less precision than their binary counterparts.
fn settle(numerator: BigInt, denominator: BigInt, ctx: &ReductionContext, in_place: bool) -> RationalNumber {
    let (numerator, denominator) = if in_place {
        let g = numerator.gcd(&denominator);
        (numerator / &g, denominator / &g)
    } else {
        (numerator, denominator)
    };

    let (numerator, denominator) = ctx.fit_pair(&numerator, &denominator);
    // a fitted pair has a non-zero denominator and
    // at most 18 characters per part, so it fits in 64 bits
    RationalNumber::from_big(numerator, denominator)
        .expect("fitted fraction is representable")
}

// Exact parts of `x op y` before any reduction.
fn combine(x: &RationalNumber, y: &RationalNumber, op: Op) -> (BigInt, BigInt) {
    let (a, d1) = x.to_big();
    let (b, d2) = y.to_big();
    match op {
        Op::Add | Op::AddAssign => (&a * &d2 + &b * &d1, d1 * d2),
        Op::Sub | Op::SubAssign => (&a * &d2 - &b * &d1, d1 * d2),
        Op::Mul | Op::MulAssign => (a * b, d1 * d2),
        Op::Div | Op::DivAssign => (a * d2, d1 * b),
        Op::Eq | Op::Construct => unreachable!("not an arithmetic operator: {}", op),
    }
}

impl RationalNumber {
    // Applies `op` under `ctx`. Fails only when dividing by zero.
    fn apply(&self, other: &Self, op: Op, ctx: &ReductionContext) -> Result<Self, NumError> {
        if matches!(op, Op::Div | Op::DivAssign) && other.numerator == 0 {
            return Err(NumError::DivisionByZero);
        }

        let (numerator, denominator) = combine(self, other, op);
        Ok(settle(numerator, denominator, ctx, op.is_in_place()))
    }

    // Promotes the operand of `op`.
    // Binary operators take fractions and integers; the
    // in-place operators also take floats.
    fn operand(op: Op, other: Value) -> Result<Self, NumError> {
        match other {
            Value::Rational(r) => Ok(r),
            Value::Int(n) => Self::try_from(n),
            Value::Float(x) if op.is_in_place() => Self::from_f64(x),
            other => Err(NumError::TypeMismatch {
                op,
                lhs: "RationalNumber",
                rhs: other.kind(),
            }),
        }
    }

    fn try_op(&self, other: impl Into<Value>, op: Op) -> Result<Self, NumError> {
        let other = Self::operand(op, other.into())?;
        self.apply(&other, op, &ReductionContext::default())
    }

    /// Adds a fraction or an integer to this `RationalNumber`.
    pub fn try_add(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Add)
    }

    /// Subtracts a fraction or an integer from this `RationalNumber`.
    pub fn try_sub(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Sub)
    }

    /// Multiplies this `RationalNumber` by a fraction or an integer.
    pub fn try_mul(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Mul)
    }

    /// Divides this `RationalNumber` by a fraction or an integer.
    /// Fails if the divisor is zero.
    pub fn try_div(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Div)
    }

    /// In-place `+=`. Also accepts floats.
    pub fn try_add_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::AddAssign)?;
        Ok(())
    }

    /// In-place `-=`. Also accepts floats.
    pub fn try_sub_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::SubAssign)?;
        Ok(())
    }

    /// In-place `*=`. Also accepts floats.
    pub fn try_mul_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::MulAssign)?;
        Ok(())
    }

    /// In-place `/=`. Also accepts floats.
    /// Fails if the divisor is zero, leaving `self` unchanged.
    pub fn try_div_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::DivAssign)?;
        Ok(())
    }

    /// Compares this `RationalNumber` with any operand.
    ///
    /// Integers and floats are converted to fractions first; a float that
    /// cannot be converted is an error. A `ComplexNumber` is compared as
    /// a complex number.
    pub fn try_eq(&self, other: impl Into<Value>) -> Result<bool, NumError> {
        match other.into() {
            Value::Rational(r) => Ok(*self == r),
            Value::Int(n) => Ok(Self::try_from(n).map_or(false, |n| *self == n)),
            Value::Float(x) => Ok(*self == Self::from_f64(x)?),
            Value::Complex(c) => c.try_eq(*self),
        }
    }
}

impl Number for RationalNumber {
    type Ctx = ReductionContext;

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    fn negate(&self) -> Self {
        Self {
            numerator: -self.numerator,
            denominator: self.denominator,
        }
    }

    fn add_with(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        let (numerator, denominator) = combine(self, other, Op::Add);
        settle(numerator, denominator, ctx, false)
    }

    fn sub_with(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        let (numerator, denominator) = combine(self, other, Op::Sub);
        settle(numerator, denominator, ctx, false)
    }

    fn mul_with(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        let (numerator, denominator) = combine(self, other, Op::Mul);
        settle(numerator, denominator, ctx, false)
    }

    fn div_with(&self, other: &Self, ctx: &Self::Ctx) -> Result<Self, NumError> {
        self.apply(other, Op::Div, ctx)
    }
}

impl Neg for RationalNumber {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

// Implements a binary operator and its compound assignment form for a
// right-hand side that promotes to `RationalNumber` without loss.
// An `i64::MIN` operand panics, like an overflowing integer operation.
macro_rules! impl_rational_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign_method:ident, $op:expr, $assign_op:expr, $rhs:ty) => {
        impl $Trait<$rhs> for RationalNumber {
            type Output = RationalNumber;

            fn $method(self, other: $rhs) -> RationalNumber {
                let other = match RationalNumber::try_from(other) {
                    Ok(r) => r,
                    Err(e) => panic!("{}", e),
                };
                match self.apply(&other, $op, &ReductionContext::default()) {
                    Ok(r) => r,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl $AssignTrait<$rhs> for RationalNumber {
            fn $assign_method(&mut self, other: $rhs) {
                let other = match RationalNumber::try_from(other) {
                    Ok(r) => r,
                    Err(e) => panic!("{}", e),
                };
                match self.apply(&other, $assign_op, &ReductionContext::default()) {
                    Ok(r) => *self = r,
                    Err(e) => panic!("{}", e),
                }
            }
        }
    };
}

macro_rules! impl_rational_ops {
    ($($rhs:ty),*) => {
        $(
            impl_rational_op!(Add, add, AddAssign, add_assign, Op::Add, Op::AddAssign, $rhs);
            impl_rational_op!(Sub, sub, SubAssign, sub_assign, Op::Sub, Op::SubAssign, $rhs);
            impl_rational_op!(Mul, mul, MulAssign, mul_assign, Op::Mul, Op::MulAssign, $rhs);
            impl_rational_op!(Div, div, DivAssign, div_assign, Op::Div, Op::DivAssign, $rhs);
        )*
    };
}

// Division panics on a zero divisor, like integer division.
// `try_div` is the checked form.
impl_rational_ops!(RationalNumber, i64, i32);

impl PartialEq<i64> for RationalNumber {
    fn eq(&self, other: &i64) -> bool {
        RationalNumber::try_from(*other).map_or(false, |r| *self == r)
    }
}

impl PartialEq<i32> for RationalNumber {
    fn eq(&self, other: &i32) -> bool {
        *self == RationalNumber::from(*other)
    }
}

impl PartialEq<f64> for RationalNumber {
    fn eq(&self, other: &f64) -> bool {
        self.try_eq(*other).unwrap_or(false)
    }
}

impl PartialEq<ComplexNumber> for RationalNumber {
    fn eq(&self, other: &ComplexNumber) -> bool {
        other == self
    }
}

impl Zero for RationalNumber {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.numerator == 0
    }
}

impl One for RationalNumber {
    fn one() -> Self {
        Self::from(1)
    }
}
