/*
    Arithmetic on `ComplexNumber`
*/

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

use super::*;
use crate::Number;

impl ComplexNumber {
    // Applies `op` under `ctx`.
    // In-place operators share the binary formulas.
    fn apply(&self, other: &Self, op: Op, ctx: &ReductionContext) -> Result<Self, NumError> {
        match op {
            Op::Add | Op::AddAssign => Ok(self.add_with(other, ctx)),
            Op::Sub | Op::SubAssign => Ok(self.sub_with(other, ctx)),
            Op::Mul | Op::MulAssign => Ok(self.mul_with(other, ctx)),
            Op::Div | Op::DivAssign => self.div_with(other, ctx),
            Op::Eq | Op::Construct => unreachable!("not an arithmetic operator: {}", op),
        }
    }

    fn try_op(&self, other: impl Into<Value>, op: Op) -> Result<Self, NumError> {
        let other = Self::to_complex(other)?;
        self.apply(&other, op, &ReductionContext::default())
    }

    /// Adds any numeric operand to this `ComplexNumber`.
    pub fn try_add(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Add)
    }

    /// Subtracts any numeric operand from this `ComplexNumber`.
    pub fn try_sub(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Sub)
    }

    /// Multiplies this `ComplexNumber` by any numeric operand.
    pub fn try_mul(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Mul)
    }

    /// Divides this `ComplexNumber` by any numeric operand.
    /// Fails if the divisor is zero.
    pub fn try_div(&self, other: impl Into<Value>) -> Result<Self, NumError> {
        self.try_op(other, Op::Div)
    }

    /// In-place `+=`, with the same operands as `try_add`.
    pub fn try_add_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::AddAssign)?;
        Ok(())
    }

    /// In-place `-=`, with the same operands as `try_sub`.
    pub fn try_sub_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::SubAssign)?;
        Ok(())
    }

    /// In-place `*=`, with the same operands as `try_mul`.
    pub fn try_mul_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::MulAssign)?;
        Ok(())
    }

    /// In-place `/=`, with the same operands as `try_div`.
    /// Fails if the divisor is zero, leaving `self` unchanged.
    pub fn try_div_assign(&mut self, other: impl Into<Value>) -> Result<(), NumError> {
        *self = self.try_op(other, Op::DivAssign)?;
        Ok(())
    }

    /// Compares this `ComplexNumber` with any operand, promoting it first.
    pub fn try_eq(&self, other: impl Into<Value>) -> Result<bool, NumError> {
        Ok(*self == Self::to_complex(other)?)
    }
}

impl Number for ComplexNumber {
    type Ctx = ReductionContext;

    fn is_zero(&self) -> bool {
        self.real.numerator() == 0 && self.imaginary.numerator() == 0
    }

    fn is_integer(&self) -> bool {
        self.is_real() && self.real.denominator() == 1
    }

    fn negate(&self) -> Self {
        Self::from_parts(self.real.negate(), self.imaginary.negate())
    }

    fn add_with(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Self::from_parts(
            self.real.add_with(&other.real, ctx),
            self.imaginary.add_with(&other.imaginary, ctx),
        )
    }

    fn sub_with(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        Self::from_parts(
            self.real.sub_with(&other.real, ctx),
            self.imaginary.sub_with(&other.imaginary, ctx),
        )
    }

    fn mul_with(&self, other: &Self, ctx: &Self::Ctx) -> Self {
        let (a, b) = (&self.real, &self.imaginary);
        let (c, d) = (&other.real, &other.imaginary);

        // (a + bi)(c + di) = (ac - bd) + (ad + bc)i
        let real = a.mul_with(c, ctx).sub_with(&b.mul_with(d, ctx), ctx);
        let imaginary = a.mul_with(d, ctx).add_with(&b.mul_with(c, ctx), ctx);
        Self::from_parts(real, imaginary)
    }

    fn div_with(&self, other: &Self, ctx: &Self::Ctx) -> Result<Self, NumError> {
        let (a, b) = (&self.real, &self.imaginary);
        let (c, d) = (&other.real, &other.imaginary);

        let denominator = c.mul_with(c, ctx).add_with(&d.mul_with(d, ctx), ctx);
        if denominator.numerator() == 0 {
            return Err(NumError::DivisionByZero);
        }

        // (a + bi)/(c + di) = ((ac + bd) + (bc - ad)i) / (c^2 + d^2)
        let real = a.mul_with(c, ctx).add_with(&b.mul_with(d, ctx), ctx);
        let imaginary = b.mul_with(c, ctx).sub_with(&a.mul_with(d, ctx), ctx);
        Ok(Self::from_parts(
            real.div_with(&denominator, ctx)?,
            imaginary.div_with(&denominator, ctx)?,
        ))
    }
}

impl Neg for ComplexNumber {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}

macro_rules! impl_complex_op {
    ($Trait:ident, $method:ident, $AssignTrait:ident, $assign_method:ident, $op:expr, $rhs:ty) => {
        impl $Trait<$rhs> for ComplexNumber {
            type Output = ComplexNumber;

            fn $method(self, other: $rhs) -> ComplexNumber {
                let other = match ComplexNumber::try_from(other) {
                    Ok(c) => c,
                    Err(e) => panic!("{}", e),
                };
                match self.apply(&other, $op, &ReductionContext::default()) {
                    Ok(c) => c,
                    Err(e) => panic!("{}", e),
                }
            }
        }

        impl $AssignTrait<$rhs> for ComplexNumber {
            fn $assign_method(&mut self, other: $rhs) {
                *self = $Trait::$method(*self, other);
            }
        }
    };
}

macro_rules! impl_complex_ops {
    ($($rhs:ty),*) => {
        $(
            impl_complex_op!(Add, add, AddAssign, add_assign, Op::Add, $rhs);
            impl_complex_op!(Sub, sub, SubAssign, sub_assign, Op::Sub, $rhs);
            impl_complex_op!(Mul, mul, MulAssign, mul_assign, Op::Mul, $rhs);
            impl_complex_op!(Div, div, DivAssign, div_assign, Op::Div, $rhs);
        )*
    };
}

// Division panics on a zero divisor; `try_div` is the checked form.
impl_complex_ops!(ComplexNumber, RationalNumber, i64, i32);

impl PartialEq<RationalNumber> for ComplexNumber {
    fn eq(&self, other: &RationalNumber) -> bool {
        *self == ComplexNumber::from(*other)
    }
}

impl PartialEq<i64> for ComplexNumber {
    fn eq(&self, other: &i64) -> bool {
        ComplexNumber::try_from(*other).map_or(false, |c| *self == c)
    }
}

impl PartialEq<i32> for ComplexNumber {
    fn eq(&self, other: &i32) -> bool {
        *self == ComplexNumber::from(*other)
    }
}

impl PartialEq<f64> for ComplexNumber {
    fn eq(&self, other: &f64) -> bool {
        self.try_eq(*other).unwrap_or(false)
    }
}

impl Zero for ComplexNumber {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        Number::is_zero(self)
    }
}

impl One for ComplexNumber {
    fn one() -> Self {
        Self::from(1)
    }
}
