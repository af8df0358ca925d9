/*
    Definition of `ComplexNumber`
*/

mod arithmetic;
mod fmt;
mod polar;

use crate::ops::{Op, Value};
use crate::{NumError, RationalNumber, ReductionContext};

/// A complex number with fractional real and imaginary parts.
///
/// All arithmetic is delegated to [`RationalNumber`] and is therefore
/// subject to the same lossy reduction. Operands are promoted to
/// `ComplexNumber` first, a real value gaining a zero imaginary part.
#[derive(Clone, Copy, Default, Eq, Hash, PartialEq)]
pub struct ComplexNumber {
    real: RationalNumber,
    imaginary: RationalNumber,
}

// Constructors and getters
impl ComplexNumber {
    /// Creates a `ComplexNumber` from a real and an imaginary part,
    /// each being an integer, a float or a `RationalNumber`.
    pub fn new(real: impl Into<Value>, imaginary: impl Into<Value>) -> Result<Self, NumError> {
        Ok(Self {
            real: Self::component(real.into())?,
            imaginary: Self::component(imaginary.into())?,
        })
    }

    /// Creates a `ComplexNumber` from two fractions.
    pub fn from_parts(real: RationalNumber, imaginary: RationalNumber) -> Self {
        Self { real, imaginary }
    }

    /// Promotes any operand to a `ComplexNumber`.
    ///
    /// A `ComplexNumber` is returned as is, anything else becomes the real
    /// part of a number with a zero imaginary part.
    pub fn to_complex(value: impl Into<Value>) -> Result<Self, NumError> {
        match value.into() {
            Value::Complex(c) => Ok(c),
            Value::Rational(r) => Ok(Self::from(r)),
            other => Ok(Self::from(RationalNumber::try_from(other)?)),
        }
    }

    /// Returns the real part of this `ComplexNumber`.
    pub fn real(&self) -> RationalNumber {
        self.real
    }

    /// Returns the imaginary part of this `ComplexNumber`.
    pub fn imaginary(&self) -> RationalNumber {
        self.imaginary
    }

    /// Returns true if the imaginary part is zero.
    pub fn is_real(&self) -> bool {
        self.imaginary.numerator() == 0
    }

    // Coerces one part given to `new`.
    fn component(value: Value) -> Result<RationalNumber, NumError> {
        match value {
            Value::Complex(_) => Err(NumError::TypeMismatch {
                op: Op::Construct,
                lhs: "ComplexNumber",
                rhs: value.kind(),
            }),
            other => RationalNumber::try_from(other),
        }
    }
}

impl From<RationalNumber> for ComplexNumber {
    fn from(real: RationalNumber) -> Self {
        Self::from_parts(real, RationalNumber::default())
    }
}

impl TryFrom<i64> for ComplexNumber {
    type Error = NumError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Ok(Self::from(RationalNumber::try_from(n)?))
    }
}

impl From<i32> for ComplexNumber {
    fn from(n: i32) -> Self {
        Self::from(RationalNumber::from(n))
    }
}

impl TryFrom<f64> for ComplexNumber {
    type Error = NumError;

    fn try_from(x: f64) -> Result<Self, Self::Error> {
        Ok(Self::from(RationalNumber::from_f64(x)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(n: i64, d: i64) -> RationalNumber {
        RationalNumber::new(n, d).unwrap()
    }

    #[test]
    fn construction() {
        let c = ComplexNumber::new(1, 2).unwrap();
        assert_eq!((c.real(), c.imaginary()), (q(1, 1), q(2, 1)));

        let c = ComplexNumber::new(1.5, -0.25).unwrap();
        assert_eq!((c.real(), c.imaginary()), (q(3, 2), q(-1, 4)));

        let c = ComplexNumber::new(q(1, 2), 0).unwrap();
        assert!(c.is_real());
        assert_eq!(c, ComplexNumber::from(q(1, 2)));
    }

    #[test]
    fn construction_failures() {
        let c = ComplexNumber::from(1);
        assert!(matches!(
            ComplexNumber::new(c, 0),
            Err(NumError::TypeMismatch { op: Op::Construct, rhs: "ComplexNumber", .. })
        ));
        assert!(matches!(ComplexNumber::new(f64::NAN, 0), Err(NumError::NonFinite(_))));
        assert_eq!(ComplexNumber::new(1, 0), Ok(c));
    }

    #[test]
    fn coercion() {
        let c = ComplexNumber::new(3, 4).unwrap();
        assert_eq!(ComplexNumber::to_complex(c).unwrap(), c);
        assert_eq!(ComplexNumber::to_complex(q(1, 2)).unwrap(), ComplexNumber::new(q(1, 2), 0).unwrap());
        assert_eq!(ComplexNumber::to_complex(7).unwrap(), ComplexNumber::new(7, 0).unwrap());
        assert_eq!(ComplexNumber::to_complex(0.5).unwrap(), ComplexNumber::new(q(1, 2), 0).unwrap());
        assert!(ComplexNumber::to_complex(f64::INFINITY).is_err());
    }
}
