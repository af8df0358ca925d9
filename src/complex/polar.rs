/*
    Polar form: modulus, argument and powers
*/

use super::*;
use crate::Number;

impl ComplexNumber {
    /// Returns the modulus `sqrt(re^2 + im^2)`.
    ///
    /// The squared modulus is computed with fraction arithmetic and only
    /// the square root is taken in floating point.
    pub fn abs(&self) -> f64 {
        self.abs_with(&ReductionContext::default())
    }

    /// Returns the modulus, squaring the parts under `ctx`.
    pub fn abs_with(&self, ctx: &ReductionContext) -> f64 {
        let re2 = self.real.mul_with(&self.real, ctx);
        let im2 = self.imaginary.mul_with(&self.imaginary, ctx);
        re2.add_with(&im2, ctx).to_f64().sqrt()
    }

    /// Returns the argument in radians, in `[-pi, pi]`.
    pub fn arg(&self) -> f64 {
        self.imaginary.to_f64().atan2(self.real.to_f64())
    }

    /// Raises this `ComplexNumber` to a non-negative integer power.
    ///
    /// The power is evaluated in polar form with De Moivre's formula,
    /// `r^n (cos(n theta) + i sin(n theta))`, and both parts are turned
    /// back into fractions. The result is an approximation even when the
    /// exact power is representable.
    pub fn power(&self, n: impl Into<Value>) -> Result<Self, NumError> {
        self.power_with(n, &ReductionContext::default())
    }

    /// Raises this `ComplexNumber` to a power, converting the parts back under `ctx`.
    pub fn power_with(&self, n: impl Into<Value>, ctx: &ReductionContext) -> Result<Self, NumError> {
        let n = match n.into() {
            Value::Int(n) if n >= 0 => n as f64,
            other => return Err(NumError::InvalidExponent(other)),
        };

        let r = self.abs_with(ctx);
        let theta = self.arg();
        let scale = r.powf(n);
        let real = scale * (n * theta).cos();
        let imaginary = scale * (n * theta).sin();

        Ok(Self::from_parts(
            RationalNumber::from_f64_with(real, ctx)?,
            RationalNumber::from_f64_with(imaginary, ctx)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(re: i64, im: i64) -> ComplexNumber {
        ComplexNumber::new(re, im).unwrap()
    }

    #[test]
    fn modulus_and_argument() {
        assert_eq!(c(3, 4).abs(), 5.0);
        assert_eq!(c(1, 2).abs(), 5f64.sqrt());
        assert_eq!(c(0, 0).abs(), 0.0);
        assert_eq!(c(1, 2).arg(), 2f64.atan2(1.0));
        assert_eq!(c(-1, 0).arg(), std::f64::consts::PI);
        assert_eq!(c(0, 0).arg(), 0.0);
    }

    #[test]
    fn integer_powers() {
        assert_eq!(c(1, 1).power(3).unwrap(), c(-2, 2));
        assert_eq!(c(1, 2).power(2).unwrap(), c(-3, 4));
        assert_eq!(c(3, 4).power(2).unwrap(), c(-7, 24));
        assert_eq!(c(0, 1).power(2).unwrap(), c(-1, 0));
        assert_eq!(c(2, 0).power(0).unwrap(), c(1, 0));
        assert_eq!(c(5, -3).power(1).unwrap(), c(5, -3));
    }

    #[test]
    fn invalid_exponents() {
        assert_eq!(c(1, 1).power(-1), Err(NumError::InvalidExponent(Value::Int(-1))));
        assert_eq!(c(1, 1).power(2.0), Err(NumError::InvalidExponent(Value::Float(2.0))));
        assert!(matches!(
            c(1, 1).power(RationalNumber::from(2)),
            Err(NumError::InvalidExponent(Value::Rational(_)))
        ));
    }

    #[test]
    fn power_overflow() {
        assert!(matches!(c(10, 0).power(400), Err(NumError::NonFinite(_))));
    }
}
