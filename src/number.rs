/*
    Defines a number
*/

use num_bigint::BigInt;

use crate::NumError;

/// The number type.
///
/// Both number types of this library implement `Number`.
/// Every binary operation is evaluated exactly and then fit back into
/// the representation by a `Context`, so results stay bounded at the
/// cost of (possibly) losing precision.
pub trait Number: Clone + Default {
    /// The reduction context associated with this `Number`.
    type Ctx: Context;

    /// Returns true if this `Number` encodes a zero.
    fn is_zero(&self) -> bool;

    /// Returns true if this `Number` encodes an integer.
    fn is_integer(&self) -> bool;

    /// Returns the additive inverse of this `Number`.
    /// Negation is exact, no context is required.
    fn negate(&self) -> Self;

    /// Adds this `Number` and another, fitting the result
    /// according to the provided context.
    fn add_with(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Subtracts another `Number` from this one, fitting the result
    /// according to the provided context.
    fn sub_with(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Multiplies this `Number` and another, fitting the result
    /// according to the provided context.
    fn mul_with(&self, other: &Self, ctx: &Self::Ctx) -> Self;

    /// Divides this `Number` by another, fitting the result
    /// according to the provided context.
    /// Fails if `other` is zero.
    fn div_with(&self, other: &Self, ctx: &Self::Ctx) -> Result<Self, NumError>;
}

/// A specification for reduction behavior.
///
/// Exact fraction arithmetic grows numerators and denominators without
/// bound. A `Context` describes how an exact integer component of a
/// result is fit back into a bounded representation.
pub trait Context {
    /// Fits one exact integer component into the representation.
    fn fit(&self, n: &BigInt) -> BigInt;

    /// Fits a numerator and denominator independently.
    fn fit_pair(&self, numerator: &BigInt, denominator: &BigInt) -> (BigInt, BigInt) {
        (self.fit(numerator), self.fit(denominator))
    }
}
