/*
    Lossy reduction
*/

use log::trace;
use num_bigint::BigInt;

use crate::{Context, NumError};

/// Default number of characters kept by the digit truncation.
pub const MAX_DIGITS: usize = 5;

/// Default number of decimal places a float is rounded to
/// before it becomes a fraction.
pub const DECIMAL_PLACES: usize = 4;

macro_rules! assert_valid_context {
    ($digits:expr, $places:expr) => {
        assert!(
            (2 <= $digits) && ($digits <= 18),
            "invalid digit budget, must be 2 <= digits <= 18: {}",
            $digits
        );
        assert!(
            $places <= 17,
            "invalid decimal places, must be places <= 17: {}",
            $places
        );
    };
}

/// The lossy reduction policy.
///
/// A component whose decimal text is longer than `max_digits` characters
/// is cut down to its first `max_digits` characters and read back as an
/// integer. The sign counts as a character, so a negative component keeps
/// one digit less than a positive one. This is plain digit truncation,
/// not a best rational approximation: the reduced fraction can be far
/// from the exact value.
///
/// Floats are first rounded to `decimal_places` decimal places.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ReductionContext {
    digits: usize,
    places: usize,
}

impl ReductionContext {
    /// Creates the default context: 5 characters, 4 decimal places.
    pub fn new() -> Self {
        Self {
            digits: MAX_DIGITS,
            places: DECIMAL_PLACES,
        }
    }

    /// Sets the number of characters a component may have.
    pub fn max_digits(mut self, digits: usize) -> Self {
        assert_valid_context!(digits, self.places);
        self.digits = digits;
        self
    }

    /// Sets the number of decimal places floats are rounded to.
    pub fn decimal_places(mut self, places: usize) -> Self {
        assert_valid_context!(self.digits, places);
        self.places = places;
        self
    }

    /// Returns the number of characters a component may have.
    pub fn digits(&self) -> usize {
        self.digits
    }

    /// Returns the number of decimal places floats are rounded to.
    pub fn places(&self) -> usize {
        self.places
    }

    /// Truncates the decimal text of `n` (sign included) to
    /// at most `self.digits()` characters.
    pub fn truncate(&self, n: &BigInt) -> BigInt {
        let text = n.to_string();
        if text.len() <= self.digits {
            return n.clone();
        }

        // dividing by a power of ten truncates toward zero,
        // which is exactly dropping the trailing characters
        let dropped = text.len() - self.digits;
        let reduced = n / num_traits::pow(BigInt::from(10u8), dropped);
        trace!("truncated {} to {}", text, reduced);
        reduced
    }

    /// Rounds `x` to `self.places()` decimal places.
    ///
    /// The decimal rendering of a float is correctly rounded, so this
    /// agrees with rounding the exact binary value of `x`.
    pub fn round_float(&self, x: f64) -> Result<f64, NumError> {
        if !x.is_finite() {
            return Err(NumError::NonFinite(x));
        }

        format!("{:.*}", self.places, x)
            .parse::<f64>()
            .map_err(|_| NumError::NonFinite(x))
    }
}

impl Context for ReductionContext {
    fn fit(&self, n: &BigInt) -> BigInt {
        self.truncate(n)
    }
}

impl Default for ReductionContext {
    fn default() -> Self {
        Self::new()
    }
}
