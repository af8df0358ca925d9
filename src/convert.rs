/*
    Conversions from `f64` to fractions
*/

use bitvec::field::BitField;
use bitvec::prelude::*;
use log::trace;
use num_bigint::{BigInt, Sign};
use num_traits::Zero;

use crate::util::{bitvec_to_biguint, BitVec};
use crate::{Context, NumError, ReductionContext};

// binary64 parameters
const E: usize = 11;
const N: usize = 64;
const M: usize = N - E - 1;
const BIAS: i64 = 1023;
const EXP_FIELD_MAX: u64 = (1 << E) - 1;

// Splices the packed representation of `f` into
// the sign, exponent, and mantissa field.
fn split_packed(f: f64) -> (bool, u64, BitVec) {
    let mut bv: BitVec = bitvec![u64, Lsb0; 0; N];
    bv.store(f.to_bits());

    let s = bv[N - 1];
    let e = bv[M..(N - 1)].load::<u64>();
    let m: BitVec = bv[..M].to_bitvec();
    (s, e, m)
}

/// Decomposes a finite `f64` into the exact integer ratio it encodes.
///
/// The result is in lowest terms with a positive denominator, which is
/// always a power of two. Zero (of either sign) is `0/1`.
pub fn ratio_of_f64(f: f64) -> Result<(BigInt, BigInt), NumError> {
    let (s, e, mut m) = split_packed(f);
    if e == EXP_FIELD_MAX {
        // infinity or NaN
        return Err(NumError::NonFinite(f));
    }

    // value is `c * 2^exp` for an integer `c`
    let mut exp = if e == 0 {
        // subnormal or zero
        1 - BIAS - M as i64
    } else {
        // normal: restore the hidden bit
        m.push(true);
        e as i64 - BIAS - M as i64
    };

    let mut c = bitvec_to_biguint(&m);
    if c.is_zero() {
        return Ok((BigInt::zero(), BigInt::from(1u8)));
    }

    // strip powers of two so the ratio is in lowest terms
    if let Some(tz) = c.trailing_zeros() {
        c >>= tz;
        exp += tz as i64;
    }

    let sign = if s { Sign::Minus } else { Sign::Plus };
    let (numerator, denominator) = if exp >= 0 {
        (BigInt::from_biguint(sign, c << exp as usize), BigInt::from(1u8))
    } else {
        (BigInt::from_biguint(sign, c), BigInt::from(1u8) << (-exp) as usize)
    };

    trace!("decomposed {:?} into {}/{}", f, numerator, denominator);
    Ok((numerator, denominator))
}

/// Turns a float into the (unnormalized) parts of a fraction.
///
/// The float is rounded to the context's decimal places, decomposed into
/// its exact binary ratio, and then both parts are fit by the context.
/// This is the single path every float takes into a fraction, whether it
/// was supplied by a caller or produced by a floating-point computation.
pub fn fraction_of_f64(x: f64, ctx: &ReductionContext) -> Result<(BigInt, BigInt), NumError> {
    let rounded = ctx.round_float(x)?;
    let (numerator, denominator) = ratio_of_f64(rounded)?;
    Ok(ctx.fit_pair(&numerator, &denominator))
}
