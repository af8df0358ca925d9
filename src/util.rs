use bitvec::prelude::*;
use num_bigint::BigUint;
use std::ops::ShlAssign;

/// Bit vector used to hold the fields of a packed float.
pub(crate) type BitVec = bitvec::vec::BitVec<u64, Lsb0>;

// Converts a `BitVec` (least significant bit first) to `BigUint`
pub(crate) fn bitvec_to_biguint(bv: &BitSlice<u64, Lsb0>) -> BigUint {
    let mut i = BigUint::default();
    for b in bv.iter().rev() {
        i.shl_assign(1);
        i.set_bit(0, *b);
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_to_integer() {
        let bv: BitVec = bitvec![u64, Lsb0; 1, 0, 1, 1];
        assert_eq!(bitvec_to_biguint(&bv), BigUint::from(13u8));

        let bv: BitVec = bitvec![u64, Lsb0; 0; 7];
        assert_eq!(bitvec_to_biguint(&bv), BigUint::from(0u8));
    }
}
