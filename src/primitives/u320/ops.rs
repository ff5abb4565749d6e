//! Widening addition for `U320`.

use super::U320;
use crate::primitives::u256::U256;

/// Adds a 256-bit value into the low 256 bits of a 320-bit value,
/// ripple-carrying any overflow into the top limb.
pub fn add320_256(a: U320, b: U256) -> U320 {
    let mut out = [0u64; 5];
    let mut carry = false;

    for i in (0..5).rev() {
        let b_limb = if i >= 1 { b.0[i - 1] } else { 0 };
        let sum = a.0[i].wrapping_add(b_limb).wrapping_add(carry as u64);
        let carry_out = (sum < a.0[i]) | ((sum == a.0[i]) & carry);

        out[i] = sum;
        carry = carry_out;
    }

    U320(out)
}
