//! Russian-peasant modular multiplication.

use super::ops::{fe_add, fe_double};
use crate::primitives::U256;

/// Modular multiplication via bit-serial Russian-peasant multiply.
///
/// Walks `b`'s limbs least-significant-first (limb 3 down to limb 0)
/// and, within each limb, its bits least-significant-first (bit 0
/// upward). At each step the running multiplicand is conditionally
/// folded into the accumulator under a branchless bit mask, then
/// doubled — so by the time the most significant bit of `b` is
/// reached, the multiplicand has been doubled into place for it.
pub fn fe_mul(a: U256, b: U256) -> U256 {
    let mut acc = U256::ZERO;
    let mut running = a;

    for &limb_index in &[3usize, 2, 1, 0] {
        let mut limb = b.0[limb_index];

        for _ in 0..64 {
            let mask = (limb & 1).wrapping_neg();
            let masked = U256([
                running.0[0] & mask,
                running.0[1] & mask,
                running.0[2] & mask,
                running.0[3] & mask,
            ]);

            acc = fe_add(acc, masked);
            running = fe_double(running);
            limb >>= 1;
        }
    }

    acc
}
