//! Ripple-carry addition/subtraction and single-bit shifts for `U256`.
//!
//! These are the limb-level building blocks `U320`, `U512`, and the
//! field arithmetic in [`crate::field`] are composed from. Carry and
//! borrow propagation is computed branchlessly, limb by limb, from the
//! least significant limb (index 3) to the most significant (index 0).

use super::U256;

/// Adds two 256-bit integers, ripple-carrying from limb 3 up to limb 0.
///
/// Returns the wrapped sum together with the final carry-out bit.
pub fn add256(a: U256, b: U256) -> (U256, bool) {
    let mut out = [0u64; 4];
    let mut carry_in = false;

    for i in (0..4).rev() {
        let sum = a.0[i].wrapping_add(b.0[i]).wrapping_add(carry_in as u64);

        // Branchless carry-out: sum < a_i, or sum == a_i and a carry was
        // already propagating in (the only way `a_i + b_i + 1` wraps
        // back to exactly `a_i` is `b_i == u64::MAX` and carry_in).
        let carry_out = (sum < a.0[i]) | ((sum == a.0[i]) & carry_in);

        out[i] = sum;
        carry_in = carry_out;
    }

    (U256(out), carry_in)
}

/// Subtracts `b` from `a`, rippling the borrow from limb 3 up to limb 0.
///
/// Returns the wrapped difference together with the final borrow-out bit.
pub fn sub256(a: U256, b: U256) -> (U256, bool) {
    let mut out = [0u64; 4];
    let mut borrow_in = false;

    for i in (0..4).rev() {
        let (d1, b1) = a.0[i].overflowing_sub(b.0[i]);
        let (d2, b2) = d1.overflowing_sub(borrow_in as u64);

        out[i] = d2;
        borrow_in = b1 | b2;
    }

    (U256(out), borrow_in)
}

/// Shifts `a` left by one bit, propagating the carried-out bit of one
/// limb into the bottom of the next more-significant limb.
pub fn shift_left_256(a: U256) -> U256 {
    let mut out = [0u64; 4];
    let mut carry = 0u64;

    for i in (0..4).rev() {
        out[i] = (a.0[i] << 1) | carry;
        carry = a.0[i] >> 63;
    }

    U256(out)
}

/// Shifts `a` right by one bit, propagating the carried-out bit of one
/// limb into the top of the next less-significant limb.
pub fn shift_right_256(a: U256) -> U256 {
    let mut out = [0u64; 4];
    let mut carry = 0u64;

    for i in 0..4 {
        out[i] = (a.0[i] >> 1) | carry;
        carry = (a.0[i] & 1) << 63;
    }

    U256(out)
}
