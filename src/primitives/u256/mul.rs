//! Widening multiplies for `U256`.
//!
//! Both routines are schoolbook multiplies built on the native 128-bit
//! widening multiply-add (`u64 × u64 + u64 + u64 -> u128`), which plays
//! the role the reference kernels fill with an explicit 32-bit
//! high/low split — Rust's `u128` makes that split unnecessary without
//! changing the limb-by-limb structure of the algorithm.

use super::U256;
use crate::primitives::u320::U320;
use crate::primitives::u512::U512;

/// Full 256×256 → 512-bit schoolbook multiply.
pub fn mul256_full(a: U256, b: U256) -> U512 {
    // Limb-0-is-least-significant working copies, to keep the carry
    // bookkeeping below in its natural direction.
    let a_lsb_first = [a.0[3], a.0[2], a.0[1], a.0[0]];
    let b_lsb_first = [b.0[3], b.0[2], b.0[1], b.0[0]];

    let mut acc = [0u64; 8];

    for (i, &ai) in a_lsb_first.iter().enumerate() {
        let mut carry: u128 = 0;

        for (j, &bj) in b_lsb_first.iter().enumerate() {
            let idx = i + j;
            let product = (ai as u128) * (bj as u128) + acc[idx] as u128 + carry;

            acc[idx] = product as u64;
            carry = product >> 64;
        }

        let mut k = i + b_lsb_first.len();

        while carry != 0 {
            let sum = acc[k] as u128 + carry;
            acc[k] = sum as u64;
            carry = sum >> 64;
            k += 1;
        }
    }

    let mut out = [0u64; 8];

    for (k, limb) in acc.into_iter().enumerate() {
        out[7 - k] = limb;
    }

    U512(out)
}

/// Row multiply: `U256 × u64 -> U320`.
pub fn mul256_u64(a: U256, b: u64) -> U320 {
    let a_lsb_first = [a.0[3], a.0[2], a.0[1], a.0[0]];

    let mut acc = [0u64; 5];
    let mut carry: u128 = 0;

    for (i, &ai) in a_lsb_first.iter().enumerate() {
        let product = (ai as u128) * (b as u128) + carry;
        acc[i] = product as u64;
        carry = product >> 64;
    }

    acc[4] = carry as u64;

    let mut out = [0u64; 5];

    for (k, limb) in acc.into_iter().enumerate() {
        out[4 - k] = limb;
    }

    U320(out)
}
