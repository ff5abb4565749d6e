//! Finite field arithmetic over the secp256k1 prime field.
//!
//! Every function here takes and returns a [`U256`] assumed to lie in
//! `[0, P)`; every returning operation re-establishes that invariant
//! before handing its result back, so field elements never need an
//! explicit reduction step between calls. Conditional reduction is
//! computed branchlessly (boolean mask, broadcast via two's-complement
//! negation, AND against `P`'s limbs) rather than with a data-dependent
//! branch — this keeps the cost of every field op independent of the
//! operands and matches the reference kernels' style, though full
//! constant-time execution is not claimed for [`fe_exp`].

mod exp;
mod mul;
mod ops;

pub use exp::{fe_exp, fe_inv};
pub use mul::fe_mul;
pub use ops::{fe_add, fe_double, fe_reduce_once, fe_sub};

use crate::primitives::U256;

/// The secp256k1 field prime `p = 2²⁵⁶ − 2³² − 977`.
pub const P: U256 = U256([
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFEFFFFFC2F,
]);

/// `p − 2`, the exponent used by [`fe_inv`]'s Fermat inverse.
pub const P_MINUS_2: U256 = U256([
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFFFFFFFFFF,
    0xFFFFFFFEFFFFFC2D,
]);
