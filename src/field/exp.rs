//! Modular exponentiation and the Fermat inverse it implements.

use super::mul::fe_mul;
use super::P_MINUS_2;
use crate::primitives::U256;

/// Modular exponentiation via square-and-multiply, most-significant
/// limb first and, within each limb, most-significant bit first.
pub fn fe_exp(base: U256, exp: U256) -> U256 {
    let mut result = U256::ONE;

    for &limb in &exp.0 {
        for bit_pos in (0..64).rev() {
            result = fe_mul(result, result);

            if (limb >> bit_pos) & 1 == 1 {
                result = fe_mul(result, base);
            }
        }
    }

    result
}

/// Modular inverse via Fermat's little theorem: `a^(p-2) mod p`.
///
/// Undefined (returns zero) for `a == 0`, matching the fact that zero
/// has no multiplicative inverse; every call site in this crate invokes
/// `fe_inv` only on nonzero field elements (curve y-coordinates and
/// nonzero x-coordinate differences).
pub fn fe_inv(a: U256) -> U256 {
    fe_exp(a, P_MINUS_2)
}
