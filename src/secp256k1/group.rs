//! Affine and Jacobian point arithmetic and scalar multiplication.

use super::point::{AffinePoint, JacobianPoint};
use super::G;
use crate::field::{fe_add, fe_double, fe_inv, fe_mul, fe_sub};
use crate::primitives::U256;

/// Doubles an affine point: `λ = 3x²·(2y)⁻¹`, `x' = λ² − 2x`,
/// `y' = λ(x − x') − y`.
pub fn affine_double(p: &AffinePoint) -> AffinePoint {
    let x_squared = fe_mul(p.x, p.x);
    let three_x_squared = fe_add(fe_double(x_squared), x_squared);

    let inv_two_y = fe_inv(fe_double(p.y));
    let lambda = fe_mul(three_x_squared, inv_two_y);

    let x_r = fe_sub(fe_mul(lambda, lambda), fe_double(p.x));
    let y_r = fe_sub(fe_mul(lambda, fe_sub(p.x, x_r)), p.y);

    AffinePoint { x: x_r, y: y_r }
}

/// Adds two distinct, non-inverse affine points:
/// `λ = (y_Q − y_P)(x_Q − x_P)⁻¹`, `x_R = λ² − x_P − x_Q`,
/// `y_R = λ(x_P − x_R) − y_P`.
pub fn affine_add(p: &AffinePoint, q: &AffinePoint) -> AffinePoint {
    let lambda = fe_mul(fe_sub(q.y, p.y), fe_inv(fe_sub(q.x, p.x)));

    let x_r = fe_sub(fe_sub(fe_mul(lambda, lambda), p.x), q.x);
    let y_r = fe_sub(fe_mul(lambda, fe_sub(p.x, x_r)), p.y);

    AffinePoint { x: x_r, y: y_r }
}

/// Mixed-coordinate addition of a Jacobian point and an affine point.
///
/// Standard "madd" formula (no inversion): with `J = (X1,Y1,Z1)` and
/// `A = (x2,y2)`,
/// ```text
/// Z1Z1 = Z1², U2 = x2·Z1Z1, S2 = y2·Z1·Z1Z1
/// H = U2 − X1, HH = H², HHH = H·HH, r = S2 − Y1, V = X1·HH
/// X3 = r² − HHH − 2V,  Y3 = r·(V − X3) − Y1·HHH,  Z3 = Z1·H
/// ```
/// Satisfies `jacobian_to_affine(jacobian_plus_affine(J, A)) ==
/// affine_add(jacobian_to_affine(J), A)` whenever both sides are
/// defined.
pub fn jacobian_plus_affine(j: &JacobianPoint, a: &AffinePoint) -> JacobianPoint {
    let z1z1 = fe_mul(j.z, j.z);
    let u2 = fe_mul(a.x, z1z1);
    let s2 = fe_mul(fe_mul(a.y, j.z), z1z1);

    let h = fe_sub(u2, j.x);
    let hh = fe_mul(h, h);
    let hhh = fe_mul(h, hh);
    let r = fe_sub(s2, j.y);
    let v = fe_mul(j.x, hh);

    let x3 = fe_sub(fe_sub(fe_mul(r, r), hhh), fe_double(v));
    let y3 = fe_sub(fe_mul(r, fe_sub(v, x3)), fe_mul(j.y, hhh));
    let z3 = fe_mul(j.z, h);

    JacobianPoint { x: x3, y: y3, z: z3 }
}

/// Converts a Jacobian point back to affine: `z_inv = Z⁻¹`,
/// `x = X·z_inv²`, `y = Y·z_inv³`.
pub fn jacobian_to_affine(j: &JacobianPoint) -> AffinePoint {
    let z_inv = fe_inv(j.z);
    let z_inv2 = fe_mul(z_inv, z_inv);
    let z_inv3 = fe_mul(z_inv2, z_inv);

    AffinePoint {
        x: fe_mul(j.x, z_inv2),
        y: fe_mul(j.y, z_inv3),
    }
}

/// Computes `k · G` via complete double-and-add, most significant bit
/// first.
///
/// The accumulator is tracked as `Option<AffinePoint>` (`None` standing
/// in for the point at infinity) purely as internal bookkeeping for the
/// leading zero bits of `k` — no public `AffinePoint` value ever
/// represents infinity. Panics if `k` is zero, which cannot occur for
/// the HMAC-derived scalars this crate feeds it (probability `2⁻²⁵⁶`).
pub fn g_times_scalar(k: U256) -> AffinePoint {
    let mut acc: Option<AffinePoint> = None;

    for bit_index in (0..256).rev() {
        if let Some(p) = acc {
            acc = Some(affine_double(&p));
        }

        if k.bit(bit_index) {
            acc = Some(match acc {
                Some(p) => affine_add(&p, &G),
                None => G,
            });
        }
    }

    acc.expect("g_times_scalar called with a zero scalar")
}
