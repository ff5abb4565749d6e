//! Auxiliary test kernels: thin `pub fn` wrappers over byte buffers for
//! each of C1–C5, exercising the documented wire layouts (big-endian
//! `U256`/`U320`/`U512`, SEC1-compressed points) without touching the
//! production `batch_address_search` entry point.
//!
//! Not part of the production path — kept only so conformance tests can
//! drive every component family through its exact external byte layout.

use crate::bip32::{ckdpub, XPub};
use crate::field::{fe_add, fe_double, fe_exp, fe_inv, fe_mul, fe_reduce_once, fe_sub};
use crate::hash::{hash160_33, hmac_sha512_k32_m37, ripemd160_32, sha256_33, sha512_165, sha512_192};
use crate::primitives::{add256, mul256_full, mul256_u64, shift_left_256, shift_right_256, sub256, U256};
use crate::secp256k1::{
    affine_add, affine_double, g_times_scalar, jacobian_plus_affine, jacobian_to_affine, AffinePoint,
    JacobianPoint,
};

/// `add256` over big-endian 32-byte buffers. Returns `(sum, carry_out)`.
pub fn k_add256(a: &[u8; 32], b: &[u8; 32]) -> ([u8; 32], bool) {
    let (sum, carry) = add256(U256::from_be_bytes(*a), U256::from_be_bytes(*b));
    (sum.to_be_bytes(), carry)
}

/// `sub256` over big-endian 32-byte buffers. Returns `(diff, borrow_out)`.
pub fn k_sub256(a: &[u8; 32], b: &[u8; 32]) -> ([u8; 32], bool) {
    let (diff, borrow) = sub256(U256::from_be_bytes(*a), U256::from_be_bytes(*b));
    (diff.to_be_bytes(), borrow)
}

/// `shift_left_256` over a big-endian 32-byte buffer.
pub fn k_shift_left_256(a: &[u8; 32]) -> [u8; 32] {
    shift_left_256(U256::from_be_bytes(*a)).to_be_bytes()
}

/// `shift_right_256` over a big-endian 32-byte buffer.
pub fn k_shift_right_256(a: &[u8; 32]) -> [u8; 32] {
    shift_right_256(U256::from_be_bytes(*a)).to_be_bytes()
}

/// `mul256_full` over big-endian 32-byte inputs, returning a big-endian
/// 64-byte product.
pub fn k_mul256_full(a: &[u8; 32], b: &[u8; 32]) -> [u8; 64] {
    mul256_full(U256::from_be_bytes(*a), U256::from_be_bytes(*b)).to_be_bytes()
}

/// `mul256_u64` over a big-endian 32-byte input and a native `u64`,
/// returning a big-endian 40-byte product.
pub fn k_mul256_u64(a: &[u8; 32], b: u64) -> [u8; 40] {
    mul256_u64(U256::from_be_bytes(*a), b).to_be_bytes()
}

/// `fe_add` over big-endian 32-byte field elements.
pub fn k_fe_add(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    fe_add(U256::from_be_bytes(*a), U256::from_be_bytes(*b)).to_be_bytes()
}

/// `fe_sub` over big-endian 32-byte field elements.
pub fn k_fe_sub(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    fe_sub(U256::from_be_bytes(*a), U256::from_be_bytes(*b)).to_be_bytes()
}

/// `fe_double` over a big-endian 32-byte field element.
pub fn k_fe_double(a: &[u8; 32]) -> [u8; 32] {
    fe_double(U256::from_be_bytes(*a)).to_be_bytes()
}

/// `fe_mul` over big-endian 32-byte field elements.
pub fn k_fe_mul(a: &[u8; 32], b: &[u8; 32]) -> [u8; 32] {
    fe_mul(U256::from_be_bytes(*a), U256::from_be_bytes(*b)).to_be_bytes()
}

/// `fe_exp` over big-endian 32-byte base and exponent.
pub fn k_fe_exp(base: &[u8; 32], exp: &[u8; 32]) -> [u8; 32] {
    fe_exp(U256::from_be_bytes(*base), U256::from_be_bytes(*exp)).to_be_bytes()
}

/// `fe_inv` over a big-endian 32-byte field element.
pub fn k_fe_inv(a: &[u8; 32]) -> [u8; 32] {
    fe_inv(U256::from_be_bytes(*a)).to_be_bytes()
}

/// `fe_reduce_once` over a big-endian 32-byte value.
pub fn k_fe_reduce_once(a: &[u8; 32]) -> [u8; 32] {
    fe_reduce_once(U256::from_be_bytes(*a)).to_be_bytes()
}

fn point_from_bytes(x: &[u8; 32], y: &[u8; 32]) -> AffinePoint {
    AffinePoint {
        x: U256::from_be_bytes(*x),
        y: U256::from_be_bytes(*y),
    }
}

fn point_to_bytes(p: &AffinePoint) -> ([u8; 32], [u8; 32]) {
    (p.x.to_be_bytes(), p.y.to_be_bytes())
}

/// `affine_double` over big-endian coordinate buffers.
pub fn k_affine_double(x: &[u8; 32], y: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    point_to_bytes(&affine_double(&point_from_bytes(x, y)))
}

/// `affine_add` over big-endian coordinate buffers.
pub fn k_affine_add(p: (&[u8; 32], &[u8; 32]), q: (&[u8; 32], &[u8; 32])) -> ([u8; 32], [u8; 32]) {
    point_to_bytes(&affine_add(&point_from_bytes(p.0, p.1), &point_from_bytes(q.0, q.1)))
}

/// `jacobian_plus_affine` over big-endian coordinate buffers.
pub fn k_jacobian_plus_affine(
    j: (&[u8; 32], &[u8; 32], &[u8; 32]),
    a: (&[u8; 32], &[u8; 32]),
) -> ([u8; 32], [u8; 32], [u8; 32]) {
    let jp = JacobianPoint {
        x: U256::from_be_bytes(*j.0),
        y: U256::from_be_bytes(*j.1),
        z: U256::from_be_bytes(*j.2),
    };
    let sum = jacobian_plus_affine(&jp, &point_from_bytes(a.0, a.1));
    (sum.x.to_be_bytes(), sum.y.to_be_bytes(), sum.z.to_be_bytes())
}

/// `jacobian_to_affine` over big-endian coordinate buffers.
pub fn k_jacobian_to_affine(j: (&[u8; 32], &[u8; 32], &[u8; 32])) -> ([u8; 32], [u8; 32]) {
    let jp = JacobianPoint {
        x: U256::from_be_bytes(*j.0),
        y: U256::from_be_bytes(*j.1),
        z: U256::from_be_bytes(*j.2),
    };
    point_to_bytes(&jacobian_to_affine(&jp))
}

/// `g_times_scalar` over a big-endian 32-byte scalar.
pub fn k_g_times_scalar(k: &[u8; 32]) -> ([u8; 32], [u8; 32]) {
    point_to_bytes(&g_times_scalar(U256::from_be_bytes(*k)))
}

/// `sha256_33`, re-exported unchanged as a kernel (already a fixed byte
/// buffer function).
pub fn k_sha256_33(msg: &[u8; 33]) -> [u8; 32] {
    sha256_33(msg)
}

/// `sha512_165` as a kernel.
pub fn k_sha512_165(msg: &[u8; 165]) -> [u8; 64] {
    sha512_165(msg)
}

/// `sha512_192` as a kernel.
pub fn k_sha512_192(msg: &[u8; 192]) -> [u8; 64] {
    sha512_192(msg)
}

/// `ripemd160_32` as a kernel.
pub fn k_ripemd160_32(msg: &[u8; 32]) -> [u8; 20] {
    ripemd160_32(msg)
}

/// `hash160_33` as a kernel.
pub fn k_hash160_33(msg: &[u8; 33]) -> [u8; 20] {
    hash160_33(msg)
}

/// `hmac_sha512_k32_m37` as a kernel.
pub fn k_hmac_sha512(key: &[u8; 32], msg: &[u8; 37]) -> [u8; 64] {
    hmac_sha512_k32_m37(key, msg)
}

/// `CKDpub` over byte buffers: parent chain code, parent point
/// coordinates, and a child index.
pub fn k_ckdpub(chain_code: &[u8; 32], x: &[u8; 32], y: &[u8; 32], index: u32) -> ([u8; 32], [u8; 32]) {
    let parent = XPub {
        chain_code: *chain_code,
        k_par: point_from_bytes(x, y),
    };
    point_to_bytes(&ckdpub(&parent, index))
}
