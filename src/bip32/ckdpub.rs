//! The single `CKDpub` derivation step.

use super::XPub;
use crate::hash::hmac_sha512_k32_m37;
use crate::primitives::U256;
use crate::secp256k1::{g_times_scalar, jacobian_plus_affine, jacobian_to_affine, AffinePoint, JacobianPoint};

/// Derives the non-hardened child public key at `index` below `parent`.
///
/// 1. Compress `parent.k_par` to 33 bytes.
/// 2. Form the 37-byte HMAC message `compressed || big_endian_u32(index)`.
/// 3. `I = hmac_sha512_k32_m37(parent.chain_code, M)`; `I_L = I[0..32]`
///    read big-endian as a `U256`.
/// 4. `I_L · G` in affine coordinates.
/// 5. `k_child = (I_L · G) + k_par`, via `jacobian_plus_affine` followed
///    by `jacobian_to_affine`.
///
/// `index` must be less than `2^31` (non-hardened); this is the only
/// derivation variant this crate implements. `I_R`, the would-be child
/// chain code, is discarded — the search kernel never derives more than
/// one level below a cached parent.
///
/// Undefined behavior, matching the reference kernel this implements,
/// if `I_L ≥ n` (the curve order) or `I_L·G + k_par` is the point at
/// infinity; both occur with probability `~2⁻¹²⁸` and are not checked.
pub fn ckdpub(parent: &XPub, index: u32) -> AffinePoint {
    let compressed = parent.k_par.compress();

    let mut message = [0u8; 37];
    message[..33].copy_from_slice(&compressed);
    message[33..].copy_from_slice(&index.to_be_bytes());

    let i = hmac_sha512_k32_m37(&parent.chain_code, &message);
    let i_l = U256::from_be_bytes(i[..32].try_into().unwrap());

    let delta = g_times_scalar(i_l);
    let child = jacobian_plus_affine(&JacobianPoint::from_affine(&delta), &parent.k_par);

    jacobian_to_affine(&child)
}
