//! BIP32 non-hardened child public key derivation (`CKDpub`).

mod ckdpub;

pub use ckdpub::ckdpub;

use crate::secp256k1::AffinePoint;

/// An extended public key: a chain code paired with a curve point.
///
/// `I_R`, the child chain code produced by a derivation step, is
/// deliberately not threaded back into a new `XPub` here — the
/// search-kernel variant of `CKDpub` only ever derives one level below
/// a cached parent, so the child chain code is never needed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct XPub {
    pub chain_code: [u8; 32],
    pub k_par: AffinePoint,
}
