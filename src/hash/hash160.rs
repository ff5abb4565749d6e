//! HASH160: `RIPEMD-160(SHA-256(msg))`, the Bitcoin address digest.

use super::ripemd160::ripemd160_32;
use super::sha256::sha256_33;

/// HASH160 of a compressed secp256k1 point (33 bytes).
pub fn hash160_33(msg: &[u8; 33]) -> [u8; 20] {
    ripemd160_32(&sha256_33(msg))
}
