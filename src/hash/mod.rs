//! Fixed-size cryptographic hash primitives.
//!
//! Every function in this module operates on a single, statically-sized
//! input rather than a general byte stream: the only messages this
//! crate ever hashes are a compressed curve point, a SHA-256 digest, and
//! the HMAC-SHA-512 inner/outer messages, so there is no buffering or
//! multi-block state machine anywhere below.

mod hash160;
mod hmac_sha512;
mod ripemd160;
mod sha256;
mod sha512;

pub use hash160::hash160_33;
pub use hmac_sha512::hmac_sha512_k32_m37;
pub use ripemd160::ripemd160_32;
pub use sha256::sha256_33;
pub use sha512::{sha512_165, sha512_192};
