//! 256-bit unsigned integer primitive
//!
//! This module defines the fixed-size 256-bit unsigned integer type
//! (`U256`) that the rest of the crate builds on: field elements,
//! curve coordinates, HMAC intermediates, and HASH160 inputs are all
//! ultimately `U256` values.
//!
//! Internally the value is stored as four 64-bit limbs with
//! **limb 0 holding the most significant 64 bits** — the same
//! most-significant-limb-first layout used throughout the secp256k1
//! reference material this crate implements. Byte encoding is
//! correspondingly big-endian: byte 0 is the most significant byte of
//! limb 0.
//!
//! This type intentionally exposes only the arithmetic required by the
//! rest of the crate, favoring clarity and correctness over
//! completeness.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Fixed-size 256-bit unsigned integer stored as four big-endian,
/// most-significant-limb-first 64-bit limbs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U256(pub [u64; 4]);

impl U256 {
    /// The value zero.
    pub const ZERO: Self = Self([0, 0, 0, 0]);

    /// The value one.
    pub const ONE: Self = Self([0, 0, 0, 1]);

    /// The maximum representable value (2²⁵⁶ − 1).
    pub const MAX: Self = Self([u64::MAX; 4]);

    /// Builds a `U256` from 32 big-endian bytes (byte 0 is the most
    /// significant byte of limb 0).
    pub fn from_be_bytes(bytes: [u8; 32]) -> Self {
        let mut limbs = [0u64; 4];

        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            *limb = u64::from_be_bytes(chunk.try_into().unwrap());
        }

        U256(limbs)
    }

    /// Serializes the value as 32 big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 32] {
        let mut out = [0u8; 32];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }

    /// Returns the bit at `index` (0 = least significant bit of limb 3).
    ///
    /// Used by the most-significant-bit-first algorithms in
    /// [`crate::field`] and [`crate::secp256k1`] to walk the scalar
    /// from bit 255 down to bit 0.
    pub fn bit(&self, index: u32) -> bool {
        let limb = 3 - (index / 64) as usize;
        let shift = index % 64;

        ((self.0[limb] >> shift) & 1) == 1
    }

    /// Returns `true` if every limb is zero.
    pub fn is_zero(&self) -> bool {
        self.0 == [0, 0, 0, 0]
    }
}

impl Display for U256 {
    /// Formats the value as a colon-separated hexadecimal string, one
    /// pair of hex digits per byte.
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        for (i, byte) in self.to_be_bytes().iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{byte:02X}")?;
        }

        Ok(())
    }
}
