//! 512-bit unsigned integer primitive
//!
//! `U512` holds the full-width result of a `U256 × U256` schoolbook
//! multiply (`mul256_full`). It is stored as most-significant-limb-first
//! 64-bit limbs, with big-endian byte serialization, matching `U256`
//! and `U320`.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Fixed-size 512-bit unsigned integer stored as eight big-endian,
/// most-significant-limb-first 64-bit limbs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U512(pub [u64; 8]);

impl U512 {
    /// The value zero.
    pub const ZERO: Self = Self([0; 8]);

    /// Builds a `U512` from 64 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 64]) -> Self {
        let mut limbs = [0u64; 8];

        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            *limb = u64::from_be_bytes(chunk.try_into().unwrap());
        }

        U512(limbs)
    }

    /// Serializes the value as 64 big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 64] {
        let mut out = [0u8; 64];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }
}

impl Display for U512 {
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
