//! 320-bit unsigned integer primitive
//!
//! `U320` holds the widened result of a `U256 × u64` row multiply
//! (`mul256_u64`) before it is folded back into the field via the
//! Russian-peasant reduction in [`crate::field`]. Like `U256` it is
//! stored as most-significant-limb-first 64-bit limbs, with big-endian
//! byte serialization.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Fixed-size 320-bit unsigned integer stored as five big-endian,
/// most-significant-limb-first 64-bit limbs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct U320(pub [u64; 5]);

impl U320 {
    /// The value zero.
    pub const ZERO: Self = Self([0; 5]);

    /// Builds a `U320` from 40 big-endian bytes.
    pub fn from_be_bytes(bytes: [u8; 40]) -> Self {
        let mut limbs = [0u64; 5];

        for (limb, chunk) in limbs.iter_mut().zip(bytes.chunks_exact(8)) {
            *limb = u64::from_be_bytes(chunk.try_into().unwrap());
        }

        U320(limbs)
    }

    /// Serializes the value as 40 big-endian bytes.
    pub fn to_be_bytes(self) -> [u8; 40] {
        let mut out = [0u8; 40];

        for (chunk, limb) in out.chunks_exact_mut(8).zip(self.0.iter()) {
            chunk.copy_from_slice(&limb.to_be_bytes());
        }

        out
    }
}

impl Display for U320 {
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
