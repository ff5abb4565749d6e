//! Fixed-width unsigned integer primitives.
//!
//! `U256`, `U320`, and `U512` are the big-integer layer the rest of the
//! crate is built on: `U256` for field elements and curve coordinates,
//! `U320`/`U512` as the widened intermediates of the Russian-peasant
//! field multiply and the auxiliary full-width multiply kernel.
//!
//! All three share a layout: most-significant-limb-first 64-bit limbs,
//! big-endian byte serialization.

pub mod u256;
pub mod u320;
pub mod u512;

pub use u256::{add256, mul256_full, mul256_u64, shift_left_256, shift_right_256, sub256, U256};
pub use u320::{add320_256, U320};
pub use u512::U512;
