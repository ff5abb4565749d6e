//! 256-bit unsigned integer and its arithmetic.

mod core;
mod mul;
mod ops;

pub use self::core::U256;
pub use mul::{mul256_full, mul256_u64};
pub use ops::{add256, shift_left_256, shift_right_256, sub256};
