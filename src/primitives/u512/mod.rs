//! 512-bit unsigned integer, the full-width product of two `U256`s.

mod core;

pub use self::core::U512;
