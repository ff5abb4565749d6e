//! The cache and batch search kernel (C6): the production entry point
//! that fuses counter decomposition, cache lookup, `CKDpub`, hashing,
//! and range matching into one data-parallel pass over a counter range.

mod cache;
mod kernel;
mod range;

pub use cache::{CacheError, CacheKey, CacheTable};
pub use kernel::{
    batch_address_search, BatchSearchConfig, BatchSearchOutcome, ConfigError, MatchRecord,
    MAX_MATCHES, NON_HARDENED_COUNT,
};
pub use range::{Hash160, RangeError, RangeTable};
