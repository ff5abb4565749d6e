//! The batch search kernel: counter decomposition, cache lookup,
//! derivation, hashing, range matching, and atomic match emission.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use rayon::prelude::*;

use super::cache::CacheTable;
use super::range::{Hash160, RangeTable};
use crate::bip32::ckdpub;
use crate::hash::hash160_33;

/// Every non-hardened child index at one `(b, a)` level.
pub const NON_HARDENED_COUNT: u64 = 1 << 31;

/// Hard cap on the number of matches a single batch can record.
pub const MAX_MATCHES: usize = 1000;

/// Errors constructing a [`BatchSearchConfig`].
#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `max_depth == 0`.
    ZeroDepth,
}

/// The per-batch parameters of `batch_address_search`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BatchSearchConfig {
    pub start_counter: u64,
    pub max_depth: u32,
}

impl BatchSearchConfig {
    pub fn new(start_counter: u64, max_depth: u32) -> Result<Self, ConfigError> {
        if max_depth == 0 {
            return Err(ConfigError::ZeroDepth);
        }

        Ok(BatchSearchConfig { start_counter, max_depth })
    }
}

/// A single emitted match: the address and the path that produced it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MatchRecord {
    pub hash160: Hash160,
    pub b: u32,
    pub a: u32,
    pub index: u32,
}

/// The host-observable result of one `batch_address_search` call.
#[derive(Debug, Default)]
pub struct BatchSearchOutcome {
    pub matches: Vec<MatchRecord>,
    pub match_count: u32,
    pub cache_miss_error: u32,
}

/// Decomposes a global counter into `(b, a, index)` given `max_depth`.
///
/// ```text
/// index = c mod max_depth
/// t     = c div max_depth
/// a     = t mod NON_HARDENED_COUNT
/// b     = t div NON_HARDENED_COUNT
/// ```
fn counter_decompose(c: u64, max_depth: u32) -> (u32, u32, u32) {
    let max_depth = max_depth as u64;
    let index = (c % max_depth) as u32;
    let t = c / max_depth;
    let a = (t % NON_HARDENED_COUNT) as u32;
    let b = (t / NON_HARDENED_COUNT) as u32;

    (b, a, index)
}

/// Runs the batch search kernel over `count` consecutive counter
/// values starting at `config.start_counter`.
///
/// Each counter value is an independent work item: decompose into
/// `(b, a, index)`, look up the cached parent at `(b, a)` (incrementing
/// `cache_miss_error` and skipping on miss), derive the child public
/// key via [`ckdpub`], compress and HASH160 it, and test the digest
/// against every range. The first containing range reserves a match
/// slot via an atomic fetch-add on `match_count`; slots at or beyond
/// [`MAX_MATCHES`] are dropped, but `match_count` keeps counting so
/// overflow is detectable.
pub fn batch_address_search(
    cache: &CacheTable,
    ranges: &RangeTable,
    config: &BatchSearchConfig,
    count: u64,
) -> BatchSearchOutcome {
    let match_count = AtomicU32::new(0);
    let cache_miss_error = AtomicU32::new(0);
    let slots: Vec<Mutex<Option<MatchRecord>>> = (0..MAX_MATCHES).map(|_| Mutex::new(None)).collect();

    (0..count).into_par_iter().for_each(|offset| {
        let counter = config.start_counter.wrapping_add(offset);
        let (b, a, index) = counter_decompose(counter, config.max_depth);

        let parent = match cache.lookup(b, a) {
            Some(parent) => parent,
            None => {
                cache_miss_error.fetch_add(1, Ordering::Relaxed);
                return;
            }
        };

        let child = ckdpub(parent, index);
        let digest = hash160_33(&child.compress());

        if ranges.first_containing(&digest).is_some() {
            let slot = match_count.fetch_add(1, Ordering::Relaxed) as usize;

            if slot < MAX_MATCHES {
                let mut guard = slots[slot].lock().unwrap();
                *guard = Some(MatchRecord { hash160: digest, b, a, index });
            }
        }
    });

    let matches = slots
        .into_iter()
        .filter_map(|slot| slot.into_inner().unwrap())
        .collect();

    BatchSearchOutcome {
        matches,
        match_count: match_count.load(Ordering::Relaxed),
        cache_miss_error: cache_miss_error.load(Ordering::Relaxed),
    }
}
