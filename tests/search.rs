use hdscan::bip32::XPub;
use hdscan::search::{
    batch_address_search, BatchSearchConfig, CacheError, CacheKey, CacheTable, ConfigError, RangeError,
    RangeTable,
};
use hdscan::secp256k1::G;

fn from_hex20(s: &str) -> [u8; 20] {
    let mut out = [0u8; 20];
    for i in 0..20 {
        out[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
    }
    out
}

fn one_entry_cache() -> CacheTable {
    let keys = [CacheKey { b: 0, a: 0 }];
    let values = [XPub {
        chain_code: [0x01; 32],
        k_par: G,
    }];
    CacheTable::new(&keys, &values).unwrap()
}

#[test]
fn cache_table_rejects_empty_and_mismatched_lengths() {
    assert_eq!(CacheTable::new(&[], &[]).unwrap_err(), CacheError::Empty);

    let keys = [CacheKey { b: 0, a: 0 }];
    let values: [XPub; 0] = [];
    assert_eq!(CacheTable::new(&keys, &values).unwrap_err(), CacheError::LengthMismatch);
}

#[test]
fn range_table_rejects_empty_and_inverted_ranges() {
    assert_eq!(RangeTable::new(&[]).unwrap_err(), RangeError::Empty);

    let low = [0xFFu8; 20];
    let high = [0x00u8; 20];
    match RangeTable::new(&[(low, high)]).unwrap_err() {
        RangeError::Inverted { index } => assert_eq!(index, 0),
        other => panic!("expected Inverted, got {other:?}"),
    }
}

#[test]
fn config_rejects_zero_depth() {
    assert_eq!(BatchSearchConfig::new(0, 0).unwrap_err(), ConfigError::ZeroDepth);
    assert!(BatchSearchConfig::new(0, 1).is_ok());
}

#[test]
fn batch_search_finds_the_single_matching_address() {
    let cache = one_entry_cache();

    // HASH160(CKDpub(cache[0], index=5)), the end-to-end single-range
    // scenario.
    let target = from_hex20("652d9e435ea36781f9bd8fab2edb97b5a2dbf0e0");
    let ranges = RangeTable::new(&[(target, target)]).unwrap();

    let config = BatchSearchConfig::new(5, 10).unwrap();
    let outcome = batch_address_search(&cache, &ranges, &config, 10);

    assert_eq!(outcome.match_count, 1);
    assert_eq!(outcome.cache_miss_error, 0);
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].index, 5);
    assert_eq!(outcome.matches[0].b, 0);
    assert_eq!(outcome.matches[0].a, 0);
    assert_eq!(outcome.matches[0].hash160, target);
}

#[test]
fn counter_decompose_crosses_the_b_boundary_at_2_pow_31() {
    // Boundary vector from the spec: with max_depth = 1 and
    // NON_HARDENED_COUNT = 2^31, counter c = 2^31 decomposes to
    // (b=1, a=0, index=0). Exercised here through the public
    // `batch_address_search` entry point rather than the private
    // `counter_decompose` helper: a cache entry at (b=1, a=0) and a
    // start counter of exactly 2^31 only produces a match if the
    // decomposition actually carries into `b`.
    let keys = [CacheKey { b: 1, a: 0 }];
    let values = [XPub {
        chain_code: [0x01; 32],
        k_par: G,
    }];
    let cache = CacheTable::new(&keys, &values).unwrap();

    // A range spanning every possible HASH160, so the only way this
    // test can fail to observe a match is a wrong (b, a, index).
    let ranges = RangeTable::new(&[([0x00u8; 20], [0xFFu8; 20])]).unwrap();

    let config = BatchSearchConfig::new(1u64 << 31, 1).unwrap();
    let outcome = batch_address_search(&cache, &ranges, &config, 1);

    assert_eq!(outcome.cache_miss_error, 0);
    assert_eq!(outcome.match_count, 1);
    assert_eq!(outcome.matches.len(), 1);
    assert_eq!(outcome.matches[0].b, 1);
    assert_eq!(outcome.matches[0].a, 0);
    assert_eq!(outcome.matches[0].index, 0);
}

#[test]
fn batch_search_counts_cache_misses_without_matching() {
    let cache = one_entry_cache();
    // (b, a) for counter values 0..10 with max_depth=10 is always (0, 0)
    // per `counter_decompose`, so to force a miss we look up a path that
    // is never produced: use a range that can never match and a config
    // whose counters decompose outside the cached (0, 0) prefix.
    let low = [0x00u8; 20];
    let high = [0x00u8; 20];
    let ranges = RangeTable::new(&[(low, high)]).unwrap();

    // max_depth = 1 makes every counter increment `a`, so only counter
    // 0 maps to the cached (b=0, a=0); the rest miss.
    let config = BatchSearchConfig::new(0, 1).unwrap();
    let outcome = batch_address_search(&cache, &ranges, &config, 5);

    assert_eq!(outcome.cache_miss_error, 4);
}
