use hdscan::primitives::{add256, add320_256, mul256_full, mul256_u64, shift_left_256, shift_right_256, sub256, U256, U320};

#[test]
fn u256_round_trips_through_be_bytes() {
    let bytes: [u8; 32] = core::array::from_fn(|i| i as u8);
    let value = U256::from_be_bytes(bytes);
    assert_eq!(value.to_be_bytes(), bytes);
}

#[test]
fn u256_zero_one_max() {
    assert!(U256::ZERO.is_zero());
    assert!(!U256::ONE.is_zero());
    assert_eq!(U256::ONE.to_be_bytes()[31], 1);
    assert_eq!(U256::MAX.to_be_bytes(), [0xFFu8; 32]);
}

#[test]
fn u256_bit_reads_msb_first() {
    let one = U256::ONE;
    assert!(one.bit(0));
    for i in 1..256 {
        assert!(!one.bit(i));
    }

    let top_bit_set = U256([0x8000_0000_0000_0000, 0, 0, 0]);
    assert!(top_bit_set.bit(255));
    assert!(!top_bit_set.bit(254));
}

#[test]
fn add256_carries_out_on_overflow() {
    let (sum, carry) = add256(U256::MAX, U256::ONE);
    assert_eq!(sum, U256::ZERO);
    assert!(carry);
}

#[test]
fn add256_sub256_are_inverses() {
    let a = U256([1, 2, 3, 4]);
    let b = U256([0, 0, 5, 6]);
    let (sum, carry) = add256(a, b);
    assert!(!carry);

    let (back, borrow) = sub256(sum, b);
    assert!(!borrow);
    assert_eq!(back, a);
}

#[test]
fn sub256_borrows_below_zero() {
    let (diff, borrow) = sub256(U256::ZERO, U256::ONE);
    assert_eq!(diff, U256::MAX);
    assert!(borrow);
}

#[test]
fn shift_left_then_right_recovers_original_without_top_bit() {
    let a = U256([0, 0, 0, 0x1234_5678]);
    let shifted = shift_left_256(a);
    assert_eq!(shifted, U256([0, 0, 0, 0x2468_ACF0]));
    assert_eq!(shift_right_256(shifted), a);
}

#[test]
fn shift_left_propagates_carry_across_limbs() {
    let a = U256([0, 0, 0, 0x8000_0000_0000_0000]);
    let shifted = shift_left_256(a);
    assert_eq!(shifted, U256([0, 0, 1, 0]));
}

#[test]
fn mul256_full_small_values() {
    let a = U256([0, 0, 0, 7]);
    let b = U256([0, 0, 0, 6]);
    let product = mul256_full(a, b);
    assert_eq!(product.0[7], 42);
    assert!(product.0[..7].iter().all(|&limb| limb == 0));
}

#[test]
fn mul256_full_matches_max_times_max() {
    let product = mul256_full(U256::MAX, U256::MAX);
    // (2^256 - 1)^2 = 2^512 - 2^257 + 1
    assert_eq!(product.0[7], 1);
    assert_eq!(product.0[3], 0xFFFF_FFFF_FFFF_FFFE);
    assert!(product.0[..3].iter().all(|&limb| limb == u64::MAX));
    assert!(product.0[4..7].iter().all(|&limb| limb == 0));
}

#[test]
fn mul256_u64_row_multiply() {
    let a = U256([0, 0, 0, u64::MAX]);
    let product = mul256_u64(a, 2);
    assert_eq!(product, U320([0, 0, 0, 1, 0xFFFF_FFFF_FFFF_FFFE]));
}

#[test]
fn add320_256_widens_correctly() {
    let a = U320([0, 0, 0, 0, u64::MAX]);
    let b = U256([0, 0, 0, 1]);
    let sum = add320_256(a, b);
    assert_eq!(sum, U320([0, 0, 0, 1, 0]));
}
