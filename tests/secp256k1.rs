use hdscan::field::{fe_add, fe_mul, P};
use hdscan::primitives::U256;
use hdscan::secp256k1::{affine_add, g_times_scalar, jacobian_plus_affine, jacobian_to_affine, AffinePoint, JacobianPoint, G};

fn on_curve(p: &AffinePoint) -> bool {
    // y^2 = x^3 + 7 (mod P)
    let y2 = fe_mul(p.y, p.y);
    let x3 = fe_mul(fe_mul(p.x, p.x), p.x);
    let rhs = fe_add(x3, U256([0, 0, 0, 7]));
    y2 == rhs && p.x < P && p.y < P
}

#[test]
fn generator_is_on_curve() {
    assert!(on_curve(&G));
}

#[test]
fn g_times_one_is_g() {
    let result = g_times_scalar(U256::ONE);
    assert_eq!(result, G);
}

#[test]
fn g_times_two_matches_affine_doubling() {
    let expected = hdscan::secp256k1::affine_double(&G);
    let result = g_times_scalar(U256([0, 0, 0, 2]));
    assert_eq!(result, expected);
    assert!(on_curve(&result));

    // Literal vector: the x-coordinate of 2G.
    let expected_x = U256::from_be_bytes([
        0xC6, 0x04, 0x7F, 0x94, 0x41, 0xED, 0x7D, 0x6D, 0x30, 0x45, 0x40, 0x6E, 0x95, 0xC0, 0x7C,
        0xD8, 0x5C, 0x77, 0x8E, 0x4B, 0x8C, 0xEF, 0x3C, 0xA7, 0xAB, 0xAC, 0x09, 0xB9, 0x5C, 0x70,
        0x9E, 0xE5,
    ]);
    assert_eq!(result.x, expected_x);
}

#[test]
fn g_times_scalar_results_stay_on_curve() {
    for k in [3u64, 5, 17, 255, 0xFFFF_FFFF] {
        let result = g_times_scalar(U256([0, 0, 0, k]));
        assert!(on_curve(&result), "k·G off curve for k={k}");
    }
}

#[test]
fn jacobian_to_affine_with_z_one_is_identity() {
    let j = JacobianPoint::from_affine(&G);
    assert_eq!(jacobian_to_affine(&j), G);
}

#[test]
fn jacobian_plus_affine_matches_affine_add() {
    let two_g = g_times_scalar(U256([0, 0, 0, 2]));
    let three_g_affine = affine_add(&two_g, &G);

    let j = JacobianPoint::from_affine(&two_g);
    let three_g_jacobian = jacobian_to_affine(&jacobian_plus_affine(&j, &G));

    assert_eq!(three_g_jacobian, three_g_affine);
    assert!(on_curve(&three_g_affine));
}

#[test]
fn compressed_point_round_trips_x_and_parity() {
    let compressed = G.compress();
    assert!(compressed[0] == 0x02 || compressed[0] == 0x03);
    assert_eq!(compressed[0] & 1, (G.y.0[3] & 1) as u8);
    assert_eq!(&compressed[1..], &G.x.to_be_bytes());
}
