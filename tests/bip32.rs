use hdscan::bip32::{ckdpub, XPub};
use hdscan::primitives::U256;
use hdscan::secp256k1::G;

fn from_hex32(s: &str) -> [u8; 32] {
    let mut out = [0u8; 32];
    for i in 0..32 {
        out[i] = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).unwrap();
    }
    out
}

#[test]
fn ckdpub_is_deterministic() {
    let parent = XPub {
        chain_code: [0x01; 32],
        k_par: G,
    };

    let a = ckdpub(&parent, 0);
    let b = ckdpub(&parent, 0);
    assert_eq!(a, b);

    assert_eq!(
        a.x,
        U256::from_be_bytes(from_hex32(
            "0cf7ff230741550763d27c5fbf230633292907e6dc1e37760ceb77963f70859b"
        ))
    );
    assert_eq!(
        a.y,
        U256::from_be_bytes(from_hex32(
            "f9776da463977a3c282fc072e17398dd2602f596b5fdd54f7f39fd42325d27d2"
        ))
    );
}

#[test]
fn ckdpub_varies_with_index() {
    let parent = XPub {
        chain_code: [0x01; 32],
        k_par: G,
    };

    let child0 = ckdpub(&parent, 0);
    let child1 = ckdpub(&parent, 1);
    assert_ne!(child0, child1);
}

#[test]
fn ckdpub_output_is_on_curve() {
    let parent = XPub {
        chain_code: [0xAB; 32],
        k_par: G,
    };

    let child = ckdpub(&parent, 42);

    let y2 = hdscan::field::fe_mul(child.y, child.y);
    let x3 = hdscan::field::fe_mul(hdscan::field::fe_mul(child.x, child.x), child.x);
    let rhs = hdscan::field::fe_add(x3, U256([0, 0, 0, 7]));
    assert_eq!(y2, rhs);
}
