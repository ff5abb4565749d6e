//! SHA-512 over the two fixed message sizes HMAC-SHA-512 needs.
//!
//! Both `sha512_165` (the HMAC inner hash) and `sha512_192` (the HMAC
//! outer hash) process exactly two 1024-bit blocks — no multi-block
//! loop is needed since the inputs are fixed-size by construction.

const K: [u64; 80] = [
    0x428a2f98d728ae22, 0x7137449123ef65cd, 0xb5c0fbcfec4d3b2f, 0xe9b5dba58189dbbc,
    0x3956c25bf348b538, 0x59f111f1b605d019, 0x923f82a4af194f9b, 0xab1c5ed5da6d8118,
    0xd807aa98a3030242, 0x12835b0145706fbe, 0x243185be4ee4b28c, 0x550c7dc3d5ffb4e2,
    0x72be5d74f27b896f, 0x80deb1fe3b1696b1, 0x9bdc06a725c71235, 0xc19bf174cf692694,
    0xe49b69c19ef14ad2, 0xefbe4786384f25e3, 0x0fc19dc68b8cd5b5, 0x240ca1cc77ac9c65,
    0x2de92c6f592b0275, 0x4a7484aa6ea6e483, 0x5cb0a9dcbd41fbd4, 0x76f988da831153b5,
    0x983e5152ee66dfab, 0xa831c66d2db43210, 0xb00327c898fb213f, 0xbf597fc7beef0ee4,
    0xc6e00bf33da88fc2, 0xd5a79147930aa725, 0x06ca6351e003826f, 0x142929670a0e6e70,
    0x27b70a8546d22ffc, 0x2e1b21385c26c926, 0x4d2c6dfc5ac42aed, 0x53380d139d95b3df,
    0x650a73548baf63de, 0x766a0abb3c77b2a8, 0x81c2c92e47edaee6, 0x92722c851482353b,
    0xa2bfe8a14cf10364, 0xa81a664bbc423001, 0xc24b8b70d0f89791, 0xc76c51a30654be30,
    0xd192e819d6ef5218, 0xd69906245565a910, 0xf40e35855771202a, 0x106aa07032bbd1b8,
    0x19a4c116b8d2d0c8, 0x1e376c085141ab53, 0x2748774cdf8eeb99, 0x34b0bcb5e19b48a8,
    0x391c0cb3c5c95a63, 0x4ed8aa4ae3418acb, 0x5b9cca4f7763e373, 0x682e6ff3d6b2b8a3,
    0x748f82ee5defb2fc, 0x78a5636f43172f60, 0x84c87814a1f0ab72, 0x8cc702081a6439ec,
    0x90befffa23631e28, 0xa4506cebde82bde9, 0xbef9a3f7b2c67915, 0xc67178f2e372532b,
    0xca273eceea26619c, 0xd186b8c721c0c207, 0xeada7dd6cde0eb1e, 0xf57d4f7fee6ed178,
    0x06f067aa72176fba, 0x0a637dc5a2c898a6, 0x113f9804bef90dae, 0x1b710b35131c471b,
    0x28db77f523047d84, 0x32caab7b40c72493, 0x3c9ebe0a15c9bebc, 0x431d67c49c100d4c,
    0x4cc5d4becb3e42b6, 0x597f299cfc657e2a, 0x5fcb6fab3ad6faec, 0x6c44198c4a475817,
];

const H_INIT: [u64; 8] = [
    0x6a09e667f3bcc908, 0xbb67ae8584caa73b, 0x3c6ef372fe94f82b, 0xa54ff53a5f1d36f1,
    0x510e527fade682d1, 0x9b05688c2b3e6c1f, 0x1f83d9abfb41bd6b, 0x5be0cd19137e2179,
];

#[inline(always)]
fn ch(e: u64, f: u64, g: u64) -> u64 {
    (e & f) ^ ((!e) & g)
}

#[inline(always)]
fn maj(a: u64, b: u64, c: u64) -> u64 {
    (a & b) ^ (a & c) ^ (b & c)
}

#[inline(always)]
fn big_sigma0(x: u64) -> u64 {
    x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
}

#[inline(always)]
fn big_sigma1(x: u64) -> u64 {
    x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
}

#[inline(always)]
fn small_sigma0(x: u64) -> u64 {
    x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
}

#[inline(always)]
fn small_sigma1(x: u64) -> u64 {
    x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
}

fn compress(block: &[u8; 128], state: &mut [u64; 8]) {
    let mut w = [0u64; 80];

    for (slot, chunk) in w.iter_mut().zip(block.chunks_exact(8)).take(16) {
        *slot = u64::from_be_bytes(chunk.try_into().unwrap());
    }

    for t in 16..80 {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for t in 0..80 {
        let t1 = h
            .wrapping_add(big_sigma1(e))
            .wrapping_add(ch(e, f, g))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(a).wrapping_add(maj(a, b, c));

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(t1);
        d = c;
        c = b;
        b = a;
        a = t1.wrapping_add(t2);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
    state[5] = state[5].wrapping_add(f);
    state[6] = state[6].wrapping_add(g);
    state[7] = state[7].wrapping_add(h);
}

fn finalize(state: [u64; 8]) -> [u8; 64] {
    let mut out = [0u8; 64];

    for (chunk, word) in out.chunks_exact_mut(8).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }

    out
}

/// SHA-512 of a fixed 165-byte input (the HMAC-SHA-512 inner message:
/// one 128-byte padded key block followed by the 37-byte CKDpub HMAC
/// message).
///
/// Padding: `msg || 0x80 || 0x00 × 88 || big-endian 128-bit length
/// (1320 bits = 0x0528)`, filling exactly two 128-byte blocks.
pub fn sha512_165(msg: &[u8; 165]) -> [u8; 64] {
    let mut state = H_INIT;
    let mut blocks = [0u8; 256];

    blocks[..165].copy_from_slice(msg);
    blocks[165] = 0x80;

    let bit_len: u128 = 165 * 8;
    blocks[240..256].copy_from_slice(&bit_len.to_be_bytes());

    let first: &[u8; 128] = blocks[..128].try_into().unwrap();
    let second: &[u8; 128] = blocks[128..].try_into().unwrap();

    compress(first, &mut state);
    compress(second, &mut state);

    finalize(state)
}

/// SHA-512 of a fixed 192-byte input (the HMAC-SHA-512 outer message:
/// one 128-byte padded key block followed by the 64-byte inner digest).
///
/// Padding: `msg || 0x80 || 0x00 × 63 || big-endian 128-bit length
/// (1536 bits = 0x0600)`, filling exactly two 128-byte blocks.
pub fn sha512_192(msg: &[u8; 192]) -> [u8; 64] {
    let mut state = H_INIT;
    let mut blocks = [0u8; 256];

    blocks[..192].copy_from_slice(msg);
    blocks[192] = 0x80;

    let bit_len: u128 = 192 * 8;
    blocks[240..256].copy_from_slice(&bit_len.to_be_bytes());

    let first: &[u8; 128] = blocks[..128].try_into().unwrap();
    let second: &[u8; 128] = blocks[128..].try_into().unwrap();

    compress(first, &mut state);
    compress(second, &mut state);

    finalize(state)
}
