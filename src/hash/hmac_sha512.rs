//! HMAC-SHA-512 specialized to the one key/message shape CKDpub needs:
//! a 32-byte key (the parent chain code) and a 37-byte message (the
//! parent's compressed public key followed by a big-endian `u32` child
//! index).

use super::sha512::{sha512_165, sha512_192};

const BLOCK_LEN: usize = 128;
const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

fn padded_key(key: &[u8; 32], pad_byte: u8) -> [u8; BLOCK_LEN] {
    let mut block = [0u8; BLOCK_LEN];
    block[..32].copy_from_slice(key);

    for byte in block.iter_mut() {
        *byte ^= pad_byte;
    }

    block
}

/// HMAC-SHA-512 with a 32-byte key over a fixed 37-byte message.
pub fn hmac_sha512_k32_m37(key: &[u8; 32], msg: &[u8; 37]) -> [u8; 64] {
    let mut inner_msg = [0u8; 165];
    inner_msg[..128].copy_from_slice(&padded_key(key, IPAD));
    inner_msg[128..].copy_from_slice(msg);

    let inner_digest = sha512_165(&inner_msg);

    let mut outer_msg = [0u8; 192];
    outer_msg[..128].copy_from_slice(&padded_key(key, OPAD));
    outer_msg[128..].copy_from_slice(&inner_digest);

    sha512_192(&outer_msg)
}
