//! AES-128-CTR: the public entry point for the bit-sliced core.
//!
//! Builds four counter blocks at a time (nonce || BE32(counter)), encrypts
//! them in one bit-sliced pass, and XORs the resulting keystream into the
//! caller's buffer. Encryption and decryption are the same operation.

use super::{
    bitslice::{add_round_key, decode_blocks, encode_blocks, shift_rows, Planes},
    sbox::sub_bytes,
    schedule::KeySchedule,
};

const LAST_ROUND: usize = 10;

/// Expand a 16-byte AES-128 key into its round key schedule.
///
/// Pure and infallible: every 16-byte array is a valid key.
pub fn key_schedule(key: &[u8; 16]) -> KeySchedule {
    KeySchedule::new(key)
}

/// Encrypt (or decrypt — CTR is an involution) `input` into `out` under
/// `key`, with a 12-byte nonce and a big-endian 32-bit initial counter.
///
/// `out` and `input` must have equal length; this is a caller contract, not
/// a runtime-checked condition — a length mismatch here is a programming
/// error, not a recoverable failure.
pub fn ctr(out: &mut [u8], input: &[u8], key: &[u8; 16], nonce: &[u8; 12], counter: u32) {
    debug_assert_eq!(out.len(), input.len());

    let schedule = key_schedule(key);
    let mut c = counter;
    let mut offset = 0;
    while offset < input.len() {
        let keystream = four_block_keystream(&schedule, nonce, c);
        let take = (input.len() - offset).min(64);
        for i in 0..take {
            out[offset + i] = input[offset + i] ^ keystream[i];
        }
        offset += take;
        c = c.wrapping_add(4);
    }
}

/// Encrypt four counter blocks (`c`, `c+1`, `c+2`, `c+3`) in one bit-sliced
/// pass and return the 64 bytes of keystream they produce.
fn four_block_keystream(schedule: &KeySchedule, nonce: &[u8; 12], c: u32) -> [u8; 64] {
    let mut blocks = [0u8; 64];
    for (lane, block) in blocks.chunks_exact_mut(16).enumerate() {
        block[..12].copy_from_slice(nonce);
        crate::util::store32_be(&mut block[12..], c.wrapping_add(lane as u32));
    }

    let mut state = encode_blocks(&blocks);
    add_round_key(&mut state, schedule.round(0));
    for round in 1..LAST_ROUND {
        aes_round(&mut state, schedule.round(round));
    }
    aes_round_last(&mut state, schedule.round(LAST_ROUND));
    decode_blocks(&state)
}

fn aes_round(state: &mut Planes, round_key: &Planes) {
    sub_bytes(state);
    shift_rows(state);
    super::bitslice::mix_columns(state);
    add_round_key(state, round_key);
}

fn aes_round_last(state: &mut Planes, round_key: &Planes) {
    sub_bytes(state);
    shift_rows(state);
    add_round_key(state, round_key);
}
