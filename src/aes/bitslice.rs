//! The eight-word bit-plane representation shared by every AES round.
//!
//! A [`Planes`] value is eight `u64` words. Word `p` (`p` in `0..8`) is bit
//! plane `p` of four AES blocks at once: bit `16*lane + byte` of word `p`
//! holds bit `p` of byte `byte` (`0..16`) of the `lane`-th block (`0..4`).
//! [`encode_blocks`] and [`decode_blocks`] are the two directions of this
//! transform; every other function here operates purely on planes and is
//! oblivious to which lane or byte a given bit belongs to.

/// Eight 64-bit bit-plane words: one AES round's working state, four blocks
/// wide.
pub type Planes = [u64; 8];

/// Pack four 16-byte blocks (laid out back to back in `blocks`) into their
/// bit-plane representation.
///
/// Defined directly as a bit-indexed map rather than via a `transpose128`
/// bit-permutation plus butterfly passes, so that it is transparently its
/// own inverse (see [`decode_blocks`]); see `bitslice_round_trip` for the
/// property that checks this.
pub fn encode_blocks(blocks: &[u8; 64]) -> Planes {
    let mut planes = [0u64; 8];
    for (lane, block) in blocks.chunks_exact(16).enumerate() {
        for (byte_idx, &byte) in block.iter().enumerate() {
            let bit_pos = 16 * lane + byte_idx;
            for (plane, word) in planes.iter_mut().enumerate() {
                let bit = (byte >> plane) & 1;
                *word |= u64::from(bit) << bit_pos;
            }
        }
    }
    planes
}

/// Unpack four blocks' worth of bit-plane state back into 64 bytes.
///
/// Exact inverse of [`encode_blocks`]: `decode_blocks(encode_blocks(b)) == b`
/// for every `b`, by construction.
pub fn decode_blocks(planes: &Planes) -> [u8; 64] {
    let mut blocks = [0u8; 64];
    for (lane, block) in blocks.chunks_exact_mut(16).enumerate() {
        for (byte_idx, out) in block.iter_mut().enumerate() {
            let bit_pos = 16 * lane + byte_idx;
            let mut byte = 0u8;
            for (plane, &word) in planes.iter().enumerate() {
                let bit = ((word >> bit_pos) & 1) as u8;
                byte |= bit << plane;
            }
            *out = byte;
        }
    }
    blocks
}

/// Broadcast a single 16-byte block into the 4-lane layout `encode_blocks`
/// expects, replicating it across all four lanes.
///
/// Used for the key schedule and for the nonce half of a counter block: both
/// need the same bytes processed identically in each of the four parallel
/// lanes.
pub fn broadcast(block: &[u8; 16]) -> [u8; 64] {
    let mut out = [0u8; 64];
    for chunk in out.chunks_exact_mut(16) {
        chunk.copy_from_slice(block);
    }
    out
}

/// The ShiftRows transformation, applied independently to each bit plane.
///
/// Within a plane, each lane's 16 bits are four nibbles (one per AES column);
/// row `r` of the 4x4 byte matrix is rotated left by `r` positions. The masks
/// below isolate each of the four rows within every lane simultaneously.
pub fn shift_rows(planes: &mut Planes) {
    for word in planes.iter_mut() {
        let curr = *word;
        *word = (curr & 0x1111_1111_1111_1111)
            | ((curr & 0x2220_2220_2220_2220) >> 4)
            | ((curr & 0x0002_0002_0002_0002) << 12)
            | ((curr & 0x4400_4400_4400_4400) >> 8)
            | ((curr & 0x0044_0044_0044_0044) << 8)
            | ((curr & 0x8000_8000_8000_8000) >> 12)
            | ((curr & 0x0888_0888_0888_0888) << 4);
    }
}

/// The MixColumns transformation.
///
/// Per plane, treats each lane's 16 bits as four nibble-columns and XORs in
/// one-bit rotated copies to realize the GF(2^8) column mix in bit-sliced
/// form: `col01` is the plane XORed with itself rotated by one row within
/// each column, `col0123` folds that across all four rows, and the previous
/// plane's `col01` (`rot_prev`) carries the cross-plane term that the
/// Rijndael polynomial multiplication contributes. Planes 0, 1, 3 and 4 pick
/// up the final carry because those are exactly the planes whose
/// coefficients (`x+1`, `x^3+x^2+x`, and friends) are odd across the
/// mix-column matrix.
#[docext::docext]
pub fn mix_columns(planes: &mut Planes) {
    let mut rot_prev = 0u64;
    for word in planes.iter_mut() {
        let col = *word;
        let col01 = col ^ (((col & 0xeeee_eeee_eeee_eeee) >> 1) | ((col & 0x1111_1111_1111_1111) << 3));
        let col0123 = col01 ^ (((col01 & 0xcccc_cccc_cccc_cccc) >> 2) | ((col01 & 0x3333_3333_3333_3333) << 2));
        *word ^= col0123 ^ rot_prev;
        rot_prev = col01;
    }
    planes[0] ^= rot_prev;
    planes[1] ^= rot_prev;
    planes[3] ^= rot_prev;
    planes[4] ^= rot_prev;
}

/// XOR the eight state words with the eight round-key words.
pub fn add_round_key(planes: &mut Planes, round_key: &Planes) {
    for (s, k) in planes.iter_mut().zip(round_key.iter()) {
        *s ^= k;
    }
}
