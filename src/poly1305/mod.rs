//! Poly1305 one-time message authentication (RFC 8439 §2.5).
//!
//! The accumulator and clamped `r` are tracked in the three-limb radix
//! described in [`field`]; every block absorbed does one
//! [`field::add_and_multiply`] step, and [`finish`] runs the final carry
//! reduction before adding the unclamped `s` half of the key mod 2^128.

pub mod field;

use field::Limbs;
use zeroize::ZeroizeOnDrop;

/// Incremental Poly1305 state: the running accumulator, the clamped `r`,
/// and the key's `s` half, all zeroized on drop.
///
/// Construct with [`Poly1305::new`], feed message bytes through
/// [`Poly1305::update`], and consume with [`Poly1305::finish`]. For a
/// one-shot message, prefer [`onetimeauth`].
///
/// Conceptually a `Fresh -> Initialized -> Updating* -> Finalized` state
/// machine; `new` performs the first transition atomically (there is no
/// separate uninitialized construction step) and `finish` takes `self` by
/// value, so the `Updating -> Finalized` edge is enforced by ownership
/// rather than a runtime tag — there is no way to hold a `Poly1305` past
/// `finish` to call `update*` or `finish` on it again.
#[derive(ZeroizeOnDrop)]
pub struct Poly1305 {
    r: Limbs,
    acc: Limbs,
    s: [u8; 16],
}

impl Poly1305 {
    /// Start a new authenticator under a 32-byte one-time key (`r` || `s`
    /// per RFC 8439 §2.5.1). The key must never be reused across messages.
    pub fn new(key: &[u8; 32]) -> Self {
        let r_bytes: [u8; 16] = key[..16].try_into().unwrap();
        let mut s = [0u8; 16];
        s.copy_from_slice(&key[16..]);
        Self {
            r: field::clamp_and_split(&r_bytes),
            acc: [0, 0, 0],
            s,
        }
    }

    /// Absorb a full 16-byte block.
    pub fn update_block(&mut self, block: &[u8; 16]) {
        // A full block's implicit leading 1 bit lands at 2^128, past the
        // 128 bits the block itself occupies, so it's ORed directly into
        // the top limb rather than appended as a 17th byte (there is no
        // 17th byte) — `poly1305_update`'s `tmp[2] = 0x10000000000 | b2`.
        let mut limbs = field::split_block(block);
        limbs[2] |= 1u64 << 40;
        field::add_and_multiply(&mut self.acc, &limbs, &self.r);
    }

    /// Absorb the final, possibly short (`< 16` bytes) block of a message.
    /// `block` must have length `len` and `len` must be `< 16`.
    ///
    /// `len == 0` is a no-op on the accumulator: a message whose length is
    /// an exact multiple of 16 has no trailing partial block to pad and
    /// absorb, so this exists only so callers don't need to special case the
    /// zero-remainder split themselves.
    pub fn update_last(&mut self, block: &[u8], len: usize) {
        debug_assert!(len < 16);
        debug_assert_eq!(block.len(), len);
        if len == 0 {
            return;
        }
        let mut padded = [0u8; 16];
        padded[..len].copy_from_slice(block);
        padded[len] = 1;
        let limbs = field::split_block(&padded);
        field::add_and_multiply(&mut self.acc, &limbs, &self.r);
    }

    /// Absorb an arbitrary-length message, splitting it into 16-byte blocks
    /// with [`Poly1305::update_block`] and a final short block with
    /// [`Poly1305::update_last`] as needed.
    pub fn update(&mut self, message: &[u8]) {
        let mut chunks = message.chunks_exact(16);
        for chunk in &mut chunks {
            self.update_block(chunk.try_into().unwrap());
        }
        let rem = chunks.remainder();
        if !rem.is_empty() {
            self.update_last(rem, rem.len());
        }
    }

    /// The accumulator's raw limbs, for exercising the carry-closure
    /// invariant against the relaxed in-flight bound rather than the
    /// fully-normalized bound `finish` produces.
    #[cfg(test)]
    pub(crate) fn acc_limbs(&self) -> &Limbs {
        &self.acc
    }

    /// Finish the computation and write the 16-byte tag to `tag_out`.
    ///
    /// Consumes the instance: a finished state is terminal, and taking
    /// `self` by value means there is no handle left to call `update*` on
    /// afterwards, let alone a second `finish` (the compiler rejects both
    /// rather than this being a runtime contract check). `r` and the
    /// accumulator are zeroized as the value drops.
    pub fn finish(mut self, tag_out: &mut [u8; 16]) {
        field::last_pass(&mut self.acc);
        let acc_val = u128::from(self.acc[0])
            | (u128::from(self.acc[1]) << 44)
            | (u128::from(self.acc[2]) << 88);
        let s_val = crate::util::load128_le(&self.s);
        let mac = acc_val.wrapping_add(s_val);
        crate::util::store128_le(tag_out, mac);
    }
}

/// One-shot Poly1305: authenticate `message` under `key`, writing the
/// 16-byte tag to `tag_out`.
pub fn onetimeauth(tag_out: &mut [u8; 16], message: &[u8], key: &[u8; 32]) {
    let mut state = Poly1305::new(key);
    state.update(message);
    state.finish(tag_out);
}
