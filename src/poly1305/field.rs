//! Three-limb 44/44/42-bit saturated radix arithmetic mod 2^130 - 5.
//!
//! A field element is three `u64` limbs `[a0, a1, a2]` representing
//! `a0 + a1*2^44 + a2*2^88`. Limbs are kept loosely reduced (at most a few
//! bits over 44/44/42) between operations and only brought fully below
//! 2^130 - 5 by [`last_pass`]. Wide (128-bit) intermediates use a native
//! `u128` directly rather than a paired-`u64` emulation.

/// A three-limb field element, radix 2^44 / 2^44 / 2^42.
pub type Limbs = [u64; 3];

const LIMB_MASK: u64 = (1u64 << 44) - 1;

/// Clamp a raw 16-byte `r` key per RFC 8439 §2.5.1, then split it into
/// three 44/44/42-bit limbs.
///
/// The clamp mask (`0x0ffffffc_0ffffffc_0ffffffc_0fffffff` read as a
/// little-endian 128-bit word) zeroes the top four bits of limbs 3, 7, 11,
/// 15 and the bottom two bits of limbs 4, 8, 12, keeping every subsequent
/// `r^i` term comfortably within the headroom these limb widths assume.
pub fn clamp_and_split(r_bytes: &[u8; 16]) -> Limbs {
    const CLAMP_MASK: u128 = 0x0ffffffc_0ffffffc_0ffffffc_0fffffff;
    let r = crate::util::load128_le(r_bytes) & CLAMP_MASK;
    split_128(r)
}

/// Split a 16-byte little-endian buffer into three limbs without clamping,
/// with the top bit of the third limb forced on — the "add a 1 byte past
/// the real message bytes" trick RFC 8439 uses to mark a message block's
/// true length for the accumulator. Full (non-final) 16-byte blocks use
/// this with the implicit bit already present in the 17th conceptual byte;
/// see [`super::Poly1305::update_block`].
pub fn split_block(block: &[u8; 16]) -> Limbs {
    split_128(crate::util::load128_le(block))
}

pub(crate) fn split_128(n: u128) -> Limbs {
    let a0 = (n as u64) & LIMB_MASK;
    let a1 = ((n >> 44) as u64) & LIMB_MASK;
    let a2 = (n >> 88) as u64;
    [a0, a1, a2]
}

/// `acc = (acc + block) * r mod 2^130 - 5`, the single step Poly1305 repeats
/// once per message block.
///
/// Grounded on `Hacl_Bignum_AddAndMultiply_add_and_multiply`: add the block
/// into the accumulator limb-wise (no carry propagation needed yet, limbs
/// have headroom), then multiply by `r` via schoolbook multiplication with
/// shift-and-reduce.
pub fn add_and_multiply(acc: &mut Limbs, block: &Limbs, r: &Limbs) {
    for i in 0..3 {
        acc[i] += block[i];
    }
    *acc = mul_mod(acc, r);
}

/// Multiply two loosely-reduced limb triples mod 2^130 - 5.
///
/// `input2` (the schoolbook right-hand operand, always `r` in this crate)
/// is consumed limb by limb starting at index 0, with `input` rotated one
/// limb position (`shift`) and reduced (`reduce`, using `2^130 = 5 mod p`
/// to fold the overflow limb back in) between columns.
fn mul_mod(input: &Limbs, input2: &Limbs) -> Limbs {
    let mut rotated = *input;
    let mut wide = [0u128; 3];
    for j in 0..3 {
        let scalar = input2[j];
        for i in 0..3 {
            wide[i] += u128::from(rotated[i]) * u128::from(scalar);
        }
        if j < 2 {
            shift_reduce(&mut rotated);
        }
    }
    carry_wide(&mut wide);
    let mut out = [0u64; 3];
    carry_top_wide(&mut wide, &mut out);

    // Fmul_fmul_'s post-carry cleanup: one more limb-0/limb-1 carry step.
    let i0 = out[0];
    out[0] = i0 & LIMB_MASK;
    out[1] += i0 >> 44;
    out
}

/// Rotate limbs right by one position and fold the wrapped-around limb back
/// in scaled by 5 (the bit-sliced form of `2^132 = 5 mod p`, since rotating
/// a 44/44/42 triple right by one limb multiplies the old top limb by
/// `2^132`).
fn shift_reduce(limbs: &mut Limbs) {
    let wrapped = limbs[2];
    limbs[2] = limbs[1];
    limbs[1] = limbs[0];
    limbs[0] = wrapped;
    reduce(limbs);
}

/// `limbs[0] *= 20` in effect (`<<4 + <<2`): folds the wrapped top limb back
/// into limb 0 after a shift, scaled by 20 since rotating a 44/44/42 triple
/// right by one limb multiplies the old top limb by `2^132 = 4 * 2^130`,
/// and `2^130 = 5 mod p`.
fn reduce(limbs: &mut Limbs) {
    limbs[0] = (limbs[0] << 4) + (limbs[0] << 2);
}

/// Carry a 3-limb wide (128-bit) accumulator down to 44-bit-ish limbs,
/// pushing overflow from limb 0 into limb 1 and from limb 1 into limb 2.
fn carry_wide(wide: &mut [u128; 3]) {
    for i in 0..2 {
        let lo = (wide[i] as u64) & LIMB_MASK;
        let carry = wide[i] >> 44;
        wide[i] = u128::from(lo);
        wide[i + 1] += carry;
    }
}

/// The wide-accumulator analogue of [`carry_top`]: fold limb 2's overflow
/// past 42 bits back into limb 0 (scaled by 5), then copy the now-bounded
/// limbs 0 and 1 out of the wide accumulator.
fn carry_top_wide(wide: &mut [u128; 3], out: &mut Limbs) {
    let b2 = wide[2];
    let b2_42 = (b2 >> 42) as u64;
    wide[2] = b2 & 0x3ff_ffff_ffff;
    wide[0] += u128::from((b2_42 << 2) + b2_42);
    out[0] = wide[0] as u64;
    out[1] = wide[1] as u64;
    out[2] = wide[2] as u64;
}

/// Fold limb 2's overflow past 42 bits back into limb 0, scaled by 5
/// (`2^130 = 5 mod p`). Used on already-narrow (non-wide) limb triples.
fn carry_top(limbs: &mut Limbs) {
    let b2 = limbs[2];
    let b0 = limbs[0];
    let b2_42 = b2 >> 42;
    limbs[2] = b2 & 0x3ff_ffff_ffff;
    limbs[0] = (b2_42 << 2) + b2_42 + b0;
}

/// Propagate carries limb 0 -> limb 1 -> limb 2 without any top-limb
/// reduction.
fn carry_limb(limbs: &mut Limbs) {
    for i in 0..2 {
        let r0 = limbs[i] & LIMB_MASK;
        let c = limbs[i] >> 44;
        limbs[i] = r0;
        limbs[i + 1] += c;
    }
}

/// Fully reduce `acc` modulo 2^130 - 5, bringing every limb into its exact
/// 44/44/42-bit range and subtracting `p` once if `acc >= p`.
///
/// Grounded on `Hacl_Impl_Poly1305_64_poly1305_last_pass`: two narrow carry
/// passes (the second needed because `carry_top`'s fold-back can itself
/// overflow limb 0 into limb 1), then a constant-time conditional
/// subtraction of `p = 2^130 - 5` using eq/gte bitmasks rather than a
/// data-dependent branch.
pub fn last_pass(acc: &mut Limbs) {
    carry_limb(acc);
    carry_top(acc);

    let r0 = acc[0] >> 44;
    acc[0] &= LIMB_MASK;
    acc[1] += r0;
    let r1 = acc[1] >> 44;
    acc[1] &= LIMB_MASK;
    acc[2] += r1;

    carry_top(acc);
    let i0 = acc[0] >> 44;
    acc[0] &= LIMB_MASK;
    acc[1] += i0;

    const P0: u64 = 0xffffffffffb;
    const P1: u64 = 0xfffffffffff;
    const P2: u64 = 0x3ffffffffff;

    let mask = gte_mask(acc[0], P0) & eq_mask(acc[1], P1) & eq_mask(acc[2], P2);
    acc[0] -= P0 & mask;
    acc[1] -= P1 & mask;
    acc[2] -= P2 & mask;
}

/// All-ones if `a >= b`, all-zeros otherwise. Branch-free so the final
/// reduction's conditional subtraction carries no secret-dependent timing
/// signal.
///
/// Widens into `u128` so `2^64 + a - b` never wraps: the result is always in
/// `[1, 2^65 - 1]`, and bit 64 is set exactly when `a >= b`.
pub(crate) fn gte_mask(a: u64, b: u64) -> u64 {
    let diff = (1u128 << 64) + u128::from(a) - u128::from(b);
    let bit = ((diff >> 64) & 1) as u64;
    bit.wrapping_neg()
}

/// All-ones if `a == b`, all-zeros otherwise.
///
/// `x | -x` has its sign bit set iff `x != 0` (for any nonzero two's
/// complement `x`, either `x` or `-x` has the top bit set); an arithmetic
/// right shift then broadcasts that bit across the word.
pub(crate) fn eq_mask(a: u64, b: u64) -> u64 {
    let x = (a ^ b) as i64;
    let mask = (x | x.wrapping_neg()) >> 63;
    !(mask as u64)
}
