//! Tests for Poly1305: RFC 8439 vectors, empty-message identity,
//! incremental/one-shot equivalence, and the carry-closure invariant.

use crate::poly1305::{field, onetimeauth, Poly1305};
use rand::Rng;

/// RFC 8439 §2.5.2's worked example. Key and tag are quoted as hex the way
/// the RFC itself lays them out.
#[test]
fn rfc8439_cryptographic_forum_research_group() {
    let key: [u8; 32] = hex::decode("85d6be7857556d337f4452fe42d506a80103808afb0db2fd4abff6af4149f51b")
        .unwrap()
        .try_into()
        .unwrap();
    let message = b"Cryptographic Forum Research Group";
    let expected: [u8; 16] = hex::decode("a8061dc1305136c6c22b8baf0c0127a9")
        .unwrap()
        .try_into()
        .unwrap();

    let mut tag = [0u8; 16];
    onetimeauth(&mut tag, message, &key);
    assert_eq!(tag, expected);
}

/// With no updates at all, `finish` returns the unclamped `s` half of the
/// key unchanged (the accumulator is still zero).
#[test]
fn empty_message_returns_s() {
    let mut rng = rand::thread_rng();
    let key: [u8; 32] = rng.gen();

    let mut tag = [0u8; 16];
    onetimeauth(&mut tag, b"", &key);
    assert_eq!(&tag[..], &key[16..]);
}

/// Splitting a message at every 16-byte-aligned boundary (full blocks via
/// [`Poly1305::update_block`], remainder via [`Poly1305::update_last`]) must
/// agree with the one-shot API, for the remainder landing at every possible
/// offset within a block.
#[test]
fn incremental_matches_one_shot() {
    let mut rng = rand::thread_rng();
    let key: [u8; 32] = rng.gen();

    for total_len in [0usize, 1, 15, 16, 17, 31, 32, 33, 100, 255] {
        let mut message = vec![0u8; total_len];
        rng.fill(message.as_mut_slice());

        let mut one_shot = [0u8; 16];
        onetimeauth(&mut one_shot, &message, &key);

        let mut incremental = Poly1305::new(&key);
        let mut chunks = message.chunks_exact(16);
        for chunk in &mut chunks {
            incremental.update_block(chunk.try_into().unwrap());
        }
        let rem = chunks.remainder();
        if !rem.is_empty() {
            incremental.update_last(rem, rem.len());
        }
        let mut streamed = [0u8; 16];
        incremental.finish(&mut streamed);

        assert_eq!(streamed, one_shot, "mismatch at length {total_len}");
    }
}

/// `update_last` with `len == 0` must not perturb the accumulator.
#[test]
fn update_last_with_zero_len_is_a_no_op() {
    let mut rng = rand::thread_rng();
    let key: [u8; 32] = rng.gen();

    let mut with_noop = Poly1305::new(&key);
    with_noop.update_block(&[0x11; 16]);
    with_noop.update_last(&[], 0);
    let mut tag_with_noop = [0u8; 16];
    with_noop.finish(&mut tag_with_noop);

    let mut without = Poly1305::new(&key);
    without.update_block(&[0x11; 16]);
    let mut tag_without = [0u8; 16];
    without.finish(&mut tag_without);

    assert_eq!(tag_with_noop, tag_without);
}

/// After every block absorbed, the accumulator's limbs stay within the
/// relaxed bound the field arithmetic assumes throughout processing
/// (tighter than the fully-normalized post-`last_pass` bound).
#[test]
fn carry_closure_holds_after_every_block() {
    let mut rng = rand::thread_rng();
    let key: [u8; 32] = rng.gen();
    let mut state = Poly1305::new(&key);

    for _ in 0..32 {
        let mut block = [0u8; 16];
        rng.fill(&mut block);
        state.update_block(&block);
        assert!(state.acc_limbs()[0] < (1 << 45));
        assert!(state.acc_limbs()[1] < (1 << 45));
        assert!(state.acc_limbs()[2] < (1 << 43));
    }
}

/// After [`field::last_pass`], the accumulator is fully reduced below `p`.
#[test]
fn last_pass_reduces_below_p() {
    const P0: u64 = 0xffffffffffb;
    const P1: u64 = 0xfffffffffff;
    const P2: u64 = 0x3ffffffffff;

    let mut rng = rand::thread_rng();
    for _ in 0..256 {
        // Exercise the full relaxed carry-closure bound (a0,a1 < 2^45,
        // a2 < 2^43 after `add_and_multiply`), not just freshly-multiplied
        // low-magnitude output.
        let mut acc = [
            rng.gen::<u64>() & ((1 << 45) - 1),
            rng.gen::<u64>() & ((1 << 45) - 1),
            rng.gen::<u64>() & ((1 << 43) - 1),
        ];
        field::last_pass(&mut acc);
        assert!(
            acc[2] < P2 || (acc[2] == P2 && acc[1] < P1) || (acc[2] == P2 && acc[1] == P1 && acc[0] < P0),
            "last_pass left acc >= p: {acc:?}"
        );
    }
}
